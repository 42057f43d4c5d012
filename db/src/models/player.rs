use super::team;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::LoaderTrait;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "players")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub shirt_number: i32,
    pub team_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_delete = "Restrict"
    )]
    Team,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Player with the team it belongs to, if any.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerWithTeam {
    #[serde(flatten)]
    pub player: Model,
    pub team: Option<team::Model>,
}

impl Model {
    pub async fn create(
        db: &DbConn,
        first_name: &str,
        last_name: &str,
        shirt_number: i32,
        team_id: Option<i64>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
            shirt_number: Set(shirt_number),
            team_id: Set(team_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn with_team(db: &DbConn, players: Vec<Model>) -> Result<Vec<PlayerWithTeam>, DbErr> {
        let teams = players.load_one(team::Entity, db).await?;
        Ok(players
            .into_iter()
            .zip(teams)
            .map(|(player, team)| PlayerWithTeam { player, team })
            .collect())
    }

    pub async fn find_with_team(db: &DbConn, id: i64) -> Result<Option<PlayerWithTeam>, DbErr> {
        let Some(player) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        Ok(Self::with_team(db, vec![player]).await?.pop())
    }

    pub async fn delete_returning(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        let Some(player) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        Entity::delete_by_id(id).exec(db).await?;
        Ok(Some(player))
    }
}
