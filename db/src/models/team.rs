use super::player;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{LoaderTrait, QueryOrder, TransactionTrait};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "teams")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player::Entity")]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Team together with its roster.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamWithPlayers {
    #[serde(flatten)]
    pub team: Model,
    pub players: Vec<player::Model>,
}

impl Model {
    pub async fn create(db: &DbConn, name: &str, city: &str) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            name: Set(name.to_owned()),
            city: Set(city.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn with_players(
        db: &DbConn,
        teams: Vec<Model>,
    ) -> Result<Vec<TeamWithPlayers>, DbErr> {
        let rosters = teams.load_many(player::Entity, db).await?;
        Ok(teams
            .into_iter()
            .zip(rosters)
            .map(|(team, players)| TeamWithPlayers { team, players })
            .collect())
    }

    pub async fn find_with_players(
        db: &DbConn,
        id: i64,
    ) -> Result<Option<TeamWithPlayers>, DbErr> {
        let Some(team) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        Ok(Self::with_players(db, vec![team]).await?.pop())
    }

    /// Unlinks every player of the team and removes the team, atomically.
    ///
    /// Returns the removed team with its players as they are after the
    /// unlink, or `None` when no team has that id. Any failure rolls the
    /// whole operation back.
    pub async fn delete_unlinking_players(
        db: &DbConn,
        id: i64,
    ) -> Result<Option<TeamWithPlayers>, DbErr> {
        let txn = db.begin().await?;

        let Some(team) = Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let members = player::Entity::find()
            .filter(player::Column::TeamId.eq(id))
            .order_by_asc(player::Column::Id)
            .all(&txn)
            .await?;

        let now = Utc::now();
        let mut players = Vec::with_capacity(members.len());
        for member in members {
            let mut active: player::ActiveModel = member.into();
            active.team_id = Set(None);
            active.updated_at = Set(now);
            players.push(active.update(&txn).await?);
        }

        Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        tracing::info!(team_id = id, unlinked = players.len(), "Team deleted");
        Ok(Some(TeamWithPlayers { team, players }))
    }
}
