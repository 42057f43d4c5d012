use crate::filters::starts_with_ci;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::Serialize;

/// A car manufacturer, optionally with an uploaded logo.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "brands")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// Path of the uploaded logo as written by the upload handler.
    pub logo_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::car::Entity")]
    Car,
}

impl Related<super::car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        name: &str,
        logo_image: Option<&str>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            name: Set(name.to_owned()),
            logo_image: Set(logo_image.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Brands whose name starts with `prefix`, ignoring case.
    pub async fn find_by_name_prefix(db: &DbConn, prefix: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(starts_with_ci::<Entity, _>(Column::Name, prefix))
            .order_by_asc(Column::Name)
            .all(db)
            .await
    }

    pub async fn set_logo(self, db: &DbConn, path: &str) -> Result<Model, DbErr> {
        let mut active: ActiveModel = self.into();
        active.logo_image = Set(Some(path.to_owned()));
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    /// Deletes the brand and hands back the row as it was.
    pub async fn delete_returning(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        let Some(brand) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        Entity::delete_by_id(id).exec(db).await?;
        Ok(Some(brand))
    }
}
