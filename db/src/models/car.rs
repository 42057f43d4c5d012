use super::{brand, user};
use crate::filters::starts_with_ci;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{JoinType, LoaderTrait, QueryOrder, QuerySelect};
use serde::Serialize;

/// A car, optionally linked to a brand and an owner.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "cars")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub model: String,
    pub plate: String,
    pub power: Option<i32>,
    pub brand_id: Option<i64>,
    pub owner_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brand::Entity",
        from = "Column::BrandId",
        to = "super::brand::Column::Id",
        on_delete = "SetNull"
    )]
    Brand,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Owner,
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted on create. `None` leaves the reference empty.
#[derive(Debug, Clone, Default)]
pub struct NewCar {
    pub model: String,
    pub plate: String,
    pub power: Option<i32>,
    pub brand_id: Option<i64>,
    pub owner_id: Option<i64>,
}

/// Car with its brand and owner resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarWithRelations {
    #[serde(flatten)]
    pub car: Model,
    pub brand: Option<brand::Model>,
    pub owner: Option<user::Model>,
}

/// Which reference of a car write points nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingReference {
    Brand(i64),
    Owner(i64),
}

impl Model {
    pub async fn create(db: &DbConn, new: NewCar) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            model: Set(new.model),
            plate: Set(new.plate),
            power: Set(new.power),
            brand_id: Set(new.brand_id),
            owner_id: Set(new.owner_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Checks that the given brand and owner ids exist.
    pub async fn check_references(
        db: &DbConn,
        brand_id: Option<i64>,
        owner_id: Option<i64>,
    ) -> Result<Option<MissingReference>, DbErr> {
        if let Some(id) = brand_id {
            if brand::Entity::find_by_id(id).one(db).await?.is_none() {
                return Ok(Some(MissingReference::Brand(id)));
            }
        }
        if let Some(id) = owner_id {
            if user::Entity::find_by_id(id).one(db).await?.is_none() {
                return Ok(Some(MissingReference::Owner(id)));
            }
        }
        Ok(None)
    }

    /// Resolves brand and owner for a batch of cars, keeping order.
    pub async fn with_relations(
        db: &DbConn,
        cars: Vec<Model>,
    ) -> Result<Vec<CarWithRelations>, DbErr> {
        let brands = cars.load_one(brand::Entity, db).await?;
        let owners = cars.load_one(user::Entity, db).await?;

        Ok(cars
            .into_iter()
            .zip(brands)
            .zip(owners)
            .map(|((car, brand), owner)| CarWithRelations { car, brand, owner })
            .collect())
    }

    pub async fn find_with_relations(
        db: &DbConn,
        id: i64,
    ) -> Result<Option<CarWithRelations>, DbErr> {
        let Some(car) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        Ok(Self::with_relations(db, vec![car]).await?.pop())
    }

    /// Cars whose brand name starts with `prefix`, ignoring case.
    pub async fn find_by_brand_prefix(db: &DbConn, prefix: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .join(JoinType::InnerJoin, Relation::Brand.def())
            .filter(starts_with_ci::<brand::Entity, _>(brand::Column::Name, prefix))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_owner(db: &DbConn, owner_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::OwnerId.eq(owner_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn delete_returning(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        let Some(car) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        Entity::delete_by_id(id).exec(db).await?;
        Ok(Some(car))
    }
}
