use crate::filters::starts_with_ci;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    /// User's unique email address.
    pub email: String,
    /// Argon2 PHC string. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the user was last updated.
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
    pub fn hash_password(password: &str) -> Result<String, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DbErr::Custom(format!("password hashing failed: {}", e)))
    }

    pub fn verify_password(&self, password: &str) -> bool {
        let parsed = match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    pub async fn create(
        db: &DbConn,
        first_name: &str,
        last_name: Option<&str>,
        email: &str,
        password: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.map(str::to_owned)),
            email: Set(email.trim().to_owned()),
            password_hash: Set(Self::hash_password(password)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_email(db: &DbConn, email: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email.trim()))
            .one(db)
            .await
    }

    /// Whether `email` belongs to a user other than `except`.
    pub async fn email_taken(db: &DbConn, email: &str, except: Option<i64>) -> Result<bool, DbErr> {
        let mut query = Entity::find().filter(Column::Email.eq(email.trim()));
        if let Some(id) = except {
            query = query.filter(Column::Id.ne(id));
        }
        Ok(query.one(db).await?.is_some())
    }

    /// Looks the user up by email and checks the password.
    ///
    /// Unknown email and wrong password both yield `Ok(None)`.
    pub async fn verify_credentials(
        db: &DbConn,
        email: &str,
        password: &str,
    ) -> Result<Option<Model>, DbErr> {
        match Self::find_by_email(db, email).await? {
            Some(user) if user.verify_password(password) => Ok(Some(user)),
            _ => Ok(None),
        }
    }

    /// Users whose first name starts with `prefix`, ignoring case.
    pub async fn find_by_first_name_prefix(
        db: &DbConn,
        prefix: &str,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(starts_with_ci::<Entity, _>(Column::FirstName, prefix))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn delete_returning(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        let Some(user) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        Entity::delete_by_id(id).exec(db).await?;
        Ok(Some(user))
    }
}
