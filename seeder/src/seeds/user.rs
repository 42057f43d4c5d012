use crate::seed::Seeder;
use db::models::user::Model;
use fake::{
    Fake,
    faker::{
        internet::en::SafeEmail,
        name::en::{FirstName, LastName},
    },
};
use sea_orm::{DatabaseConnection, DbErr};
use util::config;

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        // Fixed Admin User
        let admin_email = config::admin_email();
        if !Model::email_taken(db, &admin_email, None).await? {
            Model::create(db, "Admin", None, &admin_email, "password123").await?;
        }

        // Fixed Normal User
        if !Model::email_taken(db, "user@example.com", None).await? {
            Model::create(db, "Normal", Some("User"), "user@example.com", "password123").await?;
        }

        // Random Users
        for _ in 0..10 {
            let email: String = SafeEmail().fake();
            if Model::email_taken(db, &email, None).await? {
                continue;
            }
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            Model::create(db, &first_name, Some(&last_name), &email, "password123").await?;
        }

        Ok(())
    }
}
