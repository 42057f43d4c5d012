use crate::seed::Seeder;
use db::models::{Player, Team, player, team};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct TeamAndPlayerSeeder;

#[async_trait::async_trait]
impl Seeder for TeamAndPlayerSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        // Players first: they reference teams.
        Player::delete_many().exec(db).await?;
        Team::delete_many().exec(db).await?;

        let dream_team = team::Model::create(db, "Dream Team", "Madrid").await?;
        player::Model::create(db, "Cristiano", "Ronaldo", 7, Some(dream_team.id)).await?;
        player::Model::create(db, "Lionel", "Messi", 10, Some(dream_team.id)).await?;

        Ok(())
    }
}
