use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    brand::BrandSeeder, car::CarSeeder, language::LanguageSeeder,
    team_and_player::TeamAndPlayerSeeder, user::UserSeeder,
};
use colored::*;
use migration::{Migrator, MigratorTrait};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{} {}", "Failed to connect to database:".red(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = Migrator::up(&db, None).await {
        eprintln!("{} {}", "Failed to run migrations:".red(), e);
        std::process::exit(1);
    }

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(BrandSeeder), "Brand"),
        (Box::new(CarSeeder), "Car"),
        (Box::new(LanguageSeeder), "Language"),
        (Box::new(TeamAndPlayerSeeder), "TeamAndPlayer"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
