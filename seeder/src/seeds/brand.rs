use crate::seed::Seeder;
use db::models::{Brand, Car, brand::Model};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct BrandSeeder;

const BRANDS: &[&str] = &[
    "Seat", "Audi", "BMW", "Mercedes", "Toyota", "Renault", "Peugeot", "Tesla", "Ford", "Fiat",
];

#[async_trait::async_trait]
impl Seeder for BrandSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        Car::delete_many().exec(db).await?;
        Brand::delete_many().exec(db).await?;

        for name in BRANDS {
            Model::create(db, name, None).await?;
        }
        Ok(())
    }
}
