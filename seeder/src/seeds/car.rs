use crate::seed::Seeder;
use db::models::{
    Brand, User,
    car::{Model, NewCar},
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct CarSeeder;

const MODELS: &[&str] = &["Ibiza", "A3", "Serie 1", "Clase A", "Corolla", "Clio", "208", "Model 3"];

#[async_trait::async_trait]
impl Seeder for CarSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let brands = Brand::find().all(db).await?;
        let users = User::find().all(db).await?;
        if brands.is_empty() {
            return Ok(());
        }

        for model in MODELS {
            let brand = &brands[fastrand::usize(..brands.len())];
            // One in four cars stays ownerless.
            let owner_id = if users.is_empty() || fastrand::u8(..4) == 0 {
                None
            } else {
                Some(users[fastrand::usize(..users.len())].id)
            };
            let plate = format!(
                "{:04}{}",
                fastrand::u16(..10_000),
                (0..3).map(|_| fastrand::uppercase()).collect::<String>()
            );

            Model::create(
                db,
                NewCar {
                    model: model.to_string(),
                    plate,
                    power: Some(fastrand::i32(70..400)),
                    brand_id: Some(brand.id),
                    owner_id,
                },
            )
            .await?;
        }
        Ok(())
    }
}
