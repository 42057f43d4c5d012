use crate::seed::Seeder;
use db::models::programming_language::{LanguageFields, ProgrammingLanguage};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

pub struct LanguageSeeder;

// (name, released, githut, pypl, tiobe)
const LANGUAGES: &[(&str, i32, i32, i32, i32)] = &[
    ("JavaScript", 1995, 1, 3, 6),
    ("Python", 1991, 2, 1, 1),
    ("Java", 1995, 3, 2, 4),
    ("TypeScript", 2012, 4, 7, 42),
    ("C#", 2000, 5, 4, 5),
    ("PHP", 1995, 6, 5, 8),
    ("C++", 1985, 7, 6, 3),
    ("C", 1972, 8, 8, 2),
    ("Go", 2009, 9, 13, 12),
    ("Rust", 2010, 14, 9, 13),
];

#[async_trait::async_trait]
impl Seeder for LanguageSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        db.execute_unprepared("DELETE FROM programming_languages")
            .await?;

        for &(name, released_year, githut, pypl, tiobe) in LANGUAGES {
            ProgrammingLanguage::create(
                db,
                LanguageFields {
                    name: name.to_string(),
                    released_year,
                    githut_rank: Some(githut),
                    pypl_rank: Some(pypl),
                    tiobe_rank: Some(tiobe),
                },
            )
            .await?;
        }
        Ok(())
    }
}
