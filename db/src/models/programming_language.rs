//! Programming language rankings.
//!
//! This table is read and written with hand-written parameterized SQL on the
//! shared connection instead of an ORM entity.

use crate::filters::escape_like;
use sea_orm::{ConnectionTrait, DbConn, DbErr, FromQueryResult, Statement, Value};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammingLanguage {
    pub id: i64,
    pub name: String,
    pub released_year: i32,
    pub githut_rank: Option<i32>,
    pub pypl_rank: Option<i32>,
    pub tiobe_rank: Option<i32>,
}

/// Column values for inserts and merged updates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LanguageFields {
    pub name: String,
    pub released_year: i32,
    pub githut_rank: Option<i32>,
    pub pypl_rank: Option<i32>,
    pub tiobe_rank: Option<i32>,
}

/// Partial update: `None` keeps the stored value. For the ranks,
/// `Some(None)` clears it.
#[derive(Clone, Debug, Default)]
pub struct LanguagePatch {
    pub name: Option<String>,
    pub released_year: Option<i32>,
    pub githut_rank: Option<Option<i32>>,
    pub pypl_rank: Option<Option<i32>>,
    pub tiobe_rank: Option<Option<i32>>,
}

const SELECT: &str =
    "SELECT id, name, released_year, githut_rank, pypl_rank, tiobe_rank FROM programming_languages";

#[derive(FromQueryResult)]
struct Count {
    total: i64,
}

fn stmt(db: &DbConn, sql: &str, values: Vec<Value>) -> Statement {
    Statement::from_sql_and_values(db.get_database_backend(), sql, values)
}

impl ProgrammingLanguage {
    /// One page of languages ordered by id plus the total row count.
    pub async fn list(db: &DbConn, page: u64, limit: u64) -> Result<(Vec<Self>, u64), DbErr> {
        let offset = page.saturating_sub(1).saturating_mul(limit);
        let rows = Self::find_by_statement(stmt(
            db,
            &format!("{SELECT} ORDER BY id LIMIT ? OFFSET ?"),
            vec![(limit as i64).into(), (offset as i64).into()],
        ))
        .all(db)
        .await?;

        let total = Count::find_by_statement(stmt(
            db,
            "SELECT COUNT(*) AS total FROM programming_languages",
            vec![],
        ))
        .one(db)
        .await?
        .map(|c| c.total as u64)
        .unwrap_or(0);

        Ok((rows, total))
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Self>, DbErr> {
        Self::find_by_statement(stmt(db, &format!("{SELECT} WHERE id = ?"), vec![id.into()]))
            .one(db)
            .await
    }

    /// Languages whose name starts with `prefix`, ignoring case.
    pub async fn find_by_name_prefix(db: &DbConn, prefix: &str) -> Result<Vec<Self>, DbErr> {
        let pattern = format!("{}%", escape_like(&prefix.to_lowercase()));
        Self::find_by_statement(stmt(
            db,
            &format!("{SELECT} WHERE LOWER(name) LIKE ? ESCAPE '\\' ORDER BY id"),
            vec![pattern.into()],
        ))
        .all(db)
        .await
    }

    pub async fn create(db: &DbConn, fields: LanguageFields) -> Result<Self, DbErr> {
        let result = db
            .execute(stmt(
                db,
                "INSERT INTO programming_languages \
                 (name, released_year, githut_rank, pypl_rank, tiobe_rank) \
                 VALUES (?, ?, ?, ?, ?)",
                vec![
                    fields.name.clone().into(),
                    fields.released_year.into(),
                    fields.githut_rank.into(),
                    fields.pypl_rank.into(),
                    fields.tiobe_rank.into(),
                ],
            ))
            .await?;

        let id = result.last_insert_id() as i64;
        Ok(Self {
            id,
            name: fields.name,
            released_year: fields.released_year,
            githut_rank: fields.githut_rank,
            pypl_rank: fields.pypl_rank,
            tiobe_rank: fields.tiobe_rank,
        })
    }

    /// Merges `patch` onto the stored row. `None` when the id is unknown.
    pub async fn update(db: &DbConn, id: i64, patch: LanguagePatch) -> Result<Option<Self>, DbErr> {
        let Some(current) = Self::find_by_id(db, id).await? else {
            return Ok(None);
        };

        let merged = Self {
            id,
            name: patch.name.unwrap_or(current.name),
            released_year: patch.released_year.unwrap_or(current.released_year),
            githut_rank: patch.githut_rank.unwrap_or(current.githut_rank),
            pypl_rank: patch.pypl_rank.unwrap_or(current.pypl_rank),
            tiobe_rank: patch.tiobe_rank.unwrap_or(current.tiobe_rank),
        };

        db.execute(stmt(
            db,
            "UPDATE programming_languages \
             SET name = ?, released_year = ?, githut_rank = ?, pypl_rank = ?, tiobe_rank = ? \
             WHERE id = ?",
            vec![
                merged.name.clone().into(),
                merged.released_year.into(),
                merged.githut_rank.into(),
                merged.pypl_rank.into(),
                merged.tiobe_rank.into(),
                id.into(),
            ],
        ))
        .await?;

        Ok(Some(merged))
    }

    pub async fn delete_returning(db: &DbConn, id: i64) -> Result<Option<Self>, DbErr> {
        let Some(language) = Self::find_by_id(db, id).await? else {
            return Ok(None);
        };
        db.execute(stmt(
            db,
            "DELETE FROM programming_languages WHERE id = ?",
            vec![id.into()],
        ))
        .await?;
        Ok(Some(language))
    }
}
