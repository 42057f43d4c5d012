//! Query fragments shared by the entity helpers.

use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Select};

/// Escapes the LIKE wildcards in user input so it only ever matches literally.
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// `LOWER(<entity>.<column>) LIKE '<prefix>%'`, case-insensitive on every backend.
pub fn starts_with_ci<E, C>(column: C, prefix: &str) -> SimpleExpr
where
    E: EntityTrait + 'static,
    C: ColumnTrait + 'static,
{
    let pattern = format!("{}%", escape_like(&prefix.to_lowercase()));
    Expr::expr(Func::lower(Expr::col((E::default(), column))))
        .like(LikeExpr::new(pattern).escape('\\'))
}

/// Runs `query` one page at a time. `page` is 1-based.
///
/// Returns the rows of the requested page together with the total number of
/// rows matched by `query`.
pub async fn fetch_page<E>(
    db: &DatabaseConnection,
    query: Select<E>,
    page: u64,
    limit: u64,
) -> Result<(Vec<E::Model>, u64), DbErr>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    let paginator = query.paginate(db, limit);
    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(page.saturating_sub(1)).await?;
    Ok((items, total))
}
