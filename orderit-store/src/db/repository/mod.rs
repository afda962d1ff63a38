//! Repository Module
//!
//! One repository per entity over the shared sqlite pool. List reads and
//! single-row deletes are generic; entity-specific INSERT/UPDATE statements
//! live in the per-entity files.

pub mod dining_table;
pub mod menu;
pub mod tag;
pub mod user;

pub use dining_table::DiningTableRepository;
pub use menu::MenuRepository;
pub use tag::TagRepository;
pub use user::UserRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteQueryResult, SqliteRow};
use thiserror::Error;

use crate::db::query::{self, Page, SortColumns};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("No rows were affected")]
    NotFound,

    #[error("More than 1 row was affected")]
    MultipleRowsAffected,

    #[error("Unknown sort field: {0}")]
    InvalidSortField(String),

    #[error("Malformed sort expression: {0}")]
    InvalidSortExpression(String),

    #[error("Page window out of range")]
    PageOutOfRange,

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Row-affect guard for targeted mutations.
///
/// The storage call alone only reports a row count; this turns it into a
/// semantic outcome. Zero rows means the referenced record does not exist.
/// More than one means a broken uniqueness assumption and is surfaced loudly,
/// never tolerated. Storage errors propagate before this runs and are never
/// reinterpreted as a row-count outcome.
pub fn expect_single_row(result: SqliteQueryResult) -> RepoResult<()> {
    match result.rows_affected() {
        1 => Ok(()),
        0 => Err(RepoError::NotFound),
        n => {
            tracing::error!(rows = n, "single-row mutation affected multiple rows");
            Err(RepoError::MultipleRowsAffected)
        }
    }
}

/// Fetch one page of an entity list.
///
/// Parses the sort expression against the entity's column namespace, appends
/// ordering and paging to the base SELECT and binds the window.
pub(crate) async fn fetch_page<T>(
    pool: &SqlitePool,
    base: &str,
    columns: SortColumns,
    page: Page,
    sort_by: Option<&str>,
) -> RepoResult<Vec<T>>
where
    T: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
{
    let terms = query::parse_sort_by(columns, sort_by)?;
    let sql = query::build_list_sql(base, &terms);
    let rows = sqlx::query_as::<_, T>(&sql)
        .bind(page.limit())
        .bind(page.offset()?)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Delete one row by id, enforcing the single-row contract.
pub(crate) async fn delete_by_id(pool: &SqlitePool, table: &str, id: i64) -> RepoResult<()> {
    let sql = format!("DELETE FROM {table} WHERE id = ?");
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;
    expect_single_row(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn pool_with_rows() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query("CREATE TABLE t (id INTEGER, v INTEGER)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO t (id, v) VALUES (1, 10), (2, 20)")
            .execute(&pool)
            .await
            .unwrap();
        pool
    }

    #[tokio::test]
    async fn one_affected_row_is_success() {
        let pool = pool_with_rows().await;
        let result = sqlx::query("UPDATE t SET v = 11 WHERE id = 1")
            .execute(&pool)
            .await
            .unwrap();
        assert!(expect_single_row(result).is_ok());
    }

    #[tokio::test]
    async fn zero_affected_rows_is_not_found() {
        let pool = pool_with_rows().await;
        let result = sqlx::query("DELETE FROM t WHERE id = 99")
            .execute(&pool)
            .await
            .unwrap();
        assert!(matches!(
            expect_single_row(result),
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn many_affected_rows_is_an_invariant_violation() {
        let pool = pool_with_rows().await;
        let result = sqlx::query("UPDATE t SET v = 0")
            .execute(&pool)
            .await
            .unwrap();
        assert!(matches!(
            expect_single_row(result),
            Err(RepoError::MultipleRowsAffected)
        ));
    }
}
