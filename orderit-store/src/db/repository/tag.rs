//! Tag Repository

use shared::models::{Tag, TagCreate, TagNameUpdate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoResult, delete_by_id, expect_single_row, fetch_page};
use crate::db::query::{Page, SortColumns};

const TABLE: &str = "tag";

const SELECT_BASE: &str = "SELECT id, name, created_on, last_updated_on FROM tag";

/// Sortable column namespace, fixed at startup.
pub const SORT_COLUMNS: SortColumns = &[
    ("id", "id"),
    ("name", "name"),
    ("created_on", "created_on"),
    ("last_updated_on", "last_updated_on"),
];

#[derive(Clone)]
pub struct TagRepository {
    pool: SqlitePool,
}

impl TagRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new tag and return the persisted row.
    pub async fn create(&self, data: &TagCreate) -> RepoResult<Tag> {
        let id = snowflake_id();
        let now = now_millis();
        sqlx::query("INSERT INTO tag (id, name, created_on, last_updated_on) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(&data.name)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(Tag {
            id,
            name: data.name.clone(),
            created_on: now,
            last_updated_on: now,
        })
    }

    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        delete_by_id(&self.pool, TABLE, id).await
    }

    pub async fn update_name(&self, id: i64, data: &TagNameUpdate) -> RepoResult<()> {
        let result = sqlx::query("UPDATE tag SET name = ?, last_updated_on = ? WHERE id = ?")
            .bind(&data.name)
            .bind(now_millis())
            .bind(id)
            .execute(&self.pool)
            .await?;
        expect_single_row(result)
    }

    /// One page of tags, ordered by the parsed sort expression.
    pub async fn list(&self, page: Page, sort_by: Option<&str>) -> RepoResult<Vec<Tag>> {
        fetch_page(&self.pool, SELECT_BASE, SORT_COLUMNS, page, sort_by).await
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Tag>> {
        let sql = format!("{SELECT_BASE} WHERE id = ?");
        let row = sqlx::query_as::<_, Tag>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
