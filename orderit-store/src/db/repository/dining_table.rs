//! Dining Table Repository

use shared::models::{
    DiningTable, DiningTableCreate, DiningTableNameUpdate, DiningTablePositionUpdate,
    DiningTableSizeUpdate,
};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoResult, delete_by_id, expect_single_row, fetch_page};
use crate::db::query::{Page, SortColumns};

const TABLE: &str = "dining_table";

const SELECT_BASE: &str =
    "SELECT id, name, x, y, width, height, created_on, last_updated_on FROM dining_table";

/// Sortable column namespace, fixed at startup.
pub const SORT_COLUMNS: SortColumns = &[
    ("id", "id"),
    ("name", "name"),
    ("x", "x"),
    ("y", "y"),
    ("width", "width"),
    ("height", "height"),
    ("created_on", "created_on"),
    ("last_updated_on", "last_updated_on"),
];

#[derive(Clone)]
pub struct DiningTableRepository {
    pool: SqlitePool,
}

impl DiningTableRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new dining table and return the persisted row.
    pub async fn create(&self, data: &DiningTableCreate) -> RepoResult<DiningTable> {
        let id = snowflake_id();
        let now = now_millis();
        sqlx::query(
            "INSERT INTO dining_table (id, name, x, y, width, height, created_on, last_updated_on) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.x)
        .bind(data.y)
        .bind(data.width)
        .bind(data.height)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(DiningTable {
            id,
            name: data.name.clone(),
            x: data.x,
            y: data.y,
            width: data.width,
            height: data.height,
            created_on: now,
            last_updated_on: now,
        })
    }

    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        delete_by_id(&self.pool, TABLE, id).await
    }

    pub async fn update_name(&self, id: i64, data: &DiningTableNameUpdate) -> RepoResult<()> {
        let result =
            sqlx::query("UPDATE dining_table SET name = ?, last_updated_on = ? WHERE id = ?")
                .bind(&data.name)
                .bind(now_millis())
                .bind(id)
                .execute(&self.pool)
                .await?;
        expect_single_row(result)
    }

    pub async fn update_position(
        &self,
        id: i64,
        data: &DiningTablePositionUpdate,
    ) -> RepoResult<()> {
        let result =
            sqlx::query("UPDATE dining_table SET x = ?, y = ?, last_updated_on = ? WHERE id = ?")
                .bind(data.x)
                .bind(data.y)
                .bind(now_millis())
                .bind(id)
                .execute(&self.pool)
                .await?;
        expect_single_row(result)
    }

    pub async fn update_size(&self, id: i64, data: &DiningTableSizeUpdate) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE dining_table SET width = ?, height = ?, last_updated_on = ? WHERE id = ?",
        )
        .bind(data.width)
        .bind(data.height)
        .bind(now_millis())
        .bind(id)
        .execute(&self.pool)
        .await?;
        expect_single_row(result)
    }

    /// One page of dining tables, ordered by the parsed sort expression.
    pub async fn list(&self, page: Page, sort_by: Option<&str>) -> RepoResult<Vec<DiningTable>> {
        fetch_page(&self.pool, SELECT_BASE, SORT_COLUMNS, page, sort_by).await
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<DiningTable>> {
        let sql = format!("{SELECT_BASE} WHERE id = ?");
        let row = sqlx::query_as::<_, DiningTable>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
