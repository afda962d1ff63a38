//! User Repository

use shared::models::{PasswordChange, User, UserCreate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, delete_by_id, expect_single_row, fetch_page};
use crate::db::query::{Page, SortColumns};

const TABLE: &str = "user";

const SELECT_BASE: &str =
    "SELECT id, username, password_hash, created_on, last_updated_on FROM user";

/// Sortable column namespace, fixed at startup. The hash is deliberately
/// not addressable.
pub const SORT_COLUMNS: SortColumns = &[
    ("id", "id"),
    ("username", "username"),
    ("created_on", "created_on"),
    ("last_updated_on", "last_updated_on"),
];

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user, hashing the password, and return the persisted row.
    pub async fn create(&self, data: &UserCreate) -> RepoResult<User> {
        let password_hash = User::hash_password(&data.password)
            .map_err(|e| RepoError::PasswordHash(e.to_string()))?;
        let id = snowflake_id();
        let now = now_millis();
        sqlx::query(
            "INSERT INTO user (id, username, password_hash, created_on, last_updated_on) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&data.username)
        .bind(&password_hash)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(User {
            id,
            username: data.username.clone(),
            password_hash,
            created_on: now,
            last_updated_on: now,
        })
    }

    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        delete_by_id(&self.pool, TABLE, id).await
    }

    pub async fn update_password(&self, id: i64, data: &PasswordChange) -> RepoResult<()> {
        let password_hash = User::hash_password(&data.new_password)
            .map_err(|e| RepoError::PasswordHash(e.to_string()))?;
        let result =
            sqlx::query("UPDATE user SET password_hash = ?, last_updated_on = ? WHERE id = ?")
                .bind(&password_hash)
                .bind(now_millis())
                .bind(id)
                .execute(&self.pool)
                .await?;
        expect_single_row(result)
    }

    /// One page of users, ordered by the parsed sort expression.
    pub async fn list(&self, page: Page, sort_by: Option<&str>) -> RepoResult<Vec<User>> {
        fetch_page(&self.pool, SELECT_BASE, SORT_COLUMNS, page, sort_by).await
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let sql = format!("{SELECT_BASE} WHERE id = ?");
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let sql = format!("{SELECT_BASE} WHERE username = ?");
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
