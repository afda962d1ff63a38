//! Store facade

use sqlx::SqlitePool;

use crate::bootstrap;
use crate::config::Config;
use crate::db;
use crate::db::repository::{
    DiningTableRepository, MenuRepository, TagRepository, UserRepository,
};
use crate::ops::{DiningTableOps, MenuOps, TagOps, UserOps};

/// Every entity's business-rule surface over one sqlite pool. This is the
/// single handle the GUI holds.
#[derive(Clone)]
pub struct Store {
    pub dining_tables: DiningTableOps,
    pub menus: MenuOps,
    pub tags: TagOps,
    pub users: UserOps,
    pool: SqlitePool,
}

impl Store {
    /// Open the database, run migrations and seed initial users.
    pub async fn open(config: &Config) -> anyhow::Result<Self> {
        let pool = db::connect(&config.database_url).await?;
        let store = Self::with_pool(pool);
        bootstrap::ensure_initial_users(&store.users, config).await?;
        Ok(store)
    }

    /// Build a store over an existing pool. Tests use this with
    /// `sqlite::memory:` pools that already ran the migrations.
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self {
            dining_tables: DiningTableOps::new(DiningTableRepository::new(pool.clone())),
            menus: MenuOps::new(MenuRepository::new(pool.clone())),
            tags: TagOps::new(TagRepository::new(pool.clone())),
            users: UserOps::new(UserRepository::new(pool.clone())),
            pool,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
