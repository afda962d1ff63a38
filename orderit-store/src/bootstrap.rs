//! Initial-data seeding

use shared::models::UserCreate;

use crate::config::Config;
use crate::ops::UserOps;

/// Ensure the configured initial users exist. Idempotent: usernames that are
/// already present are left untouched.
pub async fn ensure_initial_users(users: &UserOps, config: &Config) -> anyhow::Result<()> {
    for seed in &config.initial_users {
        if users.get_by_username(&seed.username).await?.is_some() {
            continue;
        }
        let created = users
            .create(&UserCreate {
                username: seed.username.clone(),
                password: seed.password.clone(),
            })
            .await?;
        tracing::info!(username = %created.username, "Seeded initial user");
    }
    Ok(())
}
