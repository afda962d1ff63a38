//! Store configuration

/// Seed user created on first start when the username is not taken yet.
#[derive(Debug, Clone)]
pub struct InitialUser {
    pub username: String,
    pub password: String,
}

/// Runtime configuration, loaded from environment variables (`.env`
/// supported via dotenvy in the binary).
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL, e.g. `sqlite://orderit.db`
    pub database_url: String,
    /// Users seeded at startup (INITIAL_USER_{1,2}_{USERNAME,PASSWORD})
    pub initial_users: Vec<InitialUser>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://orderit.db".into());

        let mut initial_users = Vec::new();
        for n in 1..=2 {
            let username = std::env::var(format!("INITIAL_USER_{n}_USERNAME"));
            let password = std::env::var(format!("INITIAL_USER_{n}_PASSWORD"));
            if let (Ok(username), Ok(password)) = (username, password)
                && !username.is_empty()
            {
                initial_users.push(InitialUser { username, password });
            }
        }

        Self {
            database_url,
            initial_users,
        }
    }
}
