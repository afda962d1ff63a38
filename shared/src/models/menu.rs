//! Menu Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Menu entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub created_on: i64,
    pub last_updated_on: i64,
}

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuCreate {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
}

/// Rename payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuNameUpdate {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
}
