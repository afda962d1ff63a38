//! Dining Table Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Dining table entity: a rectangle on the floor-plan canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    /// UTC epoch millis, set once at insert
    pub created_on: i64,
    /// UTC epoch millis, refreshed on every mutation
    pub last_updated_on: i64,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTableCreate {
    #[validate(length(min = 1, max = 30))]
    pub name: String,
    #[validate(range(min = 0))]
    pub x: i64,
    #[validate(range(min = 0))]
    pub y: i64,
    #[validate(range(min = 10))]
    pub width: i64,
    #[validate(range(min = 10))]
    pub height: i64,
}

/// Rename payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTableNameUpdate {
    #[validate(length(min = 1, max = 30))]
    pub name: String,
}

/// Drag-and-drop move payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTablePositionUpdate {
    #[validate(range(min = 0))]
    pub x: i64,
    #[validate(range(min = 0))]
    pub y: i64,
}

/// Resize payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTableSizeUpdate {
    #[validate(range(min = 10))]
    pub width: i64,
    #[validate(range(min = 10))]
    pub height: i64,
}
