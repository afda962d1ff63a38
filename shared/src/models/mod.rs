//! Entity models
//!
//! Each entity ships as a triple: the persisted row (`X`), the create
//! payload (`XCreate`) and one or more partial-update payloads. Payload
//! shape limits live on the payloads as `validator` rules; the store's
//! business-rule layer enforces them before anything touches the database.

pub mod dining_table;
pub mod menu;
pub mod tag;
pub mod user;

pub use dining_table::{
    DiningTable, DiningTableCreate, DiningTableNameUpdate, DiningTablePositionUpdate,
    DiningTableSizeUpdate,
};
pub use menu::{Menu, MenuCreate, MenuNameUpdate};
pub use tag::{Tag, TagCreate, TagNameUpdate};
pub use user::{PasswordChange, User, UserCreate};
