//! Shared models and utilities for the orderit POS.
//!
//! Holds the entity models exchanged between the GUI and the store backend,
//! plus the time/ID helpers both sides rely on. Database derives are gated
//! behind the `db` feature so the GUI build does not pull in sqlx.

pub mod models;
pub mod util;
