//! orderit-store — persistence and business-rule core for the orderit POS
//!
//! Layering, outer to inner: [`ops`] (validation, page-window checks, error
//! tagging) -> [`db::repository`] (sqlite statements, row-affect guard) ->
//! [`db::query`] (sort/page query builder). The GUI consumes [`Store`] and
//! never builds queries itself.

pub mod bootstrap;
pub mod config;
pub mod db;
pub mod ops;
mod store;

pub use config::Config;
pub use store::Store;
