//! Database engine for nestkv
//!
//! This crate orchestrates the lower layers:
//! - resolver: get/put/delete over nested containers addressed by name chains
//! - config: `nestkv.toml` loading and validation
//! - Database: store ownership plus `view`/`update` transaction scopes
//!
//! The resolver is generic over [`nestkv_core::Container`] and does not
//! depend on the bundled store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod database;
pub mod resolver;

pub use config::{NestConfig, CONFIG_FILE_NAME};
pub use database::Database;
