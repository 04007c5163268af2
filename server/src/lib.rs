//! Job board server
//!
//! - `core` - Configuration, CLI, storage, shutdown
//! - `data` - Filter query builder, SQL dialects, SQLite/PostgreSQL backends
//! - `domain` - Job search and creation services
//! - `api` - HTTP routes and server

pub mod api;
pub mod app;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;
