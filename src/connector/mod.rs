//! # Connector Layer
//!
//! External integrations implementing the application interfaces:
//! - Favorites storage (DuckDB on disk, or in-memory)
//! - Highlights (HTTP provider, or a JSON catalog held in memory)
//! - CLI wiring (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
