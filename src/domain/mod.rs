//! # Domain Layer
//!
//! Data carriers shared by every layer and the error type repositories report.
//! This layer is independent of external frameworks and infrastructure.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
