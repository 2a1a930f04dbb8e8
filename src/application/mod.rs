//! # Application Layer
//!
//! Repository interfaces and the use cases presentation code calls through.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
