//! Shared library for the expense tracker BFF.
//!
//! Contains the pieces the server binary and its tests both need:
//! - Process configuration read from the environment
//! - The application error type and its HTTP mapping
//! - Wire models for receipts and bills
//! - HTTP clients for the two upstream services

pub mod config;
pub mod error;
pub mod models;
pub mod service_client;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use models::*;
pub use service_client::{AccountsClient, ParserClient, ServiceClient};
