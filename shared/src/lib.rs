//! Shared types for the kitchen POS backend
//!
//! Types used by the server and by API clients: domain models, request payloads,
//! response shapes and the unified error system.

pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode, ErrorKind};
pub use http;
pub use serde::{Deserialize, Serialize};
