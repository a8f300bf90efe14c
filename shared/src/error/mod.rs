//! Unified error system for the kitchen POS backend
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`ErrorKind`]: The coarse kind a caller reacts to (not found / invalid argument / internal)
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Product and menu errors
//! - 7xxx: Table and table group errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorKind, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::OrderNotFound);
//! assert_eq!(err.kind(), ErrorKind::NotFound);
//!
//! let err = AppError::with_message(ErrorCode::OrderEmpty, "Order has no line items")
//!     .with_detail("order_table_id", 3);
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(4007));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::{ErrorCategory, ErrorKind};
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
