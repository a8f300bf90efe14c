//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 4xxx: Order errors
/// - 6xxx: Product and menu errors
/// - 7xxx: Table errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Order errors (4xxx)
    Order,
    /// Product and menu errors (6xxx)
    Product,
    /// Table errors (7xxx)
    Table,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..4000 => Self::General,
            4000..6000 => Self::Order,
            6000..7000 => Self::Product,
            7000..9000 => Self::Table,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Order => "order",
            Self::Product => "product",
            Self::Table => "table",
            Self::System => "system",
        }
    }
}

/// What the caller can do about an error.
///
/// Business rules only ever fail in two ways: the referenced entity does not
/// exist, or the request violates an invariant. Everything else is the
/// storage or the process itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    Internal,
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// Get the kind of failure this code reports
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound
            | Self::OrderNotFound
            | Self::ProductNotFound
            | Self::MenuGroupNotFound
            | Self::TableNotFound
            | Self::TableGroupNotFound => ErrorKind::NotFound,
            Self::DatabaseError => ErrorKind::Internal,
            _ => ErrorKind::InvalidArgument,
        }
    }
}
