//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Product and menu errors
//! - 7xxx: Table and table group errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has already been completed
    OrderAlreadyCompleted = 4003,
    /// Order has no line items
    OrderEmpty = 4007,
    /// Order line items reference the same menu twice (or an unknown menu)
    OrderMenuDuplicated = 4008,
    /// Order placed on an empty table
    OrderTableEmpty = 4009,
    /// Order line item quantity is not positive
    OrderLineItemInvalidQuantity = 4010,

    // ==================== 6xxx: Product / Menu ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product price is missing or negative
    ProductInvalidPrice = 6002,
    /// Menu group not found
    MenuGroupNotFound = 6402,
    /// Menu price is missing or negative
    MenuInvalidPrice = 6403,
    /// Menu price exceeds the sum of its products
    MenuPriceExceedsProducts = 6404,
    /// Menu product quantity is negative
    MenuProductInvalidQuantity = 6405,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is occupied
    TableOccupied = 7002,
    /// Table is empty
    TableEmpty = 7003,
    /// Number of guests is negative
    TableInvalidGuestCount = 7005,
    /// Table has orders that are not completed
    TableHasOrders = 7104,
    /// Table group not found
    TableGroupNotFound = 7201,
    /// Fewer than two tables requested for a table group
    TableGroupTooFewTables = 7202,
    /// Requested tables contain duplicates or unknown ids
    TableGroupDuplicatedTables = 7203,
    /// Table already belongs to a table group
    TableAlreadyGrouped = 7204,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderAlreadyCompleted => "Order is already completed",
            ErrorCode::OrderEmpty => "Order has no line items",
            ErrorCode::OrderMenuDuplicated => "Order line items contain a duplicated menu",
            ErrorCode::OrderTableEmpty => "Order table is empty",
            ErrorCode::OrderLineItemInvalidQuantity => "Order line item quantity must be positive",

            // Product / Menu
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Product price must not be missing or negative",
            ErrorCode::MenuGroupNotFound => "Menu group not found",
            ErrorCode::MenuInvalidPrice => "Menu price must not be missing or negative",
            ErrorCode::MenuPriceExceedsProducts => {
                "Menu price must not exceed the sum of its products"
            }
            ErrorCode::MenuProductInvalidQuantity => "Menu product quantity must not be negative",

            // Table
            ErrorCode::TableNotFound => "Order table not found",
            ErrorCode::TableOccupied => "A non-empty order table exists",
            ErrorCode::TableEmpty => "Order table is empty",
            ErrorCode::TableInvalidGuestCount => "Number of guests must not be negative",
            ErrorCode::TableHasOrders => "An incomplete table exists",
            ErrorCode::TableGroupNotFound => "Table group not found",
            ErrorCode::TableGroupTooFewTables => "Table group needs no fewer than 2 tables",
            ErrorCode::TableGroupDuplicatedTables => "Duplicated or unknown order tables requested",
            ErrorCode::TableAlreadyGrouped => "Order table already belongs to a table group",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4003 => Ok(ErrorCode::OrderAlreadyCompleted),
            4007 => Ok(ErrorCode::OrderEmpty),
            4008 => Ok(ErrorCode::OrderMenuDuplicated),
            4009 => Ok(ErrorCode::OrderTableEmpty),
            4010 => Ok(ErrorCode::OrderLineItemInvalidQuantity),

            // Product / Menu
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6402 => Ok(ErrorCode::MenuGroupNotFound),
            6403 => Ok(ErrorCode::MenuInvalidPrice),
            6404 => Ok(ErrorCode::MenuPriceExceedsProducts),
            6405 => Ok(ErrorCode::MenuProductInvalidQuantity),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableOccupied),
            7003 => Ok(ErrorCode::TableEmpty),
            7005 => Ok(ErrorCode::TableInvalidGuestCount),
            7104 => Ok(ErrorCode::TableHasOrders),
            7201 => Ok(ErrorCode::TableGroupNotFound),
            7202 => Ok(ErrorCode::TableGroupTooFewTables),
            7203 => Ok(ErrorCode::TableGroupDuplicatedTables),
            7204 => Ok(ErrorCode::TableAlreadyGrouped),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
