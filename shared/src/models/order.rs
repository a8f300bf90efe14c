//! Order Model

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

/// Order lifecycle status
///
/// `Cooking` → `Meal` → `Completion`. `Completion` is terminal; any other
/// transition (including back to `Cooking`) is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum OrderStatus {
    Cooking,
    Meal,
    Completion,
}

impl OrderStatus {
    /// Statuses that keep a table occupied
    pub const INCOMPLETE: [OrderStatus; 2] = [OrderStatus::Cooking, OrderStatus::Meal];

    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Cooking => "COOKING",
            OrderStatus::Meal => "MEAL",
            OrderStatus::Completion => "COMPLETION",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, OrderStatus::Completion)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order entity (订单)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub order_table_id: i64,
    pub order_status: OrderStatus,
    /// Creation time (Unix millis)
    pub ordered_time: i64,

    // -- Relations (populated by application code, skipped by FromRow) --
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub order_line_items: Vec<OrderLineItem>,
}

impl Order {
    /// Move the order to `status`.
    ///
    /// A completed order never changes again.
    pub fn with_status(self, status: OrderStatus) -> AppResult<Self> {
        if self.order_status.is_completed() {
            return Err(AppError::new(ErrorCode::OrderAlreadyCompleted)
                .with_detail("order_id", self.id));
        }
        Ok(Self {
            order_status: status,
            ..self
        })
    }
}

/// One menu line inside an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderLineItem {
    pub seq: i64,
    pub order_id: i64,
    pub menu_id: i64,
    pub quantity: i64,
}

/// Order not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub order_table_id: i64,
    pub order_status: OrderStatus,
    pub ordered_time: i64,
}

/// Line item not yet persisted; the order id is assigned after the order insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderLineItem {
    pub menu_id: i64,
    pub quantity: i64,
}
