//! Response shapes
//!
//! Transport representations returned by the HTTP API. Prices serialize as JSON
//! numbers through `f64`, so a stored price with more significant digits than an
//! `f64` holds comes back rounded. Storage and price checks keep the exact
//! `Decimal`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::OrderStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroupResponse {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuResponse {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub menu_group_id: i64,
    pub menu_products: Vec<MenuProductResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuProductResponse {
    pub seq: i64,
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTableResponse {
    pub id: i64,
    pub table_group_id: Option<i64>,
    pub number_of_guests: i32,
    pub empty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: i64,
    pub order_table_id: i64,
    pub order_status: OrderStatus,
    /// Unix millis
    pub ordered_time: i64,
    pub order_line_items: Vec<OrderLineItemResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItemResponse {
    pub seq: i64,
    pub menu_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableGroupResponse {
    pub id: i64,
    /// Unix millis
    pub created_date: i64,
    pub order_tables: Vec<OrderTableResponse>,
}

/// Health check body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}
