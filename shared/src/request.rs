//! Request payloads
//!
//! JSON bodies accepted by the HTTP API. Prices deserialize from either a JSON
//! number or a decimal string; a missing or `null` price stays `None` so the
//! service can reject it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::OrderStatus;

/// POST /api/products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// POST /api/menu-groups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuGroupCreate {
    pub name: String,
}

/// POST /api/menus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCreate {
    pub name: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    pub menu_group_id: i64,
    #[serde(default)]
    pub menu_products: Vec<MenuProductCreate>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MenuProductCreate {
    pub product_id: i64,
    pub quantity: i64,
}

/// POST /api/tables
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderTableCreate {
    #[serde(default)]
    pub number_of_guests: i32,
    #[serde(default)]
    pub empty: bool,
}

/// PUT /api/tables/{id}/empty
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderTableEmptyChange {
    pub empty: bool,
}

/// PUT /api/tables/{id}/number-of-guests
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderTableGuestsChange {
    pub number_of_guests: i32,
}

/// POST /api/orders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub order_table_id: i64,
    #[serde(default)]
    pub order_line_items: Vec<OrderLineItemCreate>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderLineItemCreate {
    pub menu_id: i64,
    pub quantity: i64,
}

/// PUT /api/orders/{id}/order-status
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderStatusChange {
    pub order_status: OrderStatus,
}

/// POST /api/table-groups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableGroupCreate {
    #[serde(default)]
    pub order_tables: Vec<OrderTableRef>,
}

impl TableGroupCreate {
    pub fn order_table_ids(&self) -> Vec<i64> {
        self.order_tables.iter().map(|t| t.id).collect()
    }
}

/// Reference to an existing order table by id
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderTableRef {
    pub id: i64,
}
