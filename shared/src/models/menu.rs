//! Menu Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu entity (菜单)
///
/// A menu sells a bundle of products at one price. The price may be a discount on
/// the bundle, never a markup: `price <= Σ(product.price × quantity)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub menu_group_id: i64,

    // -- Relations (populated by application code) --
    #[serde(default)]
    pub menu_products: Vec<MenuProduct>,
}

/// One product line inside a menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuProduct {
    pub seq: i64,
    pub menu_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

/// Menu not yet persisted
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenu {
    pub name: String,
    pub price: Decimal,
    pub menu_group_id: i64,
    pub menu_products: Vec<NewMenuProduct>,
}

/// Menu product not yet persisted; the menu id is assigned after the menu insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMenuProduct {
    pub product_id: i64,
    pub quantity: i64,
}
