//! Data models
//!
//! Entities as persisted. DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`;
//! entities with decimal columns are mapped by the storage adapter instead.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod menu;
pub mod menu_group;
pub mod order;
pub mod order_table;
pub mod product;
pub mod table_group;

// Re-exports
pub use menu::*;
pub use menu_group::*;
pub use order::*;
pub use order_table::*;
pub use product::*;
pub use table_group::*;
