//! Table Group Model

use serde::{Deserialize, Serialize};

use super::OrderTable;

/// Table group entity (团体桌)
///
/// Two or more tables seated as one party and settled together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TableGroup {
    pub id: i64,
    /// Creation time (Unix millis)
    pub created_date: i64,

    // -- Relations (populated by application code, skipped by FromRow) --
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub order_tables: Vec<OrderTable>,
}

impl TableGroup {
    pub fn order_table_ids(&self) -> Vec<i64> {
        self.order_tables.iter().map(|t| t.id).collect()
    }
}

/// Table group not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTableGroup {
    pub created_date: i64,
    pub order_table_ids: Vec<i64>,
}
