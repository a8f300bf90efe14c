//! Order Table Model

use serde::{Deserialize, Serialize};

/// Order table entity (主文桌台)
///
/// `table_group_id` is derived from group membership when the table is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderTable {
    pub id: i64,
    pub table_group_id: Option<i64>,
    pub number_of_guests: i32,
    pub empty: bool,
}

impl OrderTable {
    pub fn is_grouped(&self) -> bool {
        self.table_group_id.is_some()
    }

    /// Same table with a new `empty` flag
    pub fn with_empty(self, empty: bool) -> Self {
        Self { empty, ..self }
    }

    /// Same table with a new guest count
    pub fn with_number_of_guests(self, number_of_guests: i32) -> Self {
        Self {
            number_of_guests,
            ..self
        }
    }
}

/// Order table not yet persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderTable {
    pub number_of_guests: i32,
    pub empty: bool,
}
