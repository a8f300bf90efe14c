//! Menu Group Model

use serde::{Deserialize, Serialize};

/// Menu group entity (菜单分组)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuGroup {
    pub id: i64,
    pub name: String,
}
