//! SQLite adapter
//!
//! `sqlx` implementations of every repository trait. Each repository borrows the
//! connection of the open transaction, so all reads and writes of one unit of
//! work see each other.

mod menu;
mod menu_group;
mod order;
mod order_table;
mod product;
mod table_group;

pub use menu::{SqliteMenuProductRepository, SqliteMenuRepository};
pub use menu_group::SqliteMenuGroupRepository;
pub use order::{SqliteOrderLineItemRepository, SqliteOrderRepository};
pub use order_table::SqliteOrderTableRepository;
pub use product::SqliteProductRepository;
pub use table_group::SqliteTableGroupRepository;

use super::repository::{RepoError, RepoResult, UnitOfWork};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{QueryBuilder, Sqlite, Transaction};
use std::str::FromStr;

/// Unit of work over one SQLite transaction
pub struct SqliteUnitOfWork {
    tx: Transaction<'static, Sqlite>,
}

impl SqliteUnitOfWork {
    pub fn new(tx: Transaction<'static, Sqlite>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl UnitOfWork for SqliteUnitOfWork {
    type Products<'a> = SqliteProductRepository<'a>;
    type MenuGroups<'a> = SqliteMenuGroupRepository<'a>;
    type Menus<'a> = SqliteMenuRepository<'a>;
    type MenuProducts<'a> = SqliteMenuProductRepository<'a>;
    type Orders<'a> = SqliteOrderRepository<'a>;
    type OrderLineItems<'a> = SqliteOrderLineItemRepository<'a>;
    type OrderTables<'a> = SqliteOrderTableRepository<'a>;
    type TableGroups<'a> = SqliteTableGroupRepository<'a>;

    fn products(&mut self) -> Self::Products<'_> {
        SqliteProductRepository::new(&mut self.tx)
    }

    fn menu_groups(&mut self) -> Self::MenuGroups<'_> {
        SqliteMenuGroupRepository::new(&mut self.tx)
    }

    fn menus(&mut self) -> Self::Menus<'_> {
        SqliteMenuRepository::new(&mut self.tx)
    }

    fn menu_products(&mut self) -> Self::MenuProducts<'_> {
        SqliteMenuProductRepository::new(&mut self.tx)
    }

    fn orders(&mut self) -> Self::Orders<'_> {
        SqliteOrderRepository::new(&mut self.tx)
    }

    fn order_line_items(&mut self) -> Self::OrderLineItems<'_> {
        SqliteOrderLineItemRepository::new(&mut self.tx)
    }

    fn order_tables(&mut self) -> Self::OrderTables<'_> {
        SqliteOrderTableRepository::new(&mut self.tx)
    }

    fn table_groups(&mut self) -> Self::TableGroups<'_> {
        SqliteTableGroupRepository::new(&mut self.tx)
    }

    async fn commit(self) -> RepoResult<()> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> RepoResult<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}

/// Parse a decimal stored as TEXT
fn parse_decimal(column: &str, raw: &str) -> RepoResult<Decimal> {
    Decimal::from_str(raw)
        .map_err(|e| RepoError::Database(format!("Invalid decimal in {column}: {raw} ({e})")))
}

/// Append `(?, ?, ...)` binding every id
fn push_id_list(qb: &mut QueryBuilder<'_, Sqlite>, ids: &[i64]) {
    qb.push("(");
    let mut separated = qb.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");
}
