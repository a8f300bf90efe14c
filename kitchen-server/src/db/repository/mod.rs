//! Repository Module
//!
//! Storage contracts the services depend on. Each aggregate has its own trait;
//! a [`UnitOfWork`] hands out repositories that all share one transaction.

pub mod menu;
pub mod menu_group;
pub mod order;
pub mod order_table;
pub mod product;
pub mod table_group;

// Re-exports
pub use menu::{MenuProductRepository, MenuRepository};
pub use menu_group::MenuGroupRepository;
pub use order::{OrderLineItemRepository, OrderRepository};
pub use order_table::OrderTableRepository;
pub use product::ProductRepository;
pub use table_group::TableGroupRepository;

use async_trait::async_trait;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("row not found".into()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// One transaction spanning every repository it hands out.
///
/// Changes become visible to other units of work only after [`commit`](Self::commit);
/// dropping a unit of work without committing rolls it back.
#[async_trait]
pub trait UnitOfWork: Send {
    type Products<'a>: ProductRepository
    where
        Self: 'a;
    type MenuGroups<'a>: MenuGroupRepository
    where
        Self: 'a;
    type Menus<'a>: MenuRepository
    where
        Self: 'a;
    type MenuProducts<'a>: MenuProductRepository
    where
        Self: 'a;
    type Orders<'a>: OrderRepository
    where
        Self: 'a;
    type OrderLineItems<'a>: OrderLineItemRepository
    where
        Self: 'a;
    type OrderTables<'a>: OrderTableRepository
    where
        Self: 'a;
    type TableGroups<'a>: TableGroupRepository
    where
        Self: 'a;

    fn products(&mut self) -> Self::Products<'_>;
    fn menu_groups(&mut self) -> Self::MenuGroups<'_>;
    fn menus(&mut self) -> Self::Menus<'_>;
    fn menu_products(&mut self) -> Self::MenuProducts<'_>;
    fn orders(&mut self) -> Self::Orders<'_>;
    fn order_line_items(&mut self) -> Self::OrderLineItems<'_>;
    fn order_tables(&mut self) -> Self::OrderTables<'_>;
    fn table_groups(&mut self) -> Self::TableGroups<'_>;

    async fn commit(self) -> RepoResult<()>;
    async fn rollback(self) -> RepoResult<()>;
}
