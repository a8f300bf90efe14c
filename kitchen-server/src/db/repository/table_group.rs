//! Table Group Repository

use super::RepoResult;
use async_trait::async_trait;
use shared::models::{NewTableGroup, TableGroup};

/// Loaded groups carry their member tables.
#[async_trait]
pub trait TableGroupRepository: Send {
    async fn find_by_id(&mut self, id: i64) -> RepoResult<Option<TableGroup>>;
    /// Insert the group and one membership row per table
    async fn create(&mut self, data: &NewTableGroup) -> RepoResult<TableGroup>;
    /// Whether the table is a member of any group
    async fn exists_by_order_table(&mut self, order_table_id: i64) -> RepoResult<bool>;
    /// Delete the group and its memberships; member tables are kept
    async fn remove_by_id(&mut self, id: i64) -> RepoResult<()>;
}
