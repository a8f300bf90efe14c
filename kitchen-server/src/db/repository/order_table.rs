//! Order Table Repository

use super::RepoResult;
use async_trait::async_trait;
use shared::models::{NewOrderTable, OrderTable};

/// Loaded tables carry their current `table_group_id`.
#[async_trait]
pub trait OrderTableRepository: Send {
    async fn find_all(&mut self) -> RepoResult<Vec<OrderTable>>;
    async fn find_by_id(&mut self, id: i64) -> RepoResult<Option<OrderTable>>;
    /// Existing tables among `ids`, each at most once
    async fn find_all_by_id_in(&mut self, ids: &[i64]) -> RepoResult<Vec<OrderTable>>;
    async fn create(&mut self, data: NewOrderTable) -> RepoResult<OrderTable>;
    /// Persist `number_of_guests` and `empty`; group membership is owned by table groups
    async fn update(&mut self, table: &OrderTable) -> RepoResult<OrderTable>;
}
