//! Product Repository

use super::RepoResult;
use async_trait::async_trait;
use shared::models::{NewProduct, Product};

#[async_trait]
pub trait ProductRepository: Send {
    async fn find_all(&mut self) -> RepoResult<Vec<Product>>;
    async fn find_by_id(&mut self, id: i64) -> RepoResult<Option<Product>>;
    /// Existing products among `ids`; unknown ids are skipped
    async fn find_all_by_id_in(&mut self, ids: &[i64]) -> RepoResult<Vec<Product>>;
    async fn create(&mut self, data: NewProduct) -> RepoResult<Product>;
}
