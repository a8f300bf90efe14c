//! Menu Group Repository

use super::RepoResult;
use async_trait::async_trait;
use shared::models::MenuGroup;

#[async_trait]
pub trait MenuGroupRepository: Send {
    async fn find_all(&mut self) -> RepoResult<Vec<MenuGroup>>;
    async fn exists_by_id(&mut self, id: i64) -> RepoResult<bool>;
    async fn create(&mut self, name: &str) -> RepoResult<MenuGroup>;
}
