//! Menu Repository

use super::RepoResult;
use async_trait::async_trait;
use shared::models::{Menu, MenuProduct, NewMenu, NewMenuProduct};

/// Menu rows. Returned menus carry no menu products; those come from
/// [`MenuProductRepository`].
#[async_trait]
pub trait MenuRepository: Send {
    async fn find_all(&mut self) -> RepoResult<Vec<Menu>>;
    /// Number of distinct existing menus among `ids`
    async fn count_by_id_in(&mut self, ids: &[i64]) -> RepoResult<i64>;
    /// Insert the menu row only; `data.menu_products` is ignored
    async fn create(&mut self, data: &NewMenu) -> RepoResult<Menu>;
}

#[async_trait]
pub trait MenuProductRepository: Send {
    async fn create(&mut self, menu_id: i64, data: NewMenuProduct) -> RepoResult<MenuProduct>;
    async fn find_all_by_menu_id(&mut self, menu_id: i64) -> RepoResult<Vec<MenuProduct>>;
}
