//! Order Repository

use super::RepoResult;
use async_trait::async_trait;
use shared::models::{NewOrder, NewOrderLineItem, Order, OrderLineItem, OrderStatus};

/// Order rows. Returned orders carry no line items; those come from
/// [`OrderLineItemRepository`].
#[async_trait]
pub trait OrderRepository: Send {
    async fn find_all(&mut self) -> RepoResult<Vec<Order>>;
    async fn find_by_id(&mut self, id: i64) -> RepoResult<Option<Order>>;
    async fn create(&mut self, data: NewOrder) -> RepoResult<Order>;
    /// Persist the status of an existing order
    async fn update(&mut self, order: &Order) -> RepoResult<Order>;
    /// Whether any table in `order_table_ids` has an order in one of `statuses`
    async fn exists_by_order_table_id_in_and_order_status_in(
        &mut self,
        order_table_ids: &[i64],
        statuses: &[OrderStatus],
    ) -> RepoResult<bool>;
}

#[async_trait]
pub trait OrderLineItemRepository: Send {
    async fn create(&mut self, order_id: i64, data: NewOrderLineItem) -> RepoResult<OrderLineItem>;
    async fn find_all_by_order_id(&mut self, order_id: i64) -> RepoResult<Vec<OrderLineItem>>;
}
