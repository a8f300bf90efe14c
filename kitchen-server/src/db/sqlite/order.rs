//! Order storage

use super::push_id_list;
use crate::db::repository::{OrderLineItemRepository, OrderRepository, RepoError, RepoResult};
use async_trait::async_trait;
use shared::models::{NewOrder, NewOrderLineItem, Order, OrderLineItem, OrderStatus};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

const ORDER_COLUMNS: &str = "id, order_table_id, order_status, ordered_time";

pub struct SqliteOrderRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> SqliteOrderRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> OrderRepository for SqliteOrderRepository<'c> {
    async fn find_all(&mut self) -> RepoResult<Vec<Order>> {
        let sql = format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY id");
        let orders = sqlx::query_as::<_, Order>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(orders)
    }

    async fn find_by_id(&mut self, id: i64) -> RepoResult<Option<Order>> {
        let sql = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?");
        let order = sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(order)
    }

    async fn create(&mut self, data: NewOrder) -> RepoResult<Order> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO orders (order_table_id, order_status, ordered_time) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(data.order_table_id)
        .bind(data.order_status.as_str())
        .bind(data.ordered_time)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(Order {
            id,
            order_table_id: data.order_table_id,
            order_status: data.order_status,
            ordered_time: data.ordered_time,
            order_line_items: Vec::new(),
        })
    }

    async fn update(&mut self, order: &Order) -> RepoResult<Order> {
        let rows = sqlx::query("UPDATE orders SET order_status = ? WHERE id = ?")
            .bind(order.order_status.as_str())
            .bind(order.id)
            .execute(&mut *self.conn)
            .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Order {} not found", order.id)));
        }
        Ok(order.clone())
    }

    async fn exists_by_order_table_id_in_and_order_status_in(
        &mut self,
        order_table_ids: &[i64],
        statuses: &[OrderStatus],
    ) -> RepoResult<bool> {
        if order_table_ids.is_empty() || statuses.is_empty() {
            return Ok(false);
        }
        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT EXISTS(SELECT 1 FROM orders WHERE order_table_id IN ",
        );
        push_id_list(&mut qb, order_table_ids);
        qb.push(" AND order_status IN (");
        let mut separated = qb.separated(", ");
        for status in statuses {
            separated.push_bind(status.as_str());
        }
        separated.push_unseparated("))");
        let exists = qb
            .build_query_scalar::<i64>()
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(exists != 0)
    }
}

pub struct SqliteOrderLineItemRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> SqliteOrderLineItemRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> OrderLineItemRepository for SqliteOrderLineItemRepository<'c> {
    async fn create(&mut self, order_id: i64, data: NewOrderLineItem) -> RepoResult<OrderLineItem> {
        let seq = sqlx::query_scalar::<_, i64>(
            "INSERT INTO order_line_item (order_id, menu_id, quantity) VALUES (?, ?, ?) RETURNING seq",
        )
        .bind(order_id)
        .bind(data.menu_id)
        .bind(data.quantity)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(OrderLineItem {
            seq,
            order_id,
            menu_id: data.menu_id,
            quantity: data.quantity,
        })
    }

    async fn find_all_by_order_id(&mut self, order_id: i64) -> RepoResult<Vec<OrderLineItem>> {
        let items = sqlx::query_as::<_, OrderLineItem>(
            "SELECT seq, order_id, menu_id, quantity FROM order_line_item WHERE order_id = ? ORDER BY seq",
        )
        .bind(order_id)
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(items)
    }
}
