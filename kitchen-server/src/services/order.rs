//! Order Service
//!
//! Orders are placed against a seated table, start in `COOKING` and move
//! between statuses until `COMPLETION`.

use shared::models::{NewOrder, NewOrderLineItem, Order, OrderStatus};
use shared::request::{OrderCreate, OrderStatusChange};
use shared::util::now_millis;

use crate::db::repository::{MenuRepository, OrderLineItemRepository, OrderRepository, UnitOfWork};
use crate::utils::{AppError, AppResult, ErrorCode};

use super::order_table::find_table;
use super::rules;

/// Place an order.
///
/// Line items must be non-empty and reference distinct existing menus; the
/// table must exist and be seated.
pub async fn create<U: UnitOfWork>(uow: &mut U, req: OrderCreate) -> AppResult<Order> {
    rules::ensure_line_items_present(req.order_line_items.len())?;
    for item in &req.order_line_items {
        rules::ensure_line_item_quantity(item.quantity)?;
    }

    let menu_ids: Vec<i64> = req.order_line_items.iter().map(|item| item.menu_id).collect();
    let existing_menus = uow.menus().count_by_id_in(&menu_ids).await?;
    if let Err(e) = rules::ensure_menus_distinct(menu_ids.len(), existing_menus) {
        tracing::debug!(order_table_id = req.order_table_id, ?menu_ids, "Order rejected: duplicated menu");
        return Err(e);
    }

    let table = find_table(uow, req.order_table_id).await?;
    rules::ensure_table_accepts_orders(&table)?;

    let mut order = uow
        .orders()
        .create(NewOrder {
            order_table_id: table.id,
            order_status: OrderStatus::Cooking,
            ordered_time: now_millis(),
        })
        .await?;

    for item in &req.order_line_items {
        let saved = uow
            .order_line_items()
            .create(
                order.id,
                NewOrderLineItem {
                    menu_id: item.menu_id,
                    quantity: item.quantity,
                },
            )
            .await?;
        order.order_line_items.push(saved);
    }

    tracing::info!(
        order_id = order.id,
        order_table_id = order.order_table_id,
        line_items = order.order_line_items.len(),
        "Order created"
    );
    Ok(order)
}

/// All orders with their line items
pub async fn list<U: UnitOfWork>(uow: &mut U) -> AppResult<Vec<Order>> {
    let mut orders = uow.orders().find_all().await?;
    for order in &mut orders {
        order.order_line_items = uow.order_line_items().find_all_by_order_id(order.id).await?;
    }
    Ok(orders)
}

/// Move an order to a new status. Completed orders are final.
pub async fn change_order_status<U: UnitOfWork>(
    uow: &mut U,
    order_id: i64,
    req: OrderStatusChange,
) -> AppResult<Order> {
    let order = uow
        .orders()
        .find_by_id(order_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("order_id", order_id))?;

    let from = order.order_status;
    let order = order.with_status(req.order_status)?;
    let mut order = uow.orders().update(&order).await?;
    order.order_line_items = uow.order_line_items().find_all_by_order_id(order.id).await?;

    tracing::info!(order_id = order.id, %from, to = %order.order_status, "Order status changed");
    Ok(order)
}
