//! Table Group Service
//!
//! Groups seat two or more empty tables as one party. A group can only be
//! dissolved once none of its tables has a cooking or eating order.

use shared::models::{NewTableGroup, OrderStatus, TableGroup};
use shared::request::TableGroupCreate;
use shared::util::now_millis;

use crate::db::repository::{OrderRepository, OrderTableRepository, TableGroupRepository, UnitOfWork};
use crate::utils::{AppError, AppResult, ErrorCode};

use super::rules;

/// Group the requested tables and seat them.
pub async fn create<U: UnitOfWork>(uow: &mut U, req: TableGroupCreate) -> AppResult<TableGroup> {
    let order_table_ids = req.order_table_ids();
    rules::ensure_enough_tables(&order_table_ids)?;

    let tables = uow.order_tables().find_all_by_id_in(&order_table_ids).await?;
    rules::ensure_all_tables_resolved(order_table_ids.len(), tables.len())?;
    rules::ensure_tables_empty(&tables)?;

    for table in &tables {
        if uow.table_groups().exists_by_order_table(table.id).await? {
            return Err(AppError::new(ErrorCode::TableAlreadyGrouped).with_detail("order_table_id", table.id));
        }
    }

    for table in &tables {
        uow.order_tables().update(&table.clone().with_empty(false)).await?;
    }

    let group = uow
        .table_groups()
        .create(&NewTableGroup {
            created_date: now_millis(),
            order_table_ids: tables.iter().map(|t| t.id).collect(),
        })
        .await?;

    tracing::info!(
        table_group_id = group.id,
        order_table_ids = ?group.order_table_ids(),
        "Table group created"
    );
    Ok(group)
}

/// Dissolve a group. Member tables are kept as they are.
pub async fn ungroup<U: UnitOfWork>(uow: &mut U, table_group_id: i64) -> AppResult<()> {
    let group = uow
        .table_groups()
        .find_by_id(table_group_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TableGroupNotFound).with_detail("table_group_id", table_group_id))?;

    let order_table_ids = group.order_table_ids();
    let has_open_orders = uow
        .orders()
        .exists_by_order_table_id_in_and_order_status_in(&order_table_ids, &OrderStatus::INCOMPLETE)
        .await?;
    if let Err(e) = rules::ensure_no_open_orders(has_open_orders, &order_table_ids) {
        tracing::warn!(table_group_id, "Ungroup rejected: a member table has an open order");
        return Err(e);
    }

    uow.table_groups().remove_by_id(group.id).await?;
    tracing::info!(table_group_id, ?order_table_ids, "Table group removed");
    Ok(())
}
