//! Order Table Service

use shared::models::{NewOrderTable, OrderStatus, OrderTable};
use shared::request::{OrderTableCreate, OrderTableEmptyChange, OrderTableGuestsChange};

use crate::db::repository::{OrderRepository, OrderTableRepository, UnitOfWork};
use crate::utils::{AppError, AppResult, ErrorCode};

use super::rules;

pub async fn create<U: UnitOfWork>(uow: &mut U, req: OrderTableCreate) -> AppResult<OrderTable> {
    rules::ensure_guest_count(req.number_of_guests)?;
    let table = uow
        .order_tables()
        .create(NewOrderTable {
            number_of_guests: req.number_of_guests,
            empty: req.empty,
        })
        .await?;
    tracing::info!(order_table_id = table.id, empty = table.empty, "Order table created");
    Ok(table)
}

pub async fn list<U: UnitOfWork>(uow: &mut U) -> AppResult<Vec<OrderTable>> {
    Ok(uow.order_tables().find_all().await?)
}

pub(crate) async fn find_table<U: UnitOfWork>(uow: &mut U, order_table_id: i64) -> AppResult<OrderTable> {
    uow.order_tables()
        .find_by_id(order_table_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TableNotFound).with_detail("order_table_id", order_table_id))
}

/// Seat or clear a table.
///
/// Grouped tables follow their group, and a table with a cooking or eating
/// order stays seated.
pub async fn change_empty<U: UnitOfWork>(
    uow: &mut U,
    order_table_id: i64,
    req: OrderTableEmptyChange,
) -> AppResult<OrderTable> {
    let table = find_table(uow, order_table_id).await?;
    rules::ensure_not_grouped(&table)?;

    let has_open_orders = uow
        .orders()
        .exists_by_order_table_id_in_and_order_status_in(&[table.id], &OrderStatus::INCOMPLETE)
        .await?;
    rules::ensure_no_open_orders(has_open_orders, &[table.id])?;

    let table = uow.order_tables().update(&table.with_empty(req.empty)).await?;
    tracing::info!(order_table_id = table.id, empty = table.empty, "Order table empty changed");
    Ok(table)
}

pub async fn change_number_of_guests<U: UnitOfWork>(
    uow: &mut U,
    order_table_id: i64,
    req: OrderTableGuestsChange,
) -> AppResult<OrderTable> {
    rules::ensure_guest_count(req.number_of_guests)?;
    let table = find_table(uow, order_table_id).await?;
    rules::ensure_table_seated(&table)?;

    let table = uow
        .order_tables()
        .update(&table.with_number_of_guests(req.number_of_guests))
        .await?;
    tracing::info!(
        order_table_id = table.id,
        number_of_guests = table.number_of_guests,
        "Order table guests changed"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::table_group;
    use crate::services::test_support::{order_in, setup, table};
    use shared::request::{OrderTableRef, TableGroupCreate};

    #[tokio::test]
    async fn test_create_rejects_negative_guests() {
        let (_db, mut uow) = setup().await;
        let err = create(&mut uow, OrderTableCreate { number_of_guests: -1, empty: true })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TableInvalidGuestCount);
        assert!(list(&mut uow).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_change_empty() {
        let (_db, mut uow) = setup().await;
        let t = table(&mut uow, 0, true).await;

        let seated = change_empty(&mut uow, t.id, OrderTableEmptyChange { empty: false })
            .await
            .unwrap();
        assert!(!seated.empty);
        assert_eq!(list(&mut uow).await.unwrap(), vec![seated]);
    }

    #[tokio::test]
    async fn test_change_empty_unknown_table_is_not_found() {
        let (_db, mut uow) = setup().await;
        let err = change_empty(&mut uow, 404, OrderTableEmptyChange { empty: true })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNotFound);
    }

    #[tokio::test]
    async fn test_change_empty_rejects_grouped_table() {
        let (_db, mut uow) = setup().await;
        let a = table(&mut uow, 0, true).await;
        let b = table(&mut uow, 0, true).await;
        table_group::create(
            &mut uow,
            TableGroupCreate {
                order_tables: vec![OrderTableRef { id: a.id }, OrderTableRef { id: b.id }],
            },
        )
        .await
        .unwrap();

        let err = change_empty(&mut uow, a.id, OrderTableEmptyChange { empty: true })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TableAlreadyGrouped);
    }

    #[tokio::test]
    async fn test_change_empty_rejects_open_orders() {
        let (_db, mut uow) = setup().await;
        let t = table(&mut uow, 2, false).await;

        for status in OrderStatus::INCOMPLETE {
            let order = order_in(&mut uow, t.id, status).await;
            let err = change_empty(&mut uow, t.id, OrderTableEmptyChange { empty: true })
                .await
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::TableHasOrders);
            // close it for the next round
            let done = order.with_status(OrderStatus::Completion).unwrap();
            uow.orders().update(&done).await.unwrap();
        }

        let cleared = change_empty(&mut uow, t.id, OrderTableEmptyChange { empty: true })
            .await
            .unwrap();
        assert!(cleared.empty);
    }

    #[tokio::test]
    async fn test_change_number_of_guests() {
        let (_db, mut uow) = setup().await;
        let t = table(&mut uow, 0, false).await;

        let changed = change_number_of_guests(&mut uow, t.id, OrderTableGuestsChange { number_of_guests: 4 })
            .await
            .unwrap();
        assert_eq!(changed.number_of_guests, 4);

        let err = change_number_of_guests(&mut uow, t.id, OrderTableGuestsChange { number_of_guests: -1 })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TableInvalidGuestCount);

        let err = change_number_of_guests(&mut uow, 404, OrderTableGuestsChange { number_of_guests: 1 })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_change_number_of_guests_rejects_empty_table() {
        let (_db, mut uow) = setup().await;
        let t = table(&mut uow, 0, true).await;
        let err = change_number_of_guests(&mut uow, t.id, OrderTableGuestsChange { number_of_guests: 2 })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TableEmpty);
    }
}
