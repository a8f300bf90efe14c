//! Business rules
//!
//! Pure checks evaluated against freshly loaded entities before any mutation.
//! Each rule either passes or returns the [`AppError`] the caller should see.

use rust_decimal::Decimal;
use shared::models::OrderTable;

use crate::utils::{AppError, AppResult, ErrorCode};

/// A price must be present and non-negative
pub fn require_price(price: Option<Decimal>, code: ErrorCode) -> AppResult<Decimal> {
    match price {
        Some(price) if price >= Decimal::ZERO => Ok(price),
        Some(price) => Err(AppError::new(code).with_detail("price", price.to_string())),
        None => Err(AppError::new(code)),
    }
}

/// A menu may discount its products, never mark them up
pub fn ensure_menu_price_within(price: Decimal, products_total: Decimal) -> AppResult<()> {
    if price > products_total {
        return Err(AppError::new(ErrorCode::MenuPriceExceedsProducts)
            .with_detail("price", price.to_string())
            .with_detail("products_total", products_total.to_string()));
    }
    Ok(())
}

pub fn ensure_menu_product_quantity(quantity: i64) -> AppResult<()> {
    if quantity < 0 {
        return Err(AppError::new(ErrorCode::MenuProductInvalidQuantity)
            .with_detail("quantity", quantity));
    }
    Ok(())
}

pub fn ensure_line_items_present(line_item_count: usize) -> AppResult<()> {
    if line_item_count == 0 {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }
    Ok(())
}

pub fn ensure_line_item_quantity(quantity: i64) -> AppResult<()> {
    if quantity <= 0 {
        return Err(AppError::new(ErrorCode::OrderLineItemInvalidQuantity)
            .with_detail("quantity", quantity));
    }
    Ok(())
}

/// Every line item must reference its own existing menu.
///
/// `existing_menu_count` is the number of distinct existing menus among the
/// referenced ids, so a repeated or unknown menu id makes the counts differ.
pub fn ensure_menus_distinct(line_item_count: usize, existing_menu_count: i64) -> AppResult<()> {
    if i64::try_from(line_item_count).ok() != Some(existing_menu_count) {
        return Err(AppError::new(ErrorCode::OrderMenuDuplicated)
            .with_detail("line_items", line_item_count)
            .with_detail("menus", existing_menu_count));
    }
    Ok(())
}

/// An empty table has no guests to order
pub fn ensure_table_accepts_orders(table: &OrderTable) -> AppResult<()> {
    if table.empty {
        return Err(AppError::new(ErrorCode::OrderTableEmpty).with_detail("order_table_id", table.id));
    }
    Ok(())
}

pub fn ensure_guest_count(number_of_guests: i32) -> AppResult<()> {
    if number_of_guests < 0 {
        return Err(AppError::new(ErrorCode::TableInvalidGuestCount)
            .with_detail("number_of_guests", number_of_guests));
    }
    Ok(())
}

/// Guests can only be counted at a seated table
pub fn ensure_table_seated(table: &OrderTable) -> AppResult<()> {
    if table.empty {
        return Err(AppError::new(ErrorCode::TableEmpty).with_detail("order_table_id", table.id));
    }
    Ok(())
}

pub fn ensure_not_grouped(table: &OrderTable) -> AppResult<()> {
    if let Some(table_group_id) = table.table_group_id {
        return Err(AppError::new(ErrorCode::TableAlreadyGrouped)
            .with_detail("order_table_id", table.id)
            .with_detail("table_group_id", table_group_id));
    }
    Ok(())
}

pub fn ensure_enough_tables(order_table_ids: &[i64]) -> AppResult<()> {
    if order_table_ids.len() < 2 {
        return Err(AppError::new(ErrorCode::TableGroupTooFewTables)
            .with_detail("requested", order_table_ids.len()));
    }
    Ok(())
}

/// Each requested id must resolve to its own table
pub fn ensure_all_tables_resolved(requested: usize, resolved: usize) -> AppResult<()> {
    if requested != resolved {
        return Err(AppError::new(ErrorCode::TableGroupDuplicatedTables)
            .with_detail("requested", requested)
            .with_detail("resolved", resolved));
    }
    Ok(())
}

/// Only empty tables can be grouped
pub fn ensure_tables_empty(tables: &[OrderTable]) -> AppResult<()> {
    if let Some(table) = tables.iter().find(|t| !t.empty) {
        return Err(AppError::new(ErrorCode::TableOccupied).with_detail("order_table_id", table.id));
    }
    Ok(())
}

/// Fails when any of the tables still has a cooking or eating order
pub fn ensure_no_open_orders(has_open_orders: bool, order_table_ids: &[i64]) -> AppResult<()> {
    if has_open_orders {
        return Err(AppError::new(ErrorCode::TableHasOrders)
            .with_detail("order_table_ids", order_table_ids.to_vec()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(id: i64, empty: bool, table_group_id: Option<i64>) -> OrderTable {
        OrderTable {
            id,
            table_group_id,
            number_of_guests: 0,
            empty,
        }
    }

    #[test]
    fn test_require_price() {
        let code = ErrorCode::ProductInvalidPrice;
        assert_eq!(require_price(Some(Decimal::ZERO), code).unwrap(), Decimal::ZERO);
        assert_eq!(require_price(None, code).unwrap_err().code, code);
        assert_eq!(require_price(Some(Decimal::NEGATIVE_ONE), code).unwrap_err().code, code);
    }

    #[test]
    fn test_menu_price_may_equal_but_not_exceed_total() {
        let total = Decimal::new(32000, 0);
        assert!(ensure_menu_price_within(total, total).is_ok());
        assert!(ensure_menu_price_within(Decimal::new(19000, 0), total).is_ok());
        let err = ensure_menu_price_within(Decimal::new(32001, 0), total).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuPriceExceedsProducts);
    }

    #[test]
    fn test_menus_distinct() {
        assert!(ensure_menus_distinct(2, 2).is_ok());
        // two line items, one distinct menu
        let err = ensure_menus_distinct(2, 1).unwrap_err();
        assert!(err.message.contains("duplicated menu"));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_line_items_present() {
        assert!(ensure_line_items_present(1).is_ok());
        assert_eq!(ensure_line_items_present(0).unwrap_err().code, ErrorCode::OrderEmpty);
    }

    #[test]
    fn test_line_item_quantity_must_be_positive() {
        assert!(ensure_line_item_quantity(1).is_ok());
        for quantity in [0, -3] {
            let err = ensure_line_item_quantity(quantity).unwrap_err();
            assert_eq!(err.code, ErrorCode::OrderLineItemInvalidQuantity);
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_table_rules() {
        assert!(ensure_table_accepts_orders(&table(1, false, None)).is_ok());
        assert_eq!(
            ensure_table_accepts_orders(&table(1, true, None)).unwrap_err().code,
            ErrorCode::OrderTableEmpty
        );
        assert!(ensure_not_grouped(&table(1, true, None)).is_ok());
        assert!(ensure_not_grouped(&table(1, true, Some(9))).is_err());
        assert!(ensure_guest_count(0).is_ok());
        assert!(ensure_guest_count(-1).is_err());
        assert!(ensure_table_seated(&table(1, true, None)).is_err());
    }

    #[test]
    fn test_enough_tables() {
        let err = ensure_enough_tables(&[5]).unwrap_err();
        assert!(err.message.contains("fewer than 2 tables"));
        assert!(ensure_enough_tables(&[]).is_err());
        assert!(ensure_enough_tables(&[1, 2]).is_ok());
    }

    #[test]
    fn test_tables_empty() {
        assert!(ensure_tables_empty(&[table(1, true, None), table(2, true, None)]).is_ok());
        let err = ensure_tables_empty(&[table(1, true, None), table(2, false, None)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::TableOccupied);
    }

    #[test]
    fn test_no_open_orders() {
        assert!(ensure_no_open_orders(false, &[1, 2]).is_ok());
        let err = ensure_no_open_orders(true, &[1, 2]).unwrap_err();
        assert!(err.message.contains("incomplete table"));
    }
}
