//! Menu Service

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::models::{Menu, NewMenu, NewMenuProduct};
use shared::request::MenuCreate;
use shared::util::line_total;

use crate::db::repository::{
    MenuGroupRepository, MenuProductRepository, MenuRepository, ProductRepository, UnitOfWork,
};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

use super::rules;

/// Create a menu and its menu products.
///
/// The menu group and every product must exist, and the menu price may not
/// exceed the summed price of its products.
pub async fn create<U: UnitOfWork>(uow: &mut U, req: MenuCreate) -> AppResult<Menu> {
    validate_required_text(&req.name, "name", MAX_NAME_LEN)?;
    let price = rules::require_price(req.price, ErrorCode::MenuInvalidPrice)?;

    if !uow.menu_groups().exists_by_id(req.menu_group_id).await? {
        return Err(AppError::new(ErrorCode::MenuGroupNotFound)
            .with_detail("menu_group_id", req.menu_group_id));
    }

    for menu_product in &req.menu_products {
        rules::ensure_menu_product_quantity(menu_product.quantity)?;
    }

    let product_ids: Vec<i64> = req.menu_products.iter().map(|mp| mp.product_id).collect();
    let prices: HashMap<i64, Decimal> = uow
        .products()
        .find_all_by_id_in(&product_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p.price))
        .collect();

    let mut lines = Vec::with_capacity(req.menu_products.len());
    for menu_product in &req.menu_products {
        let product_price = prices.get(&menu_product.product_id).ok_or_else(|| {
            AppError::new(ErrorCode::ProductNotFound).with_detail("product_id", menu_product.product_id)
        })?;
        lines.push((*product_price, menu_product.quantity));
    }
    let products_total = line_total(lines).ok_or_else(|| {
        AppError::with_message(ErrorCode::ValueOutOfRange, "Menu products total is out of range")
            .with_detail("product_ids", product_ids.clone())
    })?;
    rules::ensure_menu_price_within(price, products_total)?;

    let new_menu = NewMenu {
        name: req.name,
        price,
        menu_group_id: req.menu_group_id,
        menu_products: req
            .menu_products
            .iter()
            .map(|mp| NewMenuProduct {
                product_id: mp.product_id,
                quantity: mp.quantity,
            })
            .collect(),
    };

    let mut menu = uow.menus().create(&new_menu).await?;
    for menu_product in new_menu.menu_products {
        let saved = uow.menu_products().create(menu.id, menu_product).await?;
        menu.menu_products.push(saved);
    }

    tracing::info!(
        menu_id = menu.id,
        menu_group_id = menu.menu_group_id,
        price = %menu.price,
        products = menu.menu_products.len(),
        "Menu created"
    );
    Ok(menu)
}

/// All menus with their menu products
pub async fn list<U: UnitOfWork>(uow: &mut U) -> AppResult<Vec<Menu>> {
    let mut menus = uow.menus().find_all().await?;
    for menu in &mut menus {
        menu.menu_products = uow.menu_products().find_all_by_menu_id(menu.id).await?;
    }
    Ok(menus)
}
