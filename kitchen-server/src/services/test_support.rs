//! Fixtures shared by service tests

use rust_decimal::Decimal;
use shared::models::{Menu, NewOrder, Order, OrderStatus, OrderTable};
use shared::request::{MenuCreate, MenuGroupCreate, MenuProductCreate, OrderTableCreate, ProductCreate};

use crate::db::{DbService, SqliteUnitOfWork};
use crate::db::repository::{OrderRepository, UnitOfWork};

pub async fn setup() -> (DbService, SqliteUnitOfWork) {
    let db = DbService::in_memory().await.unwrap();
    let uow = db.begin().await.unwrap();
    (db, uow)
}

pub async fn table(uow: &mut SqliteUnitOfWork, number_of_guests: i32, empty: bool) -> OrderTable {
    crate::services::order_table::create(uow, OrderTableCreate { number_of_guests, empty })
        .await
        .unwrap()
}

/// A menu priced at `price` made of one product worth 16000 × 2
pub async fn menu_priced(uow: &mut SqliteUnitOfWork, name: &str, price: Decimal) -> Menu {
    let group = crate::services::menu_group::create(uow, MenuGroupCreate { name: "Chicken".into() })
        .await
        .unwrap();
    let chicken = crate::services::product::create(
        uow,
        ProductCreate {
            name: "Fried chicken".into(),
            price: Some(Decimal::from(16000)),
        },
    )
    .await
    .unwrap();
    crate::services::menu::create(
        uow,
        MenuCreate {
            name: name.into(),
            price: Some(price),
            menu_group_id: group.id,
            menu_products: vec![MenuProductCreate {
                product_id: chicken.id,
                quantity: 2,
            }],
        },
    )
    .await
    .unwrap()
}

pub async fn menu(uow: &mut SqliteUnitOfWork, name: &str) -> Menu {
    menu_priced(uow, name, Decimal::from(30000)).await
}

/// Insert an order in `status` directly, bypassing order validation
pub async fn order_in(uow: &mut SqliteUnitOfWork, order_table_id: i64, status: OrderStatus) -> Order {
    uow.orders()
        .create(NewOrder {
            order_table_id,
            order_status: status,
            ordered_time: 0,
        })
        .await
        .unwrap()
}
