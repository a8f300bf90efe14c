//! Menu storage

use super::{parse_decimal, push_id_list};
use crate::db::repository::{MenuProductRepository, MenuRepository, RepoError, RepoResult};
use async_trait::async_trait;
use shared::models::{Menu, MenuProduct, NewMenu, NewMenuProduct};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

#[derive(sqlx::FromRow)]
struct MenuRow {
    id: i64,
    name: String,
    price: String,
    menu_group_id: i64,
}

impl TryFrom<MenuRow> for Menu {
    type Error = RepoError;

    fn try_from(row: MenuRow) -> RepoResult<Self> {
        Ok(Menu {
            price: parse_decimal("menu.price", &row.price)?,
            id: row.id,
            name: row.name,
            menu_group_id: row.menu_group_id,
            menu_products: Vec::new(),
        })
    }
}

pub struct SqliteMenuRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> SqliteMenuRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> MenuRepository for SqliteMenuRepository<'c> {
    async fn find_all(&mut self) -> RepoResult<Vec<Menu>> {
        let rows = sqlx::query_as::<_, MenuRow>(
            "SELECT id, name, price, menu_group_id FROM menu ORDER BY id",
        )
        .fetch_all(&mut *self.conn)
        .await?;
        rows.into_iter().map(Menu::try_from).collect()
    }

    async fn count_by_id_in(&mut self, ids: &[i64]) -> RepoResult<i64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM menu WHERE id IN ");
        push_id_list(&mut qb, ids);
        let count = qb
            .build_query_scalar::<i64>()
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(count)
    }

    async fn create(&mut self, data: &NewMenu) -> RepoResult<Menu> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO menu (name, price, menu_group_id) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&data.name)
        .bind(data.price.to_string())
        .bind(data.menu_group_id)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(Menu {
            id,
            name: data.name.clone(),
            price: data.price,
            menu_group_id: data.menu_group_id,
            menu_products: Vec::new(),
        })
    }
}

pub struct SqliteMenuProductRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> SqliteMenuProductRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> MenuProductRepository for SqliteMenuProductRepository<'c> {
    async fn create(&mut self, menu_id: i64, data: NewMenuProduct) -> RepoResult<MenuProduct> {
        let seq = sqlx::query_scalar::<_, i64>(
            "INSERT INTO menu_product (menu_id, product_id, quantity) VALUES (?, ?, ?) RETURNING seq",
        )
        .bind(menu_id)
        .bind(data.product_id)
        .bind(data.quantity)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(MenuProduct {
            seq,
            menu_id,
            product_id: data.product_id,
            quantity: data.quantity,
        })
    }

    async fn find_all_by_menu_id(&mut self, menu_id: i64) -> RepoResult<Vec<MenuProduct>> {
        let items = sqlx::query_as::<_, MenuProduct>(
            "SELECT seq, menu_id, product_id, quantity FROM menu_product WHERE menu_id = ? ORDER BY seq",
        )
        .bind(menu_id)
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::DbService;
    use crate::db::repository::{MenuGroupRepository, MenuRepository, UnitOfWork};
    use rust_decimal::Decimal;
    use shared::models::NewMenu;

    #[tokio::test]
    async fn test_count_by_id_in_counts_distinct_existing_menus() {
        let db = DbService::in_memory().await.unwrap();
        let mut uow = db.begin().await.unwrap();
        let group = uow.menu_groups().create("Chicken").await.unwrap();
        let menu = uow
            .menus()
            .create(&NewMenu {
                name: "Fried".into(),
                price: Decimal::from(16000),
                menu_group_id: group.id,
                menu_products: vec![],
            })
            .await
            .unwrap();

        assert_eq!(uow.menus().count_by_id_in(&[menu.id]).await.unwrap(), 1);
        // IN collapses duplicates
        assert_eq!(uow.menus().count_by_id_in(&[menu.id, menu.id]).await.unwrap(), 1);
        assert_eq!(uow.menus().count_by_id_in(&[menu.id, 404]).await.unwrap(), 1);
        assert_eq!(uow.menus().count_by_id_in(&[]).await.unwrap(), 0);
    }
}
