//! Product storage

use super::{parse_decimal, push_id_list};
use crate::db::repository::{ProductRepository, RepoError, RepoResult};
use async_trait::async_trait;
use shared::models::{NewProduct, Product};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepoError;

    fn try_from(row: ProductRow) -> RepoResult<Self> {
        Ok(Product {
            price: parse_decimal("product.price", &row.price)?,
            id: row.id,
            name: row.name,
        })
    }
}

fn into_products(rows: Vec<ProductRow>) -> RepoResult<Vec<Product>> {
    rows.into_iter().map(Product::try_from).collect()
}

pub struct SqliteProductRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> SqliteProductRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> ProductRepository for SqliteProductRepository<'c> {
    async fn find_all(&mut self) -> RepoResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>("SELECT id, name, price FROM product ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await?;
        into_products(rows)
    }

    async fn find_by_id(&mut self, id: i64) -> RepoResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>("SELECT id, name, price FROM product WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        row.map(Product::try_from).transpose()
    }

    async fn find_all_by_id_in(&mut self, ids: &[i64]) -> RepoResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT id, name, price FROM product WHERE id IN ");
        push_id_list(&mut qb, ids);
        qb.push(" ORDER BY id");
        let rows = qb
            .build_query_as::<ProductRow>()
            .fetch_all(&mut *self.conn)
            .await?;
        into_products(rows)
    }

    async fn create(&mut self, data: NewProduct) -> RepoResult<Product> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO product (name, price) VALUES (?, ?) RETURNING id",
        )
        .bind(&data.name)
        .bind(data.price.to_string())
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(Product {
            id,
            name: data.name,
            price: data.price,
        })
    }
}
