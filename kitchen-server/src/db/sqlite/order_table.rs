//! Order table storage

use super::push_id_list;
use crate::db::repository::{OrderTableRepository, RepoError, RepoResult};
use async_trait::async_trait;
use shared::models::{NewOrderTable, OrderTable};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

/// Tables joined with their (at most one) group membership
const SELECT_TABLE: &str = "SELECT t.id, m.table_group_id, t.number_of_guests, t.empty \
     FROM order_table t LEFT JOIN table_group_member m ON m.order_table_id = t.id";

pub struct SqliteOrderTableRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> SqliteOrderTableRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> OrderTableRepository for SqliteOrderTableRepository<'c> {
    async fn find_all(&mut self) -> RepoResult<Vec<OrderTable>> {
        let sql = format!("{SELECT_TABLE} ORDER BY t.id");
        let tables = sqlx::query_as::<_, OrderTable>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(tables)
    }

    async fn find_by_id(&mut self, id: i64) -> RepoResult<Option<OrderTable>> {
        let sql = format!("{SELECT_TABLE} WHERE t.id = ?");
        let table = sqlx::query_as::<_, OrderTable>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(table)
    }

    async fn find_all_by_id_in(&mut self, ids: &[i64]) -> RepoResult<Vec<OrderTable>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut qb = QueryBuilder::<Sqlite>::new(SELECT_TABLE);
        qb.push(" WHERE t.id IN ");
        push_id_list(&mut qb, ids);
        qb.push(" ORDER BY t.id");
        let tables = qb
            .build_query_as::<OrderTable>()
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(tables)
    }

    async fn create(&mut self, data: NewOrderTable) -> RepoResult<OrderTable> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO order_table (number_of_guests, empty) VALUES (?, ?) RETURNING id",
        )
        .bind(data.number_of_guests)
        .bind(data.empty)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(OrderTable {
            id,
            table_group_id: None,
            number_of_guests: data.number_of_guests,
            empty: data.empty,
        })
    }

    async fn update(&mut self, table: &OrderTable) -> RepoResult<OrderTable> {
        let rows = sqlx::query("UPDATE order_table SET number_of_guests = ?, empty = ? WHERE id = ?")
            .bind(table.number_of_guests)
            .bind(table.empty)
            .bind(table.id)
            .execute(&mut *self.conn)
            .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Order table {} not found", table.id)));
        }
        Ok(table.clone())
    }
}
