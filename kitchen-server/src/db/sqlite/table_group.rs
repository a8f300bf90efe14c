//! Table group storage

use crate::db::repository::{RepoError, RepoResult, TableGroupRepository};
use async_trait::async_trait;
use shared::models::{NewTableGroup, OrderTable, TableGroup};
use sqlx::SqliteConnection;

pub struct SqliteTableGroupRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> SqliteTableGroupRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    async fn find_members(&mut self, table_group_id: i64) -> RepoResult<Vec<OrderTable>> {
        let tables = sqlx::query_as::<_, OrderTable>(
            "SELECT t.id, m.table_group_id, t.number_of_guests, t.empty \
             FROM table_group_member m JOIN order_table t ON t.id = m.order_table_id \
             WHERE m.table_group_id = ? ORDER BY t.id",
        )
        .bind(table_group_id)
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(tables)
    }
}

#[async_trait]
impl<'c> TableGroupRepository for SqliteTableGroupRepository<'c> {
    async fn find_by_id(&mut self, id: i64) -> RepoResult<Option<TableGroup>> {
        let group = sqlx::query_as::<_, TableGroup>(
            "SELECT id, created_date FROM table_group WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        match group {
            Some(mut group) => {
                group.order_tables = self.find_members(group.id).await?;
                Ok(Some(group))
            }
            None => Ok(None),
        }
    }

    async fn create(&mut self, data: &NewTableGroup) -> RepoResult<TableGroup> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO table_group (created_date) VALUES (?) RETURNING id",
        )
        .bind(data.created_date)
        .fetch_one(&mut *self.conn)
        .await?;

        for order_table_id in &data.order_table_ids {
            sqlx::query("INSERT INTO table_group_member (table_group_id, order_table_id) VALUES (?, ?)")
                .bind(id)
                .bind(*order_table_id)
                .execute(&mut *self.conn)
                .await?;
        }

        let order_tables = self.find_members(id).await?;
        Ok(TableGroup {
            id,
            created_date: data.created_date,
            order_tables,
        })
    }

    async fn exists_by_order_table(&mut self, order_table_id: i64) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM table_group_member WHERE order_table_id = ?)",
        )
        .bind(order_table_id)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(exists != 0)
    }

    async fn remove_by_id(&mut self, id: i64) -> RepoResult<()> {
        sqlx::query("DELETE FROM table_group_member WHERE table_group_id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;
        let rows = sqlx::query("DELETE FROM table_group WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Table group {id} not found")));
        }
        Ok(())
    }
}
