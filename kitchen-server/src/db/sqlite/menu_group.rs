//! Menu group storage

use crate::db::repository::{MenuGroupRepository, RepoResult};
use async_trait::async_trait;
use shared::models::MenuGroup;
use sqlx::SqliteConnection;

pub struct SqliteMenuGroupRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> SqliteMenuGroupRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> MenuGroupRepository for SqliteMenuGroupRepository<'c> {
    async fn find_all(&mut self) -> RepoResult<Vec<MenuGroup>> {
        let groups = sqlx::query_as::<_, MenuGroup>("SELECT id, name FROM menu_group ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(groups)
    }

    async fn exists_by_id(&mut self, id: i64) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM menu_group WHERE id = ?)",
        )
        .bind(id)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(exists != 0)
    }

    async fn create(&mut self, name: &str) -> RepoResult<MenuGroup> {
        let id = sqlx::query_scalar::<_, i64>("INSERT INTO menu_group (name) VALUES (?) RETURNING id")
            .bind(name)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(MenuGroup {
            id,
            name: name.to_string(),
        })
    }
}
