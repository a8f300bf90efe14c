//! Menu Group Service

use shared::models::MenuGroup;
use shared::request::MenuGroupCreate;

use crate::db::repository::{MenuGroupRepository, UnitOfWork};
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

pub async fn create<U: UnitOfWork>(uow: &mut U, req: MenuGroupCreate) -> AppResult<MenuGroup> {
    validate_required_text(&req.name, "name", MAX_NAME_LEN)?;
    let group = uow.menu_groups().create(req.name.trim()).await?;
    tracing::info!(menu_group_id = group.id, name = %group.name, "Menu group created");
    Ok(group)
}

pub async fn list<U: UnitOfWork>(uow: &mut U) -> AppResult<Vec<MenuGroup>> {
    Ok(uow.menu_groups().find_all().await?)
}
