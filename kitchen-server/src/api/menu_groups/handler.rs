//! Menu Group API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::request::MenuGroupCreate;
use shared::response::MenuGroupResponse;

use crate::api::assembler;
use crate::core::ServerState;
use crate::db::UnitOfWork;
use crate::services::menu_group;
use crate::utils::AppResult;

/// GET /api/menu-groups - 获取所有菜单分组
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuGroupResponse>>> {
    let mut uow = state.db.begin().await?;
    let groups = menu_group::list(&mut uow).await?;
    Ok(Json(assembler::all(groups, assembler::menu_group)))
}

/// POST /api/menu-groups - 创建菜单分组
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuGroupCreate>,
) -> AppResult<(StatusCode, Json<MenuGroupResponse>)> {
    let mut uow = state.db.begin().await?;
    let group = menu_group::create(&mut uow, payload).await?;
    uow.commit().await?;
    Ok((StatusCode::CREATED, Json(assembler::menu_group(group))))
}
