//! Menu API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::request::MenuCreate;
use shared::response::MenuResponse;

use crate::api::assembler;
use crate::core::ServerState;
use crate::db::UnitOfWork;
use crate::services::menu;
use crate::utils::AppResult;

/// GET /api/menus - 获取所有菜单 (含菜单单品)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuResponse>>> {
    let mut uow = state.db.begin().await?;
    let menus = menu::list(&mut uow).await?;
    Ok(Json(assembler::all(menus, assembler::menu)))
}

/// POST /api/menus - 创建菜单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuCreate>,
) -> AppResult<(StatusCode, Json<MenuResponse>)> {
    let mut uow = state.db.begin().await?;
    let menu = menu::create(&mut uow, payload).await?;
    uow.commit().await?;
    Ok((StatusCode::CREATED, Json(assembler::menu(menu))))
}
