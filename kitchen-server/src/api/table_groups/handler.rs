//! Table Group API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::request::TableGroupCreate;
use shared::response::TableGroupResponse;

use crate::api::assembler;
use crate::core::ServerState;
use crate::db::UnitOfWork;
use crate::services::table_group;
use crate::utils::AppResult;

/// POST /api/table-groups - 并台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TableGroupCreate>,
) -> AppResult<(StatusCode, Json<TableGroupResponse>)> {
    let mut uow = state.db.begin().await?;
    let group = table_group::create(&mut uow, payload).await?;
    uow.commit().await?;
    Ok((StatusCode::CREATED, Json(assembler::table_group(group))))
}

/// DELETE /api/table-groups/{id} - 拆台
pub async fn ungroup(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let mut uow = state.db.begin().await?;
    table_group::ungroup(&mut uow, id).await?;
    uow.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
