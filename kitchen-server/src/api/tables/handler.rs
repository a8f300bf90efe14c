//! Order Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::request::{OrderTableCreate, OrderTableEmptyChange, OrderTableGuestsChange};
use shared::response::OrderTableResponse;

use crate::api::assembler;
use crate::core::ServerState;
use crate::db::UnitOfWork;
use crate::services::order_table;
use crate::utils::AppResult;

/// GET /api/tables - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderTableResponse>>> {
    let mut uow = state.db.begin().await?;
    let tables = order_table::list(&mut uow).await?;
    Ok(Json(assembler::all(tables, assembler::order_table)))
}

/// POST /api/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderTableCreate>,
) -> AppResult<(StatusCode, Json<OrderTableResponse>)> {
    let mut uow = state.db.begin().await?;
    let table = order_table::create(&mut uow, payload).await?;
    uow.commit().await?;
    Ok((StatusCode::CREATED, Json(assembler::order_table(table))))
}

/// PUT /api/tables/{id}/empty - 开台 / 清台
pub async fn change_empty(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderTableEmptyChange>,
) -> AppResult<Json<OrderTableResponse>> {
    let mut uow = state.db.begin().await?;
    let table = order_table::change_empty(&mut uow, id, payload).await?;
    uow.commit().await?;
    Ok(Json(assembler::order_table(table)))
}

/// PUT /api/tables/{id}/number-of-guests - 修改就餐人数
pub async fn change_number_of_guests(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderTableGuestsChange>,
) -> AppResult<Json<OrderTableResponse>> {
    let mut uow = state.db.begin().await?;
    let table = order_table::change_number_of_guests(&mut uow, id, payload).await?;
    uow.commit().await?;
    Ok(Json(assembler::order_table(table)))
}
