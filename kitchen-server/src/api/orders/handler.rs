//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::request::{OrderCreate, OrderStatusChange};
use shared::response::OrderResponse;

use crate::api::assembler;
use crate::core::ServerState;
use crate::db::UnitOfWork;
use crate::services::order;
use crate::utils::AppResult;

/// GET /api/orders - 获取所有订单 (含明细)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderResponse>>> {
    let mut uow = state.db.begin().await?;
    let orders = order::list(&mut uow).await?;
    Ok(Json(assembler::all(orders, assembler::order)))
}

/// POST /api/orders - 下单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderResponse>)> {
    let mut uow = state.db.begin().await?;
    let order = order::create(&mut uow, payload).await?;
    uow.commit().await?;
    Ok((StatusCode::CREATED, Json(assembler::order(order))))
}

/// PUT /api/orders/{id}/order-status - 修改订单状态
pub async fn change_order_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderStatusChange>,
) -> AppResult<Json<OrderResponse>> {
    let mut uow = state.db.begin().await?;
    let order = order::change_order_status(&mut uow, id, payload).await?;
    uow.commit().await?;
    Ok(Json(assembler::order(order)))
}
