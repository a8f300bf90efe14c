//! Product API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::request::ProductCreate;
use shared::response::ProductResponse;

use crate::api::assembler;
use crate::core::ServerState;
use crate::db::UnitOfWork;
use crate::services::product;
use crate::utils::AppResult;

/// GET /api/products - 获取所有单品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ProductResponse>>> {
    let mut uow = state.db.begin().await?;
    let products = product::list(&mut uow).await?;
    Ok(Json(assembler::all(products, assembler::product)))
}

/// POST /api/products - 创建单品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let mut uow = state.db.begin().await?;
    let product = product::create(&mut uow, payload).await?;
    uow.commit().await?;
    Ok((StatusCode::CREATED, Json(assembler::product(product))))
}
