//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`products`] - 单品接口
//! - [`menu_groups`] - 菜单分组接口
//! - [`menus`] - 菜单接口
//! - [`tables`] - 桌台接口
//! - [`orders`] - 订单接口
//! - [`table_groups`] - 团体桌接口
//!
//! Every mutating handler opens one unit of work, calls one service function and
//! commits only when it succeeds.

pub mod assembler;

pub mod health;

pub mod menu_groups;
pub mod menus;
pub mod orders;
pub mod products;
pub mod table_groups;
pub mod tables;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::AppResult;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(menu_groups::router())
        .merge(menus::router())
        .merge(tables::router())
        .merge(orders::router())
        .merge(table_groups::router())
}

/// Build the application with middleware and state
///
/// Used by both the HTTP server and in-process tests
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
}
