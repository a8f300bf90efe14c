//! HTTP API tests
//!
//! Drive the full router in-process with `oneshot` against an in-memory database.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use kitchen_server::api::build_app;
use kitchen_server::{Config, DbService, ServerState};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> Router {
    let db = DbService::in_memory().await.unwrap();
    let config = Config::from_lookup(|_| None);
    build_app(ServerState::new(config, db))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "PUT", uri, Some(body)).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

fn id(v: &Value) -> i64 {
    v["id"].as_i64().unwrap()
}

/// Menu group + product (16000) + menu of two products priced 30000
async fn create_menu(app: &Router) -> i64 {
    let (_, group) = post(app, "/api/menu-groups", json!({ "name": "Chicken" })).await;
    let (_, product) = post(app, "/api/products", json!({ "name": "Fried chicken", "price": 16000 })).await;
    let (status, menu) = post(
        app,
        "/api/menus",
        json!({
            "name": "Two chickens",
            "price": 30000,
            "menu_group_id": id(&group),
            "menu_products": [{ "product_id": id(&product), "quantity": 2 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id(&menu)
}

async fn create_table(app: &Router, guests: i32, empty: bool) -> i64 {
    let (status, table) = post(app, "/api/tables", json!({ "number_of_guests": guests, "empty": empty })).await;
    assert_eq!(status, StatusCode::CREATED);
    id(&table)
}

#[tokio::test]
async fn test_health() {
    let app = app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_product_create_and_list() {
    let app = app().await;

    let (status, product) = post(&app, "/api/products", json!({ "name": "Fried chicken", "price": "16000.50" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(product["price"], 16000.5);

    let (status, list) = get(&app, "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_product_without_price_is_bad_request() {
    let app = app().await;

    let (status, body) = post(&app, "/api/products", json!({ "name": "Fried chicken", "price": null })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6002);

    let (status, _) = post(&app, "/api/products", json!({ "name": "Fried chicken", "price": -1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = get(&app, "/api/products").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_menu_products_total_out_of_range_is_bad_request() {
    let app = app().await;
    let (_, group) = post(&app, "/api/menu-groups", json!({ "name": "Chicken" })).await;
    let (status, product) = post(
        &app,
        "/api/products",
        json!({ "name": "Gold chicken", "price": "79228162514264337593543950335" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(
        &app,
        "/api/menus",
        json!({
            "name": "Two gold chickens",
            "price": 1,
            "menu_group_id": id(&group),
            "menu_products": [{ "product_id": id(&product), "quantity": 2 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
    assert!(body["details"]["product_ids"].is_array());
}

#[tokio::test]
async fn test_menu_price_above_products_is_rejected() {
    let app = app().await;
    let (_, group) = post(&app, "/api/menu-groups", json!({ "name": "Chicken" })).await;
    let (_, product) = post(&app, "/api/products", json!({ "name": "Fried chicken", "price": 16000 })).await;

    let (status, body) = post(
        &app,
        "/api/menus",
        json!({
            "name": "Overpriced",
            "price": 40000,
            "menu_group_id": id(&group),
            "menu_products": [{ "product_id": id(&product), "quantity": 2 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6404);

    let (_, menus) = get(&app, "/api/menus").await;
    assert!(menus.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_order_lifecycle() {
    let app = app().await;
    let menu_id = create_menu(&app).await;
    let table_id = create_table(&app, 2, false).await;

    // Scenario A
    let (status, order) = post(
        &app,
        "/api/orders",
        json!({ "order_table_id": table_id, "order_line_items": [{ "menu_id": menu_id, "quantity": 2 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["order_status"], "COOKING");
    assert_eq!(order["order_line_items"].as_array().unwrap().len(), 1);
    let order_id = id(&order);

    let uri = format!("/api/orders/{order_id}/order-status");
    let (status, order) = put(&app, &uri, json!({ "order_status": "MEAL" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["order_status"], "MEAL");
    assert_eq!(order["order_line_items"].as_array().unwrap().len(), 1);

    let (status, _) = put(&app, &uri, json!({ "order_status": "COMPLETION" })).await;
    assert_eq!(status, StatusCode::OK);

    // Scenario D
    let (status, body) = put(&app, &uri, json!({ "order_status": "COOKING" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("already completed"));

    let (_, orders) = get(&app, "/api/orders").await;
    assert_eq!(orders[0]["order_status"], "COMPLETION");
}

#[tokio::test]
async fn test_order_with_duplicated_menu_is_rejected() {
    let app = app().await;
    let menu_id = create_menu(&app).await;
    let table_id = create_table(&app, 2, false).await;

    // Scenario B
    let (status, body) = post(
        &app,
        "/api/orders",
        json!({
            "order_table_id": table_id,
            "order_line_items": [{ "menu_id": menu_id, "quantity": 1 }, { "menu_id": menu_id, "quantity": 2 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("duplicated menu"));

    let (_, orders) = get(&app, "/api/orders").await;
    assert!(orders.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_order_on_unknown_or_empty_table() {
    let app = app().await;
    let menu_id = create_menu(&app).await;
    let items = json!([{ "menu_id": menu_id, "quantity": 1 }]);

    let (status, _) = post(&app, "/api/orders", json!({ "order_table_id": 404, "order_line_items": items })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let empty = create_table(&app, 0, true).await;
    let (status, _) = post(&app, "/api/orders", json!({ "order_table_id": empty, "order_line_items": items })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_order_status_change_is_not_found() {
    let app = app().await;
    let (status, body) = put(&app, "/api/orders/404/order-status", json!({ "order_status": "MEAL" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn test_table_changes() {
    let app = app().await;
    let table_id = create_table(&app, 0, true).await;

    let (status, _) = put(&app, &format!("/api/tables/{table_id}/number-of-guests"), json!({ "number_of_guests": 4 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, table) = put(&app, &format!("/api/tables/{table_id}/empty"), json!({ "empty": false })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(table["empty"], false);

    let (status, table) = put(&app, &format!("/api/tables/{table_id}/number-of-guests"), json!({ "number_of_guests": 4 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(table["number_of_guests"], 4);

    let (status, _) = put(&app, "/api/tables/404/empty", json!({ "empty": true })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_table_group_needs_two_tables() {
    let app = app().await;
    let table_id = create_table(&app, 0, true).await;

    // Scenario C
    let (status, body) = post(&app, "/api/table-groups", json!({ "order_tables": [{ "id": table_id }] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("fewer than 2 tables"));
}

#[tokio::test]
async fn test_table_group_lifecycle() {
    let app = app().await;
    let menu_id = create_menu(&app).await;
    let a = create_table(&app, 0, true).await;
    let b = create_table(&app, 0, true).await;

    let (status, group) = post(&app, "/api/table-groups", json!({ "order_tables": [{ "id": a }, { "id": b }] })).await;
    assert_eq!(status, StatusCode::CREATED);
    let group_id = id(&group);
    let members = group["order_tables"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert!(members.iter().all(|t| t["table_group_id"] == group_id && t["empty"] == false));

    // a grouped table cannot join another group
    let c = create_table(&app, 0, true).await;
    let (status, _) = post(&app, "/api/table-groups", json!({ "order_tables": [{ "id": a }, { "id": c }] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Scenario E
    let (_, order) = post(
        &app,
        "/api/orders",
        json!({ "order_table_id": b, "order_line_items": [{ "menu_id": menu_id, "quantity": 1 }] }),
    )
    .await;
    let order_id = id(&order);
    put(&app, &format!("/api/orders/{order_id}/order-status"), json!({ "order_status": "MEAL" })).await;

    let uri = format!("/api/table-groups/{group_id}");
    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("incomplete table"));

    put(&app, &format!("/api/orders/{order_id}/order-status"), json!({ "order_status": "COMPLETION" })).await;
    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, tables) = get(&app, "/api/tables").await;
    assert!(tables.as_array().unwrap().iter().all(|t| t["table_group_id"].is_null()));

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_file_database_persists_committed_work() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("kitchen.db").display());

    {
        let db = DbService::new(&url, 2).await.unwrap();
        let app = build_app(ServerState::new(Config::from_lookup(|_| None), db));
        create_table(&app, 0, true).await;
    }

    let db = DbService::new(&url, 2).await.unwrap();
    let app = build_app(ServerState::new(Config::from_lookup(|_| None), db));
    let (_, tables) = get(&app, "/api/tables").await;
    assert_eq!(tables.as_array().unwrap().len(), 1);
}
