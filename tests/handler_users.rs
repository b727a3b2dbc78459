mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use bank_users::api::routes::user_routes;
use serde_json::json;
use sqlx::PgPool;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = user_routes().with_state(state);
    TestServer::new(app).unwrap()
}

fn ana() -> serde_json::Value {
    json!({
        "name": "Ana",
        "accountNumber": "111",
        "cardNumber": "222",
        "features": [{ "icon": "star", "description": "VIP" }]
    })
}

// ─── CREATE ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_user_scenario(pool: PgPool) {
    let server = make_server(pool);

    let response = server.post("/users").json(&ana()).await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let id = body["id"].as_i64().unwrap();
    assert_eq!(response.header("location"), format!("/users/{id}").as_str());
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["accountNumber"], "111");
    assert_eq!(body["cardNumber"], "222");
    assert_eq!(body["features"][0]["icon"], "star");
    assert_eq!(body["features"][0]["description"], "VIP");
    assert!(body["features"][0]["id"].is_i64());
}

#[sqlx::test]
async fn test_create_then_get_round_trip(pool: PgPool) {
    let server = make_server(pool);

    let created = server.post("/users").json(&ana()).await;
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server.get(&format!("/users/{id}")).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        created.json::<serde_json::Value>()
    );
}

#[sqlx::test]
async fn test_create_duplicate_card_number(pool: PgPool) {
    let server = make_server(pool);

    server
        .post("/users")
        .json(&ana())
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/users")
        .json(&json!({ "name": "Bia", "accountNumber": "999", "cardNumber": "222" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_create_invalid_body(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/users")
        .json(&json!({ "name": "Ana" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test]
async fn test_create_with_nul_character_is_unprocessable(pool: PgPool) {
    let server = make_server(pool.clone());

    let response = server
        .post("/users")
        .json(&json!({ "name": "An\u{0}a", "accountNumber": "111", "cardNumber": "222" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 0);
}

// ─── READ ─────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_users(pool: PgPool) {
    common::create_test_user(&pool, "Ana", "111", "222").await;
    common::create_test_user(&pool, "Bruno", "333", "444").await;
    let server = make_server(pool);

    let response = server.get("/users").await;

    response.assert_status_ok();
    let items = response.json::<Vec<serde_json::Value>>();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Ana");
    assert_eq!(items[1]["name"], "Bruno");
}

#[sqlx::test]
async fn test_get_user_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/users/999999").await;

    response.assert_status_not_found();
}

// ─── UPDATE ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_full_replace(pool: PgPool) {
    let id = common::create_test_user(&pool, "Ana", "111", "222").await;
    let server = make_server(pool);

    let response = server
        .put(&format!("/users/{id}"))
        .json(&json!({
            "name": "Ana Maria",
            "accountNumber": "111",
            "cardNumber": "777",
            "news": [{ "icon": "bell", "description": "New card" }]
        }))
        .await;

    response.assert_status_ok();

    let fetched = server.get(&format!("/users/{id}")).await;
    let body = fetched.json::<serde_json::Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Ana Maria");
    assert_eq!(body["cardNumber"], "777");
    assert_eq!(body["features"], json!([]));
    assert_eq!(body["news"][0]["description"], "New card");
}

#[sqlx::test]
async fn test_update_taking_other_users_number(pool: PgPool) {
    common::create_test_user(&pool, "Ana", "111", "222").await;
    let id = common::create_test_user(&pool, "Bruno", "333", "444").await;
    let server = make_server(pool);

    let response = server
        .put(&format!("/users/{id}"))
        .json(&json!({ "name": "Bruno", "accountNumber": "111", "cardNumber": "444" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_update_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.put("/users/999999").json(&ana()).await;

    response.assert_status_not_found();
}

// ─── DELETE ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_user(pool: PgPool) {
    let id = common::create_test_user(&pool, "Ana", "111", "222").await;
    let server = make_server(pool.clone());

    let response = server.delete(&format!("/users/{id}")).await;

    response.assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/users/{id}"))
        .await
        .assert_status_not_found();
    assert_eq!(common::count_rows(&pool, "features", id).await, 0);
}

#[sqlx::test]
async fn test_delete_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.delete("/users/999999").await;

    response.assert_status_not_found();
}
