#![allow(dead_code)]

use bank_users::domain::entities::{NewFeature, NewNews, NewUser};
use bank_users::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn new_user(name: &str, account_number: &str, card_number: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        account_number: account_number.to_string(),
        card_number: card_number.to_string(),
        features: vec![NewFeature {
            icon: "star".to_string(),
            description: "VIP".to_string(),
        }],
        news: vec![NewNews {
            icon: "bell".to_string(),
            description: "Welcome".to_string(),
        }],
    }
}

pub async fn create_test_user(pool: &PgPool, name: &str, account: &str, card: &str) -> i64 {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (name, account_number, card_number) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(account)
    .bind(card)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO features (user_id, icon, description) VALUES ($1, 'star', 'VIP')")
        .bind(id)
        .execute(pool)
        .await
        .unwrap();

    id
}

pub async fn count_rows(pool: &PgPool, table: &str, user_id: i64) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table} WHERE user_id = $1"))
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}
