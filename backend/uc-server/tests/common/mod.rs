#![allow(dead_code)]

//! Test infrastructure for uc-server page tests

use uc_server::AppState;

use axum::{
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    uc_db::connect_in_memory()
        .await
        .expect("Failed to create test database")
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState::new(create_test_pool().await)
}

/// Insert a user straight into the table and return its id
pub async fn create_test_user(pool: &SqlitePool, first_name: &str, last_name: &str) -> i64 {
    sqlx::query("INSERT INTO userTable (firstName, lastName) VALUES (?, ?)")
        .bind(first_name)
        .bind(last_name)
        .execute(pool)
        .await
        .expect("Failed to create test user")
        .last_insert_rowid()
}

/// Read all rows straight from the table as (id, firstName, lastName)
pub async fn all_user_rows(pool: &SqlitePool) -> Vec<(i64, String, String)> {
    sqlx::query_as("SELECT id, firstName, lastName FROM userTable ORDER BY id")
        .fetch_all(pool)
        .await
        .expect("Failed to read users")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
