use crate::ApiError;

use uc_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_text(error: ApiError) -> (StatusCode, String) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_html_page() {
    let error = ApiError::NotFound {
        message: "User 9 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, body) = body_text(error).await;

    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_that!(body, contains_substring("<h1>404 Not Found</h1>"));
    assert_that!(body, contains_substring("User 9 not found"));
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let (status, _) = body_text(ApiError::bad_request("nope")).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn test_error_message_is_escaped() {
    let (_, body) = body_text(ApiError::bad_request("Invalid user id '<script>'")).await;

    assert_that!(body, contains_substring("&lt;script&gt;"));
    assert_that!(body, not(contains_substring("<script>")));
}

#[test]
fn test_user_not_found_maps_to_not_found() {
    let error = ApiError::from(DbError::user_not_found(5));

    assert_that!(error.status(), eq(StatusCode::NOT_FOUND));
    assert!(matches!(error, ApiError::NotFound { ref message, .. } if message == "User 5 not found"));
}

#[test]
fn test_sqlx_row_not_found_maps_to_internal() {
    let error = ApiError::from(DbError::from(sqlx::Error::RowNotFound));

    assert_that!(error.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn test_other_database_errors_map_to_internal_without_details() {
    let error = ApiError::from(DbError::from(sqlx::Error::PoolTimedOut));

    let (status, body) = body_text(error).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(body, contains_substring("Database operation failed"));
    assert_that!(body, not(contains_substring("pool")));
}
