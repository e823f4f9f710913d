use crate::{
    AppState, create_user, create_user_form, delete_user, health, list_users, update_user,
    update_user_form,
};

use axum::{
    Router,
    routing::{get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // User pages
        .route("/users", get(list_users))
        .route("/user-create", get(create_user_form).post(create_user))
        .route("/user-delete/{id}", get(delete_user))
        .route("/user-update/{id}", get(update_user_form))
        .route("/user-update", post(update_user))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
}
