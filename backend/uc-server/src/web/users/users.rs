//! User page handlers
//!
//! Each handler extracts its parameters, makes one call on
//! [`uc_service::UserService`], and either renders a page or redirects back
//! to the list.

use crate::{AppState, ApiError, ApiResult, CreateUserForm, HtmlForm, UpdateUserForm};
use crate::web::views::{user_form, user_list};

use uc_core::{NewUser, User};

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};

const USERS_PATH: &str = "/users";

// =============================================================================
// Handlers
// =============================================================================

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let users = state.users.find_all().await?;

    Ok(Html(user_list::render(&users)))
}

/// GET /user-create
pub async fn create_user_form() -> Html<String> {
    Html(user_form::render_create(&NewUser::default()))
}

/// POST /user-create
pub async fn create_user(
    State(state): State<AppState>,
    HtmlForm(form): HtmlForm<CreateUserForm>,
) -> ApiResult<Redirect> {
    let user = NewUser::from(form);
    let saved = state.users.save_user(&user).await?;
    log::info!("Created user {}", saved.id);

    Ok(Redirect::to(USERS_PATH))
}

/// GET /user-delete/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Redirect> {
    let id = parse_user_id(&id)?;
    state.users.delete_by_id(id).await?;
    log::info!("Deleted user {}", id);

    Ok(Redirect::to(USERS_PATH))
}

/// GET /user-update/{id}
pub async fn update_user_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Html<String>> {
    let id = parse_user_id(&id)?;
    let user = state.users.get_one(id).await?;

    Ok(Html(user_form::render_update(&user)))
}

/// POST /user-update
pub async fn update_user(
    State(state): State<AppState>,
    HtmlForm(form): HtmlForm<UpdateUserForm>,
) -> ApiResult<Redirect> {
    let user = User::from(form);
    state.users.update_user(&user).await?;
    log::info!("Updated user {}", user.id);

    Ok(Redirect::to(USERS_PATH))
}

// =============================================================================
// Helpers
// =============================================================================

fn parse_user_id(raw: &str) -> ApiResult<i64> {
    raw.parse()
        .map_err(|e| ApiError::bad_request(format!("Invalid user id '{}': {}", raw, e)))
}
