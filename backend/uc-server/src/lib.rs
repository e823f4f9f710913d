pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod web;

#[cfg(test)]
mod tests;

pub use app_state::AppState;
pub use routes::build_router;
pub use web::{
    error::{ApiError, Result as ApiResult},
    extractors::html_form::HtmlForm,
    users::{
        create_user_form::CreateUserForm,
        update_user_form::UpdateUserForm,
        users::{
            create_user, create_user_form, delete_user, list_users, update_user, update_user_form,
        },
    },
};
