//! Business layer for users.
//!
//! [`UserService`] is the only thing the web layer talks to. It forwards each
//! call to [`uc_db::UserRepository`] unchanged, errors included.

pub mod user_service;


pub use uc_core::{NewUser, User};
pub use uc_db::{DbError as ServiceError, Result};
pub use user_service::UserService;
