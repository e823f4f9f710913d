//! HTML pages for managing users.

pub mod error;
pub mod extractors;
pub mod users;
pub mod views;
