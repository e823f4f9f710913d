pub mod user_repository;
pub mod user_row;
