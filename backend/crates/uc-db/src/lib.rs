pub mod connection;
pub mod error;
pub mod repositories;
pub mod schema;

pub use connection::pool::{PoolSettings, connect, connect_in_memory};
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
pub use repositories::user_row::{columns, map_user_row};
pub use schema::ensure_schema;
