pub mod models;


pub use models::new_user::NewUser;
pub use models::user::User;
