use uc_core::{NewUser, User};

/// Creates a NewUser with sensible defaults
pub fn create_test_new_user() -> NewUser {
    NewUser::new("Ann", "Lee")
}

/// Creates a NewUser with the given names
pub fn create_new_user(first_name: &str, last_name: &str) -> NewUser {
    NewUser::new(first_name, last_name)
}

/// Creates a User for an id that was never inserted
pub fn create_detached_user(id: i64) -> User {
    User::new(id, "Ghost", "User")
}
