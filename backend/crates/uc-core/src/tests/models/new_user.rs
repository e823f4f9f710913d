use crate::{NewUser, User};

use googletest::prelude::*;

#[test]
fn test_new_user_into_user_keeps_fields() {
    let user = NewUser::new("Ann", "Lee").into_user(42);

    assert_that!(user, eq(&User::new(42, "Ann", "Lee")));
}

#[test]
fn test_new_user_default_is_empty() {
    let user = NewUser::default();

    assert_that!(user.first_name, eq(""));
    assert_that!(user.last_name, eq(""));
}

#[test]
fn test_new_user_deserializes_camel_case_fields() {
    let user: NewUser =
        serde_json::from_str(r#"{"firstName":"John","lastName":"Doe"}"#).unwrap();

    assert_that!(user, eq(&NewUser::new("John", "Doe")));
}
