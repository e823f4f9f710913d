use crate::User;

use googletest::prelude::*;

#[test]
fn test_user_new() {
    let user = User::new(7, "Ann", "Lee");

    assert_that!(user.id, eq(7));
    assert_that!(user.first_name, eq("Ann"));
    assert_that!(user.last_name, eq("Lee"));
}

#[test]
fn test_user_serializes_with_column_names() {
    let json = serde_json::to_value(User::new(3, "John", "Doe")).unwrap();

    assert_that!(json["id"], eq(&serde_json::json!(3)));
    assert_that!(json["firstName"], eq(&serde_json::json!("John")));
    assert_that!(json["lastName"], eq(&serde_json::json!("Doe")));
}
