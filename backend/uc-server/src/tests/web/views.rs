use crate::web::views::{escape_html, user_form, user_list};

use uc_core::{NewUser, User};

use googletest::prelude::*;

#[test]
fn test_escape_html_leaves_plain_text_borrowed() {
    let escaped = escape_html("Ann Lee");

    assert!(matches!(escaped, std::borrow::Cow::Borrowed("Ann Lee")));
}

#[test]
fn test_escape_html_escapes_markup() {
    assert_that!(
        escape_html(r#"<a href="x">O'Brien & co</a>"#).as_ref(),
        eq("&lt;a href=&quot;x&quot;&gt;O&#39;Brien &amp; co&lt;/a&gt;")
    );
}

#[test]
fn test_user_list_renders_each_user_with_links() {
    let users = vec![User::new(1, "Ann", "Lee"), User::new(2, "John", "Doe")];

    let html = user_list::render(&users);

    assert_that!(html, contains_substring("<td>Ann</td><td>Lee</td>"));
    assert_that!(html, contains_substring("<td>John</td><td>Doe</td>"));
    assert_that!(html, contains_substring("href=\"/user-update/2\""));
    assert_that!(html, contains_substring("href=\"/user-delete/1\""));
    assert_that!(html, contains_substring("href=\"/user-create\""));
}

#[test]
fn test_user_list_empty_shows_placeholder_row() {
    let html = user_list::render(&[]);

    assert_that!(html, contains_substring("No users"));
}

#[test]
fn test_user_list_escapes_names() {
    let html = user_list::render(&[User::new(1, "<b>Ann</b>", "Lee")]);

    assert_that!(html, contains_substring("&lt;b&gt;Ann&lt;/b&gt;"));
    assert_that!(html, not(contains_substring("<b>Ann</b>")));
}

#[test]
fn test_create_form_posts_to_create_route_with_empty_fields() {
    let html = user_form::render_create(&NewUser::default());

    assert_that!(html, contains_substring("action=\"/user-create\""));
    assert_that!(html, contains_substring("name=\"firstName\" value=\"\""));
    assert_that!(html, contains_substring("name=\"lastName\" value=\"\""));
    assert_that!(html, not(contains_substring("name=\"id\"")));
}

#[test]
fn test_update_form_is_prefilled_and_carries_id() {
    let html = user_form::render_update(&User::new(12, "Ann", "O\"Lee"));

    assert_that!(html, contains_substring("action=\"/user-update\""));
    assert_that!(html, contains_substring("name=\"id\" value=\"12\""));
    assert_that!(html, contains_substring("name=\"firstName\" value=\"Ann\""));
    assert_that!(html, contains_substring("name=\"lastName\" value=\"O&quot;Lee\""));
}
