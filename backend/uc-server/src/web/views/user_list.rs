use super::{escape_html, page};

use uc_core::User;

use std::fmt::Write;

pub fn render(users: &[User]) -> String {
    let mut rows = String::new();

    if users.is_empty() {
        rows.push_str("<tr><td colspan=\"4\">No users</td></tr>\n");
    }

    for user in users {
        // Writing into a String cannot fail
        let _ = writeln!(
            rows,
            "<tr><td>{id}</td><td>{first}</td><td>{last}</td>\
             <td><a href=\"/user-update/{id}\">Edit</a> \
             <a href=\"/user-delete/{id}\">Delete</a></td></tr>",
            id = user.id,
            first = escape_html(&user.first_name),
            last = escape_html(&user.last_name),
        );
    }

    let body = format!(
        "<h1>Users</h1>\n\
         <p><a href=\"/user-create\">Create user</a></p>\n\
         <table>\n\
         <thead><tr><th>ID</th><th>First name</th><th>Last name</th><th></th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n\
         </table>"
    );

    page("Users", &body)
}
