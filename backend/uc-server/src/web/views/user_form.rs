use super::{escape_html, page};

use uc_core::{NewUser, User};

/// Empty form posting to `/user-create`
pub fn render_create(user: &NewUser) -> String {
    let fields = name_fields(&user.first_name, &user.last_name);
    let body = format!(
        "<h1>Create user</h1>\n\
         <form action=\"/user-create\" method=\"post\">\n\
         {fields}\
         <button type=\"submit\">Create</button>\n\
         </form>\n\
         <p><a href=\"/users\">Back to users</a></p>"
    );

    page("Create user", &body)
}

/// Pre-filled form posting to `/user-update`, carrying the id in a hidden field
pub fn render_update(user: &User) -> String {
    let fields = name_fields(&user.first_name, &user.last_name);
    let body = format!(
        "<h1>Update user</h1>\n\
         <form action=\"/user-update\" method=\"post\">\n\
         <input type=\"hidden\" id=\"id\" name=\"id\" value=\"{id}\">\n\
         {fields}\
         <button type=\"submit\">Update</button>\n\
         </form>\n\
         <p><a href=\"/users\">Back to users</a></p>",
        id = user.id,
    );

    page("Update user", &body)
}

fn name_fields(first_name: &str, last_name: &str) -> String {
    format!(
        "<label for=\"firstName\">First name</label>\n\
         <input type=\"text\" id=\"firstName\" name=\"firstName\" value=\"{first}\">\n\
         <label for=\"lastName\">Last name</label>\n\
         <input type=\"text\" id=\"lastName\" name=\"lastName\" value=\"{last}\">\n",
        first = escape_html(first_name),
        last = escape_html(last_name),
    )
}
