use uc_core::User;

use serde::Deserialize;

/// Body of `POST /user-update`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserForm {
    pub id: i64,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,
}

impl From<UpdateUserForm> for User {
    fn from(form: UpdateUserForm) -> Self {
        User {
            id: form.id,
            first_name: form.first_name,
            last_name: form.last_name,
        }
    }
}
