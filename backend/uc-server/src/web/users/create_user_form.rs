use uc_core::NewUser;

use serde::Deserialize;

/// Body of `POST /user-create`. A submitted `id` is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserForm {
    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,
}

impl From<CreateUserForm> for NewUser {
    fn from(form: CreateUserForm) -> Self {
        NewUser {
            first_name: form.first_name,
            last_name: form.last_name,
        }
    }
}
