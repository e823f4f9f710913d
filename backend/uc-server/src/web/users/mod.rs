pub mod create_user_form;
pub mod update_user_form;
#[allow(clippy::module_inception)]
pub mod users;
