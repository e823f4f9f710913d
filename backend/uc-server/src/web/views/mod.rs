pub mod escape;
pub mod layout;
pub mod user_form;
pub mod user_list;

pub use escape::escape_html;
pub use layout::page;
