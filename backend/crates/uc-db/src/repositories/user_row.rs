//! Column names read from `userTable` rows and the row-to-[`User`] mapping.
//!
//! Every read of a user row goes through [`map_user_row`], which looks
//! columns up by name, so the order of columns in a `SELECT` does not matter.

use crate::Result;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uc_core::User;

pub mod columns {
    pub const ID: &str = "id";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
}

pub fn map_user_row(row: &SqliteRow) -> Result<User> {
    // firstName/lastName are nullable TEXT; NULL reads back as an empty string
    let first_name: Option<String> = row.try_get(columns::FIRST_NAME)?;
    let last_name: Option<String> = row.try_get(columns::LAST_NAME)?;

    Ok(User {
        id: row.try_get(columns::ID)?,
        first_name: first_name.unwrap_or_default(),
        last_name: last_name.unwrap_or_default(),
    })
}
