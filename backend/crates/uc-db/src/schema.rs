use crate::Result;

use sqlx::SqlitePool;

const CREATE_USER_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS userTable (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        firstName TEXT,
        lastName TEXT
    )
"#;

/// Create `userTable` if it is missing. Safe to call on every startup.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_USER_TABLE).execute(pool).await?;

    Ok(())
}
