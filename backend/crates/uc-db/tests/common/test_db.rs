use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with `userTable` in place
pub async fn create_test_pool() -> SqlitePool {
    uc_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Counts rows directly, bypassing the repository
pub async fn count_users(pool: &SqlitePool) -> i64 {
    // Use sqlx::query_scalar (not query!) to avoid offline mode issues in tests
    sqlx::query_scalar("SELECT COUNT(*) FROM userTable")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}

/// Inserts a row directly and returns its id
pub async fn insert_user_row(pool: &SqlitePool, first_name: &str, last_name: &str) -> i64 {
    sqlx::query("INSERT INTO userTable (firstName, lastName) VALUES (?, ?)")
        .bind(first_name)
        .bind(last_name)
        .execute(pool)
        .await
        .expect("Failed to insert user row")
        .last_insert_rowid()
}
