use crate::{DbError, Result, map_user_row};

use sqlx::SqlitePool;
use uc_core::{NewUser, User};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
              SELECT id, firstName, lastName
              FROM userTable
              ORDER BY id ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_user_row).collect()
    }

    /// Fails with [`DbError::UserNotFound`] when no row has this id.
    pub async fn find_by_id(&self, id: i64) -> Result<User> {
        let row = sqlx::query(
            r#"
              SELECT id, firstName, lastName
              FROM userTable
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => map_user_row(&row),
            None => Err(DbError::user_not_found(id)),
        }
    }

    /// Insert a new row and return it with the id SQLite assigned.
    pub async fn save(&self, user: &NewUser) -> Result<User> {
        let result = sqlx::query(
            r#"
              INSERT INTO userTable (firstName, lastName)
              VALUES (?, ?)
              "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .execute(&self.pool)
        .await?;

        Ok(user.clone().into_user(result.last_insert_rowid()))
    }

    /// Deleting an id that does not exist is not an error.
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query(
            r#"
              DELETE FROM userTable
              WHERE id = ?
              "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Rewrites both names for `user.id`. Touches nothing if the id is absent.
    pub async fn update(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE userTable
              SET firstName = ?, lastName = ?
              WHERE id = ?
              "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
