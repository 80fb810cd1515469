use async_trait::async_trait;
use sqlx::Row;
use waitlist_types::WaitlistEntry;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
};

fn row_to_entry(row: sqlx::postgres::PgRow) -> WaitlistEntry {
    WaitlistEntry {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert(&self, name: &str, email: &str) -> AppResult<WaitlistEntry> {
        // The unique index on email decides races between concurrent signups.
        let row = sqlx::query(
            r#"
            INSERT INTO waitlist (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .fetch_one(self.pool())
        .await
        .map_err(AppError::from)?;

        Ok(row_to_entry(row))
    }
}
