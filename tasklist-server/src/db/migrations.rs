//! Schema bootstrap for the tasks table

use sqlx::PgPool;

use super::repos::DbError;

/// Create the `tasks` table if it does not exist yet.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running task migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            due_date TIMESTAMPTZ NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Task migrations complete");
    Ok(())
}
