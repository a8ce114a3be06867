//! Task repository
//!
//! Each operation is a single statement against the `tasks` table:
//! - create/update: RETURNING the full row (no re-select)
//! - get/update/delete: zero matched rows is `DbError::NotFound`
//! - get_all: an empty table is an empty vec, not an error

use async_trait::async_trait;

use super::DbError;
use crate::db::Database;
use crate::models::{NewTask, Task};

/// Storage capability for tasks.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a task; the store assigns `id`, `created_at` and `updated_at`.
    async fn create(&self, task: NewTask) -> Result<Task, DbError>;

    async fn get_all(&self) -> Result<Vec<Task>, DbError>;

    async fn get_by_id(&self, id: i64) -> Result<Task, DbError>;

    /// Replace the mutable fields and refresh `updated_at`.
    async fn update(&self, id: i64, task: NewTask) -> Result<Task, DbError>;

    async fn delete(&self, id: i64) -> Result<(), DbError>;
}

/// PostgreSQL-backed task repository
#[derive(Clone)]
pub struct PgTaskRepo {
    db: Database,
}

impl PgTaskRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepo {
    async fn create(&self, task: NewTask) -> Result<Task, DbError> {
        let task: Task = sqlx::query_as(
            r#"
            INSERT INTO tasks (title, description, due_date, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, title, description, due_date, created_at, updated_at
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .fetch_one(self.db.pool())
        .await?;

        Ok(task)
    }

    async fn get_all(&self) -> Result<Vec<Task>, DbError> {
        let tasks: Vec<Task> = sqlx::query_as(
            r#"
            SELECT id, title, description, due_date, created_at, updated_at
            FROM tasks
            ORDER BY id
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(tasks)
    }

    async fn get_by_id(&self, id: i64) -> Result<Task, DbError> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, due_date, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?
        .ok_or_else(|| DbError::task_not_found(id))
    }

    async fn update(&self, id: i64, task: NewTask) -> Result<Task, DbError> {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = $1, description = $2, due_date = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING id, title, description, due_date, created_at, updated_at
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?
        .ok_or_else(|| DbError::task_not_found(id))
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::task_not_found(id));
        }
        Ok(())
    }
}
