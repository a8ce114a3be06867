//! In-memory task repository
//!
//! Same contract as `PgTaskRepo`, without a database. Ids start at 1 and
//! are never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{DbError, TaskRepository};
use crate::models::{NewTask, Task};

#[derive(Default)]
struct Store {
    last_id: i64,
    tasks: BTreeMap<i64, Task>,
}

/// Task repository backed by a map
#[derive(Default)]
pub struct InMemoryTaskRepo {
    store: RwLock<Store>,
}

impl InMemoryTaskRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepo {
    async fn create(&self, task: NewTask) -> Result<Task, DbError> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let now = Utc::now();
        let task = Task {
            id: store.last_id,
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            created_at: now,
            updated_at: now,
        };
        store.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn get_all(&self) -> Result<Vec<Task>, DbError> {
        Ok(self.store.read().await.tasks.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Task, DbError> {
        self.store
            .read()
            .await
            .tasks
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::task_not_found(id))
    }

    async fn update(&self, id: i64, task: NewTask) -> Result<Task, DbError> {
        let mut store = self.store.write().await;
        let existing = store
            .tasks
            .get_mut(&id)
            .ok_or_else(|| DbError::task_not_found(id))?;

        existing.title = task.title;
        existing.description = task.description;
        existing.due_date = task.due_date;
        // Never move backwards if the wall clock does
        existing.updated_at = Utc::now().max(existing.updated_at);
        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        self.store
            .write()
            .await
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::task_not_found(id))
    }
}
