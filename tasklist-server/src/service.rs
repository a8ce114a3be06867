//! Task service - the seam between HTTP handlers and storage
//!
//! `TaskManager` forwards every call to its repository unchanged. Business
//! rules that do not belong in SQL or in HTTP decoding go here.

use async_trait::async_trait;

use crate::db::repos::{DbError, TaskRepository};
use crate::models::{NewTask, Task};

/// Task operations exposed to the HTTP layer
#[async_trait]
pub trait TaskService: Send + Sync {
    async fn create_task(&self, task: NewTask) -> Result<Task, DbError>;

    async fn list_tasks(&self) -> Result<Vec<Task>, DbError>;

    async fn get_task(&self, id: i64) -> Result<Task, DbError>;

    async fn update_task(&self, id: i64, task: NewTask) -> Result<Task, DbError>;

    async fn delete_task(&self, id: i64) -> Result<(), DbError>;
}

/// Default service over any task repository
pub struct TaskManager<R> {
    repo: R,
}

impl<R: TaskRepository> TaskManager<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: TaskRepository> TaskService for TaskManager<R> {
    async fn create_task(&self, task: NewTask) -> Result<Task, DbError> {
        self.repo.create(task).await
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, DbError> {
        self.repo.get_all().await
    }

    async fn get_task(&self, id: i64) -> Result<Task, DbError> {
        self.repo.get_by_id(id).await
    }

    async fn update_task(&self, id: i64, task: NewTask) -> Result<Task, DbError> {
        self.repo.update(id, task).await
    }

    async fn delete_task(&self, id: i64) -> Result<(), DbError> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::InMemoryTaskRepo;
    use chrono::{TimeZone, Utc};

    fn new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: String::new(),
            due_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    /// Repository that fails every call with a storage error
    struct BrokenRepo;

    #[async_trait]
    impl TaskRepository for BrokenRepo {
        async fn create(&self, _: NewTask) -> Result<Task, DbError> {
            Err(sqlx::Error::PoolClosed.into())
        }
        async fn get_all(&self) -> Result<Vec<Task>, DbError> {
            Err(sqlx::Error::PoolClosed.into())
        }
        async fn get_by_id(&self, _: i64) -> Result<Task, DbError> {
            Err(sqlx::Error::PoolClosed.into())
        }
        async fn update(&self, _: i64, _: NewTask) -> Result<Task, DbError> {
            Err(sqlx::Error::PoolClosed.into())
        }
        async fn delete(&self, _: i64) -> Result<(), DbError> {
            Err(sqlx::Error::PoolClosed.into())
        }
    }

    #[tokio::test]
    async fn delegates_to_repository() {
        let service = TaskManager::new(InMemoryTaskRepo::new());

        let created = service.create_task(new_task("a")).await.unwrap();
        assert_eq!(service.get_task(created.id).await.unwrap(), created);
        assert_eq!(service.list_tasks().await.unwrap(), vec![created.clone()]);

        let updated = service
            .update_task(created.id, new_task("b"))
            .await
            .unwrap();
        assert_eq!(updated.title, "b");

        service.delete_task(created.id).await.unwrap();
        assert!(service.list_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn errors_pass_through_unchanged() {
        let service = TaskManager::new(InMemoryTaskRepo::new());
        assert!(matches!(
            service.get_task(999_999).await,
            Err(DbError::NotFound { .. })
        ));

        let broken = TaskManager::new(BrokenRepo);
        assert!(matches!(
            broken.list_tasks().await,
            Err(DbError::Sqlx(sqlx::Error::PoolClosed))
        ));
        assert!(matches!(
            broken.delete_task(1).await,
            Err(DbError::Sqlx(_))
        ));
    }
}
