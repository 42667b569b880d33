//! Task service
//!
//! Thin orchestration layer over a [`TaskStore`]. Both operations
//! delegate directly to the store with no validation, no
//! transformation, and no error translation.

use std::sync::Arc;

use super::model::Task;
use super::store::TaskStore;
use crate::Result;

/// Service exposing the task operations
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    /// Create a new TaskService backed by the given store
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// List all tasks in insertion order
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.store.find_all().await
    }

    /// Add a task, returning the persisted record with its identifier
    pub async fn add_task(&self, task: Task) -> Result<Task> {
        self.store.save(task).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::InMemoryTaskStore;
    use crate::Error;
    use async_trait::async_trait;

    struct UnreachableStore;

    #[async_trait]
    impl TaskStore for UnreachableStore {
        async fn save(&self, _task: Task) -> Result<Task> {
            Err(Error::Storage("connection refused".to_string()))
        }

        async fn find_all(&self) -> Result<Vec<Task>> {
            Err(Error::Storage("connection refused".to_string()))
        }

        async fn find_by_id(&self, _id: u64) -> Result<Option<Task>> {
            Err(Error::Storage("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_list_tasks_empty() {
        let service = TaskService::new(Arc::new(InMemoryTaskStore::new()));
        let tasks = service.list_tasks().await.unwrap();
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let service = TaskService::new(Arc::new(InMemoryTaskStore::new()));

        let a = service.add_task(Task::new("A")).await.unwrap();
        let b = service.add_task(Task::new("B")).await.unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));

        let tasks = service.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "A");
        assert_eq!(tasks[1].title, "B");
        assert!(tasks.iter().all(|t| t.id.is_some()));
    }

    #[tokio::test]
    async fn test_storage_errors_propagate_unchanged() {
        let service = TaskService::new(Arc::new(UnreachableStore));

        let list_err = service.list_tasks().await.err().unwrap();
        match list_err {
            Error::Storage(msg) => assert_eq!(msg, "connection refused"),
            e => panic!("Expected Storage error, got: {:?}", e),
        }

        let add_err = service.add_task(Task::new("A")).await.err().unwrap();
        match add_err {
            Error::Storage(msg) => assert_eq!(msg, "connection refused"),
            e => panic!("Expected Storage error, got: {:?}", e),
        }
    }
}
