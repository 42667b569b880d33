//! Task store trait
//!
//! Defines the interface for task storage operations. Concrete
//! backends are selected by constructor wiring, never by reflection.

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Storage interface for task records
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persist a task
    ///
    /// Assigns the next identifier when `task.id` is `None`. When the
    /// identifier matches a stored record, the record is replaced.
    /// Returns the persisted task, identifier included.
    async fn save(&self, task: Task) -> Result<Task>;

    /// Persist a batch of tasks in order
    async fn save_all(&self, tasks: Vec<Task>) -> Result<Vec<Task>> {
        let mut saved = Vec::with_capacity(tasks.len());
        for task in tasks {
            saved.push(self.save(task).await?);
        }
        Ok(saved)
    }

    /// Get all tasks in insertion order (ascending identifier)
    async fn find_all(&self) -> Result<Vec<Task>>;

    /// Get a task by identifier
    async fn find_by_id(&self, id: u64) -> Result<Option<Task>>;
}
