//! Application state

use std::path::PathBuf;
use std::sync::Arc;

use tm_core::task::{FileTaskStore, InMemoryTaskStore, TaskService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    tasks: TaskService,
}

impl AppState {
    /// Create an AppState backed by a file store under the given data
    /// directory
    pub async fn with_file_store(data_dir: PathBuf) -> tm_core::Result<Self> {
        let tasks_path = data_dir.join("tasks.json");
        let store = FileTaskStore::new(tasks_path).await?;
        Ok(Self::with_service(TaskService::new(Arc::new(store))))
    }

    /// Create an AppState backed by an in-memory store
    pub fn in_memory() -> Self {
        Self::with_service(TaskService::new(Arc::new(InMemoryTaskStore::new())))
    }

    /// Create an AppState around an already-wired service
    pub fn with_service(tasks: TaskService) -> Self {
        Self {
            inner: Arc::new(AppStateInner { tasks }),
        }
    }

    /// Get reference to the task service
    pub fn tasks(&self) -> &TaskService {
        &self.inner.tasks
    }
}
