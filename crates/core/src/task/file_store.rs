//! File-based task storage implementation
//!
//! Stores tasks as JSON in a file on disk. Mutations reach the disk
//! before they are committed to the in-memory cache, so a failed
//! write leaves no observable state behind.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::sync::RwLock;

use super::model::Task;
use super::store::TaskStore;
use crate::{Error, Result};

struct StoreState {
    tasks: BTreeMap<u64, Task>,
    next_id: u64,
}

/// File-based task store using JSON
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory cache of tasks
    state: RwLock<StoreState>,
}

impl FileTaskStore {
    /// Create a new FileTaskStore
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tasks: BTreeMap<u64, Task> = if path.exists() {
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| Error::Storage(format!("Failed to read tasks file: {}", e)))?;
            let tasks: Vec<Task> = serde_json::from_str(&content)
                .map_err(|e| Error::Storage(format!("Failed to parse tasks file: {}", e)))?;
            tasks.into_iter().filter_map(|t| t.id.map(|id| (id, t))).collect()
        } else {
            BTreeMap::new()
        };

        let next_id = tasks.keys().next_back().map_or(1, |id| id + 1);
        tracing::debug!("Loaded {} tasks from {:?}", tasks.len(), path);

        Ok(Self {
            path,
            state: RwLock::new(StoreState { tasks, next_id }),
        })
    }

    /// Write a serialized snapshot to disk
    async fn write_snapshot(&self, content: String) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl TaskStore for FileTaskStore {
    async fn save(&self, mut task: Task) -> Result<Task> {
        let mut state = self.state.write().await;
        let id = match task.id {
            Some(id) => {
                if state.tasks.contains_key(&id) {
                    task.updated_at = Utc::now();
                }
                id
            }
            None => state.next_id,
        };
        task.id = Some(id);

        // Write the candidate snapshot before touching the cache, so a
        // failed write leaves neither the task nor a burned sequence
        // number behind.
        let mut snapshot: Vec<&Task> = state
            .tasks
            .values()
            .filter(|t| t.id != Some(id))
            .collect();
        snapshot.push(&task);
        snapshot.sort_by_key(|t| t.id);
        let content = serde_json::to_string_pretty(&snapshot)?;
        self.write_snapshot(content).await?;

        if id >= state.next_id {
            state.next_id = id + 1;
        }
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn find_all(&self) -> Result<Vec<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.get(&id).cloned())
    }
}
