//! In-memory task storage implementation
//!
//! Keeps tasks in a `BTreeMap` behind an async `RwLock`. Contents are
//! lost when the process exits; useful for tests and for running the
//! service without a durable backend.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::model::Task;
use super::store::TaskStore;
use crate::Result;

struct StoreState {
    tasks: BTreeMap<u64, Task>,
    next_id: u64,
}

/// In-memory task store
pub struct InMemoryTaskStore {
    state: RwLock<StoreState>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                tasks: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn save(&self, mut task: Task) -> Result<Task> {
        let mut state = self.state.write().await;
        let id = match task.id {
            Some(id) => {
                if state.tasks.contains_key(&id) {
                    task.updated_at = Utc::now();
                }
                // Keep the sequence ahead of caller-supplied identifiers
                if id >= state.next_id {
                    state.next_id = id + 1;
                }
                id
            }
            None => {
                let id = state.next_id;
                state.next_id += 1;
                id
            }
        };
        task.id = Some(id);
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
