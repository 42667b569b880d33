//! Task module
//!
//! This module contains task-related types and logic.

mod file_store;
mod memory_store;
mod model;
mod service;
mod store;

pub use file_store::FileTaskStore;
pub use memory_store::InMemoryTaskStore;
pub use model::*;
pub use service::TaskService;
pub use store::TaskStore;
