//! Core library for the Task Manager service
//!
//! This crate contains the persistence and service layers:
//! - Task model
//! - Task store abstraction and its backends
//! - Task service

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
