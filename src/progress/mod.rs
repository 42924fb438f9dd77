//! Learner progress between runs
//!
//! This module provides:
//! - The seen set plus a history of which words each run introduced
//! - JSON file storage for that state

pub mod models;
pub mod storage;

pub use models::*;
pub use storage::{ProgressStorage, ProgressError};
