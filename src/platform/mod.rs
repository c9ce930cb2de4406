//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keyboard, mouse, touch -> game actions)
//! - Storage (LocalStorage on web, in-memory natively)
//! - Frame timing (fixed-step scheduling, FPS)

pub mod input;
pub mod storage;
pub mod time;

pub use input::{Action, PointerKind, action_for_key, action_for_pointer};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use time::{FixedStep, FpsCounter};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorageStore;
