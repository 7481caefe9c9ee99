//! Git worktree management
//!
//! The baseline build runs in a detached worktree of the pinned commit,
//! so the caller's checkout is never touched.

mod manager;

pub use manager::{WorktreeError, WorktreeManager};
