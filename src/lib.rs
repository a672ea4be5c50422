//! # Boardflow Core
//!
//! Core drag-and-drop reorder engine and domain models for Boardflow kanban
//! boards.
//!
//! Boards hold ordered lists, lists hold ordered cards, and both levels keep
//! contiguous 0-based sort keys. This crate turns completed drag gestures
//! into fresh, fully renumbered board snapshots plus the change-sets a
//! persistence collaborator needs, without any dependency on a specific UI
//! or storage backend.

pub mod domain;
pub mod engine;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use domain::{card::Card, list::List, snapshot::BoardSnapshot};
pub use engine::{
    apply, BoardEngine, CardOrderUpdate, ChangeSet, DragEndEvent, DragLocation, DragScope,
    ListOrderUpdate, ReorderOutcome,
};
pub use error::{BoardflowError, Result};
pub use storage::BoardStore;
