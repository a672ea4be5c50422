use crate::{domain::List, engine::ChangeSet, error::Result};
use async_trait::async_trait;

pub mod memory;

/// Persistence collaborator for board ordering.
///
/// The reorder engine never writes anything itself: it hands each applied
/// event's [`ChangeSet`] to an implementation of this trait, which issues
/// the corresponding durable writes keyed by entity identifier.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Loads the lists (with cards) of a board, the raw material for a
    /// fresh snapshot
    async fn load_lists(&self, board_id: &str) -> Result<Vec<List>>;

    /// Applies a reorder change-set to the board's stored entities
    async fn apply_changes(&self, board_id: &str, changes: &ChangeSet) -> Result<()>;
}
