use crate::{
    domain::List,
    engine::ChangeSet,
    error::{BoardflowError, Result},
    storage::BoardStore,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory board store, for tests and embedding callers.
///
/// Stored sequences are kept sorted by `order` at both levels so a
/// subsequent `load_lists` returns them in display order.
#[derive(Default)]
pub struct MemoryStore {
    boards: RwLock<HashMap<String, Vec<List>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a board's lists
    pub async fn seed(&self, board_id: impl Into<String>, lists: Vec<List>) {
        self.boards.write().await.insert(board_id.into(), lists);
    }
}

#[async_trait]
impl BoardStore for MemoryStore {
    async fn load_lists(&self, board_id: &str) -> Result<Vec<List>> {
        self.boards
            .read()
            .await
            .get(board_id)
            .cloned()
            .ok_or_else(|| BoardflowError::StorageError(format!("board not found: {board_id}")))
    }

    async fn apply_changes(&self, board_id: &str, changes: &ChangeSet) -> Result<()> {
        let mut boards = self.boards.write().await;
        let lists = boards
            .get_mut(board_id)
            .ok_or_else(|| BoardflowError::StorageError(format!("board not found: {board_id}")))?;

        for update in &changes.lists {
            let list = lists
                .iter_mut()
                .find(|list| list.id == update.id)
                .ok_or_else(|| BoardflowError::ListNotFound(update.id.clone()))?;
            list.order = update.order;
        }

        for update in &changes.cards {
            // Pull the card from whichever list currently holds it; the
            // update's list_id decides where it lands
            let mut card = None;
            for list in lists.iter_mut() {
                if let Some(position) = list.cards.iter().position(|card| card.id == update.id) {
                    card = Some(list.cards.remove(position));
                    break;
                }
            }
            let mut card = card.ok_or_else(|| {
                BoardflowError::StorageError(format!("card not found: {}", update.id))
            })?;

            card.order = update.order;
            card.list_id = update.list_id.clone();

            let target = lists
                .iter_mut()
                .find(|list| list.id == update.list_id)
                .ok_or_else(|| BoardflowError::ListNotFound(update.list_id.clone()))?;
            target.cards.push(card);
        }

        lists.sort_by_key(|list| list.order);
        for list in lists.iter_mut() {
            list.cards.sort_by_key(|card| card.order);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Card;
    use crate::engine::{BoardEngine, DragEndEvent};

    fn board() -> Vec<List> {
        vec![
            List::new("L1", "To Do", "board-1").with_cards(vec![
                Card::new("C1", "First", "L1"),
                Card::new("C2", "Second", "L1").with_order(1),
            ]),
            List::new("L2", "Done", "board-1").with_order(1),
        ]
    }

    #[tokio::test]
    async fn test_seed_and_load() {
        let store = MemoryStore::new();
        store.seed("board-1", board()).await;

        let lists = store.load_lists("board-1").await.unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].id, "L1");
    }

    #[tokio::test]
    async fn test_load_unknown_board() {
        let store = MemoryStore::new();
        let result = store.load_lists("board-9").await;
        assert!(matches!(result, Err(BoardflowError::StorageError(_))));
    }

    #[tokio::test]
    async fn test_changeset_round_trip() {
        let store = MemoryStore::new();
        store.seed("board-1", board()).await;

        // Seed the engine from the store, move a card across lists, then
        // persist the change-set and reload
        let mut engine = BoardEngine::new(store.load_lists("board-1").await.unwrap());
        let changes = engine
            .handle_drag_end(&DragEndEvent::card_move("L1", 0, "L2", 0))
            .unwrap()
            .expect("cross-list move should produce changes");

        store.apply_changes("board-1", &changes).await.unwrap();

        let reloaded = store.load_lists("board-1").await.unwrap();
        assert_eq!(reloaded, engine.snapshot().lists().to_vec());
    }

    #[tokio::test]
    async fn test_list_reorder_round_trip() {
        let store = MemoryStore::new();
        store.seed("board-1", board()).await;

        let mut engine = BoardEngine::new(store.load_lists("board-1").await.unwrap());
        let changes = engine
            .handle_drag_end(&DragEndEvent::list_move(0, 1))
            .unwrap()
            .unwrap();

        store.apply_changes("board-1", &changes).await.unwrap();

        let reloaded = store.load_lists("board-1").await.unwrap();
        assert_eq!(reloaded[0].id, "L2");
        assert_eq!(reloaded[0].order, 0);
        assert_eq!(reloaded[1].id, "L1");
        assert_eq!(reloaded[1].order, 1);
    }

    #[tokio::test]
    async fn test_apply_changes_unknown_card() {
        let store = MemoryStore::new();
        store.seed("board-1", board()).await;

        let changes = ChangeSet {
            lists: Vec::new(),
            cards: vec![crate::engine::CardOrderUpdate {
                id: "C9".to_string(),
                order: 0,
                list_id: "L1".to_string(),
            }],
        };

        let result = store.apply_changes("board-1", &changes).await;
        assert!(matches!(result, Err(BoardflowError::StorageError(_))));
    }
}
