use crate::domain::list::List;
use crate::domain::reorder::renumber;
use serde::{Deserialize, Serialize};

/// The full ordered hierarchy of a board at a point in time.
///
/// A snapshot owns its lists. It is replaced wholesale by every mutating
/// operation; callers must treat a prior snapshot as stale once a new one
/// exists. Mutating access is deliberately not exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    lists: Vec<List>,
}

impl BoardSnapshot {
    /// Seeds a snapshot from an external query result.
    ///
    /// Both levels are sorted by their stored `order` and renumbered, so the
    /// contiguity invariants hold even when the upstream source supplies
    /// sparse or duplicated order values.
    pub fn new(mut lists: Vec<List>) -> Self {
        lists.sort_by_key(|list| list.order);
        for list in &mut lists {
            list.cards.sort_by_key(|card| card.order);
            list.cards = renumber(&list.cards);
        }
        let lists = renumber(&lists);
        Self { lists }
    }

    /// Wraps lists that already satisfy the ordering invariants
    pub(crate) fn from_normalized(lists: Vec<List>) -> Self {
        Self { lists }
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn into_lists(self) -> Vec<List> {
        self.lists
    }

    /// Finds a list by identifier
    pub fn find_list(&self, list_id: &str) -> Option<&List> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    /// Position of a list within the top-level sequence
    pub(crate) fn position_of(&self, list_id: &str) -> Option<usize> {
        self.lists.iter().position(|list| list.id == list_id)
    }

    /// Total card count across all lists
    pub fn total_cards(&self) -> usize {
        self.lists.iter().map(|list| list.cards.len()).sum()
    }

    /// Audits the snapshot invariants: contiguous 0-based orders at both
    /// levels, and every card's `list_id` naming the list that holds it.
    pub fn is_consistent(&self) -> bool {
        for (list_index, list) in self.lists.iter().enumerate() {
            if list.order != list_index as u32 {
                return false;
            }
            for (card_index, card) in list.cards.iter().enumerate() {
                if card.order != card_index as u32 || card.list_id != list.id {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Card;

    #[test]
    fn test_seed_sorts_and_renumbers() {
        // Sparse, out-of-order keys straight from an upstream source
        let lists = vec![
            List::new("list-2", "Doing", "board-1").with_order(10),
            List::new("list-1", "To Do", "board-1")
                .with_order(3)
                .with_cards(vec![
                    Card::new("card-2", "Second", "list-1").with_order(9),
                    Card::new("card-1", "First", "list-1").with_order(4),
                ]),
        ];

        let snapshot = BoardSnapshot::new(lists);

        assert!(snapshot.is_consistent());
        assert_eq!(snapshot.lists()[0].id, "list-1");
        assert_eq!(snapshot.lists()[1].id, "list-2");
        assert_eq!(snapshot.lists()[0].cards[0].id, "card-1");
        assert_eq!(snapshot.lists()[0].cards[1].id, "card-2");
    }

    #[test]
    fn test_find_list() {
        let snapshot = BoardSnapshot::new(vec![
            List::new("list-1", "To Do", "board-1"),
            List::new("list-2", "Done", "board-1").with_order(1),
        ]);

        assert_eq!(snapshot.find_list("list-2").unwrap().title, "Done");
        assert!(snapshot.find_list("list-9").is_none());
        assert_eq!(snapshot.position_of("list-2"), Some(1));
    }

    #[test]
    fn test_total_cards() {
        let snapshot = BoardSnapshot::new(vec![
            List::new("list-1", "To Do", "board-1").with_cards(vec![
                Card::new("card-1", "A", "list-1"),
                Card::new("card-2", "B", "list-1").with_order(1),
            ]),
            List::new("list-2", "Done", "board-1").with_order(1),
        ]);

        assert_eq!(snapshot.total_cards(), 2);
    }

    #[test]
    fn test_inconsistent_list_id_detected() {
        let snapshot = BoardSnapshot::new(vec![List::new("list-1", "To Do", "board-1")
            .with_cards(vec![Card::new("card-1", "A", "other-list")])]);

        assert!(!snapshot.is_consistent());
    }

    #[test]
    fn test_empty_snapshot_is_consistent() {
        let snapshot = BoardSnapshot::new(Vec::new());
        assert!(snapshot.is_consistent());
        assert_eq!(snapshot.total_cards(), 0);
    }
}
