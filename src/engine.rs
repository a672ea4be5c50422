use crate::domain::list::List;
use crate::domain::reorder::{renumber, shift};
use crate::domain::snapshot::BoardSnapshot;
use crate::error::{BoardflowError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Droppable identifier of the top-level list sequence
pub const BOARD_DROPPABLE: &str = "lists";

/// Whether a drag-end event targets the list sequence or a card sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragScope {
    List,
    Card,
}

/// One end of a drag gesture: a droppable and an index within it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub droppable_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// A completed drag gesture, validated at the boundary.
///
/// `destination` is `None` when the gesture was released outside any valid
/// drop target; the orchestrator treats that as a cancellation. Droppable
/// identifiers are meaningful only for `DragScope::Card`; list moves always
/// address the single top-level sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEndEvent {
    pub scope: DragScope,
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl DragEndEvent {
    /// A list moved within the top-level sequence
    pub fn list_move(source_index: usize, destination_index: usize) -> Self {
        Self {
            scope: DragScope::List,
            source: DragLocation::new(BOARD_DROPPABLE, source_index),
            destination: Some(DragLocation::new(BOARD_DROPPABLE, destination_index)),
        }
    }

    /// A card moved between (or within) lists
    pub fn card_move(
        source_list: impl Into<String>,
        source_index: usize,
        destination_list: impl Into<String>,
        destination_index: usize,
    ) -> Self {
        Self {
            scope: DragScope::Card,
            source: DragLocation::new(source_list, source_index),
            destination: Some(DragLocation::new(destination_list, destination_index)),
        }
    }

    /// Drops the destination, turning this into a cancelled gesture
    pub fn without_destination(mut self) -> Self {
        self.destination = None;
        self
    }
}

/// New sort key for a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOrderUpdate {
    pub id: String,
    pub order: u32,
}

/// New sort key and owning list for a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardOrderUpdate {
    pub id: String,
    pub order: u32,
    pub list_id: String,
}

/// The minimal set of entities a reorder touched, keyed by identifier.
///
/// Handed to the persistence collaborator for batched durable writes; an
/// entity appears here only if its `order` (or, for cards, `list_id`)
/// actually changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    pub lists: Vec<ListOrderUpdate>,
    pub cards: Vec<CardOrderUpdate>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty() && self.cards.is_empty()
    }
}

/// Result of applying one drag-end event
#[derive(Debug, Clone, PartialEq)]
pub enum ReorderOutcome {
    /// The event required no mutation; the caller's snapshot stays current
    Unchanged,
    /// A new snapshot, plus the diff the persistence collaborator needs
    Applied {
        snapshot: BoardSnapshot,
        changes: ChangeSet,
    },
}

/// Applies one drag-end event to a snapshot.
///
/// Pure: the input snapshot is never mutated. A cancelled gesture or a
/// same-position drop returns `Unchanged`; anything else produces a fresh,
/// fully renumbered snapshot and the change-set describing what moved.
pub fn apply(snapshot: &BoardSnapshot, event: &DragEndEvent) -> Result<ReorderOutcome> {
    let Some(destination) = &event.destination else {
        debug!(scope = ?event.scope, "drag ended outside a drop target, nothing to do");
        return Ok(ReorderOutcome::Unchanged);
    };

    // Dropped back where it started. Lists always address the top-level
    // sequence, so matching droppables are not required for that scope.
    let same_droppable =
        event.scope == DragScope::List || destination.droppable_id == event.source.droppable_id;
    if same_droppable && destination.index == event.source.index {
        return Ok(ReorderOutcome::Unchanged);
    }

    let lists = match event.scope {
        DragScope::List => move_list(snapshot, event.source.index, destination.index)?,
        DragScope::Card if same_droppable => move_card_within(
            snapshot,
            &event.source.droppable_id,
            event.source.index,
            destination.index,
        )?,
        DragScope::Card => move_card_across(snapshot, &event.source, destination)?,
    };

    let next = BoardSnapshot::from_normalized(lists);
    let changes = diff(snapshot, &next);
    debug!(
        scope = ?event.scope,
        lists_changed = changes.lists.len(),
        cards_changed = changes.cards.len(),
        "applied drag-end reorder"
    );

    Ok(ReorderOutcome::Applied {
        snapshot: next,
        changes,
    })
}

fn move_list(snapshot: &BoardSnapshot, source: usize, destination: usize) -> Result<Vec<List>> {
    let lists = shift(snapshot.lists(), source, destination)?;
    Ok(renumber(&lists))
}

fn move_card_within(
    snapshot: &BoardSnapshot,
    list_id: &str,
    source: usize,
    destination: usize,
) -> Result<Vec<List>> {
    let position = snapshot
        .position_of(list_id)
        .ok_or_else(|| BoardflowError::ListNotFound(list_id.to_string()))?;

    let mut lists = snapshot.lists().to_vec();
    let cards = shift(&lists[position].cards, source, destination)?;
    lists[position].cards = renumber(&cards);
    Ok(lists)
}

fn move_card_across(
    snapshot: &BoardSnapshot,
    source: &DragLocation,
    destination: &DragLocation,
) -> Result<Vec<List>> {
    let source_pos = snapshot
        .position_of(&source.droppable_id)
        .ok_or_else(|| BoardflowError::ListNotFound(source.droppable_id.clone()))?;
    let destination_pos = snapshot
        .position_of(&destination.droppable_id)
        .ok_or_else(|| BoardflowError::ListNotFound(destination.droppable_id.clone()))?;

    let mut lists = snapshot.lists().to_vec();

    let source_len = lists[source_pos].cards.len();
    if source.index >= source_len {
        return Err(BoardflowError::InvalidIndex {
            index: source.index,
            len: source_len,
        });
    }

    let mut card = lists[source_pos].cards.remove(source.index);
    card.list_id = lists[destination_pos].id.clone();

    // Insertion past the end appends; that is the one deliberate clamp
    let insert_at = destination.index.min(lists[destination_pos].cards.len());
    lists[destination_pos].cards.insert(insert_at, card);

    lists[source_pos].cards = renumber(&lists[source_pos].cards);
    lists[destination_pos].cards = renumber(&lists[destination_pos].cards);
    Ok(lists)
}

/// Diffs two snapshots into the change-set the persistence collaborator needs
fn diff(before: &BoardSnapshot, after: &BoardSnapshot) -> ChangeSet {
    let mut old_lists: HashMap<&str, u32> = HashMap::new();
    let mut old_cards: HashMap<&str, (u32, &str)> = HashMap::new();
    for list in before.lists() {
        old_lists.insert(list.id.as_str(), list.order);
        for card in &list.cards {
            old_cards.insert(card.id.as_str(), (card.order, card.list_id.as_str()));
        }
    }

    let mut changes = ChangeSet::default();
    for list in after.lists() {
        if old_lists.get(list.id.as_str()) != Some(&list.order) {
            changes.lists.push(ListOrderUpdate {
                id: list.id.clone(),
                order: list.order,
            });
        }
        for card in &list.cards {
            let unchanged = matches!(
                old_cards.get(card.id.as_str()),
                Some(&(order, list_id)) if order == card.order && list_id == card.list_id
            );
            if !unchanged {
                changes.cards.push(CardOrderUpdate {
                    id: card.id.clone(),
                    order: card.order,
                    list_id: card.list_id.clone(),
                });
            }
        }
    }
    changes
}

/// Holds the current board snapshot across drag-end events.
///
/// Snapshots update optimistically: `handle_drag_end` swaps in the new
/// snapshot immediately and returns the change-set for the persistence
/// collaborator. The previous snapshot is retained until the next applied
/// event so the integrating layer can [`roll_back`](Self::roll_back) if that
/// write fails. No other state survives between calls.
#[derive(Debug)]
pub struct BoardEngine {
    snapshot: BoardSnapshot,
    previous: Option<BoardSnapshot>,
}

impl BoardEngine {
    /// Seeds the engine from an external query result
    pub fn new(lists: Vec<List>) -> Self {
        Self {
            snapshot: BoardSnapshot::new(lists),
            previous: None,
        }
    }

    /// Replaces the snapshot wholesale with fresh upstream data.
    ///
    /// Discards the rollback snapshot: after a refresh there is no older
    /// state worth restoring.
    pub fn refresh(&mut self, lists: Vec<List>) {
        self.snapshot = BoardSnapshot::new(lists);
        self.previous = None;
    }

    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    /// The snapshot in effect before the last applied event, if any
    pub fn previous(&self) -> Option<&BoardSnapshot> {
        self.previous.as_ref()
    }

    /// Applies a drag-end event to the held snapshot.
    ///
    /// Returns the change-set to persist, or `None` when the event was a
    /// no-op. On error the held snapshot is untouched; a `ListNotFound`
    /// means the snapshot is stale and the caller should `refresh`.
    pub fn handle_drag_end(&mut self, event: &DragEndEvent) -> Result<Option<ChangeSet>> {
        match apply(&self.snapshot, event)? {
            ReorderOutcome::Unchanged => Ok(None),
            ReorderOutcome::Applied { snapshot, changes } => {
                self.previous = Some(std::mem::replace(&mut self.snapshot, snapshot));
                Ok(Some(changes))
            }
        }
    }

    /// Restores the snapshot from before the last applied event.
    ///
    /// Returns false if there is nothing to roll back to.
    pub fn roll_back(&mut self) -> bool {
        match self.previous.take() {
            Some(previous) => {
                debug!("rolling back to previous snapshot");
                self.snapshot = previous;
                true
            }
            None => false,
        }
    }
}
