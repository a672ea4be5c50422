use crate::domain::card::Card;
use crate::domain::reorder::Sequenced;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ordered list of cards on a board.
///
/// The card sequence is `#[serde(default)]` so upstream data that omits it
/// deserializes to an empty list rather than failing; an empty list behaves
/// like any other under reordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub title: String,
    pub order: u32,
    pub board_id: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl List {
    /// Creates a new empty list at order 0 on the given board
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        board_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            order: 0,
            board_id: board_id.into(),
            cards: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    /// Finds a card in this list by identifier
    pub fn find_card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == card_id)
    }

    /// Returns true if this list holds the given card
    pub fn contains_card(&self, card_id: &str) -> bool {
        self.find_card(card_id).is_some()
    }
}

impl Sequenced for List {
    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}
