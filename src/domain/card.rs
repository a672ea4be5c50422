use crate::domain::reorder::Sequenced;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A card tracked within a list.
///
/// Identifiers are opaque strings minted by the persistence layer; the core
/// never generates or validates their format. `list_id` must always name the
/// list that currently holds the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub order: u32,
    pub list_id: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Creates a new card at order 0 in the given list
    pub fn new(id: impl Into<String>, title: impl Into<String>, list_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            order: 0,
            list_id: list_id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Sequenced for Card {
    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new("card-1", "Write release notes", "list-1");

        assert_eq!(card.id, "card-1");
        assert_eq!(card.title, "Write release notes");
        assert_eq!(card.list_id, "list-1");
        assert_eq!(card.order, 0);
        assert!(card.description.is_none());
    }

    #[test]
    fn test_card_builders() {
        let card = Card::new("card-1", "Ship it", "list-1")
            .with_order(3)
            .with_description("Cut the release branch first");

        assert_eq!(card.order, 3);
        assert_eq!(
            card.description.as_deref(),
            Some("Cut the release branch first")
        );
    }

    #[test]
    fn test_card_deserializes_without_timestamps() {
        // Upstream query results may omit timestamps entirely
        let json = r#"{
            "id": "card-1",
            "title": "Old card",
            "description": null,
            "order": 2,
            "list_id": "list-1"
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, "card-1");
        assert_eq!(card.order, 2);
    }
}
