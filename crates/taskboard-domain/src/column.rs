use serde::{Deserialize, Serialize};

use crate::card::Card;

pub type ColumnId = String;

/// One workflow stage. Owns its cards; order is insertion order unless a
/// caller places a card explicitly with [`insert_card_at`](Column::insert_card_at).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    name: String,
    cards: Vec<Card>,
}

impl Column {
    pub fn new(id: ColumnId, name: String) -> Self {
        Self {
            id,
            name,
            cards: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Appends at the end; a card with an id already present is silently
    /// ignored.
    pub fn add_card(&mut self, card: Card) {
        if !self.has_card(card.id()) {
            self.cards.push(card);
        }
    }

    /// Inserts at `index`, clamped to the card count (past-the-end appends).
    /// Unlike [`add_card`](Column::add_card) this does not check for
    /// duplicate ids.
    pub fn insert_card_at(&mut self, index: usize, card: Card) {
        if index >= self.cards.len() {
            self.cards.push(card);
        } else {
            self.cards.insert(index, card);
        }
    }

    /// Removes and returns the card with the given id, if present.
    pub fn remove_card(&mut self, card_id: &str) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.id() == card_id)?;
        Some(self.cards.remove(index))
    }

    pub fn find_card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == card_id)
    }

    pub fn has_card(&self, card_id: &str) -> bool {
        self.cards.iter().any(|card| card.id() == card_id)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
