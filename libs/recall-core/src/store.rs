//! Persistence-collaborator boundary.
//!
//! The core does not own a storage engine; it promises collaborators the
//! in-memory shape they must read and write losslessly (including the
//! absent-timestamp state). These traits are that contract, and
//! [`MemoryStore`] is the reference implementation hosts and tests use.
//!
//! Everything handed out is a snapshot: mutating a returned card or deck
//! never touches the store. Callers persist a graded card explicitly via
//! [`CardStore::update_card`].

use crate::error::{Result, StoreError};
use crate::types::{Card, Deck};

/// Repository for card operations.
pub trait CardStore {
    /// Insert a card, assigning and returning its id.
    ///
    /// A card still equal to `Card::default()` is a placeholder that was
    /// never filled in and is refused with [`StoreError::PlaceholderCard`];
    /// whether a record is meant to be saved is decided here, not by the
    /// card itself.
    fn insert_card(&mut self, card: Card) -> Result<i64>;
    fn get_card(&self, id: i64) -> Result<Card>;
    fn update_card(&mut self, card: &Card) -> Result<()>;
    fn delete_card(&mut self, id: i64) -> Result<()>;
}

/// Repository for deck operations.
pub trait DeckStore {
    /// Insert an empty deck, assigning and returning its id.
    fn insert_deck(&mut self, name: &str) -> Result<i64>;
    /// Snapshot of a deck with its cards, in insertion order.
    fn get_deck(&self, id: i64) -> Result<Deck>;
    fn deck_names(&self) -> Vec<(i64, String)>;
}

/// In-memory implementation of the store traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    decks: Vec<(i64, String)>,
    cards: Vec<Card>,
    next_card_id: i64,
    next_deck_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn card_index(&self, id: i64) -> Result<usize> {
        self.cards
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::CardNotFound { id })
    }
}

impl CardStore for MemoryStore {
    fn insert_card(&mut self, mut card: Card) -> Result<i64> {
        if card == Card::default() {
            tracing::debug!("skipping insert of placeholder card");
            return Err(StoreError::PlaceholderCard);
        }

        self.next_card_id += 1;
        card.id = self.next_card_id;
        tracing::debug!(card_id = card.id, deck_id = card.deck_id, "inserting card");
        self.cards.push(card);
        Ok(self.next_card_id)
    }

    fn get_card(&self, id: i64) -> Result<Card> {
        self.card_index(id).map(|i| self.cards[i].clone())
    }

    fn update_card(&mut self, card: &Card) -> Result<()> {
        let index = self.card_index(card.id)?;
        self.cards[index] = card.clone();
        Ok(())
    }

    fn delete_card(&mut self, id: i64) -> Result<()> {
        let index = self.card_index(id)?;
        tracing::debug!(card_id = id, "deleting card");
        self.cards.remove(index);
        Ok(())
    }
}

impl DeckStore for MemoryStore {
    fn insert_deck(&mut self, name: &str) -> Result<i64> {
        self.next_deck_id += 1;
        tracing::debug!(deck_id = self.next_deck_id, name = %name, "inserting deck");
        self.decks.push((self.next_deck_id, name.to_string()));
        Ok(self.next_deck_id)
    }

    fn get_deck(&self, id: i64) -> Result<Deck> {
        let (deck_id, name) = self
            .decks
            .iter()
            .find(|(deck_id, _)| *deck_id == id)
            .ok_or(StoreError::DeckNotFound { id })?;

        Ok(Deck {
            id: *deck_id,
            name: name.clone(),
            cards: self
                .cards
                .iter()
                .filter(|card| card.deck_id == id)
                .cloned()
                .collect(),
        })
    }

    fn deck_names(&self) -> Vec<(i64, String)> {
        self.decks.clone()
    }
}
