//! Core scheduling library for a spaced-repetition flashcard application.
//!
//! Provides:
//! - SM-2 grading updates and due-card queries (`scheduler`)
//! - Card and deck data types with value semantics (`types`)
//! - The persistence-collaborator boundary and an in-memory store (`store`)
//!
//! The scheduler is synchronous, single-threaded, and total over its
//! clamped input domain; hosts own windowing, storage engines, and
//! everything else around it.

pub mod error;
pub mod scheduler;
pub mod store;
pub mod types;

pub use error::{Result, StoreError};
pub use scheduler::{
    due_cards, due_count, is_card_due, next_ease_factor, next_interval, update_card,
    MAX_EASE_FACTOR, MIN_EASE_FACTOR,
};
pub use store::{CardStore, DeckStore, MemoryStore};
pub use types::{Card, ContentKind, Deck, TestMode};
