//! Core data types: cards and decks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a card's question/answer content should be rendered.
///
/// A rendering hint for the presentation layer; scheduling never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Text,
    Image,
    Audio,
}

impl Default for ContentKind {
    fn default() -> Self {
        Self::Text
    }
}

/// How the card is tested during a study session.
///
/// Like [`ContentKind`], irrelevant to scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestMode {
    DirectAnswer,
    MultipleChoice,
    Matching,
}

impl Default for TestMode {
    fn default() -> Self {
        Self::DirectAnswer
    }
}

/// One flashcard and its review state.
///
/// Scheduling fields (`ease_factor`, `interval_days`, `repetitions`, the
/// timestamps) are only ever mutated by [`crate::scheduler::update_card_at`].
/// A card constructed via [`Card::default`] carries an ease factor of `0.0` —
/// deliberately outside the valid `[1.3, 2.5]` range — marking it as never
/// graded. [`Card::new`] stores its arguments verbatim without clamping;
/// range enforcement happens only during grading.
///
/// `next_review == None` means "due immediately". That convention is relied
/// on by the due-card queries and must round-trip through persistence as an
/// absent value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Assigned by the store; 0 on a freshly constructed card.
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub content_kind: ContentKind,
    pub test_mode: TestMode,
    /// Growth rate of the review interval; `[1.3, 2.5]` once graded.
    pub ease_factor: f64,
    /// Days until the next scheduled review; >= 1 after any grading.
    pub interval_days: i64,
    /// Consecutive successful reviews since the last failure.
    pub repetitions: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_review: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_review: Option<DateTime<Utc>>,
    pub deck_id: i64,
}

impl Card {
    /// Fully specified constructor. Values are stored as given; out-of-range
    /// ease factors or negative intervals are not rejected here.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        question: impl Into<String>,
        answer: impl Into<String>,
        content_kind: ContentKind,
        test_mode: TestMode,
        ease_factor: f64,
        interval_days: i64,
        repetitions: u32,
        next_review: Option<DateTime<Utc>>,
        last_review: Option<DateTime<Utc>>,
        deck_id: i64,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            content_kind,
            test_mode,
            ease_factor,
            interval_days,
            repetitions,
            next_review,
            last_review,
            deck_id,
        }
    }
}

/// An ordered collection of cards with a name and identity.
///
/// The scheduler treats a deck purely as a source of a card snapshot; it
/// never mutates deck identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cards: Vec::new(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_card_is_ungraded_sentinel() {
        let card = Card::default();
        assert_eq!(card.id, 0);
        assert_eq!(card.question, "");
        assert_eq!(card.ease_factor, 0.0);
        assert_eq!(card.interval_days, 0);
        assert_eq!(card.repetitions, 0);
        assert_eq!(card.next_review, None);
        assert_eq!(card.last_review, None);
    }

    #[test]
    fn full_constructor_does_not_clamp() {
        let card = Card::new(
            7,
            "q",
            "a",
            ContentKind::Audio,
            TestMode::Matching,
            9.9,
            -4,
            3,
            None,
            None,
            1,
        );
        assert_eq!(card.ease_factor, 9.9);
        assert_eq!(card.interval_days, -4);
    }

    #[test]
    fn cloned_card_is_independent() {
        let original = Card::new(
            1,
            "What is ownership?",
            "A set of rules governing memory",
            ContentKind::Text,
            TestMode::DirectAnswer,
            2.5,
            1,
            0,
            None,
            None,
            1,
        );
        let mut copy = original.clone();
        copy.question = "changed".into();
        copy.ease_factor = 1.3;
        assert_eq!(original.question, "What is ownership?");
        assert_eq!(original.ease_factor, 2.5);
    }

    #[test]
    fn absent_timestamps_round_trip_as_missing() {
        let card = Card::default();
        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("next_review").is_none());
        assert!(json.get("last_review").is_none());

        let back: Card = serde_json::from_value(json).unwrap();
        assert_eq!(back, card);
    }
}
