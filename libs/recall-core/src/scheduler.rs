//! SM-2 scheduling: grading updates and due-card queries.
//!
//! Based on SuperMemo 2. Grades run 0-5; 3 and above count as success.
//! All functions here are total: out-of-range grades are silently clamped
//! and the ease factor is clamped back into `[1.3, 2.5]` after every
//! recalculation. Nothing returns a `Result`.
//!
//! Each public operation takes the current instant exactly once. The `*_at`
//! variants accept it as a parameter for deterministic testing; the plain
//! variants sample `Utc::now()` once and delegate.

use crate::types::{Card, Deck};
use chrono::{DateTime, Duration, Utc};

/// Lower bound of the ease factor after grading.
pub const MIN_EASE_FACTOR: f64 = 1.3;
/// Upper bound of the ease factor after grading.
pub const MAX_EASE_FACTOR: f64 = 2.5;

/// Interval after the first successful review, in days.
const FIRST_INTERVAL_DAYS: i64 = 1;
/// Interval after the second successful review, in days.
const SECOND_INTERVAL_DAYS: i64 = 6;

fn clamp_grade(grade: i32) -> i32 {
    grade.clamp(0, 5)
}

/// Recalculate the ease factor for one review.
///
/// `EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02))` with
/// `q = clamp(grade, 0, 5)`, then clamped to `[1.3, 2.5]`.
///
/// Grade 4 is neutral: the delta is exactly 0.0. Grade 5 adds 0.1,
/// grade 3 subtracts 0.14, grade 0 subtracts 0.8 before clamping.
pub fn next_ease_factor(current_ef: f64, grade: i32) -> f64 {
    let q = clamp_grade(grade) as f64;
    let new_ef = current_ef + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02));
    new_ef.clamp(MIN_EASE_FACTOR, MAX_EASE_FACTOR)
}

/// Calculate the next review interval in days, without touching any card.
///
/// - grade < 3: 1 day, regardless of state.
/// - repetitions 0: 1 day (first success after creation or a lapse).
/// - repetitions 1: 6 days (fixed step, independent of the ease factor).
/// - repetitions >= 2: `current_interval * ease_factor`, rounded half away
///   from zero (`f64::round`), floored at 1 day.
///
/// `repetitions` and `ease_factor` are expected to come from the grading
/// state machine; a negative `current_interval` is a precondition violation
/// and yields the 1-day floor rather than an error.
pub fn next_interval(current_interval: i64, repetitions: u32, ease_factor: f64, grade: i32) -> i64 {
    if clamp_grade(grade) < 3 {
        return FIRST_INTERVAL_DAYS;
    }
    match repetitions {
        0 => FIRST_INTERVAL_DAYS,
        1 => SECOND_INTERVAL_DAYS,
        _ => ((current_interval as f64 * ease_factor).round() as i64).max(1),
    }
}

/// Apply one graded review to a card at the given instant.
///
/// The SM-2 state transition:
/// 1. `last_review` becomes `now`.
/// 2. The interval follows [`next_interval`] on the pre-update state;
///    repetitions reset to 0 on failure (grade < 3) and increment on
///    success.
/// 3. The ease factor follows [`next_ease_factor`] on the pre-update ease
///    factor, for failures as well as successes.
/// 4. `next_review` becomes `now + interval`.
///
/// Afterwards the interval is >= 1, the ease factor sits in `[1.3, 2.5]`,
/// and `next_review > last_review`.
pub fn update_card_at(card: &mut Card, grade: i32, now: DateTime<Utc>) {
    let grade = clamp_grade(grade);

    let interval = next_interval(card.interval_days, card.repetitions, card.ease_factor, grade);
    let repetitions = if grade < 3 { 0 } else { card.repetitions + 1 };
    let ease_factor = next_ease_factor(card.ease_factor, grade);

    card.last_review = Some(now);
    card.interval_days = interval;
    card.repetitions = repetitions;
    card.ease_factor = ease_factor;
    card.next_review = Some(now + Duration::days(interval));
}

/// [`update_card_at`] against the system clock.
pub fn update_card(card: &mut Card, grade: i32) {
    update_card_at(card, grade, Utc::now());
}

/// Whether a card is due for review at the given instant.
///
/// A card with no `next_review` timestamp is due immediately; this holds
/// for never-scheduled cards and is what keeps the due-count invariant
/// honest, so it must not be reinterpreted as a separate "new" state.
pub fn is_card_due_at(card: &Card, now: DateTime<Utc>) -> bool {
    match card.next_review {
        None => true,
        Some(next_review) => next_review <= now,
    }
}

/// [`is_card_due_at`] against the system clock.
pub fn is_card_due(card: &Card) -> bool {
    is_card_due_at(card, Utc::now())
}

/// Every due card in the deck, preserving relative order.
///
/// Returns independent clones; mutating the result never touches the deck.
/// A single `now` is used for the whole pass so a card cannot flicker
/// across the due boundary mid-filter.
pub fn due_cards_at(deck: &Deck, now: DateTime<Utc>) -> Vec<Card> {
    deck.cards()
        .iter()
        .filter(|card| is_card_due_at(card, now))
        .cloned()
        .collect()
}

/// [`due_cards_at`] against the system clock.
pub fn due_cards(deck: &Deck) -> Vec<Card> {
    due_cards_at(deck, Utc::now())
}

/// Number of due cards in the deck.
///
/// Counts without cloning; equals `due_cards_at(deck, now).len()` for every
/// deck and instant.
pub fn due_count_at(deck: &Deck, now: DateTime<Utc>) -> usize {
    deck.cards()
        .iter()
        .filter(|card| is_card_due_at(card, now))
        .count()
}

/// [`due_count_at`] against the system clock.
pub fn due_count(deck: &Deck) -> usize {
    due_count_at(deck, Utc::now())
}
