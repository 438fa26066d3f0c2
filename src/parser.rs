//! Parsing of the compact hand notation (`"AC JC KC QC TC"`).

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, HAND_SIZE, Rank, Suit};
use crate::error::ParseError;

/// Parses five whitespace separated card tokens.
///
/// The cards are returned sorted by rank, lowest first. Cards of equal rank
/// are ordered by suit so that any permutation of the same tokens yields the
/// same array.
///
/// # Errors
///
/// Returns the first problem found. The token count is checked first, then
/// each token left to right, then card uniqueness.
///
/// # Example
///
/// ```
/// use pokrs::{Rank, parse_hand};
///
/// let cards = parse_hand("AC 2C KC QC TC").unwrap();
/// assert_eq!(cards[0].rank, Rank::Two);
/// assert_eq!(cards[4].rank, Rank::Ace);
/// ```
pub fn parse_hand(text: &str) -> Result<[Card; HAND_SIZE], ParseError> {
    let count = text.split_whitespace().count();
    if count != HAND_SIZE {
        return Err(ParseError::WrongCardCount(count));
    }

    let mut cards = [Card::new(Rank::Two, Suit::Spades); HAND_SIZE];
    for (slot, token) in cards.iter_mut().zip(text.split_whitespace()) {
        *slot = token.parse()?;
    }

    validate(cards)
}

/// Parses an optional input, reporting [`ParseError::NullInput`] when absent.
///
/// # Errors
///
/// Same as [`parse_hand`], plus `NullInput` for `None`.
pub fn parse_hand_opt(text: Option<&str>) -> Result<[Card; HAND_SIZE], ParseError> {
    text.map_or(Err(ParseError::NullInput), parse_hand)
}

/// Checks card uniqueness and sorts the cards.
pub(crate) fn validate(mut cards: [Card; HAND_SIZE]) -> Result<[Card; HAND_SIZE], ParseError> {
    let mut seen = HashSet::with_capacity(HAND_SIZE);
    for card in cards {
        if !seen.insert(card) {
            return Err(ParseError::DuplicateCard(card.rank, card.suit));
        }
    }

    cards.sort_unstable();
    Ok(cards)
}
