//! The hand aggregate: five cards plus their classification.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::card::{Card, HAND_SIZE, Rank};
use crate::classify::{Classification, classify};
use crate::combination::Combination;
use crate::compare::compare;
use crate::error::ParseError;
use crate::options::HandOptions;
use crate::parser::{parse_hand, validate};

/// A classified five card hand.
///
/// A hand is built once and never changes afterwards. Equality and hashing
/// cover the sorted cards and the classification, so the same cards written
/// in a different order give equal hands.
///
/// Hand strength is exposed through [`Hand::compare`] rather than `Ord`:
/// two hands can tie in strength while holding different suits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    /// Cards sorted by rank, lowest first.
    cards: [Card; HAND_SIZE],
    /// Classification computed at construction.
    classification: Classification,
}

impl Hand {
    /// Parses and classifies a hand with the default options.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is not five distinct cards.
    ///
    /// # Example
    ///
    /// ```
    /// use pokrs::{Combination, Hand};
    ///
    /// let hand = Hand::new("AC JC KC QC TC").unwrap();
    /// assert_eq!(hand.combination(), Combination::RoyalFlush);
    /// assert_eq!(hand.to_string(), "ROYAL_FLUSH: TC JC QC KC AC");
    /// ```
    pub fn new(text: &str) -> Result<Self, ParseError> {
        Self::with_options(text, &HandOptions::default())
    }

    /// Parses and classifies a hand with the given options.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is not five distinct cards.
    pub fn with_options(text: &str, options: &HandOptions) -> Result<Self, ParseError> {
        let cards = parse_hand(text)?;
        Ok(Self::assemble(cards, options))
    }

    /// Builds a hand from already parsed cards, in any order.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::DuplicateCard`] if a card appears twice.
    pub fn from_cards(cards: [Card; HAND_SIZE], options: &HandOptions) -> Result<Self, ParseError> {
        let cards = validate(cards)?;
        Ok(Self::assemble(cards, options))
    }

    /// Classifies cards that are known to be distinct.
    pub(crate) fn assemble(mut cards: [Card; HAND_SIZE], options: &HandOptions) -> Self {
        cards.sort_unstable();
        let classification = classify(&cards, options);
        log::trace!(
            "classified {:?} as {} (primary {})",
            cards,
            classification.combination,
            classification.primary
        );

        Self {
            cards,
            classification,
        }
    }

    /// Returns the cards, sorted by rank.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the full classification.
    #[must_use]
    pub const fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Returns the combination category.
    #[must_use]
    pub const fn combination(&self) -> Combination {
        self.classification.combination
    }

    /// Returns the rank anchoring the combination.
    #[must_use]
    pub const fn primary(&self) -> Rank {
        self.classification.primary
    }

    /// Returns the tie-break ranks, least significant first.
    #[must_use]
    pub fn kickers(&self) -> &[Rank] {
        &self.classification.kickers
    }

    /// Compares hand strength.
    ///
    /// Usable directly as a sort comparator: `hands.sort_by(Hand::compare)`
    /// orders weakest first.
    ///
    /// # Example
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use pokrs::Hand;
    ///
    /// let three = Hand::new("JC JS JD 3H 6C").unwrap();
    /// let two_pair = Hand::new("JC JS 3D 3H 6C").unwrap();
    /// assert_eq!(three.compare(&two_pair), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        compare(&self.classification, &other.classification)
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.classification.combination)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

/// Sorts hands with the strongest first.
pub fn sort_strongest_first(hands: &mut [Hand]) {
    hands.sort_by(|a, b| b.compare(a));
}

/// Sorts hands with the weakest first.
pub fn sort_weakest_first(hands: &mut [Hand]) {
    hands.sort_by(Hand::compare);
}
