//! Error types for hand parsing and dealing.

use alloc::string::String;

use thiserror::Error;

use crate::card::{Rank, Suit};

/// Errors that can occur while parsing a hand.
///
/// Parsing stops at the first problem found, no partially built hand is
/// ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No input was given.
    #[error("entry string cannot be null")]
    NullInput,
    /// The input does not hold exactly five cards.
    #[error("there must be exactly 5 cards in the hand, but there are {0}")]
    WrongCardCount(usize),
    /// A card token is not exactly two characters long.
    #[error("the card should contain 2 attributes, but `{0}` does not")]
    MalformedCardToken(String),
    /// Unknown rank character.
    #[error("unexpected card rank `{0}`")]
    InvalidRank(char),
    /// Unknown suit character.
    #[error("unexpected card suit `{0}`")]
    InvalidSuit(char),
    /// The same card appears twice in one hand.
    #[error("unique cards must be in hand, but there is a duplicate with card {0}{1}")]
    DuplicateCard(Rank, Suit),
}

/// Errors that can occur while dealing hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the shoe.
    #[error("not enough cards in the shoe ({remaining} left)")]
    NotEnoughCards {
        /// Cards left in the shoe when the deal was attempted.
        remaining: usize,
    },
}
