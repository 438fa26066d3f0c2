//! Card types and the character mapping used by the hand notation.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;

/// Card rank, from deuce (2) to ace (14).
///
/// Ranks are ordered by face value with the ace always high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Rank {
    /// Deuce.
    Two = 2,
    /// Trey.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the numeric value of the rank (2..=14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given numeric value, if any.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            2..=14 => Some(Self::ALL[(value - 2) as usize]),
            _ => None,
        }
    }

    /// Parses a rank character (`2`-`9`, `T`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '2'..='9' => Self::from_value(c as u8 - b'0'),
            _ => None,
        }
    }

    /// Returns the character used for this rank in the hand notation.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
            _ => (b'0' + self.value()) as char,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card suit.
///
/// Suits only matter for flush detection, they never add to a hand's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Parses a suit character (`S`, `H`, `D`, `C`).
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'S' => Some(Self::Spades),
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            _ => None,
        }
    }

    /// Returns the character used for this suit in the hand notation.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A playing card.
///
/// Cards order by rank first and suit second, so sorting a hand gives the
/// same sequence whatever order the cards were written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns an iterator over the 52 cards of a standard deck.
    pub fn deck() -> impl Iterator<Item = Self> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Self::new(rank, suit)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseError;

    /// Parses a two character token such as `AS` or `9D`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseError::MalformedCardToken(token.into()));
        };

        let rank = Rank::from_char(rank).ok_or(ParseError::InvalidRank(rank))?;
        let suit = Suit::from_char(suit).ok_or(ParseError::InvalidSuit(suit))?;
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;
