//! Poker combination categories.

use core::fmt;

/// The category a five card hand belongs to.
///
/// Variants are declared weakest first, so the derived ordering is the
/// category ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Combination {
    /// No other combination applies.
    HighCard,
    /// Two cards of one rank.
    Pair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
    /// Ten to ace in a single suit.
    RoyalFlush,
}

impl Combination {
    /// All combinations, weakest first.
    pub const ALL: [Self; 10] = [
        Self::HighCard,
        Self::Pair,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
        Self::RoyalFlush,
    ];

    /// Returns the upper-case name used when displaying a hand.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "HIGH_CARD",
            Self::Pair => "PAIR",
            Self::TwoPair => "TWO_PAIRS",
            Self::ThreeOfAKind => "THREE_OF_A_KIND",
            Self::Straight => "STRAIGHT",
            Self::Flush => "FLUSH",
            Self::FullHouse => "FULL_HOUSE",
            Self::FourOfAKind => "FOUR_OF_A_KIND",
            Self::StraightFlush => "STRAIGHT_FLUSH",
            Self::RoyalFlush => "ROYAL_FLUSH",
        }
    }

    /// Number of kickers a classification of this category carries.
    #[must_use]
    pub const fn kicker_count(self) -> usize {
        match self {
            Self::HighCard | Self::Flush => 4,
            Self::Pair => 3,
            Self::TwoPair | Self::ThreeOfAKind => 2,
            Self::FourOfAKind => 1,
            Self::Straight | Self::FullHouse | Self::StraightFlush | Self::RoyalFlush => 0,
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
