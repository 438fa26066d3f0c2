//! Combination detection for five card hands.

use alloc::vec::Vec;

use crate::card::{Card, HAND_SIZE, Rank};
use crate::combination::Combination;
use crate::options::HandOptions;

/// Rank sum of ten, jack, queen, king and ace.
const ROYAL_RANK_SUM: u32 = 60;

/// The outcome of classifying a hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classification {
    /// The combination category.
    pub combination: Combination,
    /// The rank anchoring the combination, e.g. the quad's rank.
    pub primary: Rank,
    /// Remaining ranks used to break ties, least significant first.
    ///
    /// For every category but two pair this is ascending rank order. A two
    /// pair stores the unpaired card before the lower pair, as the lower pair
    /// decides a tie before the odd card does.
    pub kickers: Vec<Rank>,
}

impl Classification {
    fn new(combination: Combination, primary: Rank, kickers: Vec<Rank>) -> Self {
        debug_assert_eq!(kickers.len(), combination.kicker_count());
        Self {
            combination,
            primary,
            kickers,
        }
    }
}

/// Per rank card counts of a hand.
struct RankCounts([u8; 15]);

impl RankCounts {
    fn new(ranks: &[Rank; HAND_SIZE]) -> Self {
        let mut counts = [0; 15];
        for rank in ranks {
            counts[rank.value() as usize] += 1;
        }
        Self(counts)
    }

    /// Ranks held exactly `count` times, lowest first.
    fn with_count(&self, count: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ALL
            .into_iter()
            .filter(move |rank| self.0[rank.value() as usize] == count)
    }

    fn distinct(&self) -> usize {
        self.0.iter().filter(|&&count| count > 0).count()
    }
}

/// Returns the high card of a straight, if the ranks form one.
fn straight_high(
    ranks: &[Rank; HAND_SIZE],
    distinct: usize,
    options: &HandOptions,
) -> Option<Rank> {
    if distinct != HAND_SIZE {
        return None;
    }

    let (low, high) = (ranks[0], ranks[HAND_SIZE - 1]);
    if high.value() - low.value() == 4 {
        return Some(high);
    }

    let wheel = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];
    (options.ace_low_straight && *ranks == wheel).then_some(Rank::Five)
}

/// Classifies five cards.
///
/// Checks run in strict priority order and the first match wins, with high
/// card as the fallback, so every hand gets exactly one combination. The
/// cards are expected to be sorted by rank as returned by
/// [`parse_hand`](crate::parse_hand), though any order gives the same result.
///
/// # Example
///
/// ```
/// use pokrs::{Combination, HandOptions, Rank, classify, parse_hand};
///
/// let cards = parse_hand("JC JS JD JH 6C").unwrap();
/// let result = classify(&cards, &HandOptions::default());
/// assert_eq!(result.combination, Combination::FourOfAKind);
/// assert_eq!(result.primary, Rank::Jack);
/// assert_eq!(result.kickers, [Rank::Six]);
/// ```
#[must_use]
pub fn classify(cards: &[Card; HAND_SIZE], options: &HandOptions) -> Classification {
    let mut ranks = cards.map(|card| card.rank);
    ranks.sort_unstable();

    let counts = RankCounts::new(&ranks);
    let distinct = counts.distinct();
    let high = ranks[HAND_SIZE - 1];

    let flush = cards.iter().all(|card| card.suit == cards[0].suit);
    let straight = straight_high(&ranks, distinct, options);

    // Ranks other than `skip`, lowest first.
    let others = |skip: Rank| -> Vec<Rank> {
        ranks.iter().copied().filter(|&rank| rank != skip).collect()
    };

    if let (true, Some(top)) = (flush, straight) {
        let sum: u32 = ranks.iter().map(|rank| u32::from(rank.value())).sum();
        let combination = if sum == ROYAL_RANK_SUM {
            Combination::RoyalFlush
        } else {
            Combination::StraightFlush
        };
        return Classification::new(combination, top, Vec::new());
    }

    if let Some(quad) = counts.with_count(4).next() {
        return Classification::new(Combination::FourOfAKind, quad, others(quad));
    }

    if let (2, Some(trips)) = (distinct, counts.with_count(3).next()) {
        return Classification::new(Combination::FullHouse, trips, Vec::new());
    }

    if flush {
        return Classification::new(Combination::Flush, high, ranks[..HAND_SIZE - 1].to_vec());
    }

    if let Some(top) = straight {
        return Classification::new(Combination::Straight, top, Vec::new());
    }

    if let Some(trips) = counts.with_count(3).next() {
        return Classification::new(Combination::ThreeOfAKind, trips, others(trips));
    }

    let pairs: Vec<Rank> = counts.with_count(2).collect();
    match *pairs.as_slice() {
        [low, high_pair] => {
            let mut kickers: Vec<Rank> = counts.with_count(1).collect();
            kickers.push(low);
            Classification::new(Combination::TwoPair, high_pair, kickers)
        }
        [pair] => Classification::new(Combination::Pair, pair, others(pair)),
        _ => Classification::new(Combination::HighCard, high, ranks[..HAND_SIZE - 1].to_vec()),
    }
}
