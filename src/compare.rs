//! Total order over classified hands.

use core::cmp::Ordering;

use crate::card::Rank;
use crate::classify::Classification;

/// Compares two classifications.
///
/// The combination category decides first, then the primary rank, then the
/// kickers from the most significant down. Equal categories always carry the
/// same number of kickers.
#[must_use]
pub fn compare(a: &Classification, b: &Classification) -> Ordering {
    a.combination
        .cmp(&b.combination)
        .then_with(|| a.primary.cmp(&b.primary))
        .then_with(|| compare_kickers(&a.kickers, &b.kickers))
}

/// Compares kicker lists stored least significant first.
///
/// The first differing pair, walking from the end, decides. When one list is
/// a suffix of the other the longer list wins.
#[must_use]
pub fn compare_kickers(a: &[Rank], b: &[Rank]) -> Ordering {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .map(|(x, y)| x.cmp(y))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

impl PartialOrd for Classification {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Classification {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}
