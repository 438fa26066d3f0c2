//! Hand evaluation options.

/// Rules applied when classifying a hand.
///
/// The defaults follow the classic evaluation where the ace is always high.
/// Use the builder methods to customize:
///
/// ```
/// use pokrs::HandOptions;
///
/// let options = HandOptions::default().with_ace_low_straight(true);
/// assert!(options.ace_low_straight);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HandOptions {
    /// Whether A-2-3-4-5 counts as a straight, with the ace playing low.
    ///
    /// A wheel straight has a primary value of 5 and is never a royal flush.
    pub ace_low_straight: bool,
}

impl HandOptions {
    /// Sets whether the ace may play low in a straight.
    ///
    /// # Example
    ///
    /// ```
    /// use pokrs::{Combination, Hand, HandOptions};
    ///
    /// let options = HandOptions::default().with_ace_low_straight(true);
    /// let hand = Hand::with_options("AS 2H 3D 4C 5S", &options).unwrap();
    /// assert_eq!(hand.combination(), Combination::Straight);
    /// ```
    #[must_use]
    pub const fn with_ace_low_straight(mut self, enabled: bool) -> Self {
        self.ace_low_straight = enabled;
        self
    }
}
