//! Seeded random hand generation.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, HAND_SIZE};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::HandOptions;
use crate::sync::Mutex;

/// Deals random hands from a shuffled 52 card shoe.
///
/// All methods take `&self`, so one dealer can be shared between threads.
/// The same seed always produces the same sequence of hands.
///
/// # Example
///
/// ```
/// use pokrs::{Dealer, HandOptions};
///
/// let dealer = Dealer::new(HandOptions::default(), 42);
/// let hands = dealer.deal_hands(10).unwrap();
/// assert_eq!(hands.len(), 10);
/// assert_eq!(dealer.cards_remaining(), 2);
/// ```
pub struct Dealer {
    /// Cards left in the shoe, dealt from the end.
    shoe: Mutex<Vec<Card>>,
    /// Options used to classify dealt hands.
    options: HandOptions,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Dealer {
    /// Creates a dealer with a freshly shuffled shoe.
    #[must_use]
    pub fn new(options: HandOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Self::create_deck(&mut rng);
        log::debug!("created shoe with seed {seed}");

        Self {
            shoe: Mutex::new(shoe),
            options,
            rng: Mutex::new(rng),
        }
    }

    /// Creates and shuffles a single deck.
    fn create_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend(Card::deck());
        cards.shuffle(rng);
        cards
    }

    /// Returns the options used to classify dealt hands.
    #[must_use]
    pub const fn options(&self) -> &HandOptions {
        &self.options
    }

    /// Returns the number of cards left in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.with(|shoe| shoe.len())
    }

    /// Puts all cards back and shuffles the shoe.
    pub fn reshuffle(&self) {
        let deck = self.rng.with(Self::create_deck);
        self.shoe.with(|shoe| *shoe = deck);
        log::debug!("reshuffled shoe");
    }

    /// Deals one hand from the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than five cards are left.
    pub fn deal_hand(&self) -> Result<Hand, DealError> {
        let cards = self.shoe.with(Self::draw)?;
        Ok(Hand::assemble(cards, &self.options))
    }

    /// Deals `count` hands from the shoe.
    ///
    /// Either all hands are dealt or none: the shoe is left untouched when it
    /// cannot cover the whole request.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the shoe cannot cover `count`
    /// hands.
    pub fn deal_hands(&self, count: usize) -> Result<Vec<Hand>, DealError> {
        let dealt = self.shoe.with(|shoe| {
            if shoe.len() < count.saturating_mul(HAND_SIZE) {
                return Err(DealError::NotEnoughCards {
                    remaining: shoe.len(),
                });
            }
            (0..count).map(|_| Self::draw(shoe)).collect::<Result<Vec<_>, _>>()
        })?;

        log::debug!("dealt {count} hands");
        Ok(dealt
            .into_iter()
            .map(|cards| Hand::assemble(cards, &self.options))
            .collect())
    }

    /// Deals a hand from a separate, freshly shuffled deck.
    ///
    /// The shoe is not touched, so this never runs out of cards.
    #[must_use]
    pub fn fresh_hand(&self) -> Hand {
        let deck = self.rng.with(Self::create_deck);
        let mut cards = [deck[0]; HAND_SIZE];
        cards.copy_from_slice(&deck[..HAND_SIZE]);
        Hand::assemble(cards, &self.options)
    }

    /// Takes five cards off the end of the shoe.
    fn draw(shoe: &mut Vec<Card>) -> Result<[Card; HAND_SIZE], DealError> {
        let remaining = shoe.len();
        let start = remaining
            .checked_sub(HAND_SIZE)
            .ok_or(DealError::NotEnoughCards { remaining })?;

        let mut cards = [shoe[start]; HAND_SIZE];
        cards.copy_from_slice(&shoe[start..]);
        shoe.truncate(start);
        Ok(cards)
    }
}
