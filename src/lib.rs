//! A five card poker hand classifier with optional `no_std` support.
//!
//! The crate parses the compact hand notation (`"AC JC KC QC TC"`), detects
//! which of the ten standard combinations a hand holds, and orders hands by
//! strength using the combination, its primary rank, and the kickers.
//!
//! # Example
//!
//! ```
//! use pokrs::{Combination, Hand, sort_strongest_first};
//!
//! let mut hands = vec![
//!     Hand::new("JC JS 3D 3H 6C").unwrap(),
//!     Hand::new("AC JC KC QC TC").unwrap(),
//!     Hand::new("JC JS JD 3H 6C").unwrap(),
//! ];
//! sort_strongest_first(&mut hands);
//!
//! assert_eq!(hands[0].combination(), Combination::RoyalFlush);
//! assert_eq!(hands[1].combination(), Combination::ThreeOfAKind);
//! assert_eq!(hands[2].combination(), Combination::TwoPair);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod classify;
pub mod combination;
pub mod compare;
pub mod dealer;
pub mod error;
pub mod hand;
pub mod options;
pub mod parser;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit};
pub use classify::{Classification, classify};
pub use combination::Combination;
pub use compare::{compare, compare_kickers};
pub use dealer::Dealer;
pub use error::{DealError, ParseError};
pub use hand::{Hand, sort_strongest_first, sort_weakest_first};
pub use options::HandOptions;
pub use parser::{parse_hand, parse_hand_opt};
