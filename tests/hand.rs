//! Hand parsing, classification and ordering tests.

use core::cmp::Ordering;
use std::collections::HashSet;

use pokrs::{
    Card, Combination, Hand, HandOptions, ParseError, Rank, Suit, classify, compare_kickers,
    parse_hand, parse_hand_opt, sort_strongest_first, sort_weakest_first,
};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

fn hand(text: &str) -> Hand {
    Hand::new(text).unwrap()
}

fn ranks(values: &[u8]) -> Vec<Rank> {
    values
        .iter()
        .map(|&value| Rank::from_value(value).unwrap())
        .collect()
}

fn assert_hand(text: &str, combination: Combination, primary: u8, kickers: &[u8]) {
    let hand = hand(text);
    assert_eq!(hand.combination(), combination, "{text}");
    assert_eq!(hand.primary().value(), primary, "{text}");
    assert_eq!(hand.kickers(), ranks(kickers), "{text}");
}

/// One hand of every category, strongest first.
const LADDER: [(&str, Combination); 10] = [
    ("AC JC KC QC TC", Combination::RoyalFlush),
    ("9C JC KC QC TC", Combination::StraightFlush),
    ("JC JS JD JH 6C", Combination::FourOfAKind),
    ("JC JS JD 6H 6C", Combination::FullHouse),
    ("AC 2C KC QC TC", Combination::Flush),
    ("3S 2C 4H 5C 6D", Combination::Straight),
    ("JC JS JD 3H 6C", Combination::ThreeOfAKind),
    ("JC JS 3D 3H 6C", Combination::TwoPair),
    ("JC JS 4D 3H 6C", Combination::Pair),
    ("AC QS TD 3H 6C", Combination::HighCard),
];

/// Several hands per category, strongest first within each category.
const MIXED: [&str; 24] = [
    "AC JC KC QC TC",
    "9C JC KC QC TC",
    "9S JS 8S QS TS",
    "QC QS QD QH 7C",
    "JC JS JD JH AC",
    "QC QS QD 2H 2C",
    "JC JS JD AH AC",
    "2C 3C 9C JC KC",
    "5S 6S 7S JS KS",
    "3S 4C 5C 6S 7S",
    "3S 2C 4H 5C 6D",
    "QC QS QD 2H 7C",
    "JC JS JD 3H 9C",
    "QD QH 4S 4C 7C",
    "QC QS 4D 4H 6C",
    "JC JS 4D 4H 6C",
    "3C 3S TD TH 4C",
    "TD TH 2S 2C 9C",
    "KC KS 4D 2H 6C",
    "JC JS 4D 3H 6C",
    "7C 7S 4D 3H 5C",
    "7C 7S 2D 3H 5C",
    "AC QS TD 3H 6C",
    "KC QC TS 4H 5C",
];

#[test]
fn classifies_each_combination() {
    assert_hand("AC JC KC QC TC", Combination::RoyalFlush, 14, &[]);
    assert_hand("9C JC KC QC TC", Combination::StraightFlush, 13, &[]);
    assert_hand("JC JS JD JH 6C", Combination::FourOfAKind, 11, &[6]);
    assert_hand("JC JS JD 6H 6C", Combination::FullHouse, 11, &[]);
    assert_hand("6C 6S 6D JH JC", Combination::FullHouse, 6, &[]);
    assert_hand("AC 2C KC QC TC", Combination::Flush, 14, &[2, 10, 12, 13]);
    assert_hand("3S 2C 4H 5C 6D", Combination::Straight, 6, &[]);
    assert_hand("JC JS JD 3H 6C", Combination::ThreeOfAKind, 11, &[3, 6]);
    assert_hand("JC JS 3D 3H 6C", Combination::TwoPair, 11, &[6, 3]);
    assert_hand("JC JS 3D 3H 2C", Combination::TwoPair, 11, &[2, 3]);
    assert_hand("JC JS 4D 3H 6C", Combination::Pair, 11, &[3, 4, 6]);
    assert_hand("AC QS TD 3H 6C", Combination::HighCard, 14, &[3, 6, 10, 12]);
}

#[test]
fn royal_ranks_need_a_single_suit() {
    assert_hand("TC JC QC KC AC", Combination::RoyalFlush, 14, &[]);
    assert_hand("TC JD QC KC AC", Combination::Straight, 14, &[]);
    assert_hand("TH JH QH KH AH", Combination::RoyalFlush, 14, &[]);
}

#[test]
fn wheel_is_not_a_straight_by_default() {
    assert_hand("AS 2H 3D 4C 5S", Combination::HighCard, 14, &[2, 3, 4, 5]);
    assert_hand("AS 2S 3S 4S 5S", Combination::Flush, 14, &[2, 3, 4, 5]);
}

#[test]
fn wheel_plays_ace_low_when_enabled() {
    let options = HandOptions::default().with_ace_low_straight(true);

    let wheel = Hand::with_options("AS 2H 3D 4C 5S", &options).unwrap();
    assert_eq!(wheel.combination(), Combination::Straight);
    assert_eq!(wheel.primary(), Rank::Five);
    assert!(wheel.kickers().is_empty());

    let steel_wheel = Hand::with_options("AS 2S 3S 4S 5S", &options).unwrap();
    assert_eq!(steel_wheel.combination(), Combination::StraightFlush);
    assert_eq!(steel_wheel.primary(), Rank::Five);

    let six_high = Hand::with_options("2C 3D 4H 5S 6C", &options).unwrap();
    assert_eq!(six_high.compare(&wheel), Ordering::Greater);

    // Royal flush stays ace high.
    let royal = Hand::with_options("AC JC KC QC TC", &options).unwrap();
    assert_eq!(royal.combination(), Combination::RoyalFlush);
}

#[test]
fn classification_is_deterministic_and_order_independent() {
    let options = HandOptions::default();
    for text in MIXED {
        let cards = parse_hand(text).unwrap();
        let first = classify(&cards, &options);
        assert_eq!(classify(&cards, &options), first);

        let mut reversed = cards;
        reversed.reverse();
        assert_eq!(classify(&reversed, &options), first, "{text}");
    }
}

#[test]
fn ladder_sorts_regardless_of_shuffle() {
    for seed in 0..20 {
        let mut hands: Vec<Hand> = LADDER.iter().map(|(text, _)| hand(text)).collect();
        hands.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        sort_strongest_first(&mut hands);

        let combinations: Vec<Combination> = hands.iter().map(Hand::combination).collect();
        let expected: Vec<Combination> = LADDER.iter().map(|(_, c)| *c).collect();
        assert_eq!(combinations, expected, "seed {seed}");
    }
}

#[test]
fn mixed_hands_sort_strongest_first() {
    let expected: Vec<Hand> = MIXED.iter().map(|text| hand(text)).collect();

    for seed in 0..20 {
        let mut hands = expected.clone();
        hands.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        sort_strongest_first(&mut hands);
        assert_eq!(hands, expected, "seed {seed}");

        sort_weakest_first(&mut hands);
        let reversed: Vec<Hand> = expected.iter().rev().cloned().collect();
        assert_eq!(hands, reversed, "seed {seed}");
    }
}

#[test]
fn three_of_a_kind_beats_two_pair() {
    let three = hand("JC JS JD 3H 6C");
    let two_pair = hand("JC JS 3D 3H 6C");
    assert_eq!(three.compare(&two_pair), Ordering::Greater);
    assert_eq!(two_pair.compare(&three), Ordering::Less);
}

#[test]
fn tie_breaks_within_a_category() {
    // Higher straight flush.
    assert_eq!(
        hand("9S JS 8S QS TS").compare(&hand("9C JC KC QC TC")),
        Ordering::Less
    );
    // Flush kickers from the top down.
    assert_eq!(
        hand("5S 6S 7S JS KS").compare(&hand("2C 3C 9C JC KC")),
        Ordering::Less
    );
    // Two pair: lower pair decides before the odd card.
    assert_eq!(
        hand("3C 3S 4C TH TD").compare(&hand("2S 2C 9C TH TD")),
        Ordering::Greater
    );
    assert_eq!(
        hand("2S 2C 9C TH TD").compare(&hand("QC QS 4D 4H 6C")),
        Ordering::Less
    );
    // Two pair: same pairs, the odd card decides.
    assert_eq!(
        hand("JC JS 3D 3H 6C").compare(&hand("JD JH 3S 3C 9D")),
        Ordering::Less
    );
    // Pair kickers.
    assert_eq!(
        hand("JC JS 2D 3H 6C").compare(&hand("JC JS 4D 3H 6C")),
        Ordering::Less
    );
    // High card.
    assert_eq!(
        hand("AC QS TD 3H 6C").compare(&hand("KC QC TS 4H 5C")),
        Ordering::Greater
    );
}

#[test]
fn same_strength_different_suits_compare_equal() {
    let a = hand("JC JS 3D 3H 6C");
    let b = hand("JD JH 3S 3C 6D");
    assert_eq!(a.compare(&b), Ordering::Equal);
    assert_ne!(a, b);

    let royal_clubs = hand("AC JC KC QC TC");
    let royal_spades = hand("AS JS KS QS TS");
    assert_eq!(royal_clubs.compare(&royal_spades), Ordering::Equal);
}

#[test]
fn compare_is_a_total_order() {
    let hands: Vec<Hand> = MIXED.iter().map(|text| hand(text)).collect();

    for a in &hands {
        assert_eq!(a.compare(a), Ordering::Equal);
        for b in &hands {
            assert_eq!(a.compare(b), b.compare(a).reverse());
            for c in &hands {
                if a.compare(b).is_le() && b.compare(c).is_le() {
                    assert!(a.compare(c).is_le());
                }
            }
        }
    }
}

#[test]
fn kickers_compare_from_the_top() {
    let low = ranks(&[2, 3, 9, 11]);
    let high = ranks(&[5, 6, 7, 11]);
    assert_eq!(compare_kickers(&low, &high), Ordering::Greater);
    assert_eq!(compare_kickers(&high, &high), Ordering::Equal);
    assert_eq!(compare_kickers(&[], &[]), Ordering::Equal);
}

#[test]
fn reordered_tokens_give_equal_hands() {
    let a = hand("AC JC KC QC TC");
    let b = hand("TC QC JC KC AC");
    assert_eq!(a, b);

    let pair_a = hand("JC JS 4D 3H 6C");
    let pair_b = hand("JS 6C JC 3H 4D");
    assert_eq!(pair_a, pair_b);

    let set: HashSet<Hand> = [a, b, pair_a, pair_b].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn display_lists_sorted_cards() {
    assert_eq!(hand("AC JC KC QC TC").to_string(), "ROYAL_FLUSH: TC JC QC KC AC");
    assert_eq!(hand("3S 2C 4H 5C 6D").to_string(), "STRAIGHT: 2C 3S 4H 5C 6D");
    assert_eq!(hand("JC JS 3D 3H 6C").to_string(), "TWO_PAIRS: 3H 3D 6C JS JC");
}

#[test]
fn display_round_trips_through_the_parser() {
    for text in MIXED {
        let original = hand(text);
        let display = original.to_string();
        let (name, cards) = display.split_once(": ").unwrap();

        assert_eq!(name, original.combination().name());
        assert_eq!(hand(cards), original, "{display}");
        assert_eq!(cards.parse::<Hand>().unwrap(), original);
    }
}

#[test]
fn rank_and_suit_characters_are_bijective() {
    let rank_chars: HashSet<char> = Rank::ALL.iter().map(|rank| rank.to_char()).collect();
    assert_eq!(rank_chars.len(), 13);
    for rank in Rank::ALL {
        assert_eq!(Rank::from_char(rank.to_char()), Some(rank));
        assert_eq!(Rank::from_value(rank.value()), Some(rank));
    }
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ace.value(), 14);
    assert_eq!(Rank::from_value(1), None);
    assert_eq!(Rank::from_value(15), None);

    let suit_chars: HashSet<char> = Suit::ALL.iter().map(|suit| suit.to_char()).collect();
    assert_eq!(suit_chars.len(), 4);
    for suit in Suit::ALL {
        assert_eq!(Suit::from_char(suit.to_char()), Some(suit));
    }
}

#[test]
fn card_tokens_parse() {
    assert_eq!("TD".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
    assert_eq!("9S".parse::<Card>(), Ok(Card::new(Rank::Nine, Suit::Spades)));
    assert_eq!(Card::new(Rank::Queen, Suit::Hearts).to_string(), "QH");
    assert_eq!(Card::deck().collect::<HashSet<_>>().len(), pokrs::DECK_SIZE);
}

#[test]
fn parse_errors() {
    assert_eq!(
        Hand::new("AS AS TD 3H 6C").unwrap_err(),
        ParseError::DuplicateCard(Rank::Ace, Suit::Spades)
    );
    assert_eq!(
        Hand::new("AC QS TD 3H").unwrap_err(),
        ParseError::WrongCardCount(4)
    );
    assert_eq!(
        Hand::new("AC QS TD 3H 6C 7C").unwrap_err(),
        ParseError::WrongCardCount(6)
    );
    assert_eq!(Hand::new("").unwrap_err(), ParseError::WrongCardCount(0));
    assert_eq!(
        Hand::new("21S AS TD 3H 6C").unwrap_err(),
        ParseError::MalformedCardToken("21S".into())
    );
    assert_eq!(
        Hand::new("A AS TD 3H 6C").unwrap_err(),
        ParseError::MalformedCardToken("A".into())
    );
    assert_eq!(
        Hand::new("ZC QS TD 3H 6C").unwrap_err(),
        ParseError::InvalidRank('Z')
    );
    assert_eq!(
        Hand::new("1C QS TD 3H 6C").unwrap_err(),
        ParseError::InvalidRank('1')
    );
    assert_eq!(
        Hand::new("ac QS TD 3H 6C").unwrap_err(),
        ParseError::InvalidRank('a')
    );
    assert_eq!(
        Hand::new("AX QS TD 3H 6C").unwrap_err(),
        ParseError::InvalidSuit('X')
    );
    assert_eq!(parse_hand_opt(None).unwrap_err(), ParseError::NullInput);
}

#[test]
fn parse_error_messages() {
    assert_eq!(
        ParseError::WrongCardCount(4).to_string(),
        "there must be exactly 5 cards in the hand, but there are 4"
    );
    assert_eq!(
        ParseError::DuplicateCard(Rank::Ace, Suit::Spades).to_string(),
        "unique cards must be in hand, but there is a duplicate with card AS"
    );
    assert_eq!(
        ParseError::InvalidSuit('X').to_string(),
        "unexpected card suit `X`"
    );
}

#[test]
fn parser_accepts_extra_whitespace() {
    let cards = parse_hand("  AC\tJC KC  QC TC \n").unwrap();
    assert_eq!(cards, parse_hand("AC JC KC QC TC").unwrap());
    assert_eq!(parse_hand_opt(Some("AC JC KC QC TC")).unwrap(), cards);
}

#[test]
fn from_cards_validates_and_sorts() {
    let cards = [
        Card::new(Rank::Ace, Suit::Clubs),
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::King, Suit::Clubs),
        Card::new(Rank::Queen, Suit::Clubs),
        Card::new(Rank::Ten, Suit::Clubs),
    ];
    let built = Hand::from_cards(cards, &HandOptions::default()).unwrap();
    assert_eq!(built, hand("AC 2C KC QC TC"));
    assert_eq!(built.cards()[0].rank, Rank::Two);

    let mut duplicated = cards;
    duplicated[4] = duplicated[1];
    assert_eq!(
        Hand::from_cards(duplicated, &HandOptions::default()).unwrap_err(),
        ParseError::DuplicateCard(Rank::Two, Suit::Clubs)
    );
}

#[test]
fn every_five_card_hand_gets_one_combination() {
    let deck: Vec<Card> = Card::deck().collect();
    let mut counts = [0usize; 10];
    let options = HandOptions::default();

    let n = deck.len();
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    for e in (d + 1)..n {
                        let cards = [deck[a], deck[b], deck[c], deck[d], deck[e]];
                        counts[classify(&cards, &options).combination as usize] += 1;
                    }
                }
            }
        }
    }

    // The wheel is neither a straight nor a straight flush under the
    // default options.
    assert_eq!(
        counts,
        [1_303_560, 1_098_240, 123_552, 54_912, 9_180, 5_112, 3_744, 624, 32, 4]
    );
    assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
}
