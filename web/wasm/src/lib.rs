use core::cmp::Ordering;

use pokrs::{Card, Combination, Dealer, Hand, HandOptions, Rank, parse_hand_opt};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Parses and classifies a hand, returning a `JsHand` view.
#[wasm_bindgen]
pub fn classify(text: Option<String>, ace_low: bool) -> Result<JsValue, JsValue> {
    let hand = parse(text.as_deref(), ace_low)?;
    to_js_value(&JsHand::from(&hand))
}

/// Compares two hands, returning -1, 0 or 1.
#[wasm_bindgen]
pub fn compare(a: Option<String>, b: Option<String>, ace_low: bool) -> Result<i32, JsValue> {
    let a = parse(a.as_deref(), ace_low)?;
    let b = parse(b.as_deref(), ace_low)?;
    Ok(match a.compare(&b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    })
}

/// Sorts hands and returns their display strings.
#[wasm_bindgen(js_name = sortHands)]
pub fn sort_hands(
    hands: Vec<String>,
    strongest_first: bool,
    ace_low: bool,
) -> Result<Vec<String>, JsValue> {
    let mut parsed = hands
        .iter()
        .map(|text| parse(Some(text.as_str()), ace_low))
        .collect::<Result<Vec<_>, _>>()?;

    if strongest_first {
        pokrs::sort_strongest_first(&mut parsed);
    } else {
        pokrs::sort_weakest_first(&mut parsed);
    }
    Ok(parsed.iter().map(ToString::to_string).collect())
}

#[wasm_bindgen]
pub struct WasmDealer {
    dealer: Dealer,
}

#[wasm_bindgen]
impl WasmDealer {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, ace_low: bool) -> Self {
        Self {
            dealer: Dealer::new(options(ace_low), seed as u64),
        }
    }

    pub fn deal(&self) -> Result<JsValue, JsValue> {
        let hand = self.dealer.deal_hand().map_err(js_err)?;
        to_js_value(&JsHand::from(&hand))
    }

    pub fn fresh(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsHand::from(&self.dealer.fresh_hand()))
    }

    pub fn reshuffle(&self) {
        self.dealer.reshuffle();
    }

    pub fn cards_remaining(&self) -> u32 {
        self.dealer.cards_remaining() as u32
    }
}

#[derive(Serialize)]
struct JsCard {
    rank: u8,
    suit: &'static str,
    text: String,
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank.value(),
            suit: suit_to_str(card),
            text: card.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsHand {
    combination: Combination,
    name: &'static str,
    primary: u8,
    kickers: Vec<u8>,
    cards: Vec<JsCard>,
    display: String,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            combination: hand.combination(),
            name: hand.combination().name(),
            primary: hand.primary().value(),
            kickers: hand.kickers().iter().copied().map(Rank::value).collect(),
            cards: hand.cards().iter().copied().map(JsCard::from).collect(),
            display: hand.to_string(),
        }
    }
}

fn suit_to_str(card: Card) -> &'static str {
    match card.suit {
        pokrs::Suit::Spades => "Spades",
        pokrs::Suit::Hearts => "Hearts",
        pokrs::Suit::Diamonds => "Diamonds",
        pokrs::Suit::Clubs => "Clubs",
    }
}

fn options(ace_low: bool) -> HandOptions {
    HandOptions::default().with_ace_low_straight(ace_low)
}

fn parse(text: Option<&str>, ace_low: bool) -> Result<Hand, JsValue> {
    let cards = parse_hand_opt(text).map_err(js_err)?;
    Hand::from_cards(cards, &options(ace_low)).map_err(js_err)
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
