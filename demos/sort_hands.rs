//! Deals or parses poker hands and prints them strongest first.
//!
//! ```bash
//! $ cargo run --example sort_hands -- --count 10 --seed 42
//! $ cargo run --example sort_hands -- "AC JC KC QC TC" "JC JS JD 3H 6C"
//! ```

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use pokrs::{Dealer, Hand, HandOptions, sort_strongest_first};

#[derive(Debug, Parser)]
struct Cli {
    /// Hands to rank, e.g. "AC JC KC QC TC". Random hands are dealt when empty.
    hands: Vec<String>,
    /// Number of random hands to deal.
    #[clap(long, short, default_value_t = 10)]
    count: usize,
    /// Seed for the dealer, defaults to the current time.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Let the ace play low in A-2-3-4-5 straights.
    #[clap(long)]
    ace_low: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let options = HandOptions::default().with_ace_low_straight(cli.ace_low);

    let hands: Result<Vec<Hand>, String> = if cli.hands.is_empty() {
        Ok(deal(&cli, options))
    } else {
        cli.hands
            .iter()
            .map(|text| Hand::with_options(text, &options).map_err(|err| format!("{text}: {err}")))
            .collect()
    };

    match hands {
        Ok(mut hands) => {
            sort_strongest_first(&mut hands);
            for hand in &hands {
                println!("{hand}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Deals `count` hands, reshuffling whenever the shoe runs low.
fn deal(cli: &Cli, options: HandOptions) -> Vec<Hand> {
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("dealing {} hands with seed {seed}", cli.count);

    let dealer = Dealer::new(options, seed);
    let mut hands = Vec::with_capacity(cli.count);
    while hands.len() < cli.count {
        match dealer.deal_hand() {
            Ok(hand) => hands.push(hand),
            Err(err) => {
                log::debug!("{err}, reshuffling");
                dealer.reshuffle();
            }
        }
    }
    hands
}
