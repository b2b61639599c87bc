// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0
//
// Evaluate a hand and estimate its equity against one opponent:
//
// ```bash
// $ cargo r --example equity -- AS KH --board QS JS TS
// ```
use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::SmallRng};

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The two hole cards, as in AS KH.
    #[clap(num_args = 2, required = true)]
    hole: Vec<String>,
    /// The community cards dealt so far, up to five.
    #[clap(long, short, num_args = 1..=5)]
    board: Vec<String>,
    /// Number of simulation trials.
    #[clap(long, short, default_value_t = 1000)]
    trials: u32,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let hole = parse_cards(&cli.hole)?;
    let board = parse_cards(&cli.board)?;

    let eval = HandEval::eval(&hole, &board)?;
    println!("Hand:            {}", join(&hole));
    if !board.is_empty() {
        println!("Board:           {}", join(&board));
    }
    println!("Evaluation:      {eval}");

    let mut rng = SmallRng::from_os_rng();
    let percent = win_probability(&hole, &board, cli.trials, &mut rng)?;
    println!("Win probability: {percent}%");

    Ok(())
}

fn parse_cards(values: &[String]) -> Result<Vec<Card>> {
    values
        .iter()
        .map(|v| Ok(v.parse::<Card>()?))
        .collect()
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
