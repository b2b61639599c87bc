// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0
//
// Print the heads-up preflop win-rate chart for all starting hands:
//
// ```bash
// $ cargo r --release --features=parallel --example chart
// ```
use clap::Parser;
use std::time::Instant;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Simulation trials per starting hand.
    #[clap(long, short, default_value_t = 100_000)]
    trials: u32,
    /// Number of parallel tasks.
    #[clap(long, short, default_value_t = 4)]
    num_tasks: usize,
}

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    separator();

    let now = Instant::now();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let (c1, c2) = if r1 <= r2 {
                // Offsuit or pair.
                (Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades))
            } else {
                // Suited cards.
                (Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts))
            };

            if c1.rank() == c2.rank() {
                labels.push(format!("{}{} ", c1.rank(), c2.rank()));
            } else if c1.suit() == c2.suit() {
                labels.push(format!("{}{}s", c1.rank(), c2.rank()));
            } else {
                labels.push(format!("{}{}o", c1.rank(), c2.rank()));
            }

            let percent = par_win_probability(&[c1, c2], &[], cli.trials, cli.num_tasks)
                .expect("valid preflop hand");
            probs.push(percent);
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }
        println!();

        print!("|");
        for prob in &probs {
            print!(" {prob:2}% |");
        }
        println!();

        separator();
    }

    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
}
