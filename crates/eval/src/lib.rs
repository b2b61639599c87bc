// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! This crate evaluates Texas Hold'em hands of two hole cards plus up to five
//! community cards into a [HandEval], a hand category with its tie-break
//! kickers that orders hands by strength, and estimates the probability that
//! a hand beats one unknown opponent by Monte Carlo simulation of the unseen
//! cards.
//!
//! To resolve a showdown evaluate both hands against the same board and
//! compare:
//!
//! ```
//! # use showdown_eval::*;
//! let hole = ["AS".parse::<Card>().unwrap(), "KS".parse().unwrap()];
//! let board = ["QS", "JS", "TS", "5H", "2D"]
//!     .map(|s| s.parse::<Card>().unwrap());
//!
//! let eval = HandEval::eval(&hole, &board).unwrap();
//! assert_eq!(eval.category(), HandCategory::RoyalFlush);
//! ```
//!
//! To estimate a hand's equity before the board is complete:
//!
//! ```
//! # use showdown_eval::*;
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let hole = ["AS".parse::<Card>().unwrap(), "AH".parse().unwrap()];
//! let mut rng = SmallRng::seed_from_u64(42);
//! let percent = win_probability(&hole, &[], 1000, &mut rng).unwrap();
//! assert!(percent > 70);
//! ```
//!
//! The **`parallel`** feature adds `par_win_probability` that runs the same
//! simulation on a given number of tasks, each with an independent random
//! stream.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod equity;
pub mod eval;

pub use equity::win_probability;
pub use eval::{EvalError, HandCategory, HandEval};

#[cfg(feature = "parallel")]
pub use equity::par_win_probability;

// Reexport cards types.
pub use showdown_cards::{Card, Deck, DeckError, Rank, Suit};
