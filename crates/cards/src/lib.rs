// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines value types for cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! and a [Deck] type holding the 52 cards in a buffer partitioned by a deal
//! cursor, with shuffling generic over any [rand::Rng]:
//!
//! ```
//! # use showdown_cards::{Card, Deck, Rank, Suit};
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let mut deck = Deck::default();
//! deck.shuffle(&mut rng);
//!
//! let hole = deck.deal(2).unwrap();
//! let flop = deck.deal(3).unwrap();
//! assert_eq!(deck.remaining(), 47);
//! ```
//!
//! [Deck::without] builds a deck excluding cards already seen, used to sample
//! the unknown part of a board:
//!
//! ```
//! # use showdown_cards::{Card, Deck, Rank, Suit};
//! let seen = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ];
//! let pool = Deck::without(&seen);
//! assert_eq!(pool.remaining(), 50);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, ParseCardError, Rank, Suit};
