// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Card rank, `Deuce` to `Ace`.
///
/// The discriminant is the rank value used by the evaluator, with the ace
/// high at 14. Only straight detection treats the ace as a low card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns this rank value, 2 to 14.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the rank for a value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ranks().find(|r| r.value() == value)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// Returns this suit index, 0 to 3.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        };

        write!(f, "{suit}")
    }
}

/// A Poker card.
///
/// A card is a plain `(rank, suit)` value with structural equality, there is
/// exactly one of each combination in a [Deck].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Error parsing a card from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card {0:?}, expected rank and suit as in AS, TD, 9h")]
pub struct ParseCardError(String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());

        let mut chars = s.chars();
        let (rank_ch, suit_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r.to_ascii_uppercase(), s.to_ascii_uppercase()),
            _ => return Err(err()),
        };

        let rank = Rank::ranks()
            .find(|r| r.to_string() == rank_ch.to_string())
            .ok_or_else(err)?;
        let suit = Suit::suits()
            .find(|s| s.to_string() == suit_ch.to_string())
            .ok_or_else(err)?;

        Ok(Card::new(rank, suit))
    }
}

/// Error dealing cards from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards requested than remain past the deal cursor.
    #[error("cannot deal {requested} cards, only {remaining} remain")]
    Exhausted {
        /// Number of cards requested.
        requested: usize,
        /// Number of undealt cards.
        remaining: usize,
    },
}

/// A cards deck.
///
/// The deck owns a buffer of unique cards partitioned by a cursor into dealt
/// and remaining regions. [Deck::shuffle] permutes the whole buffer and
/// resets the cursor, starting a fresh hand.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a full ordered deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a deck with the given cards excluded.
    ///
    /// Exclusion is by `(rank, suit)` value, the result holds the rest of the
    /// 52 cards in deterministic order with the cursor at the start.
    pub fn without(excluded: &[Card]) -> Self {
        let mut deck = Self::default();
        deck.cards.retain(|c| !excluded.contains(c));
        deck
    }

    /// Shuffles the whole buffer in place and resets the deal cursor.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.cursor = 0;
    }

    /// Deals `count` cards advancing the deal cursor.
    ///
    /// # Errors
    ///
    /// Returns [DeckError::Exhausted] if fewer than `count` cards remain.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count > self.remaining() {
            return Err(DeckError::Exhausted {
                requested: count,
                remaining: self.remaining(),
            });
        }

        let hand = self.cards[self.cursor..self.cursor + count].to_vec();
        self.cursor += count;
        Ok(hand)
    }

    /// Number of undealt cards past the cursor.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// The cards dealt so far.
    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }

    /// Number of cards in the buffer, dealt or not.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards, cursor: 0 }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
