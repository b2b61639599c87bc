// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! [HandEval::eval] classifies two hole cards plus up to five community cards
//! into one of ten [HandCategory] values with up to five tie-break kickers,
//! picking the best five-card hand with category specific scans over rank and
//! suit counts. The derived ordering on [HandEval] compares first by category
//! then by kickers in priority order, so showdowns resolve with a plain
//! comparison.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use showdown_cards::{Card, DeckError, Rank, Suit};

/// Number of hole cards in a hand.
pub const HOLE_CARDS: usize = 2;

/// Number of community cards on a complete board.
pub const BOARD_CARDS: usize = 5;

/// Rank count slots, indexed by rank value with the wheel ace aliased at 1.
const RANK_SLOTS: usize = 15;

/// Errors from hand evaluation and equity estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Hole hand with the wrong number of cards.
    #[error("hole hand must have exactly {HOLE_CARDS} cards, got {0}")]
    HoleCards(usize),
    /// Too many community cards.
    #[error("community cannot have more than {BOARD_CARDS} cards, got {0}")]
    CommunityCards(usize),
    /// Equity simulation with no trials.
    #[error("trials count must be positive")]
    ZeroTrials,
    /// Ran out of cards while dealing.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Hand category from weakest to strongest.
///
/// Categories are ordered by strength so comparing categories alone is a
/// valid first-order hand comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No made hand, five highest cards play.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// A triple and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight in one suit.
    StraightFlush,
    /// Ten to ace straight in one suit.
    RoyalFlush,
}

impl HandCategory {
    /// Returns this category's display name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hand evaluation, a category plus its tie-break kickers.
///
/// Kicker slots are filled in priority order and unused slots are `None`,
/// within one category the populated pattern is fixed so the derived
/// lexicographic ordering is a total order consistent with hand strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandEval {
    category: HandCategory,
    kickers: [Option<Rank>; BOARD_CARDS],
}

impl HandEval {
    /// Evaluates two hole cards against zero to five community cards.
    ///
    /// With fewer than five total cards the evaluation degrades to the
    /// pair-type categories over the cards that exist, straights and flushes
    /// need a full window of five.
    ///
    /// # Errors
    ///
    /// Returns an error if the hole hand is not exactly two cards or the
    /// community has more than five.
    pub fn eval(hole: &[Card], community: &[Card]) -> Result<Self, EvalError> {
        if hole.len() != HOLE_CARDS {
            return Err(EvalError::HoleCards(hole.len()));
        }

        if community.len() > BOARD_CARDS {
            return Err(EvalError::CommunityCards(community.len()));
        }

        let mut cards = hole.iter().chain(community).copied().collect::<Vec<_>>();
        cards.sort_by(|a, b| b.rank().cmp(&a.rank()));

        debug_assert!(
            cards.iter().enumerate().all(|(i, c)| !cards[i + 1..].contains(c)),
            "duplicate card in {cards:?}"
        );

        let mut rank_count = [0u8; RANK_SLOTS];
        let mut suit_count = [0u8; 4];
        for card in &cards {
            rank_count[card.rank().value() as usize] += 1;
            suit_count[card.suit().index()] += 1;
        }

        let flush_suit = Suit::suits().find(|s| suit_count[s.index()] as usize >= BOARD_CARDS);
        let straight = straight_high(&cards);

        // Straight flush needs a straight within the flush suit alone.
        if let (Some(suit), Some(_)) = (flush_suit, straight) {
            let suited = cards
                .iter()
                .filter(|c| c.suit() == suit)
                .copied()
                .collect::<Vec<_>>();

            if let Some(high) = straight_high(&suited) {
                let category = if high == Rank::Ace {
                    HandCategory::RoyalFlush
                } else {
                    HandCategory::StraightFlush
                };
                return Ok(Self::ranked(category, &[high]));
            }
        }

        if let Some(quad) = highest_with_count(&rank_count, 4) {
            let mut ranks = vec![quad];
            ranks.extend(kickers_excluding(&cards, &[quad], 1));
            return Ok(Self::ranked(HandCategory::FourOfAKind, &ranks));
        }

        // Scan triples and pairs together, a second triple is usable for the
        // full house pair slot.
        let mut trip = None;
        let mut pair = None;
        for value in (2..=14u8).rev() {
            match rank_count[value as usize] {
                3 if trip.is_none() => trip = Rank::from_value(value),
                3 | 2 if pair.is_none() => pair = Rank::from_value(value),
                _ => {}
            }
        }

        if let (Some(t), Some(p)) = (trip, pair) {
            return Ok(Self::ranked(HandCategory::FullHouse, &[t, p]));
        }

        if let Some(suit) = flush_suit {
            let ranks = cards
                .iter()
                .filter(|c| c.suit() == suit)
                .map(|c| c.rank())
                .take(BOARD_CARDS)
                .collect::<Vec<_>>();
            return Ok(Self::ranked(HandCategory::Flush, &ranks));
        }

        if let Some(high) = straight {
            return Ok(Self::ranked(HandCategory::Straight, &[high]));
        }

        if let Some(t) = trip {
            let mut ranks = vec![t];
            ranks.extend(kickers_excluding(&cards, &[t], 2));
            return Ok(Self::ranked(HandCategory::ThreeOfAKind, &ranks));
        }

        let pairs = (2..=14u8)
            .rev()
            .filter(|&v| rank_count[v as usize] == 2)
            .filter_map(Rank::from_value)
            .collect::<Vec<_>>();

        if let [first, second, ..] = pairs[..] {
            let mut ranks = vec![first, second];
            ranks.extend(kickers_excluding(&cards, &[first, second], 1));
            return Ok(Self::ranked(HandCategory::TwoPair, &ranks));
        }

        if let [first] = pairs[..] {
            let mut ranks = vec![first];
            ranks.extend(kickers_excluding(&cards, &[first], 3));
            return Ok(Self::ranked(HandCategory::Pair, &ranks));
        }

        let ranks = cards
            .iter()
            .map(|c| c.rank())
            .take(BOARD_CARDS)
            .collect::<Vec<_>>();
        Ok(Self::ranked(HandCategory::HighCard, &ranks))
    }

    /// Evaluates both hands against the same community cards and reports
    /// whether the first is strictly better.
    ///
    /// # Errors
    ///
    /// Returns an error if either hand or the community has an invalid
    /// number of cards.
    pub fn is_better(hand: &[Card], other: &[Card], community: &[Card]) -> Result<bool, EvalError> {
        Ok(Self::eval(hand, community)? > Self::eval(other, community)?)
    }

    /// Returns the hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Returns the kicker slots in priority order, unused slots are `None`.
    pub fn kickers(&self) -> [Option<Rank>; BOARD_CARDS] {
        self.kickers
    }

    /// Returns the primary tie-break rank, `None` only for an evaluation of
    /// no cards.
    pub fn high_card(&self) -> Option<Rank> {
        self.kickers[0]
    }

    fn ranked(category: HandCategory, ranks: &[Rank]) -> Self {
        let mut kickers = [None; BOARD_CARDS];
        for (slot, rank) in kickers.iter_mut().zip(ranks) {
            *slot = Some(*rank);
        }
        Self { category, kickers }
    }
}

impl fmt::Display for HandEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for rank in self.kickers.iter().flatten() {
            write!(f, " {rank}")?;
        }
        Ok(())
    }
}

/// Returns the high card of the best straight in the given cards.
///
/// The ace is marked both high and at the wheel alias, so the scan from the
/// ace-high window down to the five-high window also finds A-2-3-4-5.
fn straight_high(cards: &[Card]) -> Option<Rank> {
    let mut present = [false; RANK_SLOTS];
    for card in cards {
        present[card.rank().value() as usize] = true;
        if card.rank() == Rank::Ace {
            present[1] = true;
        }
    }

    (5..=14u8)
        .rev()
        .find(|&high| (0..5).all(|i| present[(high - i) as usize]))
        .and_then(Rank::from_value)
}

/// Returns the highest rank appearing exactly `count` times.
fn highest_with_count(rank_count: &[u8; RANK_SLOTS], count: u8) -> Option<Rank> {
    (2..=14u8)
        .rev()
        .find(|&v| rank_count[v as usize] == count)
        .and_then(Rank::from_value)
}

/// Returns up to `count` kicker ranks from the descending sorted cards,
/// skipping the ranks already used by the category.
fn kickers_excluding(cards: &[Card], used: &[Rank], count: usize) -> Vec<Rank> {
    cards
        .iter()
        .map(|c| c.rank())
        .filter(|r| !used.contains(r))
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect()
    }

    fn eval(hole: &str, community: &str) -> HandEval {
        HandEval::eval(&cards(hole), &cards(community)).unwrap()
    }

    fn ranks(evaluation: &HandEval) -> Vec<Rank> {
        evaluation.kickers().into_iter().flatten().collect()
    }

    #[test]
    fn royal_flush() {
        let e = eval("AS KS", "QS JS TS 5H 2D");
        assert_eq!(e.category(), HandCategory::RoyalFlush);
        assert_eq!(e.high_card(), Some(Rank::Ace));
    }

    #[test]
    fn straight_flush() {
        let e = eval("9H TH", "8H JH 7H AS AD");
        assert_eq!(e.category(), HandCategory::StraightFlush);
        assert_eq!(e.high_card(), Some(Rank::Jack));
    }

    #[test]
    fn wheel_straight_flush() {
        let e = eval("AC 2C", "3C 4C 5C KH 9D");
        assert_eq!(e.category(), HandCategory::StraightFlush);
        assert_eq!(e.high_card(), Some(Rank::Five));
    }

    #[test]
    fn four_of_a_kind() {
        let e = eval("7S 7H", "7D 7C TS 5H 2D");
        assert_eq!(e.category(), HandCategory::FourOfAKind);
        assert_eq!(ranks(&e), [Rank::Seven, Rank::Ten]);
    }

    #[test]
    fn full_house() {
        let e = eval("8S 8H", "8D 5S 5H TD 2C");
        assert_eq!(e.category(), HandCategory::FullHouse);
        assert_eq!(ranks(&e), [Rank::Eight, Rank::Five]);
    }

    #[test]
    fn full_house_from_two_triples() {
        // The higher triple plays as the triple, the other fills the pair slot.
        let e = eval("5S 5H", "5D 8S 8H 8D KD");
        assert_eq!(e.category(), HandCategory::FullHouse);
        assert_eq!(ranks(&e), [Rank::Eight, Rank::Five]);
    }

    #[test]
    fn full_house_pair_above_triple() {
        let e = eval("KS KH", "8S 8H 8D 2C 3C");
        assert_eq!(e.category(), HandCategory::FullHouse);
        assert_eq!(ranks(&e), [Rank::Eight, Rank::King]);
    }

    #[test]
    fn flush_takes_five_highest_suited() {
        let e = eval("AH KH", "TH 2H 5H AS TC");
        assert_eq!(e.category(), HandCategory::Flush);
        assert_eq!(
            ranks(&e),
            [Rank::Ace, Rank::King, Rank::Ten, Rank::Five, Rank::Deuce]
        );
    }

    #[test]
    fn straight() {
        let e = eval("7H 8D", "9S TC JD 2H 3C");
        assert_eq!(e.category(), HandCategory::Straight);
        assert_eq!(ranks(&e), [Rank::Jack]);
    }

    #[test]
    fn wheel_straight() {
        let e = eval("AS 2H", "3D 4C 5S KH 9D");
        assert_eq!(e.category(), HandCategory::Straight);
        assert_eq!(e.high_card(), Some(Rank::Five));
    }

    #[test]
    fn three_of_a_kind() {
        let e = eval("TS TH", "TD JC 2S 5H 8D");
        assert_eq!(e.category(), HandCategory::ThreeOfAKind);
        assert_eq!(ranks(&e), [Rank::Ten, Rank::Jack, Rank::Eight]);
    }

    #[test]
    fn two_pair_keeps_best_two() {
        // Three pairs in seven cards, the two highest play.
        let e = eval("JS JH", "9D 9C 4S 4H AC");
        assert_eq!(e.category(), HandCategory::TwoPair);
        assert_eq!(ranks(&e), [Rank::Jack, Rank::Nine, Rank::Ace]);
    }

    #[test]
    fn pair() {
        let e = eval("AS AH", "KD QC JS 5H 2D");
        assert_eq!(e.category(), HandCategory::Pair);
        assert_eq!(ranks(&e), [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack]);
    }

    #[test]
    fn high_card() {
        let e = eval("KS QH", "JD 9C 7S 4H 2D");
        assert_eq!(e.category(), HandCategory::HighCard);
        assert_eq!(
            ranks(&e),
            [Rank::King, Rank::Queen, Rank::Jack, Rank::Nine, Rank::Seven]
        );
    }

    #[test]
    fn board_plays_for_both() {
        // Neither hand improves the board straight.
        let e = eval("2S 2H", "TC JD QH KS AC");
        assert_eq!(e.category(), HandCategory::Straight);
        assert_eq!(e.high_card(), Some(Rank::Ace));
    }

    #[test]
    fn preflop_degrades_to_high_card() {
        let e = eval("AS KH", "");
        assert_eq!(e.category(), HandCategory::HighCard);
        assert_eq!(ranks(&e), [Rank::Ace, Rank::King]);
        assert_eq!(e.kickers()[2], None);
    }

    #[test]
    fn preflop_pocket_pair() {
        let e = eval("AS AH", "");
        assert_eq!(e.category(), HandCategory::Pair);
        assert_eq!(ranks(&e), [Rank::Ace]);
    }

    #[test]
    fn flop_cannot_make_straight_with_four_cards() {
        let e = eval("5S 6H", "7D 8C");
        assert_eq!(e.category(), HandCategory::HighCard);
        assert_eq!(ranks(&e), [Rank::Eight, Rank::Seven, Rank::Six, Rank::Five]);
    }

    #[test]
    fn cardinality_is_checked() {
        let one = cards("AS");
        let board = cards("2D 3C 4S 5H 6D 7C");

        assert_eq!(
            HandEval::eval(&one, &[]),
            Err(EvalError::HoleCards(1))
        );
        assert_eq!(
            HandEval::eval(&cards("AS KH"), &board),
            Err(EvalError::CommunityCards(6))
        );
    }

    #[test]
    fn category_dominates_kickers() {
        let pair = eval("2S 2H", "5D 7C 9S JH KD");
        let high = eval("AS QH", "5D 7C 9S JH KD");
        assert!(pair > high);
    }

    #[test]
    fn flush_beats_straight() {
        let community = cards("3S 4S 5S 9S TH");
        let better =
            HandEval::is_better(&cards("2S 6S"), &cards("7H 8D"), &community).unwrap();
        assert!(better);
    }

    #[test]
    fn pair_beats_high_card_on_board() {
        let community = cards("2D 5H 7C 8D 3S");
        let better =
            HandEval::is_better(&cards("TS TH"), &cards("AS 9H"), &community).unwrap();
        assert!(better);
    }

    #[test]
    fn kickers_break_ties_in_order() {
        let community = cards("2D 5H 7C 8D 3S");
        let ace_kicker = eval("TS AH", "2D 5H 7C 8D 3S");
        let king_kicker = eval("TD KH", "2D 5H 7C 8D 3S");
        assert_eq!(ace_kicker.category(), king_kicker.category());
        assert!(ace_kicker > king_kicker);

        let better =
            HandEval::is_better(&cards("TD KH"), &cards("TS AH"), &community).unwrap();
        assert!(!better);
    }

    #[test]
    fn identical_hands_compare_equal() {
        let community = cards("2D 5H 7C 8D 3S");
        let a = HandEval::eval(&cards("TS TH"), &community).unwrap();
        let b = HandEval::eval(&cards("TS TH"), &community).unwrap();
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a, b);
    }

    #[test]
    fn ordering_is_consistent() {
        let evals = [
            eval("TS TH", "2D 5H 7C 8D 3S"),
            eval("AS 9H", "2D 5H 7C 8D 3S"),
            eval("2S 2H", "2D 5H 7C 8D 3S"),
        ];

        for a in &evals {
            assert_eq!(a.cmp(a), Ordering::Equal);
            for b in &evals {
                assert_eq!(a.cmp(b), b.cmp(a).reverse());
            }
        }
    }

    #[test]
    fn category_names() {
        assert_eq!(HandCategory::HighCard.name(), "High Card");
        assert_eq!(HandCategory::ThreeOfAKind.name(), "Three of a Kind");
        assert_eq!(HandCategory::RoyalFlush.name(), "Royal Flush");
        assert_eq!(HandCategory::FullHouse.to_string(), "Full House");
    }

    // This takes a while in debug mode as it evaluates all 2.6M hands.
    #[test]
    #[ignore]
    fn five_card_category_census() {
        use showdown_cards::Deck;

        let deck = Deck::default().into_iter().collect::<Vec<_>>();
        let mut counts = [0u32; 10];

        for c1 in 0..deck.len() {
            for c2 in (c1 + 1)..deck.len() {
                for c3 in (c2 + 1)..deck.len() {
                    for c4 in (c3 + 1)..deck.len() {
                        for c5 in (c4 + 1)..deck.len() {
                            let hole = [deck[c1], deck[c2]];
                            let community = [deck[c3], deck[c4], deck[c5]];
                            let e = HandEval::eval(&hole, &community).unwrap();
                            counts[e.category() as usize] += 1;
                        }
                    }
                }
            }
        }

        assert_eq!(counts[HandCategory::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandCategory::Pair as usize], 1_098_240);
        assert_eq!(counts[HandCategory::TwoPair as usize], 123_552);
        assert_eq!(counts[HandCategory::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandCategory::Straight as usize], 10_200);
        assert_eq!(counts[HandCategory::Flush as usize], 5_108);
        assert_eq!(counts[HandCategory::FullHouse as usize], 3_744);
        assert_eq!(counts[HandCategory::FourOfAKind as usize], 624);
        assert_eq!(counts[HandCategory::StraightFlush as usize], 36);
        assert_eq!(counts[HandCategory::RoyalFlush as usize], 4);
        assert_eq!(counts.iter().sum::<u32>(), 2_598_960);
    }
}
