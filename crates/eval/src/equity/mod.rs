// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity estimation.
//!
//! [win_probability] estimates the chance a two-card hand beats one unknown
//! opponent by repeatedly dealing the unseen cards at random: each trial
//! draws an opponent hand and the missing community cards from the pool of
//! cards not yet seen, evaluates both hands against the completed board, and
//! tallies wins and ties. Ties count as half a win, the result is a floor
//! percentage.
//!
//! The trial count is the only cost control, more trials reduce estimator
//! variance at linear cost. The **`parallel`** feature adds a variant that
//! splits trials across independent tasks.
use log::debug;
use rand::Rng;
use std::cmp::Ordering;

use showdown_cards::{Card, Deck};

use crate::eval::{BOARD_CARDS, EvalError, HOLE_CARDS, HandEval};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_win_probability;

/// Win and tie counters over one equity computation.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    wins: u64,
    ties: u64,
}

impl Tally {
    fn record(&mut self, outcome: Ordering) {
        match outcome {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => {}
        }
    }

    #[cfg(feature = "parallel")]
    fn merge(&mut self, other: Tally) {
        self.wins += other.wins;
        self.ties += other.ties;
    }

    /// Floor percentage with ties counting as half a win.
    fn percent(&self, trials: u32) -> u8 {
        ((self.wins * 100 + self.ties * 50) / trials as u64) as u8
    }
}

/// Estimates the probability that a hand beats one unknown opponent.
///
/// Runs `trials` independent showdowns, each completing the board and the
/// opponent hand from the cards not in `hole` or `community`, and returns
/// the win percentage in `0..=100` with ties counted as half a win.
///
/// # Errors
///
/// Returns an error if the hole hand is not exactly two cards, the community
/// has more than five, or `trials` is zero.
pub fn win_probability<R: Rng>(
    hole: &[Card],
    community: &[Card],
    trials: u32,
    rng: &mut R,
) -> Result<u8, EvalError> {
    let mut pool = trial_pool(hole, community, trials)?;

    let mut tally = Tally::default();
    for _ in 0..trials {
        tally.record(run_trial(hole, community, &mut pool, rng)?);
    }

    debug!(
        "equity for [{}]: {} wins {} ties over {trials} trials",
        join(hole),
        tally.wins,
        tally.ties,
    );

    Ok(tally.percent(trials))
}

/// Validates the simulation inputs and builds the pool of unseen cards.
fn trial_pool(hole: &[Card], community: &[Card], trials: u32) -> Result<Deck, EvalError> {
    if hole.len() != HOLE_CARDS {
        return Err(EvalError::HoleCards(hole.len()));
    }

    if community.len() > BOARD_CARDS {
        return Err(EvalError::CommunityCards(community.len()));
    }

    if trials == 0 {
        return Err(EvalError::ZeroTrials);
    }

    let seen = hole.iter().chain(community).copied().collect::<Vec<_>>();
    let pool = Deck::without(&seen);
    debug_assert_eq!(pool.remaining(), Deck::SIZE - seen.len());

    Ok(pool)
}

/// Plays out one random showdown against the player's hand.
fn run_trial<R: Rng>(
    hole: &[Card],
    community: &[Card],
    pool: &mut Deck,
    rng: &mut R,
) -> Result<Ordering, EvalError> {
    pool.shuffle(rng);

    let opponent = pool.deal(HOLE_CARDS)?;
    let mut board = community.to_vec();
    board.extend(pool.deal(BOARD_CARDS - community.len())?);

    let player_eval = HandEval::eval(hole, &board)?;
    let opponent_eval = HandEval::eval(&opponent, &board)?;
    Ok(player_eval.cmp(&opponent_eval))
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
