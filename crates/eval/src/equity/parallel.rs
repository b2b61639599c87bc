// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Parallel equity estimation.
use log::debug;
use rand::prelude::*;
use std::thread;

use showdown_cards::Card;

use crate::eval::EvalError;

use super::{Tally, join, run_trial, trial_pool};

/// Estimates a hand's win probability using `num_tasks` parallel tasks.
///
/// Trials are split across the tasks, each task runs its share with its own
/// random stream and pool of unseen cards, and the per-task tallies are
/// merged at the end. Same semantics and result range as
/// [win_probability](super::win_probability).
///
/// Panics if `num_tasks` is zero.
///
/// # Errors
///
/// Returns an error if the hole hand is not exactly two cards, the community
/// has more than five, or `trials` is zero.
pub fn par_win_probability(
    hole: &[Card],
    community: &[Card],
    trials: u32,
    num_tasks: usize,
) -> Result<u8, EvalError> {
    assert!(num_tasks > 0);

    let pool = trial_pool(hole, community, trials)?;

    let base = trials / num_tasks as u32;
    let extra = trials % num_tasks as u32;

    let mut tally = Tally::default();
    thread::scope(|s| -> Result<(), EvalError> {
        let handles = (0..num_tasks as u32)
            .map(|task_id| {
                let task_trials = base + u32::from(task_id < extra);
                let mut task_pool = pool.clone();

                s.spawn(move || -> Result<Tally, EvalError> {
                    let mut rng = SmallRng::from_os_rng();
                    let mut task_tally = Tally::default();

                    for _ in 0..task_trials {
                        task_tally.record(run_trial(hole, community, &mut task_pool, &mut rng)?);
                    }

                    Ok(task_tally)
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            tally.merge(handle.join().expect("equity task panicked")?);
        }

        Ok(())
    })?;

    debug!(
        "parallel equity for [{}]: {} wins {} ties over {trials} trials on {num_tasks} tasks",
        join(hole),
        tally.wins,
        tally.ties,
    );

    Ok(tally.percent(trials))
}
