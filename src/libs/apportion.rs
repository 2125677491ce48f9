//! Hours assigned to each matched ticket on a day.
//!
//! ## Modes
//!
//! - **Static**: a ticket gets the hours declared for its fragment, every day.
//! - **Random**: every day gets a fresh split of the daily total (8 hours by
//!   default) into one value per declared ticket, each a positive multiple of
//!   the step (half an hour by default). Matched tickets consume the split in
//!   order, so the day's values are shared out, never repeated.
//!
//! The random split is drawn uniformly over all ordered splits by picking
//! distinct cut points between the total's steps (stars and bars), without
//! enumerating the splits. Values are handled as whole step counts, so with a
//! binary-exact step such as 0.5 the hours sum to the total exactly.

use crate::libs::config::SyncConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Static,
    Random,
}

#[derive(Debug, Error, PartialEq)]
pub enum ApportionError {
    #[error("no tickets are declared, nothing to apportion")]
    NoTickets,
    #[error("daily total of {daily_hours} hours is not a positive whole multiple of the {step} hour step")]
    InvalidDailyTotal { daily_hours: f64, step: f64 },
    #[error("{tickets} tickets cannot share {daily_hours} hours in steps of {step}: at most {max} tickets fit")]
    NoExactCombination {
        tickets: usize,
        daily_hours: f64,
        step: f64,
        max: usize,
    },
}

/// Hours left to hand out on one day.
#[derive(Debug, Clone, PartialEq)]
pub enum DayShare {
    Static,
    Random(VecDeque<f64>),
}

impl DayShare {
    /// Hours for the next matched ticket. `None` once a random split is used up.
    pub fn take(&mut self, declared: f64) -> Option<f64> {
        match self {
            DayShare::Static => Some(declared),
            DayShare::Random(values) => values.pop_front(),
        }
    }
}

#[derive(Debug)]
pub struct Apportioner {
    mode: Mode,
    ticket_count: usize,
    units: usize,
    step: f64,
    rng: StdRng,
}

impl Apportioner {
    /// Validates the mode against the declared ticket count. In random mode
    /// the daily total must be a whole number of steps and there must be at
    /// least one step per ticket.
    pub fn new(mode: Mode, ticket_count: usize, sync: &SyncConfig) -> Result<Self, ApportionError> {
        Self::with_rng(mode, ticket_count, sync, StdRng::from_os_rng())
    }

    /// Same as [`Apportioner::new`] with a reproducible random sequence.
    pub fn with_seed(mode: Mode, ticket_count: usize, sync: &SyncConfig, seed: u64) -> Result<Self, ApportionError> {
        Self::with_rng(mode, ticket_count, sync, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mode: Mode, ticket_count: usize, sync: &SyncConfig, rng: StdRng) -> Result<Self, ApportionError> {
        if ticket_count == 0 {
            return Err(ApportionError::NoTickets);
        }

        let units = match mode {
            Mode::Static => 0,
            Mode::Random => {
                let units = whole_steps(sync.daily_hours, sync.step).ok_or(ApportionError::InvalidDailyTotal {
                    daily_hours: sync.daily_hours,
                    step: sync.step,
                })?;
                if ticket_count > units {
                    return Err(ApportionError::NoExactCombination {
                        tickets: ticket_count,
                        daily_hours: sync.daily_hours,
                        step: sync.step,
                        max: units,
                    });
                }
                units
            }
        };

        Ok(Self {
            mode,
            ticket_count,
            units,
            step: sync.step,
            rng,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Starts a new day: static mode passes declared hours through, random
    /// mode draws a fresh split sized to the declared ticket count.
    pub fn day_share(&mut self) -> DayShare {
        match self.mode {
            Mode::Static => DayShare::Static,
            Mode::Random => {
                let step = self.step;
                let values = random_split(&mut self.rng, self.ticket_count, self.units)
                    .into_iter()
                    .map(|units| units as f64 * step)
                    .collect();
                DayShare::Random(values)
            }
        }
    }
}

/// `daily_hours / step` when it is a positive whole number.
fn whole_steps(daily_hours: f64, step: f64) -> Option<usize> {
    if !(step > 0.0) || !daily_hours.is_finite() {
        return None;
    }
    let ratio = daily_hours / step;
    let rounded = ratio.round();
    if rounded < 1.0 || (ratio - rounded).abs() > 1e-9 {
        return None;
    }
    Some(rounded as usize)
}

/// Splits `units` into `parts` positive integers, uniformly over all ordered
/// splits. Requires `1 <= parts <= units`.
pub fn random_split<R: Rng + ?Sized>(rng: &mut R, parts: usize, units: usize) -> Vec<usize> {
    assert!(parts >= 1 && parts <= units, "cannot split {} units into {} positive parts", units, parts);

    // Cut after step c for c in 1..units; parts - 1 distinct cuts.
    let mut cuts: Vec<usize> = rand::seq::index::sample(rng, units - 1, parts - 1)
        .into_iter()
        .map(|index| index + 1)
        .collect();
    cuts.sort_unstable();

    let mut split = Vec::with_capacity(parts);
    let mut previous = 0;
    for cut in cuts.into_iter().chain(std::iter::once(units)) {
        split.push(cut - previous);
        previous = cut;
    }
    split
}
