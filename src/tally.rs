//! Per-flag counts across a run.
//!
//! Every flag contributes its stored value read as an integer, so boolean
//! flags and count flags share one table. Iteration is always in flag-name
//! order, independent of the order tests were discovered in.

use crate::types::{Flag, Outcome, RunSummary};

/// Aggregated flag counts plus the number of outcomes seen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagTally {
    counts: [u64; Flag::COUNT],
    total: usize,
}

impl FlagTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a sequence of outcomes
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a Outcome>,
    {
        let mut tally = Self::new();
        for outcome in outcomes {
            tally.record(outcome);
        }
        tally
    }

    pub fn from_summary(summary: &RunSummary) -> Self {
        Self::from_outcomes(summary.outcomes())
    }

    /// Add one outcome
    pub fn record(&mut self, outcome: &Outcome) {
        for (flag, value) in &outcome.flags {
            self.counts[flag.index()] += value.count();
        }
        self.total += 1;
    }

    /// Fold another tally into this one
    pub fn merge(&mut self, other: &FlagTally) {
        for (count, extra) in self.counts.iter_mut().zip(other.counts.iter()) {
            *count += extra;
        }
        self.total += other.total;
    }

    pub fn count(&self, flag: Flag) -> u64 {
        self.counts[flag.index()]
    }

    /// Number of outcomes recorded, including ones with no flag set
    pub fn total(&self) -> usize {
        self.total
    }

    /// `(flag, count)` pairs sorted by flag name, zero counts included
    pub fn iter(&self) -> impl Iterator<Item = (Flag, u64)> + '_ {
        Flag::ALL.iter().map(move |flag| (*flag, self.count(*flag)))
    }
}

impl<'a> Extend<&'a Outcome> for FlagTally {
    fn extend<I: IntoIterator<Item = &'a Outcome>>(&mut self, outcomes: I) {
        for outcome in outcomes {
            self.record(outcome);
        }
    }
}

#[cfg(test)]
#[path = "tally_test.rs"]
mod tally_test;
