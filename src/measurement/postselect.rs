// src/measurement/postselect.rs

use crate::core::{Label, OutcomeSample};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label counts over the shots that survived post-selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    label_zero: usize,
    label_one: usize,
    discarded: usize,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tally directly from counts.
    pub fn from_counts(label_zero: usize, label_one: usize, discarded: usize) -> Self {
        Self { label_zero, label_one, discarded }
    }

    /// Keeps shots with `aux == 0` and counts them by label bit.
    /// Order of the samples does not matter.
    pub fn from_samples<'a, I>(samples: I) -> Self
    where
        I: IntoIterator<Item = &'a OutcomeSample>,
    {
        samples.into_iter().fold(Self::new(), |mut tally, sample| {
            tally.record(sample);
            tally
        })
    }

    /// Adds a single shot.
    pub fn record(&mut self, sample: &OutcomeSample) {
        if sample.aux != 0 {
            self.discarded += 1;
            return;
        }
        match Label::from_bit(sample.label) {
            Label::Zero => self.label_zero += 1,
            Label::One => self.label_one += 1,
        }
    }

    /// Retained shots carrying `label`.
    pub fn count(&self, label: Label) -> usize {
        match label {
            Label::Zero => self.label_zero,
            Label::One => self.label_one,
        }
    }

    /// Number of shots that passed post-selection.
    pub fn retained(&self) -> usize {
        self.label_zero + self.label_one
    }

    /// Number of shots rejected because the auxiliary bit was 1.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// All shots seen.
    pub fn total(&self) -> usize {
        self.retained() + self.discarded
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "retained {} of {} (label 0: {}, label 1: {}, discarded: {})",
            self.retained(),
            self.total(),
            self.label_zero,
            self.label_one,
            self.discarded
        )
    }
}

/// Filters `samples` on `aux == 0` and tallies the label bit.
#[tracing::instrument(level = "debug", skip(samples), fields(shots = samples.len()))]
pub fn post_select(samples: &[OutcomeSample]) -> Tally {
    let tally = Tally::from_samples(samples);
    tracing::debug!(
        retained = tally.retained(),
        label_zero = tally.count(Label::Zero),
        label_one = tally.count(Label::One),
        "post_selection_complete"
    );
    tally
}
