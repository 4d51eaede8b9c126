// src/measurement/mod.rs

//! Shot sampling and post-selection.
//!
//! `MeasurementSampler` turns an amplitude vector into measured
//! `(aux, label)` shots; `post_select` keeps the `aux == 0` shots and counts
//! them by label.

mod postselect;
mod sampler;

pub use postselect::{Tally, post_select};
pub use sampler::{MeasurementSampler, measure};
