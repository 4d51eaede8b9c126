// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod feature;
pub mod state;

pub use error::{ClassifierError, Result};
pub use feature::{ClassifierInput, FeatureVector, Label, LabeledVector};
pub use state::{AmplitudeVector, OutcomeSample, bit_of};

pub mod constants;
pub use constants::qsdc_constants::{ALPHA, AUX_BIT, DEFAULT_SHOTS, DIM, FEATURE_BIT, LABEL_BIT, NUM_BITS};
