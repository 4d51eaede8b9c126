// src/lib.rs

//! `qsdc` - Statevector simulation of the 4-bit quantum squared-distance classifier
//!
//! Two labeled reference points and one query are amplitude-encoded into a
//! 16-entry complex state. A Hadamard on the auxiliary bit interferes the
//! query with each reference; shots are drawn by the Born rule, post-selected
//! on the auxiliary bit, and tallied on the label bit to give class
//! probabilities and a prediction.

pub mod core;
pub mod encoding;
pub mod simulation;
pub mod measurement;
pub mod classification;
pub mod preprocessing;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{AmplitudeVector, ClassifierError, ClassifierInput, FeatureVector, Label, LabeledVector, OutcomeSample, Result};
pub use encoding::{encode, encode_input};
pub use simulation::Simulator;
pub use simulation::engine::{apply_single_bit_unitary, hadamard};
pub use measurement::{MeasurementSampler, Tally, measure, post_select};
pub use classification::{ClassificationResult, Prediction, classify, exact_class_probabilities};
pub use preprocessing::{FeatureScale, RawRecord, preprocess, preprocess_labeled};
pub use validation::{check_normalization, check_unit_norm};

// Example: the Titanic toy problem end to end.
/// ```
/// use qsdc::{ClassifierInput, FeatureScale, Label, RawRecord, Simulator, preprocess, preprocess_labeled};
///
/// let scale = FeatureScale::TITANIC;
/// let survived = preprocess_labeled(&RawRecord::labeled(8500.0, 910.0, Label::One), &scale)?;
/// let died = preprocess_labeled(&RawRecord::labeled(1200.0, 2105.0, Label::Zero), &scale)?;
/// let (query, _) = preprocess(&RawRecord::unlabeled(7800.0, 1121.0), &scale)?;
///
/// let result = Simulator::new()
///     .with_shots(10_000)
///     .with_seed(7)
///     .run(&ClassifierInput::new(survived, died, query))?;
///
/// println!("{}", result);
/// assert_eq!(result.predicted_label(), Some(Label::One));
/// assert!((result.p_class_one - 0.552).abs() < 0.05);
/// # Ok::<(), qsdc::ClassifierError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
