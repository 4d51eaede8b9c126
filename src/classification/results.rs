// src/classification/results.rs
use crate::core::Label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of the decision step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prediction {
    /// A definite class.
    Label(Label),
    /// No shot survived post-selection, so there is nothing to compare.
    Undecidable,
}

impl Prediction {
    /// The predicted class, if one was decided.
    pub fn label(&self) -> Option<Label> {
        match self {
            Prediction::Label(label) => Some(*label),
            Prediction::Undecidable => None,
        }
    }

    /// Returns `true` for [`Prediction::Undecidable`].
    pub fn is_undecidable(&self) -> bool {
        matches!(self, Prediction::Undecidable)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Label(label) => write!(f, "label {}", label),
            Prediction::Undecidable => write!(f, "undecidable"),
        }
    }
}

/// Class-conditional probabilities estimated from the post-selected shots,
/// together with the decision.
///
/// When nothing was retained both probabilities are 0.0 and the prediction is
/// [`Prediction::Undecidable`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Estimated P(label = 1 | aux = 0).
    pub p_class_one: f64,
    /// Estimated P(label = 0 | aux = 0).
    pub p_class_zero: f64,
    /// Shots that passed post-selection.
    pub retained: usize,
    /// Shots drawn in total.
    pub shots: usize,
    /// Decision.
    pub prediction: Prediction,
}

impl ClassificationResult {
    /// Predicted class, if decided.
    pub fn predicted_label(&self) -> Option<Label> {
        self.prediction.label()
    }

    /// Fraction of shots that passed post-selection.
    pub fn acceptance_rate(&self) -> f64 {
        if self.shots == 0 { 0.0 } else { self.retained as f64 / self.shots as f64 }
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Classification Result:")?;
        writeln!(f, "  Post-selected (aux=0): {} of {} shots", self.retained, self.shots)?;
        writeln!(f, "  p(label=1): {:.4}", self.p_class_one)?;
        writeln!(f, "  p(label=0): {:.4}", self.p_class_zero)?;
        write!(f, "  Prediction: {}", self.prediction)
    }
}
