// src/core/feature.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary class label carried by a reference point and read back from the
/// label bit after post-selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    /// Class 0 (label bit clear).
    Zero,
    /// Class 1 (label bit set).
    One,
}

impl Label {
    /// Value of the label bit for this class.
    pub fn bit(self) -> usize {
        match self {
            Label::Zero => 0,
            Label::One => 1,
        }
    }

    /// Maps a measured bit back to a label. Any non-zero bit is `One`.
    pub fn from_bit(bit: usize) -> Self {
        if bit == 0 { Label::Zero } else { Label::One }
    }

    /// The other class.
    pub fn flipped(self) -> Self {
        match self {
            Label::Zero => Label::One,
            Label::One => Label::Zero,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bit())
    }
}

/// An ordered pair `(x0, x1)` expected to have unit L2 norm.
///
/// Construction does not check the norm; the encoder does, so that a caller
/// bypassing the preprocessor gets an explicit error instead of a skewed state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    x0: f64,
    x1: f64,
}

impl FeatureVector {
    /// Creates a feature vector from its two coordinates.
    pub fn new(x0: f64, x1: f64) -> Self {
        Self { x0, x1 }
    }

    /// First coordinate.
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Second coordinate.
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Coordinate selected by the feature bit (0 → x0, anything else → x1).
    pub fn coordinate(&self, feature: usize) -> f64 {
        if feature == 0 { self.x0 } else { self.x1 }
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.x0.hypot(self.x1)
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.x1.is_finite()
    }
}

impl From<(f64, f64)> for FeatureVector {
    fn from((x0, x1): (f64, f64)) -> Self {
        Self::new(x0, x1)
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.x0, self.x1)
    }
}

/// A reference point: a feature vector together with its known class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledVector {
    /// Normalised features.
    pub features: FeatureVector,
    /// Known class.
    pub label: Label,
}

impl LabeledVector {
    /// Pairs a feature vector with its label.
    pub fn new(features: FeatureVector, label: Label) -> Self {
        Self { features, label }
    }
}

impl fmt::Display for LabeledVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, label={}", self.features, self.label)
    }
}

/// Everything a single classification run consumes: the two reference points
/// and the unlabeled query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierInput {
    /// First reference point.
    pub reference_a: LabeledVector,
    /// Second reference point; must carry the other label.
    pub reference_b: LabeledVector,
    /// Point to classify.
    pub query: FeatureVector,
}

impl ClassifierInput {
    /// Bundles the three vectors. Order of the references is irrelevant.
    pub fn new(reference_a: LabeledVector, reference_b: LabeledVector, query: FeatureVector) -> Self {
        Self { reference_a, reference_b, query }
    }

    /// Same input with the two references' features exchanged while the labels
    /// stay in place. Classifying the result swaps the class probabilities.
    pub fn with_swapped_references(&self) -> Self {
        Self {
            reference_a: LabeledVector::new(self.reference_b.features, self.reference_a.label),
            reference_b: LabeledVector::new(self.reference_a.features, self.reference_b.label),
            query: self.query,
        }
    }
}
