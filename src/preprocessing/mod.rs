// src/preprocessing/mod.rs

//! Min-max scaling followed by L2 normalisation, producing the unit-norm
//! feature vectors the encoder expects.

use crate::core::constants::qsdc_constants::ZERO_NORM_TOLERANCE;
use crate::core::{ClassifierError, FeatureVector, Label, LabeledVector, Result};
use serde::{Deserialize, Serialize};

/// Fixed maxima used to bring both raw features into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureScale {
    /// Maximum of the first raw feature.
    pub max_x0: f64,
    /// Maximum of the second raw feature.
    pub max_x1: f64,
}

impl FeatureScale {
    /// Ticket price (max 10000) and cabin number (max 2500) from the
    /// Titanic toy example.
    pub const TITANIC: FeatureScale = FeatureScale { max_x0: 10_000.0, max_x1: 2_500.0 };

    /// Creates a scale, rejecting non-positive or non-finite maxima.
    pub fn new(max_x0: f64, max_x1: f64) -> Result<Self> {
        for max in [max_x0, max_x1] {
            if !max.is_finite() || max <= 0.0 {
                return Err(ClassifierError::InvalidConfiguration {
                    message: format!("Feature maximum must be finite and positive, got {}", max),
                });
            }
        }
        Ok(Self { max_x0, max_x1 })
    }
}

impl Default for FeatureScale {
    fn default() -> Self {
        Self::TITANIC
    }
}

/// A raw, unscaled record. `label` is `None` for the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// First raw feature.
    pub x0: f64,
    /// Second raw feature.
    pub x1: f64,
    /// Known class, if any.
    pub label: Option<Label>,
}

impl RawRecord {
    /// A labeled reference record.
    pub fn labeled(x0: f64, x1: f64, label: Label) -> Self {
        Self { x0, x1, label: Some(label) }
    }

    /// An unlabeled query record.
    pub fn unlabeled(x0: f64, x1: f64) -> Self {
        Self { x0, x1, label: None }
    }
}

/// Scales `(x0, x1)` by `scale` and normalises the result to unit L2 norm.
pub fn normalize(x0: f64, x1: f64, scale: &FeatureScale) -> Result<FeatureVector> {
    let scaled = (x0 / scale.max_x0, x1 / scale.max_x1);
    let norm = scaled.0.hypot(scaled.1);
    if !norm.is_finite() || norm * norm < ZERO_NORM_TOLERANCE {
        return Err(ClassifierError::InvalidInput {
            message: format!("Cannot normalise raw features ({}, {}): scaled norm is {}", x0, x1, norm),
        });
    }
    Ok(FeatureVector::new(scaled.0 / norm, scaled.1 / norm))
}

/// Normalises a raw record, keeping its label.
pub fn preprocess(record: &RawRecord, scale: &FeatureScale) -> Result<(FeatureVector, Option<Label>)> {
    Ok((normalize(record.x0, record.x1, scale)?, record.label))
}

/// Normalises a record that must carry a label.
pub fn preprocess_labeled(record: &RawRecord, scale: &FeatureScale) -> Result<LabeledVector> {
    let (features, label) = preprocess(record, scale)?;
    let label = label.ok_or_else(|| ClassifierError::InvalidInput {
        message: format!("Reference record ({}, {}) has no label", record.x0, record.x1),
    })?;
    Ok(LabeledVector::new(features, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titanic_passengers() -> Result<()> {
        let scale = FeatureScale::TITANIC;
        let p1 = preprocess_labeled(&RawRecord::labeled(8500.0, 910.0, Label::One), &scale)?;
        let p2 = preprocess_labeled(&RawRecord::labeled(1200.0, 2105.0, Label::Zero), &scale)?;
        let (p3, label) = preprocess(&RawRecord::unlabeled(7800.0, 1121.0), &scale)?;

        assert_eq!(p1.label, Label::One);
        assert!((p1.features.x0() - 0.921).abs() < 0.005);
        assert!((p1.features.x1() - 0.390).abs() < 0.005);
        assert!((p2.features.x0() - 0.141).abs() < 0.005);
        assert!((p2.features.x1() - 0.990).abs() < 0.005);
        assert!((p3.x0() - 0.866).abs() < 0.005);
        assert!((p3.x1() - 0.500).abs() < 0.005);
        assert_eq!(label, None);
        for v in [p1.features, p2.features, p3] {
            assert!((v.norm() - 1.0).abs() < 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_zero_record_rejected() {
        let err = normalize(0.0, 0.0, &FeatureScale::TITANIC).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidInput { .. }));
    }

    #[test]
    fn test_missing_label_rejected() {
        let err = preprocess_labeled(&RawRecord::unlabeled(1.0, 1.0), &FeatureScale::TITANIC).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidInput { .. }));
    }

    #[test]
    fn test_invalid_scale() {
        assert!(FeatureScale::new(0.0, 1.0).is_err());
        assert!(FeatureScale::new(1.0, f64::INFINITY).is_err());
        assert_eq!(FeatureScale::new(10_000.0, 2_500.0).unwrap(), FeatureScale::default());
    }
}
