// src/validation/mod.rs

//! Invariant checks applied at stage boundaries.

use crate::core::constants::qsdc_constants::{FEATURE_NORM_TOLERANCE, NORM_TOLERANCE};
use crate::core::{AmplitudeVector, ClassifierError, FeatureVector, Result};

/// Checks that the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `AmplitudeVector` to check.
/// * `tolerance` - Allowed deviation of the squared norm from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(ClassifierError::InvalidInput)` otherwise.
pub fn check_normalization(state: &AmplitudeVector, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(ClassifierError::InvalidInput {
            message: format!("State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})", norm_sq, effective_tolerance),
        })
    } else {
        Ok(())
    }
}

/// Checks that a feature vector is finite and has unit L2 norm.
///
/// `tolerance` bounds `|‖v‖ - 1|` and defaults to 1e-3, which admits
/// coordinates rounded to three decimals.
pub fn check_unit_norm(feature: &FeatureVector, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(FEATURE_NORM_TOLERANCE);
    if !feature.is_finite() {
        return Err(ClassifierError::InvalidInput {
            message: format!("Feature vector {:?} has non-finite coordinates", feature),
        });
    }
    let norm = feature.norm();
    if (norm - 1.0).abs() > effective_tolerance {
        return Err(ClassifierError::InvalidInput {
            message: format!("Feature vector {} is not unit norm: |v| = {:.6} (Deviation > {})", feature, norm, effective_tolerance),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_norm_accepts_rounded_reference_points() {
        for (x0, x1) in [(0.921, 0.390), (0.141, 0.990), (0.866, 0.500)] {
            assert!(check_unit_norm(&FeatureVector::new(x0, x1), None).is_ok(), "({x0}, {x1})");
        }
    }

    #[test]
    fn test_unit_norm_rejects_unnormalized_and_nan() {
        assert!(matches!(
            check_unit_norm(&FeatureVector::new(8500.0, 910.0), None),
            Err(ClassifierError::InvalidInput { .. })
        ));
        assert!(matches!(
            check_unit_norm(&FeatureVector::new(f64::NAN, 1.0), None),
            Err(ClassifierError::InvalidInput { .. })
        ));
        assert!(check_unit_norm(&FeatureVector::new(0.0, 0.0), None).is_err());
    }

    #[test]
    fn test_check_normalization() {
        let mut values = [0.0; 16];
        values[0] = 1.0;
        let basis = AmplitudeVector::from_real(&values).unwrap();
        assert!(check_normalization(&basis, None).is_ok());
        assert!(check_normalization(&AmplitudeVector::zeros(), None).is_err());
    }
}
