// src/encoding/mod.rs

//! Amplitude encoding of two reference points and one query into the
//! 16-dimensional register.
//!
//! The slot assignment is a fixed table. References sit in the `aux = 0`
//! half under their own label; the query is copied into the `aux = 1` half
//! under both labels, so that a Hadamard on the auxiliary bit interferes each
//! reference with the query.

use crate::core::constants::qsdc_constants::{ALPHA, AUX_BIT, FEATURE_BIT, LABEL_BIT};
use crate::core::{AmplitudeVector, ClassifierError, ClassifierInput, FeatureVector, Label, LabeledVector, Result};
use crate::validation::check_unit_norm;
use num_complex::Complex;

/// Where the value written to a slot comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSource {
    /// The reference point carrying this label.
    Reference(Label),
    /// The query point (its copy under the given label).
    Query(Label),
}

/// `(basis index, source, feature coordinate)` for every populated slot.
/// All other indices hold 0.
pub const ENCODING_TABLE: [(usize, SlotSource, usize); 8] = [
    (0b0000, SlotSource::Reference(Label::Zero), 0),
    (0b0010, SlotSource::Reference(Label::Zero), 1),
    (0b1000, SlotSource::Reference(Label::One), 0),
    (0b1010, SlotSource::Reference(Label::One), 1),
    (0b0001, SlotSource::Query(Label::Zero), 0),
    (0b0011, SlotSource::Query(Label::Zero), 1),
    (0b1001, SlotSource::Query(Label::One), 0),
    (0b1011, SlotSource::Query(Label::One), 1),
];

/// Basis index for the given label, feature coordinate and auxiliary value.
pub fn basis_index(label: Label, feature: usize, aux: usize) -> usize {
    (label.bit() << LABEL_BIT) | ((feature & 1) << FEATURE_BIT) | ((aux & 1) << AUX_BIT)
}

/// Encodes a [`ClassifierInput`]. See [`encode`].
pub fn encode_input(input: &ClassifierInput) -> Result<AmplitudeVector> {
    encode(&input.reference_a, &input.reference_b, &input.query)
}

/// Places the six input coordinates into their fixed slots, scaled by
/// [`ALPHA`].
///
/// The references may be given in either order but must carry different
/// labels. Every vector must be finite and unit norm; violations are reported
/// as [`ClassifierError::InvalidInput`] rather than corrected.
#[tracing::instrument(level = "debug")]
pub fn encode(reference_a: &LabeledVector, reference_b: &LabeledVector, query: &FeatureVector) -> Result<AmplitudeVector> {
    if reference_a.label == reference_b.label {
        return Err(ClassifierError::InvalidInput {
            message: format!("Both reference points carry label {}; one of each class is required", reference_a.label),
        });
    }
    check_unit_norm(&reference_a.features, None)?;
    check_unit_norm(&reference_b.features, None)?;
    check_unit_norm(query, None)?;

    let reference_for = |label: Label| {
        if reference_a.label == label { &reference_a.features } else { &reference_b.features }
    };

    let mut amplitudes = [Complex::new(0.0, 0.0); 16];
    for (index, source, feature) in ENCODING_TABLE {
        let value = match source {
            SlotSource::Reference(label) => reference_for(label).coordinate(feature),
            SlotSource::Query(_) => query.coordinate(feature),
        };
        amplitudes[index] = Complex::new(ALPHA * value, 0.0);
    }

    let state = AmplitudeVector::new(amplitudes);
    tracing::debug!(norm_sqr = state.norm_sqr(), "amplitude_encoding_complete");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::qsdc_constants::UNUSED_BIT;
    use crate::core::bit_of;
    use crate::validation::check_normalization;

    fn unit(theta: f64) -> FeatureVector {
        FeatureVector::new(theta.cos(), theta.sin())
    }

    #[test]
    fn test_table_matches_bit_layout() {
        for (index, source, feature) in ENCODING_TABLE {
            let (label, aux) = match source {
                SlotSource::Reference(label) => (label, 0),
                SlotSource::Query(label) => (label, 1),
            };
            assert_eq!(index, basis_index(label, feature, aux), "slot {index:04b}");
            assert_eq!(bit_of(index, UNUSED_BIT), 0);
        }
    }

    #[test]
    fn test_reference_slots() -> Result<()> {
        let one = LabeledVector::new(FeatureVector::new(0.921, 0.390), Label::One);
        let zero = LabeledVector::new(FeatureVector::new(0.141, 0.990), Label::Zero);
        let query = FeatureVector::new(0.866, 0.5);
        let state = encode(&one, &zero, &query)?;
        let re = |i: usize| state.amplitudes()[i].re;

        assert!((re(0) - 0.5 * 0.141).abs() < 1e-12);
        assert!((re(2) - 0.5 * 0.990).abs() < 1e-12);
        assert!((re(8) - 0.5 * 0.921).abs() < 1e-12);
        assert!((re(10) - 0.5 * 0.390).abs() < 1e-12);
        for i in [1, 9] {
            assert!((re(i) - 0.5 * 0.866).abs() < 1e-12);
        }
        for i in [3, 11] {
            assert!((re(i) - 0.25).abs() < 1e-12);
        }
        for i in [4, 5, 6, 7, 12, 13, 14, 15] {
            assert_eq!(state.amplitudes()[i], Complex::new(0.0, 0.0));
        }
        Ok(())
    }

    #[test]
    fn test_reference_order_is_irrelevant() -> Result<()> {
        let one = LabeledVector::new(unit(0.4), Label::One);
        let zero = LabeledVector::new(unit(1.4), Label::Zero);
        let query = unit(0.5);
        assert_eq!(encode(&one, &zero, &query)?, encode(&zero, &one, &query)?);
        Ok(())
    }

    #[test]
    fn test_encoded_state_is_normalized() -> Result<()> {
        for step in 0..25 {
            let t = step as f64 * 0.27;
            let one = LabeledVector::new(unit(t), Label::One);
            let zero = LabeledVector::new(unit(2.0 * t + 0.3), Label::Zero);
            let query = unit(-t);
            let state = encode(&one, &zero, &query)?;
            check_normalization(&state, Some(1e-9))?;
        }
        Ok(())
    }

    #[test]
    fn test_rejects_duplicate_labels() {
        let a = LabeledVector::new(unit(0.1), Label::One);
        let b = LabeledVector::new(unit(0.2), Label::One);
        assert!(matches!(encode(&a, &b, &unit(0.3)), Err(ClassifierError::InvalidInput { .. })));
    }

    #[test]
    fn test_rejects_unnormalized_query() {
        let a = LabeledVector::new(unit(0.1), Label::One);
        let b = LabeledVector::new(unit(0.2), Label::Zero);
        let err = encode(&a, &b, &FeatureVector::new(7800.0, 1121.0)).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidInput { .. }));
    }
}
