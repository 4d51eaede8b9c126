// src/classification/mod.rs

//! Turns post-selected label counts into class probabilities and a decision.
//!
//! Ties go to label 0. This is a fixed convention so that equal counts always
//! give the same answer; the underlying interference circuit does not define
//! a tie rule of its own.

mod results;

pub use results::{ClassificationResult, Prediction};

use crate::core::constants::qsdc_constants::{AUX_BIT, LABEL_BIT, ZERO_NORM_TOLERANCE};
use crate::core::{AmplitudeVector, ClassifierError, Label, Result, bit_of};
use crate::measurement::Tally;

/// Computes class probabilities and the predicted label from a tally.
///
/// Pure: the same tally always yields the same result.
pub fn classify(tally: &Tally) -> ClassificationResult {
    let retained = tally.retained();
    let shots = tally.total();
    if retained == 0 {
        tracing::warn!(shots, "no shots survived post-selection; result is undecidable");
        return ClassificationResult {
            p_class_one: 0.0,
            p_class_zero: 0.0,
            retained,
            shots,
            prediction: Prediction::Undecidable,
        };
    }

    let c0 = tally.count(Label::Zero);
    let c1 = tally.count(Label::One);
    let p_class_one = c1 as f64 / retained as f64;
    let p_class_zero = c0 as f64 / retained as f64;
    let label = if c1 > c0 { Label::One } else { Label::Zero };

    ClassificationResult {
        p_class_one,
        p_class_zero,
        retained,
        shots,
        prediction: Prediction::Label(label),
    }
}

/// Infinite-shot class probabilities `(p_class_one, p_class_zero)` read
/// directly from a post-transform state: the Born-rule mass with `aux = 0`
/// split by the label bit and renormalized.
///
/// Fails with [`ClassifierError::DegenerateSampling`] if the `aux = 0`
/// subspace carries no mass.
pub fn exact_class_probabilities(state: &AmplitudeVector) -> Result<(f64, f64)> {
    let mut mass = [0.0f64; 2];
    for (index, p) in state.probabilities().iter().enumerate() {
        if bit_of(index, AUX_BIT) == 0 {
            mass[bit_of(index, LABEL_BIT)] += p;
        }
    }
    let accepted = mass[0] + mass[1];
    if accepted < ZERO_NORM_TOLERANCE {
        return Err(ClassifierError::DegenerateSampling {
            message: format!("Post-selected subspace has probability {}", accepted),
        });
    }
    Ok((mass[1] / accepted, mass[0] / accepted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_label_wins() {
        let result = classify(&Tally::from_counts(40, 60, 11));
        assert_eq!(result.prediction, Prediction::Label(Label::One));
        assert!((result.p_class_one - 0.6).abs() < 1e-12);
        assert!((result.p_class_zero - 0.4).abs() < 1e-12);
        assert_eq!(result.retained, 100);
        assert_eq!(result.shots, 111);

        let result = classify(&Tally::from_counts(7, 3, 0));
        assert_eq!(result.predicted_label(), Some(Label::Zero));
    }

    #[test]
    fn test_tie_resolves_to_label_zero() {
        // Documented convention: equal counts predict label 0.
        let result = classify(&Tally::from_counts(5, 5, 2));
        assert_eq!(result.prediction, Prediction::Label(Label::Zero));
        assert!((result.p_class_one - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_tally_is_undecidable() {
        let result = classify(&Tally::from_counts(0, 0, 3));
        assert!(result.prediction.is_undecidable());
        assert_eq!(result.predicted_label(), None);
        assert_eq!(result.retained, 0);
        assert_eq!(result.p_class_one, 0.0);
        assert_eq!(result.p_class_zero, 0.0);
        assert_eq!(result.acceptance_rate(), 0.0);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let tally = Tally::from_counts(4484, 5516, 987);
        assert_eq!(classify(&tally), classify(&tally));
    }

    #[test]
    fn test_exact_probabilities_on_degenerate_subspace() {
        let mut values = [0.0; 16];
        values[1] = 1.0; // aux = 1 only
        let state = AmplitudeVector::from_real(&values).unwrap();
        assert!(matches!(exact_class_probabilities(&state), Err(ClassifierError::DegenerateSampling { .. })));
    }
}
