// src/simulation/mod.rs

//! Runs the full classifier pipeline.
//!
//! `Simulator` holds the run configuration (shot count and optional seed) and
//! chains encoding, the auxiliary-bit Hadamard, sampling, post-selection and
//! classification. Each stage is a pure function; the simulator keeps no state
//! between runs.

pub mod engine;

use crate::classification::{ClassificationResult, classify};
use crate::core::constants::qsdc_constants::{AUX_BIT, DEFAULT_SHOTS};
use crate::core::{AmplitudeVector, ClassifierError, ClassifierInput, Result};
use crate::encoding::encode_input;
use crate::measurement::{measure, post_select};
use engine::{apply_single_bit_unitary, hadamard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Pipeline configuration and entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulator {
    shots: usize,
    seed: Option<u64>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self { shots: DEFAULT_SHOTS, seed: None }
    }
}

impl Simulator {
    /// Creates a simulator with 10000 shots and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of shots. Must be at least 1 by the time `run` is called.
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Fixes the RNG seed so runs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Configured shot count.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Encodes the input and applies the Hadamard to the auxiliary bit,
    /// returning the state that is measured.
    pub fn prepare_state(&self, input: &ClassifierInput) -> Result<AmplitudeVector> {
        let encoded = encode_input(input)?;
        apply_single_bit_unitary(&encoded, AUX_BIT, &hadamard())
    }

    /// Runs the pipeline with an RNG built from the configured seed
    /// (or from OS entropy when no seed is set).
    ///
    /// # Returns
    /// * `Ok(ClassificationResult)`, possibly with an undecidable prediction
    ///   when no shot survives post-selection.
    /// * `Err(ClassifierError)` for invalid inputs, zero shots, or a state
    ///   with no probability mass.
    pub fn run(&self, input: &ClassifierInput) -> Result<ClassificationResult> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(input, &mut rng)
    }

    /// Runs the pipeline drawing shots from `rng`.
    #[tracing::instrument(level = "debug", skip(self, input, rng), fields(shots = self.shots))]
    pub fn run_with_rng<R: Rng + ?Sized>(&self, input: &ClassifierInput, rng: &mut R) -> Result<ClassificationResult> {
        if self.shots == 0 {
            return Err(ClassifierError::InvalidConfiguration {
                message: "Shot count must be at least 1".to_string(),
            });
        }
        let state = self.prepare_state(input)?;
        tracing::debug!(state = %state, "interference_applied");

        let samples = measure(&state, self.shots, rng)?;
        let tally = post_select(&samples);
        let result = classify(&tally);

        tracing::debug!(
            retained = result.retained,
            p_class_one = result.p_class_one,
            p_class_zero = result.p_class_zero,
            prediction = %result.prediction,
            "classification_complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::exact_class_probabilities;
    use crate::core::{FeatureVector, Label, LabeledVector};
    use crate::validation::check_normalization;

    fn reference_input() -> ClassifierInput {
        ClassifierInput::new(
            LabeledVector::new(FeatureVector::new(0.921, 0.390), Label::One),
            LabeledVector::new(FeatureVector::new(0.141, 0.990), Label::Zero),
            FeatureVector::new(0.866, 0.500),
        )
    }

    #[test]
    fn test_defaults() {
        let sim = Simulator::new();
        assert_eq!(sim.shots(), 10_000);
        assert_eq!(sim.seed(), None);
        let sim = sim.with_shots(5).with_seed(9);
        assert_eq!((sim.shots(), sim.seed()), (5, Some(9)));
    }

    #[test]
    fn test_zero_shots_is_configuration_error() {
        let err = Simulator::new().with_shots(0).with_seed(1).run(&reference_input()).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_prepared_state_matches_squared_distance_formula() -> Result<()> {
        let state = Simulator::new().prepare_state(&reference_input())?;
        // Norm is the mean squared norm of the rounded inputs, within 1e-3 of 1.
        check_normalization(&state, Some(1e-3))?;

        // After H on aux, P(aux=0, label=l) = |ref_l + query|^2 / 8.
        let (p1, p0) = exact_class_probabilities(&state)?;
        let d1 = (0.921f64 + 0.866).powi(2) + (0.390f64 + 0.500).powi(2);
        let d0 = (0.141f64 + 0.866).powi(2) + (0.990f64 + 0.500).powi(2);
        assert!((p1 - d1 / (d0 + d1)).abs() < 1e-12);
        assert!((p0 - d0 / (d0 + d1)).abs() < 1e-12);
        assert!((p1 - 0.552).abs() < 0.001);
        Ok(())
    }

    #[test]
    fn test_seeded_runs_are_reproducible() -> Result<()> {
        let sim = Simulator::new().with_shots(2_000).with_seed(77);
        assert_eq!(sim.run(&reference_input())?, sim.run(&reference_input())?);
        Ok(())
    }
}
