// src/measurement/sampler.rs

use crate::core::constants::qsdc_constants::ZERO_NORM_TOLERANCE;
use crate::core::{AmplitudeVector, ClassifierError, OutcomeSample, Result};
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// Draws basis indices with Born-rule probabilities `|amplitude[i]|^2`.
///
/// The weights are used as-is; `WeightedIndex` divides by their sum, so a
/// state that is normalized only to within rounding still samples correctly.
#[derive(Debug, Clone)]
pub struct MeasurementSampler {
    distribution: WeightedIndex<f64>,
}

impl MeasurementSampler {
    /// Prepares the categorical distribution for `state`.
    ///
    /// Fails with [`ClassifierError::DegenerateSampling`] if the state carries
    /// no probability mass.
    pub fn new(state: &AmplitudeVector) -> Result<Self> {
        let norm_sq = state.norm_sqr();
        if !norm_sq.is_finite() || norm_sq < ZERO_NORM_TOLERANCE {
            return Err(ClassifierError::DegenerateSampling {
                message: format!("Cannot sample from a state with squared norm {}", norm_sq),
            });
        }
        let distribution = WeightedIndex::new(state.probabilities()).map_err(|e| ClassifierError::DegenerateSampling {
            message: format!("Invalid outcome weights: {}", e),
        })?;
        Ok(Self { distribution })
    }

    /// Draws one basis index in `0..16`.
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.distribution.sample(rng)
    }

    /// Draws one shot and projects it onto the measured bits.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> OutcomeSample {
        OutcomeSample::from_basis_index(self.sample_index(rng))
    }

    /// Draws `shots` independent outcomes.
    pub fn sample_many<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> Vec<OutcomeSample> {
        (0..shots).map(|_| self.sample(rng)).collect()
    }
}

/// Samples `shots` outcomes from `state`.
///
/// `shots` must be at least 1.
#[tracing::instrument(level = "debug", skip(state, rng))]
pub fn measure<R: Rng + ?Sized>(state: &AmplitudeVector, shots: usize, rng: &mut R) -> Result<Vec<OutcomeSample>> {
    if shots == 0 {
        return Err(ClassifierError::InvalidConfiguration {
            message: "Shot count must be at least 1".to_string(),
        });
    }
    let sampler = MeasurementSampler::new(state)?;
    Ok(sampler.sample_many(shots, rng))
}
