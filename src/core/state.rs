// src/core/state.rs

use super::constants::qsdc_constants::{AUX_BIT, DIM, LABEL_BIT, NUM_BITS};
use super::error::{ClassifierError, Result};
use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// Dense 16-entry complex amplitude vector over the 4-bit register.
///
/// Basis index `i` reads as `b3 b2 b1 b0` with b0 the auxiliary bit, b1 the
/// feature selector, b2 unused and b3 the label. Transformations never mutate
/// a vector in place; they build a new one.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct AmplitudeVector {
    amplitudes: [Complex<f64>; DIM],
}

impl AmplitudeVector {
    /// Wraps a full set of amplitudes. Normalisation is not enforced here;
    /// see [`crate::validation::check_normalization`].
    pub fn new(amplitudes: [Complex<f64>; DIM]) -> Self {
        Self { amplitudes }
    }

    /// All-zero vector.
    pub fn zeros() -> Self {
        Self { amplitudes: [Complex::zero(); DIM] }
    }

    /// Builds a vector from an arbitrary slice, which must have exactly
    /// [`DIM`] entries.
    pub fn from_slice(values: &[Complex<f64>]) -> Result<Self> {
        let amplitudes: [Complex<f64>; DIM] = values.try_into().map_err(|_| ClassifierError::DimensionMismatch {
            expected: DIM,
            found: values.len(),
        })?;
        Ok(Self { amplitudes })
    }

    /// Builds a vector from real amplitudes.
    pub fn from_real(values: &[f64]) -> Result<Self> {
        let complex: Vec<Complex<f64>> = values.iter().map(|&re| Complex::new(re, 0.0)).collect();
        Self::from_slice(&complex)
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Amplitude at basis index `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<Complex<f64>> {
        self.amplitudes.get(index).copied()
    }

    /// Number of basis states (always 16).
    pub fn dim(&self) -> usize {
        DIM
    }

    /// Sum of squared magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Born-rule weights `|amplitude[i]|^2`, in basis order.
    pub fn probabilities(&self) -> [f64; DIM] {
        let mut probabilities = [0.0; DIM];
        for (p, c) in probabilities.iter_mut().zip(self.amplitudes.iter()) {
            *p = c.norm_sqr();
        }
        probabilities
    }

    /// Iterates `(index, amplitude)` over entries with non-negligible magnitude.
    pub fn nonzero(&self, tolerance: f64) -> impl Iterator<Item = (usize, Complex<f64>)> + '_ {
        self.amplitudes
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.norm_sqr() > tolerance)
            .map(|(i, c)| (i, *c))
    }
}

impl Default for AmplitudeVector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl fmt::Display for AmplitudeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amplitudes[")?;
        let mut first = true;
        for (i, c) in self.nonzero(1e-20) {
            write!(f, "{}|{:0width$b}>: {:+.4}", if first { "" } else { ", " }, i, c.re, width = NUM_BITS)?;
            if c.im != 0.0 {
                write!(f, "{:+.4}i", c.im)?;
            }
            first = false;
        }
        write!(f, "]")
    }
}

/// Value (0 or 1) of bit `bit` in basis index `index`.
pub fn bit_of(index: usize, bit: usize) -> usize {
    (index >> bit) & 1
}

/// A single measured shot: the auxiliary and label bits of the drawn basis state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutcomeSample {
    /// Value of the auxiliary bit.
    pub aux: usize,
    /// Value of the label bit.
    pub label: usize,
}

impl OutcomeSample {
    /// Projects a 4-bit basis index onto the two measured bits.
    pub fn from_basis_index(index: usize) -> Self {
        Self {
            aux: bit_of(index, AUX_BIT),
            label: bit_of(index, LABEL_BIT),
        }
    }
}

impl fmt::Display for OutcomeSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Classical register order: label bit left, aux bit right.
        write!(f, "{}{}", self.label, self.aux)
    }
}
