// src/simulation/engine.rs
use crate::core::constants::qsdc_constants::{DIM, NUM_BITS};
use crate::core::{AmplitudeVector, ClassifierError, Result};
use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::FRAC_1_SQRT_2;

/// A 2x2 complex matrix acting on one bit.
pub type Unitary2 = [[Complex<f64>; 2]; 2];

/// The normalized Hadamard matrix (1/√2)·[[1, 1], [1, -1]].
pub fn hadamard() -> Unitary2 {
    [
        [Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(FRAC_1_SQRT_2, 0.0)],
        [Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(-FRAC_1_SQRT_2, 0.0)],
    ]
}

/// Applies a 2x2 matrix to bit `bit` of the register and returns the new state.
///
/// Basis states are paired by the value of `bit` (i0 has it clear, i1 set);
/// each pair `(a[i0], a[i1])` is replaced by `matrix · (a[i0], a[i1])`.
/// Every other bit is left untouched.
pub fn apply_single_bit_unitary(state: &AmplitudeVector, bit: usize, matrix: &Unitary2) -> Result<AmplitudeVector> {
    if bit >= NUM_BITS {
        return Err(ClassifierError::DimensionMismatch { expected: NUM_BITS, found: bit });
    }
    let k_mask = 1 << bit; // Mask for the target bit
    let lower_mask = k_mask - 1; // Mask for bits to the right
    let upper_mask = !lower_mask; // Bits to the left, once shifted

    let amplitudes = state.amplitudes();
    let mut new_vec = [Complex::zero(); DIM];

    for i in 0..DIM / 2 {
        // Insert a 0 at position `bit` to get the |...0...> index.
        let i0 = ((i & upper_mask) << 1) | (i & lower_mask);
        let i1 = i0 | k_mask;

        let psi_0 = amplitudes[i0];
        let psi_1 = amplitudes[i1];

        new_vec[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
        new_vec[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
    }

    Ok(AmplitudeVector::new(new_vec))
}
