//! Fixed constants of the 4-bit classifier encoding.

/// Layout and tolerance constants shared by every pipeline stage.
pub mod qsdc_constants {
    /// Number of bits in the encoded register.
    pub const NUM_BITS: usize = 4;
    /// Dimension of the amplitude vector (2^NUM_BITS).
    pub const DIM: usize = 1 << NUM_BITS;

    /// Auxiliary bit: receives the Hadamard and is post-selected on 0.
    pub const AUX_BIT: usize = 0;
    /// Selects which coordinate (x0 or x1) of a feature vector a slot holds.
    pub const FEATURE_BIT: usize = 1;
    /// Always 0 in this encoding.
    pub const UNUSED_BIT: usize = 2;
    /// Class label bit, tallied after post-selection.
    pub const LABEL_BIT: usize = 3;

    /// Shared amplitude scale: four unit vectors (two references plus two
    /// copies of the query) each contribute ALPHA^2 to the total norm.
    pub const ALPHA: f64 = 0.5;

    /// Shot count of the reference scenario.
    pub const DEFAULT_SHOTS: usize = 10_000;

    /// Allowed deviation of a feature vector's L2 norm from 1.
    /// Loose enough for inputs rounded to three decimals.
    pub const FEATURE_NORM_TOLERANCE: f64 = 1e-3;
    /// Allowed deviation of a state's squared norm from 1.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Below this squared norm a state is treated as all-zero.
    pub const ZERO_NORM_TOLERANCE: f64 = 1e-12;
}
