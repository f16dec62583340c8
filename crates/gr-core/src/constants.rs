/// Cosine similarity below which a new edge is flagged as surprising
pub const SURPRISE_THRESHOLD: f64 = 0.1;

/// Numerical epsilon for near-zero comparisons
pub const EPSILON: f64 = 1e-10;

/// Eigenvalues at or below this floor contribute nothing to spectral entropy
pub const EIGENVALUE_FLOOR: f64 = 1e-10;

/// Default target for the critical discovery parameter
pub const D_TARGET_DEFAULT: f64 = -0.03;

/// Default target for the surprising-edge fraction
pub const ALPHA_TARGET_DEFAULT: f64 = 0.12;

/// Default weight of the discovery-parameter term
pub const LAMBDA_D_DEFAULT: f64 = 1.0;

/// Default weight of the semantic-entropy term
pub const LAMBDA_SE_DEFAULT: f64 = 0.5;

/// Default weight of the surprising-edge term
pub const LAMBDA_ALPHA_DEFAULT: f64 = 0.5;
