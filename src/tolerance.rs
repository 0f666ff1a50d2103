//! Fixed tolerances used by the geometric queries.

/// Magnitude below which a vector counts as the zero vector.
pub const ZERO_TOLERANCE: f64 = 1e-10;

/// Maximum distance, in radians, between an angle and π/2 for two vectors to
/// be reported orthogonal.
pub const ORTHOGONAL_TOLERANCE: f64 = 1e-10;

/// Maximum distance, in radians, between an angle and 0 or π for two vectors
/// to be reported parallel.
///
/// `acos` is ill-conditioned near ±1: a cosine off by a few ulps from 1.0
/// already yields an angle around 1e-8, so this is much looser than
/// [`ORTHOGONAL_TOLERANCE`].
pub const PARALLEL_TOLERANCE: f64 = 1e-6;
