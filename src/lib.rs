pub mod geometry;
pub mod ops;
pub mod tolerance;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
    #[error("Dimension Mismatch: operand self({lhs}) has different dimension than operand v({rhs}) for {op}")]
    DimensionMismatch {
        op: &'static str,
        lhs: String,
        rhs: String,
    },
    #[error("Dimension Mismatch: cross products can only be computed on three-dimensional vectors, got self({lhs}) and v({rhs})")]
    CrossProductDimension { lhs: String, rhs: String },
    #[error("Unsupported operand type(s) for {op}: Vector and {operand}")]
    UnsupportedOperand {
        op: &'static str,
        operand: &'static str,
    },
    #[error("Zero Vector Error: cannot {0} a zero vector")]
    ZeroVector(&'static str),
    #[error("Division Error: division by zero")]
    DivisionByZero,
    #[error("Index Error: index {index} out of range for vector of dimension {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl VectorError {
    /// True for both the operand-length mismatch and the cross product's
    /// three-dimension requirement.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            VectorError::DimensionMismatch { .. } | VectorError::CrossProductDimension { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use ops::{Operand, Product};
pub use tolerance::{ORTHOGONAL_TOLERANCE, PARALLEL_TOLERANCE, ZERO_TOLERANCE};
pub use vector::{Scalar, Vector};
