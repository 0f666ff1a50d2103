//! Operand dispatch for the arithmetic operators.
//!
//! Every binary operation resolves its right-hand side through one explicit
//! branch table:
//!
//! | rhs                      | `+` / `-`             | `*`                    |
//! |--------------------------|-----------------------|------------------------|
//! | `Int`                    | element-wise          | scale                  |
//! | `Float`                  | `UnsupportedOperand`  | scale                  |
//! | `Vector`, same length    | element-wise          | dot product (scalar)   |
//! | `Vector`, length 1       | broadcast             | broadcast scale        |
//! | `Vector`, other length   | `DimensionMismatch`   | `DimensionMismatch`    |
//!
//! Broadcasting is one-sided: a length-1 *left* operand against a longer right
//! operand is a dimension mismatch.

use crate::vector::{Scalar, Vector};
use crate::{Result, VectorError};
use std::ops::Mul;
use tracing::debug;

/// Right-hand operand of a vector operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Int(i32),
    Float(Scalar),
    Vector(&'a Vector),
}

impl Operand<'_> {
    fn type_name(&self) -> &'static str {
        match self {
            Operand::Int(_) => "int",
            Operand::Float(_) => "float",
            Operand::Vector(_) => "Vector",
        }
    }
}

impl From<i32> for Operand<'_> {
    fn from(value: i32) -> Self {
        Operand::Int(value)
    }
}

impl From<Scalar> for Operand<'_> {
    fn from(value: Scalar) -> Self {
        Operand::Float(value)
    }
}

impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(value: &'a Vector) -> Self {
        Operand::Vector(value)
    }
}

/// Result of `*`: a dot product is a scalar, everything else a vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Product {
    Scalar(Scalar),
    Vector(Vector),
}

impl Product {
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Product::Scalar(s) => Some(*s),
            Product::Vector(_) => None,
        }
    }
}

fn dimension_mismatch(op: &'static str, lhs: &Vector, rhs: &Vector) -> VectorError {
    debug!(op, lhs = lhs.len(), rhs = rhs.len(), "operand dimensions differ");
    VectorError::DimensionMismatch {
        op,
        lhs: lhs.to_string(),
        rhs: rhs.to_string(),
    }
}

fn unsupported(op: &'static str, operand: &Operand<'_>) -> VectorError {
    let operand = operand.type_name();
    debug!(op, operand, "unsupported operand");
    VectorError::UnsupportedOperand { op, operand }
}

fn check_divisor(divisor: Scalar) -> Result<()> {
    if divisor == 0.0 {
        debug!("division of a vector by zero");
        return Err(VectorError::DivisionByZero);
    }
    Ok(())
}

impl Vector {
    /// Shared table for `+` and `-`; `combine` is applied coordinate-wise.
    fn additive(
        &self,
        op: &'static str,
        rhs: Operand<'_>,
        combine: impl Fn(Scalar, Scalar) -> Scalar,
    ) -> Result<Vector> {
        match rhs {
            Operand::Int(s) => {
                let s = Scalar::from(s);
                Ok(self.map(|c| combine(c, s)))
            }
            Operand::Vector(v) if v.len() == self.len() => Ok(Vector::from_array(
                self.as_array()
                    .iter()
                    .zip(v.as_array().iter())
                    .map(|(&a, &b)| combine(a, b))
                    .collect(),
            )),
            Operand::Vector(v) if v.len() == 1 => {
                let s = v[0];
                Ok(self.map(|c| combine(c, s)))
            }
            Operand::Vector(v) => Err(dimension_mismatch(op, self, v)),
            Operand::Float(_) => Err(unsupported(op, &rhs)),
        }
    }

    /// `self + rhs`.
    pub fn try_add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vector> {
        self.additive("+", rhs.into(), |a, b| a + b)
    }

    /// `lhs + self`; addition is commutative, so this is [`Vector::try_add`].
    pub fn try_radd<'a>(&self, lhs: impl Into<Operand<'a>>) -> Result<Vector> {
        self.try_add(lhs)
    }

    /// `self - rhs`, i.e. `self + (-rhs)`.
    pub fn try_sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vector> {
        self.additive("-", rhs.into(), |a, b| a - b)
    }

    /// `lhs - self`, computed as `-self + lhs`.
    ///
    /// This is the true reversed difference, not a second copy of
    /// `self - lhs`.
    pub fn try_rsub<'a>(&self, lhs: impl Into<Operand<'a>>) -> Result<Vector> {
        match lhs.into() {
            Operand::Vector(v) => v.try_sub(self),
            lhs => (-self).try_add(lhs).map_err(|err| match err {
                VectorError::UnsupportedOperand { operand, .. } => {
                    VectorError::UnsupportedOperand { op: "-", operand }
                }
                err => err,
            }),
        }
    }

    /// `self * rhs`: scaling, dot product, or broadcast scaling.
    pub fn try_mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Product> {
        match rhs.into() {
            Operand::Int(s) => Ok(Product::Vector(self.scale(Scalar::from(s)))),
            Operand::Float(s) => Ok(Product::Vector(self.scale(s))),
            Operand::Vector(v) if v.len() == self.len() => {
                Ok(Product::Scalar(self.as_array().dot(v.as_array())))
            }
            Operand::Vector(v) if v.len() == 1 => Ok(Product::Vector(self.scale(v[0]))),
            Operand::Vector(v) => Err(dimension_mismatch("*", self, v)),
        }
    }

    /// `lhs * self`; multiplication is commutative, so this is [`Vector::try_mul`].
    pub fn try_rmul<'a>(&self, lhs: impl Into<Operand<'a>>) -> Result<Product> {
        self.try_mul(lhs)
    }

    pub fn scale(&self, factor: Scalar) -> Vector {
        self.map(|c| c * factor)
    }

    /// Dot product of two vectors of the same dimension. Unlike
    /// [`Vector::try_mul`] this never broadcasts.
    pub fn dot(&self, v: &Vector) -> Result<Scalar> {
        if self.len() != v.len() {
            return Err(dimension_mismatch("*", self, v));
        }
        Ok(self.as_array().dot(v.as_array()))
    }

    /// True division by a scalar.
    pub fn try_div(&self, divisor: Scalar) -> Result<Vector> {
        check_divisor(divisor)?;
        Ok(self.map(|c| c / divisor))
    }

    /// Floor division by a scalar.
    pub fn floor_div(&self, divisor: Scalar) -> Result<Vector> {
        check_divisor(divisor)?;
        Ok(self.map(|c| (c / divisor).floor()))
    }

    /// Floored modulo: each result takes the sign of `divisor`.
    pub fn modulo(&self, divisor: Scalar) -> Result<Vector> {
        check_divisor(divisor)?;
        Ok(self.map(|c| {
            let m = c % divisor;
            if m != 0.0 && (m < 0.0) != (divisor < 0.0) {
                m + divisor
            } else {
                m
            }
        }))
    }
}

impl Mul<Scalar> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: Scalar) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<&Vector> for Scalar {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        rhs.scale(self)
    }
}
