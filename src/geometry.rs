//! Geometric queries and constructions built on the arithmetic in `ops`.

use crate::tolerance::{ORTHOGONAL_TOLERANCE, PARALLEL_TOLERANCE, ZERO_TOLERANCE};
use crate::vector::{Scalar, Vector};
use crate::{Result, VectorError};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::debug;

impl Vector {
    /// Unit vector in the same direction.
    pub fn normalize(&self) -> Result<Vector> {
        if self.is_zero() {
            debug!(vector = %self, "refusing to normalize a zero vector");
            return Err(VectorError::ZeroVector("normalize"));
        }
        self.try_div(self.magnitude())
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_within(ZERO_TOLERANCE)
    }

    pub fn is_zero_within(&self, tolerance: Scalar) -> bool {
        self.magnitude() < tolerance
    }

    /// Angle in radians, in `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos` so rounding in the
    /// normalized dot product cannot produce NaN.
    pub fn angle_with(&self, v: &Vector) -> Result<Scalar> {
        let cosine = self.normalize()?.dot(&v.normalize()?)?;
        Ok(cosine.clamp(-1.0, 1.0).acos())
    }

    /// A zero vector is parallel to everything.
    pub fn is_parallel_with(&self, v: &Vector) -> Result<bool> {
        if self.is_zero() || v.is_zero() {
            return Ok(true);
        }
        let angle = self.angle_with(v)?;
        Ok(angle < PARALLEL_TOLERANCE || (angle - PI).abs() < PARALLEL_TOLERANCE)
    }

    /// A zero vector is orthogonal to everything. Otherwise the angle must lie
    /// within [`ORTHOGONAL_TOLERANCE`] of π/2 on either side.
    pub fn is_orthogonal_to(&self, v: &Vector) -> Result<bool> {
        if self.is_zero() || v.is_zero() {
            return Ok(true);
        }
        let angle = self.angle_with(v)?;
        Ok((angle - FRAC_PI_2).abs() < ORTHOGONAL_TOLERANCE)
    }

    /// Component of `self` along `v`.
    pub fn projection(&self, v: &Vector) -> Result<Vector> {
        let unit = v.normalize()?;
        let weight = self.dot(&unit)?;
        Ok(unit.scale(weight))
    }

    /// Component of `self` perpendicular to `v`.
    pub fn orthogonal(&self, v: &Vector) -> Result<Vector> {
        self.try_sub(&self.projection(v)?)
    }

    pub fn cross_product(&self, v: &Vector) -> Result<Vector> {
        if self.len() != 3 || v.len() != 3 {
            debug!(lhs = self.len(), rhs = v.len(), "cross product outside three dimensions");
            return Err(VectorError::CrossProductDimension {
                lhs: self.to_string(),
                rhs: v.to_string(),
            });
        }
        let (x1, y1, z1) = (self[0], self[1], self[2]);
        let (x2, y2, z2) = (v[0], v[1], v[2]);
        Ok(Vector::from_array(ndarray::arr1(&[
            y1 * z2 - y2 * z1,
            x2 * z1 - x1 * z2,
            x1 * y2 - x2 * y1,
        ])))
    }

    /// Area of the parallelogram spanned by `self` and `v`.
    pub fn quadrangular_area_with(&self, v: &Vector) -> Result<Scalar> {
        Ok(self.cross_product(v)?.magnitude())
    }

    pub fn triangular_area_with(&self, v: &Vector) -> Result<Scalar> {
        Ok(self.quadrangular_area_with(v)? / 2.0)
    }
}
