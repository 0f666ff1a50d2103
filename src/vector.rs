use crate::{Result, VectorError};
use ndarray::Array1;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut, Neg};
use tracing::debug;

pub type Scalar = f64;

/// A point or direction in n-dimensional real space.
///
/// The dimension is chosen at construction. [`Vector::remove`] can still
/// shrink it afterwards; every binary operation compares the *current*
/// dimensions of its operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Array1<Scalar>,
}

/// Builds a [`Vector`] from a variadic list of numbers.
///
/// Expands to a `Result<Vector>`, so `vector![]` yields `InvalidArgument`.
///
/// ```
/// use nvector::vector;
///
/// let v = vector![3, 4].unwrap();
/// assert_eq!(v.magnitude(), 5.0);
/// ```
#[macro_export]
macro_rules! vector {
    ($($coordinate:expr),* $(,)?) => {{
        let coordinates: ::std::vec::Vec<$crate::Scalar> =
            ::std::vec![$($crate::Scalar::from($coordinate)),*];
        $crate::Vector::new(coordinates)
    }};
}

impl Vector {
    /// Creates a vector from an ordered sequence of coordinates.
    pub fn new<I, T>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        let data: Vec<Scalar> = coordinates.into_iter().map(Into::into).collect();
        if data.is_empty() {
            debug!("rejected vector construction with no coordinates");
            return Err(VectorError::InvalidArgument(
                "the coordinates must be non empty".to_string(),
            ));
        }
        Ok(Self::from_array(Array1::from_vec(data)))
    }

    pub(crate) fn from_array(data: Array1<Scalar>) -> Self {
        Self { data }
    }

    pub(crate) fn map(&self, f: impl Fn(Scalar) -> Scalar) -> Self {
        Self::from_array(self.data.mapv(f))
    }

    pub(crate) fn as_array(&self) -> &Array1<Scalar> {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<Scalar> {
        self.data.to_vec()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Only reachable by removing every coordinate.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Scalar> + '_ {
        self.data.iter()
    }

    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.data.get(index).copied()
    }

    pub fn set(&mut self, index: usize, value: impl Into<Scalar>) -> Result<()> {
        let len = self.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(VectorError::IndexOutOfBounds { index, len }),
        }
    }

    /// Removes the coordinate at `index`, shrinking the dimension by one.
    ///
    /// The non-empty invariant is not re-checked: removing the last
    /// coordinate leaves an empty vector.
    pub fn remove(&mut self, index: usize) -> Result<Scalar> {
        let len = self.len();
        let removed = self
            .get(index)
            .ok_or(VectorError::IndexOutOfBounds { index, len })?;

        let kept: Vec<Scalar> = self
            .data
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, c)| *c)
            .collect();
        self.data = Array1::from_vec(kept);
        Ok(removed)
    }

    pub fn contains(&self, value: impl Into<Scalar>) -> bool {
        let value = value.into();
        self.data.iter().any(|&c| c == value)
    }

    /// Euclidean norm.
    ///
    /// Coordinates are scaled by the largest absolute coordinate before
    /// squaring, so the result stays finite for any finite coordinates.
    pub fn magnitude(&self) -> Scalar {
        let largest = self.data.fold(0.0, |m: Scalar, &c| m.max(c.abs()));
        if largest == 0.0 || !largest.is_finite() {
            return largest;
        }
        let scaled = self.data.mapv(|c| c / largest);
        largest * scaled.dot(&scaled).sqrt()
    }

    /// Unary plus.
    pub fn pos(&self) -> &Self {
        self
    }

    pub fn abs(&self) -> Self {
        self.map(Scalar::abs)
    }
}

impl TryFrom<Vec<Scalar>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<Scalar>) -> Result<Self> {
        Self::new(coordinates)
    }
}

impl TryFrom<&[Scalar]> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: &[Scalar]) -> Result<Self> {
        Self::new(coordinates.iter().copied())
    }
}

impl Index<usize> for Vector {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Scalar {
        &mut self.data[index]
    }
}

/// Orders by magnitude alone. Vectors of equal magnitude but different
/// coordinates are incomparable, which keeps this consistent with the
/// coordinate-wise `PartialEq`.
impl PartialOrd for Vector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.magnitude().partial_cmp(&other.magnitude()) {
            Some(Ordering::Equal) => None,
            ordering => ordering,
        }
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.map(|c| -c)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: [")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}
