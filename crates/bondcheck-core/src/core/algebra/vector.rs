use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum VectorError {
    #[error("Shape mismatch: left operand has {left} elements, right operand has {right}")]
    ShapeMismatch { left: usize, right: usize },
    #[error("Division by zero{}", divisor_location(.index))]
    DivisionByZero { index: Option<usize> },
    #[error("Cannot take the mean of an empty vector")]
    EmptyMean,
}

fn divisor_location(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at element {i}"),
        None => " (scalar divisor)".to_string(),
    }
}

impl VectorError {
    /// Both a zero divisor and the mean of an empty vector are division failures.
    pub fn is_division_error(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. } | Self::EmptyMean)
    }
}

/// Right-hand side of a binary vector operation.
///
/// A `Scalar` is broadcast against every element; a `SameShape` vector is
/// combined pairwise and must have the same length as the left operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Scalar(f64),
    SameShape(&'a NumericVector),
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<&'a NumericVector> for Operand<'a> {
    fn from(vector: &'a NumericVector) -> Self {
        Operand::SameShape(vector)
    }
}

/// An ordered, fixed-length sequence of reals with elementwise arithmetic.
///
/// Every operation returns a new vector; operands are never mutated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericVector {
    data: Vec<f64>,
}

impl NumericVector {
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    pub fn mean(&self) -> Result<f64, VectorError> {
        if self.is_empty() {
            return Err(VectorError::EmptyMean);
        }
        Ok(self.sum() / self.len() as f64)
    }

    pub fn add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self, VectorError> {
        self.combine(other.into(), |a, b| a + b)
    }

    pub fn subtract<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self, VectorError> {
        self.combine(other.into(), |a, b| a - b)
    }

    pub fn multiply<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self, VectorError> {
        self.combine(other.into(), |a, b| a * b)
    }

    pub fn divide<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self, VectorError> {
        let other = other.into();
        match other {
            Operand::Scalar(s) if s == 0.0 => {
                return Err(VectorError::DivisionByZero { index: None });
            }
            Operand::SameShape(v) => {
                if let Some(index) = v.data.iter().position(|&x| x == 0.0) {
                    // Report shape problems before zero divisors.
                    self.check_shape(v)?;
                    return Err(VectorError::DivisionByZero { index: Some(index) });
                }
            }
            Operand::Scalar(_) => {}
        }
        self.combine(other, |a, b| a / b)
    }

    pub fn power(&self, exponent: f64) -> Self {
        self.map(|x| x.powf(exponent))
    }

    /// Inner product, defined as `self.multiply(other)?.sum()`.
    pub fn dot(&self, other: &NumericVector) -> Result<f64, VectorError> {
        Ok(self.multiply(other)?.sum())
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(self.data.iter().map(|&x| f(x)).collect())
    }

    fn check_shape(&self, other: &NumericVector) -> Result<(), VectorError> {
        if self.len() != other.len() {
            return Err(VectorError::ShapeMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    fn combine(
        &self,
        other: Operand<'_>,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Self, VectorError> {
        match other {
            Operand::Scalar(s) => Ok(self.map(|x| op(x, s))),
            Operand::SameShape(v) => {
                self.check_shape(v)?;
                Ok(Self::new(
                    self.data
                        .iter()
                        .zip(v.data.iter())
                        .map(|(&a, &b)| op(a, b))
                        .collect(),
                ))
            }
        }
    }
}

impl From<Vec<f64>> for NumericVector {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl From<&[f64]> for NumericVector {
    fn from(data: &[f64]) -> Self {
        Self::new(data.to_vec())
    }
}

impl FromIterator<f64> for NumericVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Add<&NumericVector> for &NumericVector {
    type Output = Result<NumericVector, VectorError>;

    fn add(self, rhs: &NumericVector) -> Self::Output {
        NumericVector::add(self, rhs)
    }
}

impl Sub<&NumericVector> for &NumericVector {
    type Output = Result<NumericVector, VectorError>;

    fn sub(self, rhs: &NumericVector) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul<&NumericVector> for &NumericVector {
    type Output = Result<NumericVector, VectorError>;

    fn mul(self, rhs: &NumericVector) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Div<&NumericVector> for &NumericVector {
    type Output = Result<NumericVector, VectorError>;

    fn div(self, rhs: &NumericVector) -> Self::Output {
        self.divide(rhs)
    }
}

// Scalar broadcasting can only fail for division.
impl Add<f64> for &NumericVector {
    type Output = NumericVector;

    fn add(self, rhs: f64) -> Self::Output {
        self.map(|x| x + rhs)
    }
}

impl Sub<f64> for &NumericVector {
    type Output = NumericVector;

    fn sub(self, rhs: f64) -> Self::Output {
        self.map(|x| x - rhs)
    }
}

impl Mul<f64> for &NumericVector {
    type Output = NumericVector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|x| x * rhs)
    }
}

impl Div<f64> for &NumericVector {
    type Output = Result<NumericVector, VectorError>;

    fn div(self, rhs: f64) -> Self::Output {
        self.divide(rhs)
    }
}

impl fmt::Display for NumericVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.data)
    }
}
