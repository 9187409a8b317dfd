//! Elementwise vector algebra.
//!
//! [`NumericVector`] supports arithmetic against a broadcast scalar or a
//! same-length vector, selected by the [`Operand`] passed on the right-hand
//! side, plus the `sum`/`mean` reductions and an inner product.
//!
//! ```
//! use bondcheck::core::algebra::NumericVector;
//!
//! let u = NumericVector::new(vec![1.0, 2.0, 3.0]);
//! let v = NumericVector::new(vec![4.0, 5.0, 6.0]);
//!
//! assert_eq!(u.add(&v).unwrap().as_slice(), &[5.0, 7.0, 9.0]);
//! assert_eq!(u.multiply(2.0).unwrap().as_slice(), &[2.0, 4.0, 6.0]);
//! assert_eq!(u.dot(&v).unwrap(), 32.0);
//! ```

mod vector;

pub use vector::{NumericVector, Operand, VectorError};
