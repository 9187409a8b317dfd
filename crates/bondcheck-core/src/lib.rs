//! # bondcheck
//!
//! A small verification kernel that reproduces the bonded harmonic energies a
//! molecular-simulation engine computes internally, then checks the two
//! results agree within a floating-point tolerance.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless models (`Conformation`, `BondTerm`,
//!   `AngleTerm`), the `NumericVector` algebra type, geometry helpers, the harmonic
//!   energy model, and the case-file loader.
//!
//! - **[`engine`]: The Check.** Tolerance configuration and the comparison of
//!   computed energies against reference values.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into a
//!   single verification run.
//!
//! All inputs are expected in one consistent unit system; stripping units is
//! the job of whatever produced the numbers.
//!
//! ```
//! use bondcheck::core::forcefield::term::ReferenceEnergies;
//! use bondcheck::core::models::{conformation::Conformation, terms::{AngleTerm, BondTerm}};
//! use bondcheck::engine::config::CheckConfig;
//! use bondcheck::workflows::verify;
//!
//! let conformation = Conformation::from_rows(&[
//!     [0.0957, 0.0, 0.0],
//!     [0.0, 0.0, 0.0],
//!     [-0.0256, 0.0928, 0.0],
//! ]);
//! let bonds = [
//!     BondTerm::new(0, 1, 0.09572, 462750.4),
//!     BondTerm::new(1, 2, 0.09572, 462750.4),
//! ];
//! let angles = [AngleTerm::new(0, 1, 2, 1.82421813418, 836.8)];
//! let reference = ReferenceEnergies::new(0.06914434143, 0.1037324931);
//!
//! let report = verify::run(&conformation, &bonds, &angles, &reference, &CheckConfig::default())?;
//! assert_eq!(report.checks.len(), 2);
//! # Ok::<(), bondcheck::engine::error::EngineError>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
