//! # Force Field Module
//!
//! Bonded harmonic energy evaluation for a single conformation.
//!
//! ## Overview
//!
//! The module reproduces the bond-stretching and angle-bending energies that an
//! external simulation engine computes internally, so the two can be compared:
//!
//! - **Bond stretching** - harmonic in the distance between two atoms
//! - **Angle bending** - harmonic in the angle at a central atom, measured with
//!   the two-argument arctangent form
//!
//! Every geometric term arrives already matched to its parameter set. Telling
//! bond or angle *types* apart is out of scope here; a caller that needs it
//! should classify terms before handing them over.
//!
//! ## Key Components
//!
//! - [`potentials`] - The harmonic functional form
//! - [`energy`] - Per-term and total energies over a [`Conformation`](crate::core::models::conformation::Conformation)
//! - [`term`] - Energy aggregates and externally supplied reference energies
//!
//! ## Usage
//!
//! ```
//! use bondcheck::core::forcefield::energy::EnergyCalculator;
//! use bondcheck::core::models::{conformation::Conformation, terms::BondTerm};
//!
//! let conformation = Conformation::from_rows(&[[0.0, 0.0, 0.0], [1.1, 0.0, 0.0]]);
//! let bonds = [BondTerm::new(0, 1, 1.0, 200.0)];
//!
//! let energy = EnergyCalculator::total_bond_energy(&conformation, &bonds).unwrap();
//! assert!((energy - 1.0).abs() < 1e-9);
//! ```

pub mod energy;
pub mod potentials;
pub mod term;
