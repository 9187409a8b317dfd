//! # Core Module
//!
//! The stateless foundation of the crate: numeric containers, molecular input
//! models, geometry, and the harmonic energy model.
//!
//! ## Architecture
//!
//! - **Vector Algebra** ([`algebra`]) - `NumericVector` with broadcast and pairwise arithmetic
//! - **Input Models** ([`models`]) - Conformations and bond/angle terms
//! - **Geometry** ([`utils::geometry`]) - Distances and numerically stable bond angles
//! - **Energy Calculations** ([`forcefield`]) - Harmonic potential and energy totals
//! - **File I/O** ([`io`]) - Case files exported by the reference engine
//!
//! Apart from [`io`], everything here is a pure function of its inputs.

pub mod algebra;
pub mod forcefield;
pub mod io;
pub mod models;
pub mod utils;
