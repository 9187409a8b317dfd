//! # Core Models Module
//!
//! Plain data handed over by the external engine: one [`conformation::Conformation`]
//! of atomic positions and the bonded [`terms`] evaluated on it.
//!
//! All values are expected in one consistent unit system (a single length
//! unit, radians, and energy per amount). Nothing in this module converts units.

pub mod conformation;
pub mod terms;
