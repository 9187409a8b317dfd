//! Pure geometric helpers shared by the energy evaluators.

pub mod geometry;
