//! # Workflows Module
//!
//! End-to-end entry points for users of the crate.
//!
//! - **Verification Workflow** ([`verify`]) - Recomputes the bonded energies of one
//!   conformation and checks them against the values an external engine reported.

pub mod verify;
