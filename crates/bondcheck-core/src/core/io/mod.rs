//! Loading of verification cases exported by an external engine.
//!
//! A case is a TOML document holding the conformation (inline or as an
//! `x,y,z` CSV file), the bonded terms, optional reference energies and an
//! optional tolerance table.

pub mod case;
