use super::potentials;
use super::term::BondedEnergy;
use crate::core::models::conformation::Conformation;
use crate::core::models::terms::{AngleTerm, BondTerm};
use crate::core::utils::geometry;
use nalgebra::Point3;
use std::fmt;
use thiserror::Error;

/// Identifies the term that triggered an evaluation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermRef {
    Bond(usize),
    Angle(usize),
}

impl fmt::Display for TermRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermRef::Bond(i) => write!(f, "bond term #{i}"),
            TermRef::Angle(i) => write!(f, "angle term #{i}"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnergyCalculationError {
    #[error("{term} references atom {index}, but the conformation has only {atom_count} atoms")]
    AtomIndexOutOfRange {
        term: TermRef,
        index: usize,
        atom_count: usize,
    },
}

pub struct EnergyCalculator;

impl EnergyCalculator {
    fn bond_energy(
        conformation: &Conformation,
        bond: &BondTerm,
        term: TermRef,
    ) -> Result<f64, EnergyCalculationError> {
        let [i, j] = bond.atoms;
        let a = Self::position(conformation, i, term)?;
        let b = Self::position(conformation, j, term)?;
        Ok(potentials::harmonic(
            geometry::distance(a, b),
            bond.force_constant,
            bond.equilibrium_length,
        ))
    }

    fn angle_energy(
        conformation: &Conformation,
        angle: &AngleTerm,
        term: TermRef,
    ) -> Result<f64, EnergyCalculationError> {
        let [i, _, j] = angle.atoms;
        let a = Self::position(conformation, i, term)?;
        let c = Self::position(conformation, angle.center(), term)?;
        let b = Self::position(conformation, j, term)?;
        Ok(potentials::harmonic(
            geometry::angle(a, c, b),
            angle.force_constant,
            angle.equilibrium_angle,
        ))
    }

    /// Per-term bond energies, in the order of `bonds`.
    pub fn bond_energies(
        conformation: &Conformation,
        bonds: &[BondTerm],
    ) -> Result<Vec<f64>, EnergyCalculationError> {
        bonds
            .iter()
            .enumerate()
            .map(|(n, bond)| Self::bond_energy(conformation, bond, TermRef::Bond(n)))
            .collect()
    }

    /// Per-term angle energies, in the order of `angles`.
    pub fn angle_energies(
        conformation: &Conformation,
        angles: &[AngleTerm],
    ) -> Result<Vec<f64>, EnergyCalculationError> {
        angles
            .iter()
            .enumerate()
            .map(|(n, angle)| Self::angle_energy(conformation, angle, TermRef::Angle(n)))
            .collect()
    }

    pub fn total_bond_energy(
        conformation: &Conformation,
        bonds: &[BondTerm],
    ) -> Result<f64, EnergyCalculationError> {
        Ok(Self::bond_energies(conformation, bonds)?.iter().sum())
    }

    pub fn total_angle_energy(
        conformation: &Conformation,
        angles: &[AngleTerm],
    ) -> Result<f64, EnergyCalculationError> {
        Ok(Self::angle_energies(conformation, angles)?.iter().sum())
    }

    pub fn bonded_energy(
        conformation: &Conformation,
        bonds: &[BondTerm],
        angles: &[AngleTerm],
    ) -> Result<BondedEnergy, EnergyCalculationError> {
        Ok(BondedEnergy::new(
            Self::total_bond_energy(conformation, bonds)?,
            Self::total_angle_energy(conformation, angles)?,
        ))
    }

    fn position(
        conformation: &Conformation,
        index: usize,
        term: TermRef,
    ) -> Result<&Point3<f64>, EnergyCalculationError> {
        conformation
            .position(index)
            .ok_or(EnergyCalculationError::AtomIndexOutOfRange {
                term,
                index,
                atom_count: conformation.len(),
            })
    }
}
