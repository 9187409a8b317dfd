use serde::Deserialize;
use std::ops::{Add, AddAssign};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BondedEnergy {
    pub bond: f64,
    pub angle: f64,
}

impl BondedEnergy {
    pub fn new(bond: f64, angle: f64) -> Self {
        Self { bond, angle }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.bond + self.angle
    }
}

impl Add for BondedEnergy {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            bond: self.bond + rhs.bond,
            angle: self.angle + rhs.angle,
        }
    }
}

impl AddAssign for BondedEnergy {
    fn add_assign(&mut self, rhs: Self) {
        self.bond += rhs.bond;
        self.angle += rhs.angle;
    }
}

/// Energies reported by an external engine for the same conformation.
///
/// A missing component is simply not compared.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceEnergies {
    pub bond: Option<f64>,
    pub angle: Option<f64>,
}

impl ReferenceEnergies {
    pub fn new(bond: f64, angle: f64) -> Self {
        Self {
            bond: Some(bond),
            angle: Some(angle),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bond.is_none() && self.angle.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_bonded_energy_with_specified_values() {
        let energy = BondedEnergy::new(1.0, 2.0);
        assert_eq!(energy.bond, 1.0);
        assert_eq!(energy.angle, 2.0);
    }

    #[test]
    fn total_returns_sum_of_both_components() {
        let energy = BondedEnergy::new(1.5, -0.5);
        assert_eq!(energy.total(), 1.0);
    }

    #[test]
    fn add_sums_each_field_correctly() {
        let a = BondedEnergy::new(1.0, 2.0);
        let b = BondedEnergy::new(4.0, 5.0);
        assert_eq!(a + b, BondedEnergy::new(5.0, 7.0));
    }

    #[test]
    fn add_assign_accumulates_each_field_correctly() {
        let mut a = BondedEnergy::new(1.0, 2.0);
        a += BondedEnergy::new(4.0, 5.0);
        assert_eq!(a, BondedEnergy::new(5.0, 7.0));
    }

    #[test]
    fn reference_energies_default_to_empty() {
        assert!(ReferenceEnergies::default().is_empty());
        assert!(!ReferenceEnergies::new(0.0, 0.0).is_empty());
    }

    #[test]
    fn default_initializes_all_fields_to_zero() {
        let energy = BondedEnergy::default();
        assert_eq!(energy.bond, 0.0);
        assert_eq!(energy.angle, 0.0);
    }
}
