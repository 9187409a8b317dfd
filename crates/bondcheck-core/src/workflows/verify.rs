use crate::core::forcefield::energy::EnergyCalculator;
use crate::core::forcefield::term::{BondedEnergy, ReferenceEnergies};
use crate::core::io::case::CaseFile;
use crate::core::models::conformation::Conformation;
use crate::core::models::terms::{AngleTerm, BondTerm};
use crate::engine::config::CheckConfig;
use crate::engine::consistency::{ComponentCheck, EnergyComponent, check_component};
use crate::engine::error::EngineError;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    pub energy: BondedEnergy,
    pub bond_energies: Vec<f64>,
    pub angle_energies: Vec<f64>,
    /// Comparisons performed, bond before angle. Components without a
    /// reference value or disabled in the config are absent.
    pub checks: Vec<ComponentCheck>,
}

impl VerificationReport {
    pub fn check(&self, component: EnergyComponent) -> Option<&ComponentCheck> {
        self.checks.iter().find(|c| c.component == component)
    }
}

/// Recomputes bond and angle energies and checks them against `reference`.
///
/// Both energies are evaluated before any comparison, so an out-of-range
/// atom index is reported ahead of a disagreement.
#[instrument(skip_all, name = "verify_workflow")]
pub fn run(
    conformation: &Conformation,
    bonds: &[BondTerm],
    angles: &[AngleTerm],
    reference: &ReferenceEnergies,
    config: &CheckConfig,
) -> Result<VerificationReport, EngineError> {
    let bond_energies = EnergyCalculator::bond_energies(conformation, bonds)?;
    let angle_energies = EnergyCalculator::angle_energies(conformation, angles)?;
    let energy = BondedEnergy::new(bond_energies.iter().sum(), angle_energies.iter().sum());
    debug!(
        bond = energy.bond,
        angle = energy.angle,
        "Computed bonded energies over {} bond and {} angle terms.",
        bonds.len(),
        angles.len()
    );

    let selected = [
        (EnergyComponent::Bond, config.check_bonds, energy.bond, reference.bond),
        (EnergyComponent::Angle, config.check_angles, energy.angle, reference.angle),
    ];

    let mut checks = Vec::with_capacity(selected.len());
    for (component, enabled, computed, reference) in selected {
        let Some(reference) = reference.filter(|_| enabled) else {
            continue;
        };
        checks.push(check_component(
            component,
            computed,
            reference,
            &config.tolerance,
        )?);
    }

    if checks.is_empty() {
        return Err(EngineError::NothingToCheck);
    }

    Ok(VerificationReport {
        energy,
        bond_energies,
        angle_energies,
        checks,
    })
}

/// [`run`] over the contents of a loaded case file.
pub fn run_case(case: &CaseFile, config: &CheckConfig) -> Result<VerificationReport, EngineError> {
    run(
        &case.conformation,
        &case.bonds,
        &case.angles,
        &case.reference,
        config,
    )
}
