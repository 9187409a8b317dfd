use crate::cli::EnergyArgs;
use crate::error::Result;
use bondcheck::core::forcefield::energy::EnergyCalculator;
use bondcheck::core::forcefield::term::BondedEnergy;
use bondcheck::core::io::case::CaseFile;
use bondcheck::engine::error::EngineError;
use tracing::info;

pub fn run(args: EnergyArgs) -> Result<()> {
    info!("Loading case from {:?}", &args.case);
    let case = CaseFile::load(&args.case)?;

    let bond_energies = EnergyCalculator::bond_energies(&case.conformation, &case.bonds)
        .map_err(EngineError::from)?;
    let angle_energies = EnergyCalculator::angle_energies(&case.conformation, &case.angles)
        .map_err(EngineError::from)?;
    let energy = BondedEnergy::new(bond_energies.iter().sum(), angle_energies.iter().sum());
    info!(
        "Evaluated {} bond and {} angle terms over {} atoms.",
        case.bonds.len(),
        case.angles.len(),
        case.conformation.len()
    );

    if let Some(name) = &case.name {
        println!("Case: {}", name);
    }
    println!("Bond energy:  {:.10}", energy.bond);
    println!("Angle energy: {:.10}", energy.angle);
    println!("Total:        {:.10}", energy.total());

    if args.per_term {
        print_terms(&case, &bond_energies, &angle_energies);
    }

    Ok(())
}

fn print_terms(case: &CaseFile, bond_energies: &[f64], angle_energies: &[f64]) {
    for (bond, energy) in case.bonds.iter().zip(bond_energies) {
        println!(
            "  bond  {:>4} {:>4}      {:.10}",
            bond.atoms[0], bond.atoms[1], energy
        );
    }
    for (angle, energy) in case.angles.iter().zip(angle_energies) {
        println!(
            "  angle {:>4} {:>4} {:>4} {:.10}",
            angle.atoms[0], angle.atoms[1], angle.atoms[2], energy
        );
    }
}
