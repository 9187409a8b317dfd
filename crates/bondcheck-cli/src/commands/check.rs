use crate::cli::CheckArgs;
use crate::config::PartialCheckConfig;
use crate::error::Result;
use bondcheck::core::io::case::CaseFile;
use bondcheck::workflows::verify;
use tracing::info;

pub fn run(args: CheckArgs) -> Result<()> {
    info!("Loading case from {:?}", &args.case);
    let case = CaseFile::load(&args.case)?;

    info!("Merging tolerance settings from case file and CLI arguments...");
    let config = PartialCheckConfig::from_case(&case).merge_with_cli(&args)?;

    info!("Invoking the verification workflow...");
    let report = verify::run_case(&case, &config)?;

    if let Some(name) = &case.name {
        println!("Case: {}", name);
    }
    for check in &report.checks {
        println!(
            "✓ {} energy {:.10} matches reference {:.10} (|difference| {:.3e})",
            check.component, check.computed, check.reference, check.difference
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use bondcheck::engine::error::EngineError;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    const WATER: &str = r#"
        name = "water"

        [conformation]
        coordinates-file = "water.csv"

        [[bonds]]
        atoms = [0, 1]
        equilibrium-length = 0.09572
        force-constant = 462750.4

        [[bonds]]
        atoms = [1, 2]
        equilibrium-length = 0.09572
        force-constant = 462750.4

        [[angles]]
        atoms = [0, 1, 2]
        equilibrium-angle = 1.82421813418
        force-constant = 836.8

        [reference]
        bond = 0.06914434143
        angle = 0.1037324931
    "#;

    fn write_case(dir: &Path, coordinates: &str) -> PathBuf {
        fs::write(dir.join("water.csv"), coordinates).unwrap();
        let case_path = dir.join("water.toml");
        fs::write(&case_path, WATER).unwrap();
        case_path
    }

    fn args(case: PathBuf) -> CheckArgs {
        CheckArgs {
            case,
            rtol: None,
            atol: None,
            skip_bonds: false,
            skip_angles: false,
            set_values: Vec::new(),
        }
    }

    #[test]
    fn run_succeeds_when_energies_match_reference() {
        let dir = tempdir().unwrap();
        let case = write_case(
            dir.path(),
            "x,y,z\n0.0957,0.0,0.0\n0.0,0.0,0.0\n-0.0256,0.0928,0.0\n",
        );
        assert!(run(args(case)).is_ok());
    }

    #[test]
    fn run_fails_when_a_coordinate_is_perturbed() {
        let dir = tempdir().unwrap();
        let case = write_case(
            dir.path(),
            "x,y,z\n0.0957,0.0,0.0\n0.0,0.0,0.0\n0.9744,0.0928,0.0\n",
        );
        let result = run(args(case));
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::Consistency { .. }))
        ));
    }

    #[test]
    fn skipping_every_component_leaves_nothing_to_check() {
        let dir = tempdir().unwrap();
        let case = write_case(
            dir.path(),
            "x,y,z\n0.0957,0.0,0.0\n0.0,0.0,0.0\n-0.0256,0.0928,0.0\n",
        );
        let mut args = args(case);
        args.skip_bonds = true;
        args.skip_angles = true;
        assert!(matches!(
            run(args),
            Err(CliError::Engine(EngineError::NothingToCheck))
        ));
    }
}
