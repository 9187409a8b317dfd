use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "bondcheck - recompute bonded harmonic energies and check them against a reference engine.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute bond and angle energies of a case and print them.
    Energy(EnergyArgs),
    /// Check computed energies against the reference values in a case.
    Check(CheckArgs),
}

/// Arguments for the `energy` subcommand.
#[derive(Args, Debug)]
pub struct EnergyArgs {
    /// Path to the case file in TOML format.
    #[arg(required = true, value_name = "CASE")]
    pub case: PathBuf,

    /// Also print the energy of every individual term.
    #[arg(long)]
    pub per_term: bool,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the case file in TOML format.
    #[arg(required = true, value_name = "CASE")]
    pub case: PathBuf,

    /// Override the relative tolerance from the case file.
    #[arg(long, value_name = "FLOAT")]
    pub rtol: Option<f64>,

    /// Override the absolute tolerance from the case file.
    #[arg(long, value_name = "FLOAT")]
    pub atol: Option<f64>,

    /// Do not compare the bond energy.
    #[arg(long)]
    pub skip_bonds: bool,

    /// Do not compare the angle energy.
    #[arg(long)]
    pub skip_angles: bool,

    /// Set a specific configuration value, overriding the case file.
    /// Can be used multiple times. Example: -S tolerance.relative=1e-6
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_overrides_and_repeated_set_values() {
        let cli = Cli::parse_from([
            "bondcheck",
            "-vv",
            "check",
            "water.toml",
            "--rtol",
            "1e-6",
            "--skip-angles",
            "-S",
            "tolerance.absolute=1e-9",
            "-S",
            "tolerance.relative=1e-4",
        ]);

        assert_eq!(cli.verbose, 2);
        let Commands::Check(args) = cli.command else {
            panic!("Expected 'check' subcommand");
        };
        assert_eq!(args.case, PathBuf::from("water.toml"));
        assert_eq!(args.rtol, Some(1e-6));
        assert_eq!(args.atol, None);
        assert!(!args.skip_bonds);
        assert!(args.skip_angles);
        assert_eq!(
            args.set_values,
            vec!["tolerance.absolute=1e-9", "tolerance.relative=1e-4"]
        );
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["bondcheck", "-q", "-v", "energy", "water.toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn energy_requires_a_case_path() {
        assert!(Cli::try_parse_from(["bondcheck", "energy"]).is_err());
    }
}
