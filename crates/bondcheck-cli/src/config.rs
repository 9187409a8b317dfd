mod defaults;

use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use bondcheck::core::io::case::{CaseFile, ToleranceOverrides};
use bondcheck::engine::config::{CheckConfig, CheckConfigBuilder};
use defaults::DefaultsConfig;
use tracing::debug;

/// Check settings gathered from a case file, before command-line overrides.
#[derive(Debug, Default, Clone)]
pub struct PartialCheckConfig {
    tolerance: ToleranceOverrides,
}

impl PartialCheckConfig {
    pub fn from_case(case: &CaseFile) -> Self {
        Self {
            tolerance: case.tolerance,
        }
    }

    /// Resolves the final configuration. Priority, highest first: dedicated
    /// flags, `--set` values, the case file, built-in defaults.
    pub fn merge_with_cli(mut self, args: &CheckArgs) -> Result<CheckConfig> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();

        let relative = args
            .rtol
            .or(self.tolerance.relative)
            .unwrap_or(defaults.relative_tolerance);
        let absolute = args
            .atol
            .or(self.tolerance.absolute)
            .unwrap_or(defaults.absolute_tolerance);
        debug!(relative, absolute, "Resolved check tolerance.");

        let config = CheckConfigBuilder::new()
            .relative_tolerance(relative)
            .absolute_tolerance(absolute)
            .check_bonds(defaults.check_bonds && !args.skip_bonds)
            .check_angles(defaults.check_angles && !args.skip_angles)
            .build()?;
        Ok(config)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            let value: f64 = value_str.trim().parse().map_err(|_| {
                CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
            })?;

            match key.trim() {
                "tolerance.relative" => self.tolerance.relative = Some(value),
                "tolerance.absolute" => self.tolerance.absolute = Some(value),
                other => {
                    return Err(CliError::Config(format!(
                        "Unknown configuration key for --set: '{}'",
                        other
                    )));
                }
            }
        }
        Ok(())
    }
}
