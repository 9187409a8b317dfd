use thiserror::Error;

pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-5;
pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1e-8;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid {name} tolerance {value}: must be finite and non-negative")]
    InvalidTolerance { name: &'static str, value: f64 },
}

/// Closeness criterion `|computed - reference| <= absolute + relative * |reference|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub relative: f64,
    pub absolute: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            relative: DEFAULT_RELATIVE_TOLERANCE,
            absolute: DEFAULT_ABSOLUTE_TOLERANCE,
        }
    }
}

impl Tolerance {
    pub fn new(relative: f64, absolute: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            relative: validate("relative", relative)?,
            absolute: validate("absolute", absolute)?,
        })
    }

    /// Largest difference still considered close to `reference`.
    #[inline]
    pub fn allowed_difference(&self, reference: f64) -> f64 {
        self.absolute + self.relative * reference.abs()
    }

    /// NaN is never close to anything; equal infinities are close.
    pub fn is_close(&self, computed: f64, reference: f64) -> bool {
        if computed == reference {
            return true;
        }
        if !computed.is_finite() || !reference.is_finite() {
            return false;
        }
        (computed - reference).abs() <= self.allowed_difference(reference)
    }
}

fn validate(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidTolerance { name, value })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    pub tolerance: Tolerance,
    pub check_bonds: bool,
    pub check_angles: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            check_bonds: true,
            check_angles: true,
        }
    }
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    relative_tolerance: Option<f64>,
    absolute_tolerance: Option<f64>,
    check_bonds: Option<bool>,
    check_angles: Option<bool>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn relative_tolerance(mut self, tolerance: f64) -> Self {
        self.relative_tolerance = Some(tolerance);
        self
    }
    pub fn absolute_tolerance(mut self, tolerance: f64) -> Self {
        self.absolute_tolerance = Some(tolerance);
        self
    }
    pub fn check_bonds(mut self, enabled: bool) -> Self {
        self.check_bonds = Some(enabled);
        self
    }
    pub fn check_angles(mut self, enabled: bool) -> Self {
        self.check_angles = Some(enabled);
        self
    }

    /// Unset values fall back to [`CheckConfig::default`].
    pub fn build(self) -> Result<CheckConfig, ConfigError> {
        let defaults = CheckConfig::default();
        Ok(CheckConfig {
            tolerance: Tolerance::new(
                self.relative_tolerance
                    .unwrap_or(defaults.tolerance.relative),
                self.absolute_tolerance
                    .unwrap_or(defaults.tolerance.absolute),
            )?,
            check_bonds: self.check_bonds.unwrap_or(defaults.check_bonds),
            check_angles: self.check_angles.unwrap_or(defaults.check_angles),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tolerance_matches_array_closeness_defaults() {
        let tolerance = Tolerance::default();
        assert_eq!(tolerance.relative, 1e-5);
        assert_eq!(tolerance.absolute, 1e-8);
    }

    #[test]
    fn is_close_scales_with_reference_magnitude() {
        let tolerance = Tolerance::default();
        assert!(tolerance.is_close(100.0009, 100.0));
        assert!(!tolerance.is_close(100.002, 100.0));
        assert!(tolerance.is_close(5e-9, 0.0));
        assert!(!tolerance.is_close(2e-8, 0.0));
    }

    #[test]
    fn is_close_rejects_nan_and_accepts_equal_infinities() {
        let tolerance = Tolerance::default();
        assert!(!tolerance.is_close(f64::NAN, 1.0));
        assert!(!tolerance.is_close(f64::NAN, f64::NAN));
        assert!(tolerance.is_close(f64::INFINITY, f64::INFINITY));
        assert!(!tolerance.is_close(f64::INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    fn zero_tolerance_requires_exact_equality() {
        let tolerance = Tolerance::new(0.0, 0.0).unwrap();
        assert!(tolerance.is_close(0.1, 0.1));
        assert!(!tolerance.is_close(0.1, 0.1 + f64::EPSILON));
    }

    #[test]
    fn new_rejects_negative_or_non_finite_values() {
        assert_eq!(
            Tolerance::new(-1e-5, 1e-8),
            Err(ConfigError::InvalidTolerance {
                name: "relative",
                value: -1e-5
            })
        );
        assert!(matches!(
            Tolerance::new(1e-5, f64::NAN),
            Err(ConfigError::InvalidTolerance {
                name: "absolute",
                ..
            })
        ));
    }

    #[test]
    fn builder_without_values_yields_defaults() {
        let config = CheckConfigBuilder::new().build().unwrap();
        assert_eq!(config, CheckConfig::default());
        assert!(config.check_bonds && config.check_angles);
    }

    #[test]
    fn builder_applies_every_setting() {
        let config = CheckConfigBuilder::new()
            .relative_tolerance(1e-3)
            .absolute_tolerance(1e-6)
            .check_bonds(false)
            .check_angles(true)
            .build()
            .unwrap();
        assert_eq!(config.tolerance, Tolerance::new(1e-3, 1e-6).unwrap());
        assert!(!config.check_bonds);
        assert!(config.check_angles);
    }

    #[test]
    fn builder_propagates_invalid_tolerance() {
        let result = CheckConfigBuilder::new()
            .absolute_tolerance(f64::INFINITY)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidTolerance { .. })));
    }
}
