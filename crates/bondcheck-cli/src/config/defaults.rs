use bondcheck::engine::config::{DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_RELATIVE_TOLERANCE};

pub struct DefaultsConfig {
    pub relative_tolerance: f64,
    pub absolute_tolerance: f64,
    pub check_bonds: bool,
    pub check_angles: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
            absolute_tolerance: DEFAULT_ABSOLUTE_TOLERANCE,
            check_bonds: true,
            check_angles: true,
        }
    }
}
