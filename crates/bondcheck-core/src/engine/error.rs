use thiserror::Error;

use super::config::ConfigError;
use super::consistency::ConsistencyError;
use crate::core::forcefield::energy::EnergyCalculationError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid check configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Energy evaluation failed: {source}")]
    Energy {
        #[from]
        source: EnergyCalculationError,
    },

    #[error("Consistency check failed: {source}")]
    Consistency {
        #[from]
        source: ConsistencyError,
    },

    #[error("No reference energy is available for any selected component")]
    NothingToCheck,
}

impl EngineError {
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::Energy { .. })
    }

    pub fn is_consistency_error(&self) -> bool {
        matches!(self, Self::Consistency { .. })
    }
}
