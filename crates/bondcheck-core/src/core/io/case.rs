use crate::core::forcefield::term::ReferenceEnergies;
use crate::core::models::conformation::Conformation;
use crate::core::models::terms::{AngleTerm, BondTerm};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaseLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Invalid case '{path}': {message}")]
    Invalid { path: String, message: String },
}

/// Tolerance values found in a case file; unset fields fall back to whatever
/// the caller layers underneath.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToleranceOverrides {
    pub relative: Option<f64>,
    pub absolute: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConformation {
    positions: Option<Vec<[f64; 3]>>,
    coordinates_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCase {
    name: Option<String>,
    #[serde(default)]
    tolerance: ToleranceOverrides,
    conformation: RawConformation,
    #[serde(default)]
    bonds: Vec<BondTerm>,
    #[serde(default)]
    angles: Vec<AngleTerm>,
    #[serde(default)]
    reference: ReferenceEnergies,
}

/// Everything an external engine hands over for one verification run, with
/// all values already stripped to a single unit system.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseFile {
    pub name: Option<String>,
    pub conformation: Conformation,
    pub bonds: Vec<BondTerm>,
    pub angles: Vec<AngleTerm>,
    pub reference: ReferenceEnergies,
    pub tolerance: ToleranceOverrides,
}

impl CaseFile {
    /// Loads a case from a TOML file.
    ///
    /// A `coordinates-file` entry is resolved relative to the directory
    /// containing the case file.
    pub fn load(path: &Path) -> Result<Self, CaseLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| CaseLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&content, base_dir, &path.to_string_lossy())
    }

    /// Parses a case from TOML text, resolving relative coordinate files
    /// against `base_dir`.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, CaseLoadError> {
        Self::parse(content, base_dir, "<inline>")
    }

    fn parse(content: &str, base_dir: &Path, origin: &str) -> Result<Self, CaseLoadError> {
        let raw: RawCase = toml::from_str(content).map_err(|e| CaseLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;

        let conformation = match (raw.conformation.positions, raw.conformation.coordinates_file) {
            (Some(rows), None) => Conformation::from_rows(&rows),
            (None, Some(file)) => Self::load_coordinates(&base_dir.join(file))?,
            (Some(_), Some(_)) => {
                return Err(CaseLoadError::Invalid {
                    path: origin.to_string(),
                    message: "conformation must set only one of 'positions' or 'coordinates-file'"
                        .to_string(),
                });
            }
            (None, None) => {
                return Err(CaseLoadError::Invalid {
                    path: origin.to_string(),
                    message: "conformation must set 'positions' or 'coordinates-file'".to_string(),
                });
            }
        };

        Ok(Self {
            name: raw.name,
            conformation,
            bonds: raw.bonds,
            angles: raw.angles,
            reference: raw.reference,
            tolerance: raw.tolerance,
        })
    }

    fn load_coordinates(path: &Path) -> Result<Conformation, CaseLoadError> {
        let file = File::open(path).map_err(|e| CaseLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Conformation::from_csv_reader(file).map_err(|e| CaseLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}
