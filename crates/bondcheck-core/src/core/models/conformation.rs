use nalgebra::{Point3, Vector3};
use serde::Deserialize;
use std::io::Read;

/// One coordinate row of a conformation table.
#[derive(Debug, Deserialize)]
struct CoordinateRecord {
    x: f64,
    y: f64,
    z: f64,
}

/// One concrete set of 3D atomic positions for a molecule.
///
/// Positions are indexed consistently with the topology of whatever engine
/// produced them; the index-to-element mapping is owned by that engine, not
/// by this type. All positions share one length unit, which this type never
/// inspects or converts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conformation {
    positions: Vec<Point3<f64>>,
}

impl Conformation {
    /// Creates a conformation from an ordered list of positions.
    ///
    /// # Arguments
    ///
    /// * `positions` - One position per atom, in topology order.
    pub fn new(positions: Vec<Point3<f64>>) -> Self {
        Self { positions }
    }

    /// Creates a conformation from plain `[x, y, z]` rows.
    ///
    /// This is the shape most external engines hand coordinates over in once
    /// their unit wrappers have been stripped.
    pub fn from_rows(rows: &[[f64; 3]]) -> Self {
        Self::new(rows.iter().map(|&[x, y, z]| Point3::new(x, y, z)).collect())
    }

    /// Reads a conformation from CSV data with `x`, `y` and `z` columns.
    ///
    /// # Arguments
    ///
    /// * `reader` - Any reader yielding CSV text with a header row.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`csv::Error`] if a row is missing a column or
    /// holds a value that is not a real number.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let positions = reader
            .deserialize::<CoordinateRecord>()
            .map(|record| record.map(|r| Point3::new(r.x, r.y, r.z)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(positions))
    }

    /// Returns the number of atoms.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the position of the atom at `index`, or `None` if out of range.
    #[inline]
    pub fn position(&self, index: usize) -> Option<&Point3<f64>> {
        self.positions.get(index)
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Returns a copy of this conformation with one atom displaced by `delta`.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn translated(&self, index: usize, delta: Vector3<f64>) -> Option<Self> {
        let mut positions = self.positions.clone();
        let position = positions.get_mut(index)?;
        *position += delta;
        Some(Self::new(positions))
    }
}

impl From<Vec<Point3<f64>>> for Conformation {
    fn from(positions: Vec<Point3<f64>>) -> Self {
        Self::new(positions)
    }
}
