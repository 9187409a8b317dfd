use serde::Deserialize;

/// A harmonic constraint on the distance between two atoms.
///
/// The caller is responsible for having resolved which parameter set applies
/// to this particular pair; no bond-type classification happens here.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BondTerm {
    /// Indices of the two bonded atoms in the conformation.
    pub atoms: [usize; 2],
    /// The equilibrium bond length, in the conformation's length unit.
    pub equilibrium_length: f64,
    /// The force constant, in energy per squared length unit.
    pub force_constant: f64,
}

impl BondTerm {
    pub fn new(atom_i: usize, atom_j: usize, equilibrium_length: f64, force_constant: f64) -> Self {
        Self {
            atoms: [atom_i, atom_j],
            equilibrium_length,
            force_constant,
        }
    }
}

/// A harmonic constraint on the angle formed at a central atom.
///
/// `atoms` is ordered `[i, center, j]`. The caller is responsible for having
/// resolved which parameter set applies to this particular triple.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AngleTerm {
    /// Indices of the outer, central and other outer atom.
    pub atoms: [usize; 3],
    /// The equilibrium angle in radians.
    pub equilibrium_angle: f64,
    /// The force constant, in energy per squared radian.
    pub force_constant: f64,
}

impl AngleTerm {
    pub fn new(
        atom_i: usize,
        atom_center: usize,
        atom_j: usize,
        equilibrium_angle: f64,
        force_constant: f64,
    ) -> Self {
        Self {
            atoms: [atom_i, atom_center, atom_j],
            equilibrium_angle,
            force_constant,
        }
    }

    #[inline]
    pub fn center(&self) -> usize {
        self.atoms[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_term_new_stores_atoms_in_given_order() {
        let bond = BondTerm::new(2, 0, 0.1, 500.0);
        assert_eq!(bond.atoms, [2, 0]);
        assert_eq!(bond.equilibrium_length, 0.1);
        assert_eq!(bond.force_constant, 500.0);
    }

    #[test]
    fn angle_term_center_is_the_middle_atom() {
        let angle = AngleTerm::new(0, 1, 2, 1.9, 800.0);
        assert_eq!(angle.center(), 1);
        assert_eq!(angle.atoms, [0, 1, 2]);
    }

    #[test]
    fn terms_deserialize_from_kebab_case_toml() {
        #[derive(Deserialize)]
        struct Terms {
            bonds: Vec<BondTerm>,
            angles: Vec<AngleTerm>,
        }

        let terms: Terms = toml::from_str(
            r#"
            [[bonds]]
            atoms = [0, 1]
            equilibrium-length = 0.09572
            force-constant = 462750.4

            [[angles]]
            atoms = [0, 1, 2]
            equilibrium-angle = 1.82421813418
            force-constant = 836.8
            "#,
        )
        .unwrap();

        assert_eq!(terms.bonds, vec![BondTerm::new(0, 1, 0.09572, 462750.4)]);
        assert_eq!(
            terms.angles,
            vec![AngleTerm::new(0, 1, 2, 1.82421813418, 836.8)]
        );
    }

    #[test]
    fn angle_term_with_two_atoms_is_rejected() {
        let result: Result<AngleTerm, _> = toml::from_str(
            r#"
            atoms = [0, 1]
            equilibrium-angle = 1.9
            force-constant = 800.0
            "#,
        );
        assert!(result.is_err());
    }
}
