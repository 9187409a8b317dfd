/// Harmonic potential `0.5 * k * (x - x0)^2`.
///
/// Used for both bond stretching (`x` a distance) and angle bending (`x` an
/// angle in radians); only the units of `k` differ.
#[inline]
pub fn harmonic(x: f64, force_constant: f64, equilibrium: f64) -> f64 {
    let dx = x - equilibrium;
    0.5 * force_constant * dx * dx
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn harmonic_at_equilibrium_is_exactly_zero() {
        for k in [0.0, 1.0, 462750.4, -3.0, 1e12] {
            assert_eq!(harmonic(0.09572, k, 0.09572), 0.0);
        }
    }

    #[test]
    fn harmonic_with_zero_force_constant_is_zero() {
        for x in [-5.0, 0.0, 0.1, 3.0, 1e6] {
            assert_eq!(harmonic(x, 0.0, 1.0), 0.0);
        }
    }

    #[test]
    fn harmonic_is_quadratic_in_displacement() {
        assert!(f64_approx_equal(harmonic(3.0, 2.0, 1.0), 4.0));
        assert!(f64_approx_equal(harmonic(-1.0, 2.0, 1.0), 4.0));
        assert!(f64_approx_equal(harmonic(5.0, 2.0, 1.0), 16.0));
    }

    #[test]
    fn harmonic_propagates_nan() {
        assert!(harmonic(f64::NAN, 1.0, 0.0).is_nan());
    }
}
