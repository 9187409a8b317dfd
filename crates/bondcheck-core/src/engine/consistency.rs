use super::config::Tolerance;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyComponent {
    Bond,
    Angle,
}

impl fmt::Display for EnergyComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergyComponent::Bond => f.write_str("bond"),
            EnergyComponent::Angle => f.write_str("angle"),
        }
    }
}

/// Outcome of a successful comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentCheck {
    pub component: EnergyComponent,
    pub computed: f64,
    pub reference: f64,
    pub difference: f64,
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error(
    "{component} energy disagrees with reference: computed {computed}, reference {reference}, \
     |difference| {difference:e} exceeds allowed {allowed:e}"
)]
pub struct ConsistencyError {
    pub component: EnergyComponent,
    pub computed: f64,
    pub reference: f64,
    pub difference: f64,
    pub allowed: f64,
}

/// Compares an independently computed energy with the reference value.
///
/// Silent on agreement apart from the returned [`ComponentCheck`]; the error
/// carries both values and their absolute difference.
pub fn check_component(
    component: EnergyComponent,
    computed: f64,
    reference: f64,
    tolerance: &Tolerance,
) -> Result<ComponentCheck, ConsistencyError> {
    let difference = (computed - reference).abs();
    if tolerance.is_close(computed, reference) {
        Ok(ComponentCheck {
            component,
            computed,
            reference,
            difference,
        })
    } else {
        Err(ConsistencyError {
            component,
            computed,
            reference,
            difference,
            allowed: tolerance.allowed_difference(reference),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agreeing_values_return_the_comparison() {
        let check =
            check_component(EnergyComponent::Bond, 1.000001, 1.0, &Tolerance::default()).unwrap();
        assert_eq!(check.component, EnergyComponent::Bond);
        assert_eq!(check.computed, 1.000001);
        assert_eq!(check.reference, 1.0);
        assert!((check.difference - 1e-6).abs() < 1e-15);
    }

    #[test]
    fn disagreeing_values_report_both_values_and_difference() {
        let err =
            check_component(EnergyComponent::Angle, 2.0, 1.5, &Tolerance::default()).unwrap_err();
        assert_eq!(err.component, EnergyComponent::Angle);
        assert_eq!(err.computed, 2.0);
        assert_eq!(err.reference, 1.5);
        assert_eq!(err.difference, 0.5);
        assert!((err.allowed - (1e-8 + 1.5e-5)).abs() < 1e-18);
    }

    #[test]
    fn nan_computation_is_a_consistency_error() {
        let result = check_component(EnergyComponent::Bond, f64::NAN, 1.0, &Tolerance::default());
        assert!(result.is_err());
    }

    #[test]
    fn custom_tolerance_is_honored() {
        let loose = Tolerance::new(0.5, 0.0).unwrap();
        assert!(check_component(EnergyComponent::Bond, 1.4, 1.0, &loose).is_ok());
        assert!(check_component(EnergyComponent::Bond, 1.6, 1.0, &loose).is_err());
    }

    #[test]
    fn error_message_names_component_and_values() {
        let err =
            check_component(EnergyComponent::Bond, 3.0, 1.0, &Tolerance::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("bond energy disagrees with reference"));
        assert!(message.contains("computed 3"));
        assert!(message.contains("reference 1"));
    }
}
