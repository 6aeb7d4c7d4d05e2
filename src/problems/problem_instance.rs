use crate::numerical::inter_n_extrapolate::InterpolationMethod;
use crate::numerical::quadrature::IntegrationMethod;
use crate::numerical::scalar_roots::RootFindingMethod;
use crate::problems::integration_task::IntegrationProblem;
use crate::problems::interpolation_task::InterpolationProblem;
use crate::problems::linear_system_task::LinearSystemProblem;
use crate::problems::root_finding_task::RootFindingProblem;
use crate::somelinalg::linear_sys_api::LinearMethod;
use crate::verifier::tolerance::{
    INTEGRATION_TOLERANCE, INTERPOLATION_TOLERANCE, LINEAR_SYSTEM_TOLERANCE,
    ROOT_FINDING_TOLERANCE, ToleranceRule,
};
use enum_dispatch::enum_dispatch;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum ProblemFamily {
    #[strum(to_string = "Interpolation")]
    Interpolation,
    #[strum(to_string = "Linear system")]
    LinearSystem,
    #[strum(to_string = "Root finding")]
    RootFinding,
    #[strum(to_string = "Integration")]
    Integration,
}

impl ProblemFamily {
    pub fn default_tolerance(&self) -> ToleranceRule {
        match self {
            ProblemFamily::Interpolation => INTERPOLATION_TOLERANCE,
            ProblemFamily::LinearSystem => LINEAR_SYSTEM_TOLERANCE,
            ProblemFamily::RootFinding => ROOT_FINDING_TOLERANCE,
            ProblemFamily::Integration => INTEGRATION_TOLERANCE,
        }
    }
}

/// A method together with the family it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Interpolation(InterpolationMethod),
    LinearSystem(LinearMethod),
    RootFinding(RootFindingMethod),
    Integration(IntegrationMethod),
}

impl Method {
    pub fn family(&self) -> ProblemFamily {
        match self {
            Method::Interpolation(_) => ProblemFamily::Interpolation,
            Method::LinearSystem(_) => ProblemFamily::LinearSystem,
            Method::RootFinding(_) => ProblemFamily::RootFinding,
            Method::Integration(_) => ProblemFamily::Integration,
        }
    }

    pub fn all_in(family: ProblemFamily) -> Vec<Method> {
        match family {
            ProblemFamily::Interpolation => {
                InterpolationMethod::iter().map(Method::from).collect()
            }
            ProblemFamily::LinearSystem => LinearMethod::iter().map(Method::from).collect(),
            ProblemFamily::RootFinding => RootFindingMethod::iter().map(Method::from).collect(),
            ProblemFamily::Integration => IntegrationMethod::iter().map(Method::from).collect(),
        }
    }

    pub fn all() -> Vec<Method> {
        ProblemFamily::iter().flat_map(Method::all_in).collect()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Method::Interpolation(m) => write!(f, "{}", m),
            Method::LinearSystem(m) => write!(f, "{}", m),
            Method::RootFinding(m) => write!(f, "{}", m),
            Method::Integration(m) => write!(f, "{}", m),
        }
    }
}

impl From<InterpolationMethod> for Method {
    fn from(m: InterpolationMethod) -> Self {
        Method::Interpolation(m)
    }
}

impl From<LinearMethod> for Method {
    fn from(m: LinearMethod) -> Self {
        Method::LinearSystem(m)
    }
}

impl From<RootFindingMethod> for Method {
    fn from(m: RootFindingMethod) -> Self {
        Method::RootFinding(m)
    }
}

impl From<IntegrationMethod> for Method {
    fn from(m: IntegrationMethod) -> Self {
        Method::Integration(m)
    }
}

/// Ground truth of a problem, shaped by its family
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceAnswer {
    /// integral value
    Scalar(f64),
    /// (target x, interpolated y) pairs
    PerTarget(Vec<(f64, f64)>),
    /// (x, y, z)
    Triple([f64; 3]),
    /// every valid root; one submitted value is checked against all of them
    RootSet(Vec<f64>),
}

impl ReferenceAnswer {
    /// Number of answers the user is asked for
    pub fn slots(&self) -> usize {
        match self {
            ReferenceAnswer::Scalar(_) | ReferenceAnswer::RootSet(_) => 1,
            ReferenceAnswer::PerTarget(pairs) => pairs.len(),
            ReferenceAnswer::Triple(_) => 3,
        }
    }
}

impl fmt::Display for ReferenceAnswer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReferenceAnswer::Scalar(v) => write!(f, "{:.6}", v),
            ReferenceAnswer::PerTarget(pairs) => {
                let parts: Vec<String> = pairs
                    .iter()
                    .map(|(x, y)| format!("y({}) = {:.6}", x, y))
                    .collect();
                write!(f, "{}", parts.join(", "))
            }
            ReferenceAnswer::Triple([x, y, z]) => {
                write!(f, "x = {:.6}, y = {:.6}, z = {:.6}", x, y, z)
            }
            ReferenceAnswer::RootSet(roots) => {
                let parts: Vec<String> = roots.iter().map(|r| format!("{:.6}", r)).collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
        }
    }
}

/// One generated round: data to show plus the answer to grade against
#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum ProblemInstance {
    Interpolation(InterpolationProblem),
    LinearSystem(LinearSystemProblem),
    RootFinding(RootFindingProblem),
    Integration(IntegrationProblem),
}

#[enum_dispatch(ProblemInstance)]
pub trait Problem {
    fn method(&self) -> Method;
    fn family(&self) -> ProblemFamily {
        self.method().family()
    }
    /// plain-text statement for the front end
    fn description(&self) -> String;
    /// answer stored at generation time
    fn reference_answer(&self) -> ReferenceAnswer;
    /// recomputes the answer from the problem data with the assigned method
    fn solve(&self) -> ReferenceAnswer;
    /// one label per answer slot, e.g. "y(5)" or "x"
    fn answer_labels(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_catalog() {
        assert_eq!(Method::all_in(ProblemFamily::Interpolation).len(), 4);
        assert_eq!(Method::all_in(ProblemFamily::LinearSystem).len(), 5);
        assert_eq!(Method::all_in(ProblemFamily::RootFinding).len(), 5);
        assert_eq!(Method::all_in(ProblemFamily::Integration).len(), 5);
        assert_eq!(Method::all().len(), 19);
        for method in Method::all() {
            assert!(Method::all_in(method.family()).contains(&method));
        }
    }

    #[test]
    fn test_method_display_uses_inner_name() {
        assert_eq!(Method::from(RootFindingMethod::NewtonRaphson).to_string(), "Newton-Raphson");
        assert_eq!(Method::from(IntegrationMethod::SimpsonOneThird).to_string(), "Simpson 1/3");
        assert_eq!(ProblemFamily::LinearSystem.to_string(), "Linear system");
    }

    #[test]
    fn test_reference_slots() {
        assert_eq!(ReferenceAnswer::Scalar(1.0).slots(), 1);
        assert_eq!(ReferenceAnswer::RootSet(vec![0.5, -2.3]).slots(), 1);
        assert_eq!(ReferenceAnswer::Triple([1.0, 2.0, 3.0]).slots(), 3);
        assert_eq!(ReferenceAnswer::PerTarget(vec![(5.0, 1.0), (7.0, 2.0)]).slots(), 2);
    }

    #[test]
    fn test_default_tolerances() {
        assert_eq!(ProblemFamily::Interpolation.default_tolerance().relative, 0.005);
        assert_eq!(ProblemFamily::Integration.default_tolerance().relative, 0.02);
        for family in ProblemFamily::iter() {
            assert_eq!(family.default_tolerance().absolute, 0.01);
        }
    }
}
