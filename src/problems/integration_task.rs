use crate::numerical::function_catalog::{Integrand, integrands_for};
use crate::numerical::quadrature::{
    IntegrationMethod, coerce_subdivisions, integrate, newton_cotes_rule,
};
use crate::problems::problem_instance::{Method, Problem, ReferenceAnswer};
use itertools::Itertools;
use log::error;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::f64::consts::{FRAC_PI_2, PI};

#[derive(Debug, Clone)]
pub struct IntegrationProblem {
    pub method: IntegrationMethod,
    pub integrand: Integrand,
    pub a: f64,
    pub b: f64,
    /// subdivisions for composite rules, degree for Newton-Cotes
    pub n: usize,
    pub reference: f64,
}

fn evaluate(method: IntegrationMethod, integrand: Integrand, a: f64, b: f64, n: usize) -> f64 {
    match integrate(method, |x| integrand.evaluate(x), a, b, n) {
        Ok(value) => value,
        Err(e) => {
            error!("{} on {}: {}", method, integrand.description(), e);
            panic!("{} on {}: {}", method, integrand.description(), e);
        }
    }
}

fn bound_text(v: f64) -> String {
    if v == PI {
        "π".to_string()
    } else if v == FRAC_PI_2 {
        "π/2".to_string()
    } else {
        v.to_string()
    }
}

impl IntegrationProblem {
    /// `n` is coerced to a value the rule accepts
    pub fn new(method: IntegrationMethod, integrand: Integrand, n: usize) -> Self {
        let n = coerce_subdivisions(method, n);
        let (a, b) = integrand.bounds();
        let reference = evaluate(method, integrand, a, b, n);
        Self {
            method,
            integrand,
            a,
            b,
            n,
            reference,
        }
    }

    pub fn generate<R: Rng + ?Sized>(method: IntegrationMethod, rng: &mut R) -> Self {
        let integrand = *integrands_for(method)
            .choose(rng)
            .unwrap_or(&Integrand::OneMinusSquare);
        let n = *method.subdivision_choices().choose(rng).unwrap_or(&1);
        Self::new(method, integrand, n)
    }

    fn is_newton_cotes(&self) -> bool {
        matches!(
            self.method,
            IntegrationMethod::NewtonCotesClosed | IntegrationMethod::NewtonCotesOpen
        )
    }
}

impl Problem for IntegrationProblem {
    fn method(&self) -> Method {
        Method::Integration(self.method)
    }

    fn description(&self) -> String {
        let mut text = format!(
            "Integrate f(x) = {} from {} to {} with {}",
            self.integrand.description(),
            bound_text(self.a),
            bound_text(self.b),
            self.method
        );
        if self.is_newton_cotes() {
            text.push_str(&format!(" of degree {}.", self.n));
        } else {
            text.push_str(&format!(", n = {}.", self.n));
        }
        text.push_str(&format!("\nFormula: {}", self.method.formula()));
        let open = self.method == IntegrationMethod::NewtonCotesOpen;
        if self.is_newton_cotes() {
            if let Ok(rule) = newton_cotes_rule(self.n, open) {
                text.push_str(&format!(
                    "\nalpha = 1/{}, c = [{}]",
                    (1.0 / rule.alpha).round(),
                    rule.coefficients.iter().join(", ")
                ));
            }
        }
        text
    }

    fn reference_answer(&self) -> ReferenceAnswer {
        ReferenceAnswer::Scalar(self.reference)
    }

    fn solve(&self) -> ReferenceAnswer {
        ReferenceAnswer::Scalar(evaluate(self.method, self.integrand, self.a, self.b, self.n))
    }

    fn answer_labels(&self) -> Vec<String> {
        vec!["∫f(x)dx".to_string()]
    }
}
