//! Closed-form functions the generator draws problems from.
use crate::numerical::quadrature::IntegrationMethod;
use crate::numerical::scalar_roots::NonlinearFunction;
use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_4, LN_2, PI};
use strum_macros::EnumIter;

/// Equations f(x) = 0 for the root finding problems.
/// Each one carries the range its roots are searched on and the interval
/// shown to bracketing methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum RootEquation {
    /// x³ - 6.5x + 2
    DepressedCubic,
    /// 3x³ - 2x - 3
    SteepCubic,
    /// x³ + 2x² + 10x - 20
    Fibonacci,
    /// e^(-x) - x
    ExpBalance,
    /// x³ - 2x² - 5x + 6 = (x + 2)(x - 1)(x - 3)
    FactoredCubic,
    /// x⁴ - 3x² + x - 1
    Quartic,
}

impl RootEquation {
    pub fn description(&self) -> &'static str {
        match self {
            RootEquation::DepressedCubic => "x³ - 6.5x + 2",
            RootEquation::SteepCubic => "3x³ - 2x - 3",
            RootEquation::Fibonacci => "x³ + 2x² + 10x - 20",
            RootEquation::ExpBalance => "e^(-x) - x",
            RootEquation::FactoredCubic => "x³ - 2x² - 5x + 6",
            RootEquation::Quartic => "x⁴ - 3x² + x - 1",
        }
    }

    pub fn value(&self, x: f64) -> f64 {
        match self {
            RootEquation::DepressedCubic => x.powi(3) - 6.5 * x + 2.0,
            RootEquation::SteepCubic => 3.0 * x.powi(3) - 2.0 * x - 3.0,
            RootEquation::Fibonacci => x.powi(3) + 2.0 * x * x + 10.0 * x - 20.0,
            RootEquation::ExpBalance => (-x).exp() - x,
            RootEquation::FactoredCubic => x.powi(3) - 2.0 * x * x - 5.0 * x + 6.0,
            RootEquation::Quartic => x.powi(4) - 3.0 * x * x + x - 1.0,
        }
    }

    pub fn slope(&self, x: f64) -> f64 {
        match self {
            RootEquation::DepressedCubic => 3.0 * x * x - 6.5,
            RootEquation::SteepCubic => 9.0 * x * x - 2.0,
            RootEquation::Fibonacci => 3.0 * x * x + 4.0 * x + 10.0,
            RootEquation::ExpBalance => -(-x).exp() - 1.0,
            RootEquation::FactoredCubic => 3.0 * x * x - 4.0 * x - 5.0,
            RootEquation::Quartic => 4.0 * x.powi(3) - 6.0 * x + 1.0,
        }
    }

    /// Range scanned for the full set of real roots
    pub fn scan_range(&self) -> (f64, f64) {
        match self {
            RootEquation::DepressedCubic => (-5.0, 5.0),
            RootEquation::SteepCubic => (-2.0, 2.0),
            RootEquation::Fibonacci => (0.0, 3.0),
            RootEquation::ExpBalance => (-1.0, 2.0),
            RootEquation::FactoredCubic => (-3.0, 4.0),
            RootEquation::Quartic => (-2.0, 2.0),
        }
    }

    /// Interval offered to bisection and false position
    pub fn interval(&self) -> (f64, f64) {
        match self {
            RootEquation::DepressedCubic => (-3.0, 3.0),
            RootEquation::SteepCubic => (0.0, 2.0),
            RootEquation::Fibonacci => (1.0, 2.0),
            RootEquation::ExpBalance => (0.0, 1.0),
            RootEquation::FactoredCubic => (-2.0, 3.0),
            RootEquation::Quartic => (-2.0, 2.0),
        }
    }

    /// Bracketing methods need f(a)·f(b) < 0 on the offered interval
    pub fn brackets_a_root(&self) -> bool {
        let (a, b) = self.interval();
        self.value(a) * self.value(b) < 0.0
    }
}

impl NonlinearFunction for RootEquation {
    fn evaluate(&self, x: f64) -> f64 {
        self.value(x)
    }

    fn derivative(&self, x: f64) -> Option<f64> {
        Some(self.slope(x))
    }

    fn name(&self) -> &str {
        self.description()
    }
}

/// Integrands for the numerical integration problems, each with its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Integrand {
    OneMinusSquare,
    CubicPlusTwoX,
    Sine,
    Exp,
    Quadratic,
    Cosine,
    QuarticBump,
    Gaussian,
    Witch,
    CubicPlusX,
    LogOnePlus,
    SqrtOnePlus,
    Fourth,
    Cube,
}

impl Integrand {
    pub fn description(&self) -> &'static str {
        match self {
            Integrand::OneMinusSquare => "1 - x²",
            Integrand::CubicPlusTwoX => "x³ + 2x",
            Integrand::Sine => "sin(x)",
            Integrand::Exp => "eˣ",
            Integrand::Quadratic => "3x² - 2x + 1",
            Integrand::Cosine => "cos(x)",
            Integrand::QuarticBump => "x⁴ - 2x² + 1",
            Integrand::Gaussian => "e^(-x²)",
            Integrand::Witch => "1/(1+x²)",
            Integrand::CubicPlusX => "x³ + x",
            Integrand::LogOnePlus => "ln(1+x)",
            Integrand::SqrtOnePlus => "√(1+x)",
            Integrand::Fourth => "x⁴",
            Integrand::Cube => "x³",
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Integrand::OneMinusSquare => 1.0 - x * x,
            Integrand::CubicPlusTwoX => x.powi(3) + 2.0 * x,
            Integrand::Sine => x.sin(),
            Integrand::Exp => x.exp(),
            Integrand::Quadratic => 3.0 * x * x - 2.0 * x + 1.0,
            Integrand::Cosine => x.cos(),
            Integrand::QuarticBump => x.powi(4) - 2.0 * x * x + 1.0,
            Integrand::Gaussian => (-x * x).exp(),
            Integrand::Witch => 1.0 / (1.0 + x * x),
            Integrand::CubicPlusX => x.powi(3) + x,
            Integrand::LogOnePlus => (1.0 + x).ln(),
            Integrand::SqrtOnePlus => (1.0 + x).sqrt(),
            Integrand::Fourth => x.powi(4),
            Integrand::Cube => x.powi(3),
        }
    }

    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Integrand::CubicPlusTwoX | Integrand::CubicPlusX | Integrand::Cube => (0.0, 2.0),
            Integrand::Sine => (0.0, PI),
            Integrand::Cosine => (0.0, FRAC_PI_2),
            Integrand::Quadratic | Integrand::QuarticBump => (-1.0, 1.0),
            _ => (0.0, 1.0),
        }
    }

    /// Analytic value of the integral over `bounds()`
    pub fn exact_integral(&self) -> f64 {
        match self {
            Integrand::OneMinusSquare => 2.0 / 3.0,
            Integrand::CubicPlusTwoX => 8.0,
            Integrand::Sine => 2.0,
            Integrand::Exp => E - 1.0,
            Integrand::Quadratic => 4.0,
            Integrand::Cosine => 1.0,
            Integrand::QuarticBump => 16.0 / 15.0,
            // √π/2 · erf(1)
            Integrand::Gaussian => 0.746_824_132_812_427_1,
            Integrand::Witch => FRAC_PI_4,
            Integrand::CubicPlusX => 6.0,
            Integrand::LogOnePlus => 2.0 * LN_2 - 1.0,
            Integrand::SqrtOnePlus => 2.0 / 3.0 * (2.0f64.powf(1.5) - 1.0),
            Integrand::Fourth => 0.2,
            Integrand::Cube => 4.0,
        }
    }
}

/// Integrands offered for each rule
pub fn integrands_for(method: IntegrationMethod) -> &'static [Integrand] {
    use Integrand::*;
    match method {
        IntegrationMethod::Trapezoidal => &[OneMinusSquare, CubicPlusTwoX, Sine, Exp, Quadratic, Cosine],
        IntegrationMethod::SimpsonOneThird => &[OneMinusSquare, QuarticBump, Sine, Gaussian, Witch],
        IntegrationMethod::SimpsonThreeEighths => {
            &[OneMinusSquare, CubicPlusX, Cosine, LogOnePlus, SqrtOnePlus]
        }
        IntegrationMethod::NewtonCotesClosed => &[OneMinusSquare, Fourth, Sine, Exp],
        IntegrationMethod::NewtonCotesOpen => &[OneMinusSquare, Cube, Cosine, LogOnePlus],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerical::quadrature::{integrate, simpson_one_third};
    use crate::numerical::scalar_roots::find_real_roots;
    use approx::assert_relative_eq;
    use gauss_quad::GaussLegendre;
    use strum::IntoEnumIterator;

    #[test]
    fn test_root_counts() {
        let expected = [
            (RootEquation::DepressedCubic, 3),
            (RootEquation::SteepCubic, 1),
            (RootEquation::Fibonacci, 1),
            (RootEquation::ExpBalance, 1),
            (RootEquation::FactoredCubic, 3),
            (RootEquation::Quartic, 2),
        ];
        for (equation, count) in expected {
            let (min, max) = equation.scan_range();
            let roots = find_real_roots(&equation, min, max, 1000);
            assert_eq!(roots.len(), count, "{}", equation.description());
            for root in roots {
                assert!(equation.value(root).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_brackets() {
        assert!(RootEquation::DepressedCubic.brackets_a_root());
        assert!(RootEquation::Fibonacci.brackets_a_root());
        assert!(RootEquation::ExpBalance.brackets_a_root());
        assert!(RootEquation::SteepCubic.brackets_a_root());
        // endpoints are roots, so f(a)·f(b) = 0
        assert!(!RootEquation::FactoredCubic.brackets_a_root());
        assert!(!RootEquation::Quartic.brackets_a_root());
    }

    #[test]
    fn test_slopes_match_finite_differences() {
        let h = 1e-6;
        for equation in RootEquation::iter() {
            for x in [-1.3, 0.2, 1.7] {
                let numeric = (equation.value(x + h) - equation.value(x - h)) / (2.0 * h);
                assert_relative_eq!(equation.slope(x), numeric, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_exact_integrals() {
        let quad = GaussLegendre::new(30).unwrap();
        for integrand in Integrand::iter() {
            let (a, b) = integrand.bounds();
            let reference = quad.integrate(a, b, |x| integrand.evaluate(x));
            assert_relative_eq!(integrand.exact_integral(), reference, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_every_catalog_integrates() {
        for method in IntegrationMethod::iter() {
            let catalog = integrands_for(method);
            assert!(!catalog.is_empty());
            for integrand in catalog {
                let (a, b) = integrand.bounds();
                let n = method.subdivision_choices()[0];
                let value = integrate(method, |x| integrand.evaluate(x), a, b, n).unwrap();
                assert!(value.is_finite());
            }
        }
        let s = simpson_one_third(|x| Integrand::Witch.evaluate(x), 0.0, 1.0, 8).unwrap();
        assert_relative_eq!(s, Integrand::Witch.exact_integral(), epsilon = 1e-6);
    }
}
