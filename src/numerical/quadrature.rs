//! Composite and table-driven quadrature on equally spaced nodes.
//!
//! Composite rules take the number of subdivisions n, Newton-Cotes rules take the
//! degree d of the single-panel formula. Every rule is exact for constants, so a
//! constant integrand gives k·(b - a) whatever n is.
use log::warn;
use std::fmt;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum IntegrationMethod {
    #[strum(to_string = "Trapezoidal")]
    Trapezoidal,
    #[strum(to_string = "Simpson 1/3")]
    SimpsonOneThird,
    #[strum(to_string = "Simpson 3/8")]
    SimpsonThreeEighths,
    #[strum(to_string = "Newton-Cotes closed")]
    NewtonCotesClosed,
    #[strum(to_string = "Newton-Cotes open")]
    NewtonCotesOpen,
}

impl IntegrationMethod {
    /// Values of n the problem generator draws from
    pub fn subdivision_choices(&self) -> &'static [usize] {
        match self {
            IntegrationMethod::Trapezoidal => &[1, 2, 3, 4, 5],
            IntegrationMethod::SimpsonOneThird => &[2, 4, 6, 8],
            IntegrationMethod::SimpsonThreeEighths => &[3, 6, 9],
            IntegrationMethod::NewtonCotesClosed => &[4, 5, 6, 7],
            IntegrationMethod::NewtonCotesOpen => &[2, 3, 4, 5],
        }
    }

    pub fn is_valid_subdivisions(&self, n: usize) -> bool {
        match self {
            IntegrationMethod::Trapezoidal => n >= 1,
            IntegrationMethod::SimpsonOneThird => n >= 2 && n % 2 == 0,
            IntegrationMethod::SimpsonThreeEighths => n >= 3 && n % 3 == 0,
            IntegrationMethod::NewtonCotesClosed => (1..=CLOSED_RULES.len()).contains(&n),
            IntegrationMethod::NewtonCotesOpen => (1..=OPEN_RULES.len()).contains(&n),
        }
    }

    /// Text form of the rule, shown next to the problem
    pub fn formula(&self) -> &'static str {
        match self {
            IntegrationMethod::Trapezoidal => "h·[(f(a) + f(b))/2 + Σ f(a + i·h)], h = (b - a)/n",
            IntegrationMethod::SimpsonOneThird => {
                "(h/3)·[f(x0) + 4·Σ f(x_odd) + 2·Σ f(x_even) + f(xn)], n even"
            }
            IntegrationMethod::SimpsonThreeEighths => {
                "(3h/8)·[f(x0) + 3·Σ f(x_i, 3∤i) + 2·Σ f(x_i, 3|i) + f(xn)], 3|n"
            }
            IntegrationMethod::NewtonCotesClosed => {
                "alpha·(b - a)·Σ c_i·f(x_i), x_i = a + i·(b - a)/d, i = 0..d"
            }
            IntegrationMethod::NewtonCotesOpen => {
                "alpha·(b - a)·Σ c_i·f(x_i), x_i = a + i·(b - a)/(d + 2), i = 1..d+1"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuadratureError {
    InvalidSubdivisions { method: IntegrationMethod, n: usize },
    UnsupportedDegree { degree: usize, open: bool },
    EmptyInterval,
}

impl fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuadratureError::InvalidSubdivisions { method, n } => {
                write!(f, "{} cannot use n = {} subdivisions", method, n)
            }
            QuadratureError::UnsupportedDegree { degree, open } => write!(
                f,
                "No {} Newton-Cotes formula of degree {}",
                if *open { "open" } else { "closed" },
                degree
            ),
            QuadratureError::EmptyInterval => {
                write!(f, "Integration bounds must be finite and distinct")
            }
        }
    }
}

impl std::error::Error for QuadratureError {}

fn check_bounds(a: f64, b: f64) -> Result<(), QuadratureError> {
    if !a.is_finite() || !b.is_finite() || a == b {
        return Err(QuadratureError::EmptyInterval);
    }
    Ok(())
}

////////////////////////////////////////COMPOSITE RULES////////////////////////////////////////

/// ∫ ≈ h·[(f(a) + f(b))/2 + Σᵢ₌₁ⁿ⁻¹ f(a + i·h)], h = (b - a)/n
pub fn trapezoidal<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;
    if !IntegrationMethod::Trapezoidal.is_valid_subdivisions(n) {
        return Err(QuadratureError::InvalidSubdivisions {
            method: IntegrationMethod::Trapezoidal,
            n,
        });
    }
    let h = (b - a) / n as f64;
    let interior: f64 = (1..n).map(|i| f(a + i as f64 * h)).sum();
    Ok(h * ((f(a) + f(b)) / 2.0 + interior))
}

/// Composite Simpson 1/3, n even
pub fn simpson_one_third<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;
    if !IntegrationMethod::SimpsonOneThird.is_valid_subdivisions(n) {
        return Err(QuadratureError::InvalidSubdivisions {
            method: IntegrationMethod::SimpsonOneThird,
            n,
        });
    }
    let h = (b - a) / n as f64;
    let interior: f64 = (1..n)
        .map(|i| {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * f(a + i as f64 * h)
        })
        .sum();
    Ok(h / 3.0 * (f(a) + interior + f(b)))
}

/// Composite Simpson 3/8, n divisible by 3
pub fn simpson_three_eighths<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;
    if !IntegrationMethod::SimpsonThreeEighths.is_valid_subdivisions(n) {
        return Err(QuadratureError::InvalidSubdivisions {
            method: IntegrationMethod::SimpsonThreeEighths,
            n,
        });
    }
    let h = (b - a) / n as f64;
    let interior: f64 = (1..n)
        .map(|i| {
            let weight = if i % 3 == 0 { 2.0 } else { 3.0 };
            weight * f(a + i as f64 * h)
        })
        .sum();
    Ok(3.0 * h / 8.0 * (f(a) + interior + f(b)))
}

////////////////////////////////////////NEWTON-COTES////////////////////////////////////////

/// One row of a Newton-Cotes table: ∫ₐᵇ f ≈ alpha·(b - a)·Σ cᵢ·f(xᵢ).
/// Open rules keep a zero coefficient at both endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonCotesRule {
    pub alpha: f64,
    pub coefficients: &'static [f64],
}

impl NewtonCotesRule {
    pub fn degree(&self, open: bool) -> usize {
        if open {
            self.coefficients.len() - 3
        } else {
            self.coefficients.len() - 1
        }
    }
}

/// Closed rules of degree 1..=10; the degree is the number of panels
const CLOSED_RULES: [NewtonCotesRule; 10] = [
    NewtonCotesRule { alpha: 1.0 / 2.0, coefficients: &[1.0, 1.0] },
    NewtonCotesRule { alpha: 1.0 / 6.0, coefficients: &[1.0, 4.0, 1.0] },
    NewtonCotesRule { alpha: 1.0 / 8.0, coefficients: &[1.0, 3.0, 3.0, 1.0] },
    NewtonCotesRule { alpha: 1.0 / 90.0, coefficients: &[7.0, 32.0, 12.0, 32.0, 7.0] },
    NewtonCotesRule {
        alpha: 1.0 / 288.0,
        coefficients: &[19.0, 75.0, 50.0, 50.0, 75.0, 19.0],
    },
    NewtonCotesRule {
        alpha: 1.0 / 840.0,
        coefficients: &[41.0, 216.0, 27.0, 272.0, 27.0, 216.0, 41.0],
    },
    NewtonCotesRule {
        alpha: 1.0 / 17280.0,
        coefficients: &[751.0, 3577.0, 1323.0, 2989.0, 2989.0, 1323.0, 3577.0, 751.0],
    },
    NewtonCotesRule {
        alpha: 1.0 / 28350.0,
        coefficients: &[
            989.0, 5888.0, -928.0, 10496.0, -4540.0, 10496.0, -928.0, 5888.0, 989.0,
        ],
    },
    NewtonCotesRule {
        alpha: 1.0 / 89600.0,
        coefficients: &[
            2857.0, 15741.0, 1080.0, 19344.0, 5778.0, 5778.0, 19344.0, 1080.0, 15741.0, 2857.0,
        ],
    },
    NewtonCotesRule {
        alpha: 1.0 / 598752.0,
        coefficients: &[
            16067.0, 106300.0, -48525.0, 272400.0, -260550.0, 427368.0, -260550.0, 272400.0,
            -48525.0, 106300.0, 16067.0,
        ],
    },
];

/// Open rules of degree 1..=6; degree d samples d + 1 interior nodes of d + 2 panels
const OPEN_RULES: [NewtonCotesRule; 6] = [
    NewtonCotesRule { alpha: 1.0 / 2.0, coefficients: &[0.0, 1.0, 1.0, 0.0] },
    NewtonCotesRule { alpha: 1.0 / 3.0, coefficients: &[0.0, 2.0, -1.0, 2.0, 0.0] },
    NewtonCotesRule { alpha: 1.0 / 24.0, coefficients: &[0.0, 11.0, 1.0, 1.0, 11.0, 0.0] },
    NewtonCotesRule {
        alpha: 1.0 / 20.0,
        coefficients: &[0.0, 11.0, -14.0, 26.0, -14.0, 11.0, 0.0],
    },
    NewtonCotesRule {
        alpha: 1.0 / 1440.0,
        coefficients: &[0.0, 611.0, -453.0, 562.0, 562.0, -453.0, 611.0, 0.0],
    },
    NewtonCotesRule {
        alpha: 1.0 / 945.0,
        coefficients: &[0.0, 460.0, -954.0, 2196.0, -2459.0, 2196.0, -954.0, 460.0, 0.0],
    },
];

pub fn newton_cotes_rule(degree: usize, open: bool) -> Result<NewtonCotesRule, QuadratureError> {
    let table: &[NewtonCotesRule] = if open { &OPEN_RULES } else { &CLOSED_RULES };
    if degree == 0 || degree > table.len() {
        return Err(QuadratureError::UnsupportedDegree { degree, open });
    }
    Ok(table[degree - 1])
}

/// Closed Newton-Cotes of degree 1..=10: nodes a + i·(b - a)/d, i = 0..=d
pub fn newton_cotes_closed<F>(f: F, a: f64, b: f64, degree: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;
    let rule = newton_cotes_rule(degree, false)?;
    let h = (b - a) / degree as f64;
    let sum: f64 = rule
        .coefficients
        .iter()
        .enumerate()
        .map(|(i, c)| c * f(a + i as f64 * h))
        .sum();
    Ok(rule.alpha * (b - a) * sum)
}

/// Open Newton-Cotes of degree 1..=6: nodes a + i·(b - a)/(d + 2), i = 1..=d+1
pub fn newton_cotes_open<F>(f: F, a: f64, b: f64, degree: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;
    let rule = newton_cotes_rule(degree, true)?;
    let h = (b - a) / (degree + 2) as f64;
    let sum: f64 = (1..=degree + 1)
        .map(|i| rule.coefficients[i] * f(a + i as f64 * h))
        .sum();
    Ok(rule.alpha * (b - a) * sum)
}

/// Nearest n the method accepts; logs when the request had to change
pub fn coerce_subdivisions(method: IntegrationMethod, n: usize) -> usize {
    if method.is_valid_subdivisions(n) {
        return n;
    }
    let coerced = match method {
        IntegrationMethod::Trapezoidal => 1,
        IntegrationMethod::SimpsonOneThird => (n + 1).max(2),
        IntegrationMethod::SimpsonThreeEighths => match n % 3 {
            1 if n > 3 => n - 1,
            2 => n + 1,
            _ => 3,
        },
        IntegrationMethod::NewtonCotesClosed => n.clamp(1, CLOSED_RULES.len()),
        IntegrationMethod::NewtonCotesOpen => n.clamp(1, OPEN_RULES.len()),
    };
    warn!("{}: n = {} is not allowed, using n = {}", method, n, coerced);
    coerced
}

/// `n` is the subdivision count for composite rules and the degree for Newton-Cotes
pub fn integrate<F>(
    method: IntegrationMethod,
    f: F,
    a: f64,
    b: f64,
    n: usize,
) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    match method {
        IntegrationMethod::Trapezoidal => trapezoidal(f, a, b, n),
        IntegrationMethod::SimpsonOneThird => simpson_one_third(f, a, b, n),
        IntegrationMethod::SimpsonThreeEighths => simpson_three_eighths(f, a, b, n),
        IntegrationMethod::NewtonCotesClosed => newton_cotes_closed(f, a, b, n),
        IntegrationMethod::NewtonCotesOpen => newton_cotes_open(f, a, b, n),
    }
}
