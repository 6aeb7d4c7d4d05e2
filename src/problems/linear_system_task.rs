use crate::problems::problem_instance::{Method, Problem, ReferenceAnswer};
use crate::problems::retry::retry_or_fallback;
use crate::somelinalg::iterative_solvers_cpu::IterativeConfig;
use crate::somelinalg::linear_sys_api::{LinearMethod, solve_linear_system};
use crate::somelinalg::linear_sys_diagnostics::{condition_number, determinant, residual_norm};
use log::{debug, error};
use nalgebra::{Matrix3, Vector3};
use rand::Rng;

/// |det| below this counts as degenerate for a generated system
const MIN_DETERMINANT: f64 = 0.1;
const MAX_CONDITION: f64 = 1e3;
const DRAW_ATTEMPTS: usize = 20;
const VARIABLES: [&str; 3] = ["x", "y", "z"];

#[derive(Debug, Clone)]
pub struct LinearSystemProblem {
    pub method: LinearMethod,
    pub A: Matrix3<f64>,
    pub b: Vector3<f64>,
    /// solution the system was built from
    pub exact: Vector3<f64>,
    /// solution produced by the assigned method
    pub reference: Vector3<f64>,
    /// stopping rule of Jacobi and Gauss-Seidel
    pub config: IterativeConfig,
}

impl LinearSystemProblem {
    pub fn new(method: LinearMethod, A: Matrix3<f64>, exact: Vector3<f64>) -> Self {
        Self::with_config(method, A, exact, IterativeConfig::default())
    }

    /// Builds b = A·exact and solves the displayed system with `method`.
    /// A method failure here is a generator bug, not a user-facing condition.
    pub fn with_config(
        method: LinearMethod,
        A: Matrix3<f64>,
        exact: Vector3<f64>,
        config: IterativeConfig,
    ) -> Self {
        let b = right_hand_side(method, &A, &exact);
        let reference = match solve_linear_system(method, &A, &b, &config) {
            Ok(x) => x,
            Err(e) => {
                error!("{} failed on a generated system: {}", method, e);
                panic!("{} failed on a generated system: {}", method, e);
            }
        };
        debug!(
            "{}: residual of the reference solution {:.3e}",
            method,
            residual_norm(&A, &reference, &b)
        );
        Self {
            method,
            A,
            b,
            exact,
            reference,
            config,
        }
    }

    pub fn generate<R: Rng + ?Sized>(method: LinearMethod, rng: &mut R) -> Self {
        Self::generate_with_config(method, &IterativeConfig::default(), rng)
    }

    /// Iterative systems are redrawn until `method` converges on them within `config`
    pub fn generate_with_config<R: Rng + ?Sized>(
        method: LinearMethod,
        config: &IterativeConfig,
        rng: &mut R,
    ) -> Self {
        if method.is_iterative() {
            let (A, exact) = retry_or_fallback(
                rng,
                "diagonally dominant system",
                DRAW_ATTEMPTS,
                |rng| dominant_system(rng),
                |candidate: &(Matrix3<f64>, Vector3<f64>)| {
                    let (A, exact) = candidate;
                    let b = right_hand_side(method, A, exact);
                    solve_linear_system(method, A, &b, config).is_ok()
                },
                fallback_dominant_system,
            );
            Self::with_config(method, A, exact, config.clone())
        } else {
            let exact = Vector3::from_fn(|_, _| rng.random_range(-8..=8) as f64);
            let A = retry_or_fallback(
                rng,
                "nonsingular coefficient matrix",
                DRAW_ATTEMPTS,
                |rng| Matrix3::from_fn(|_, _| nonzero_coefficient(rng)),
                |A| determinant(A).abs() >= MIN_DETERMINANT && condition_number(A) < MAX_CONDITION,
                fallback_matrix,
            );
            Self::with_config(method, A, exact, config.clone())
        }
    }
}

/// b = A·exact, rounded to two decimals for the iterative methods
fn right_hand_side(method: LinearMethod, A: &Matrix3<f64>, exact: &Vector3<f64>) -> Vector3<f64> {
    let b = A * exact;
    if method.is_iterative() { b.map(round2) } else { b }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn nonzero_coefficient<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let magnitude = rng.random_range(1..=5) as f64;
    if rng.random_bool(0.5) { magnitude } else { -magnitude }
}

/// Well-posed system used when every draw came out singular; det = -53
pub fn fallback_matrix() -> Matrix3<f64> {
    Matrix3::new(2.0, -3.0, 1.0, -1.0, 2.0, 4.0, 3.0, 1.0, -2.0)
}

/// Strongly dominant system used when no draw converged within the sweep cap;
/// solution (1, -2, 3)
pub fn fallback_dominant_system() -> (Matrix3<f64>, Vector3<f64>) {
    (
        Matrix3::new(10.0, 1.0, -1.0, 2.0, 10.0, 1.0, 1.0, -2.0, 10.0),
        Vector3::new(1.0, -2.0, 3.0),
    )
}

/// Real solution in [-5, 5] and a diagonal that exceeds the rest of its row by 1 to 3
fn dominant_system<R: Rng + ?Sized>(rng: &mut R) -> (Matrix3<f64>, Vector3<f64>) {
    let exact = Vector3::from_fn(|_, _| round2(rng.random_range(-5.0..=5.0)));
    let mut A = Matrix3::from_fn(|_, _| nonzero_coefficient(rng));
    for i in 0..3 {
        let off_diagonal: f64 = (0..3).filter(|&j| j != i).map(|j| A[(i, j)].abs()).sum();
        A[(i, i)] = off_diagonal + rng.random_range(1..=3) as f64;
    }
    (A, exact)
}

fn format_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v.abs())
    } else {
        format!("{:.2}", v.abs())
    }
}

/// "2x - 3y + z = 5"; unit coefficients drop the 1
pub fn format_equation(row: &[f64; 3], rhs: f64) -> String {
    let mut text = String::new();
    for (j, &c) in row.iter().enumerate() {
        if c == 0.0 {
            continue;
        }
        let magnitude = if c.abs() == 1.0 {
            String::new()
        } else {
            format_number(c)
        };
        if text.is_empty() {
            if c < 0.0 {
                text.push('-');
            }
        } else {
            text.push_str(if c < 0.0 { " - " } else { " + " });
        }
        text.push_str(&magnitude);
        text.push_str(VARIABLES[j]);
    }
    if text.is_empty() {
        text.push('0');
    }
    let sign = if rhs < 0.0 { "-" } else { "" };
    format!("{} = {}{}", text, sign, format_number(rhs))
}

impl Problem for LinearSystemProblem {
    fn method(&self) -> Method {
        Method::LinearSystem(self.method)
    }

    fn description(&self) -> String {
        let mut text = format!("Solve with {}:", self.method);
        for i in 0..3 {
            let row = [self.A[(i, 0)], self.A[(i, 1)], self.A[(i, 2)]];
            text.push('\n');
            text.push_str(&format_equation(&row, self.b[i]));
        }
        if self.method.is_iterative() {
            text.push_str("\nStart from (0, 0, 0).");
        }
        text
    }

    fn reference_answer(&self) -> ReferenceAnswer {
        ReferenceAnswer::Triple([self.reference[0], self.reference[1], self.reference[2]])
    }

    fn solve(&self) -> ReferenceAnswer {
        match solve_linear_system(self.method, &self.A, &self.b, &self.config) {
            Ok(x) => ReferenceAnswer::Triple([x[0], x[1], x[2]]),
            Err(e) => {
                error!("{} failed on the stored system: {}", self.method, e);
                panic!("{} failed on the stored system: {}", self.method, e);
            }
        }
    }

    fn answer_labels(&self) -> Vec<String> {
        VARIABLES.iter().map(|v| v.to_string()).collect()
    }
}
