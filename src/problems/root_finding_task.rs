//! Root finding rounds. Bracketing methods get the equation's display interval,
//! open methods get starting values drawn near one of the roots. Every start is
//! checked by running the assigned method from it before the problem is handed out.
use crate::numerical::function_catalog::RootEquation;
use crate::numerical::scalar_roots::{
    ROOT_DEDUP_EPS, RootFindingConfig, RootFindingMethod, RootStart, ScalarRootFinder,
    find_real_roots,
};
use crate::problems::problem_instance::{Method, Problem, ReferenceAnswer};
use crate::problems::retry::retry_or_fallback;
use log::{debug, error};
use rand::Rng;
use rand::seq::IndexedRandom;
use strum::IntoEnumIterator;

pub const ROOT_SCAN_SAMPLES: usize = 1000;
const DRAW_ATTEMPTS: usize = 30;
/// relaxation factors offered for g(x) = x - λ·f(x)
const RELAXATIONS: [f64; 5] = [1.0, -0.1, 0.1, -0.5, 0.5];

#[derive(Debug, Clone)]
pub struct RootFindingProblem {
    pub method: RootFindingMethod,
    pub equation: RootEquation,
    pub start: RootStart,
    /// range the valid roots were collected on
    pub search_range: (f64, f64),
    pub roots: Vec<f64>,
    /// where the assigned method lands from `start`
    pub method_root: f64,
    /// stopping rule the assigned method runs with
    pub config: RootFindingConfig,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn roots_on(equation: &RootEquation, range: (f64, f64)) -> Vec<f64> {
    find_real_roots(equation, range.0, range.1, ROOT_SCAN_SAMPLES)
}

/// Converged root of `method` from `start`, if it lands on one of `roots`.
/// Listed roots are at least ROOT_DEDUP_EPS apart, so that distance tells them apart.
fn check_start(
    solver: &ScalarRootFinder,
    equation: &RootEquation,
    method: RootFindingMethod,
    start: RootStart,
    roots: &[f64],
) -> Option<f64> {
    match solver.solve_with_method(equation, method, start) {
        Ok(result) if roots.iter().any(|r| (r - result.root).abs() < ROOT_DEDUP_EPS) => {
            Some(result.root)
        }
        Ok(result) => {
            debug!(
                "{} from {:?} reached {} which is not a listed root",
                method, start, result.root
            );
            None
        }
        Err(e) => {
            debug!("{} from {:?} failed: {}", method, start, e);
            None
        }
    }
}

/// λ values whose rewrite contracts near `root`; 1/f'(root) when none does
pub fn contractive_relaxations(equation: &RootEquation, root: f64) -> Vec<f64> {
    let slope = equation.slope(root);
    let contractive: Vec<f64> = RELAXATIONS
        .iter()
        .copied()
        .filter(|lambda| (1.0 - lambda * slope).abs() < 1.0)
        .collect();
    if !contractive.is_empty() {
        contractive
    } else if slope.abs() > f64::EPSILON {
        vec![1.0 / slope]
    } else {
        vec![1.0]
    }
}

/// "x - f(x)", "x + f(x)/10", ...
pub fn rewrite_text(lambda: f64) -> String {
    let sign = if lambda < 0.0 { "+" } else { "-" };
    let magnitude = lambda.abs();
    let inverse = 1.0 / magnitude;
    if magnitude == 1.0 {
        format!("x {} f(x)", sign)
    } else if (inverse - inverse.round()).abs() < 1e-12 {
        format!("x {} f(x)/{}", sign, inverse.round())
    } else {
        format!("x {} {:.4}·f(x)", sign, magnitude)
    }
}

fn draw_start<R: Rng + ?Sized>(
    equation: &RootEquation,
    method: RootFindingMethod,
    root: f64,
    rng: &mut R,
) -> RootStart {
    match method {
        RootFindingMethod::NewtonRaphson => RootStart::Guess {
            x0: round2(root + rng.random_range(-0.5..=0.5)),
        },
        RootFindingMethod::Secant => RootStart::TwoGuesses {
            x0: round2(root + rng.random_range(-0.8..=-0.2)),
            x1: round2(root + rng.random_range(0.2..=0.8)),
        },
        RootFindingMethod::FixedPoint => {
            let lambdas = contractive_relaxations(equation, root);
            RootStart::Relaxed {
                x0: round2(root + rng.random_range(-0.3..=0.3)),
                lambda: *lambdas.choose(rng).unwrap_or(&1.0),
            }
        }
        RootFindingMethod::Bisection | RootFindingMethod::FalsePosition => {
            let (a, b) = equation.interval();
            RootStart::Bracket { a, b }
        }
    }
}

fn start_at_root(equation: &RootEquation, method: RootFindingMethod, root: f64) -> RootStart {
    match method {
        RootFindingMethod::NewtonRaphson => RootStart::Guess { x0: root },
        RootFindingMethod::Secant => RootStart::TwoGuesses {
            x0: root - 0.01,
            x1: root + 0.01,
        },
        RootFindingMethod::FixedPoint => RootStart::Relaxed {
            x0: root,
            lambda: contractive_relaxations(equation, root)[0],
        },
        RootFindingMethod::Bisection | RootFindingMethod::FalsePosition => {
            let (a, b) = equation.interval();
            RootStart::Bracket { a, b }
        }
    }
}

impl RootFindingProblem {
    pub fn new(
        method: RootFindingMethod,
        equation: RootEquation,
        start: RootStart,
        search_range: (f64, f64),
    ) -> Self {
        Self::with_config(method, equation, start, search_range, RootFindingConfig::default())
    }

    /// Runs the method from `start` and collects the roots on `search_range`.
    /// Panics when the range holds no root or the method fails from `start`.
    pub fn with_config(
        method: RootFindingMethod,
        equation: RootEquation,
        start: RootStart,
        search_range: (f64, f64),
        config: RootFindingConfig,
    ) -> Self {
        let solver = ScalarRootFinder::with_config(config.clone());
        let roots = roots_on(&equation, search_range);
        if roots.is_empty() {
            error!("{} has no real root on {:?}", equation.description(), search_range);
            panic!("{} has no real root on {:?}", equation.description(), search_range);
        }
        let method_root = match check_start(&solver, &equation, method, start, &roots) {
            Some(root) => root,
            None => {
                error!("{} does not converge to a listed root from {:?}", method, start);
                panic!("{} does not converge to a listed root from {:?}", method, start);
            }
        };
        Self {
            method,
            equation,
            start,
            search_range,
            roots,
            method_root,
            config,
        }
    }

    pub fn generate<R: Rng + ?Sized>(method: RootFindingMethod, rng: &mut R) -> Self {
        Self::generate_with_config(method, &RootFindingConfig::default(), rng)
    }

    pub fn generate_with_config<R: Rng + ?Sized>(
        method: RootFindingMethod,
        config: &RootFindingConfig,
        rng: &mut R,
    ) -> Self {
        let catalog: Vec<RootEquation> = RootEquation::iter().collect();
        let solver = ScalarRootFinder::with_config(config.clone());
        if method.is_bracketing() {
            let equation = retry_or_fallback(
                rng,
                "bracketing equation",
                DRAW_ATTEMPTS,
                |rng| *catalog.choose(rng).unwrap_or(&RootEquation::Fibonacci),
                |eq| {
                    let (a, b) = eq.interval();
                    let roots = roots_on(eq, (a, b));
                    eq.brackets_a_root()
                        && !roots.is_empty()
                        && check_start(&solver, eq, method, RootStart::Bracket { a, b }, &roots)
                            .is_some()
                },
                || RootEquation::Fibonacci,
            );
            let (a, b) = equation.interval();
            return Self::with_config(
                method,
                equation,
                RootStart::Bracket { a, b },
                (a, b),
                config.clone(),
            );
        }

        let equation = *catalog.choose(rng).unwrap_or(&RootEquation::Fibonacci);
        let range = equation.scan_range();
        let roots = roots_on(&equation, range);
        let Some(&anchor) = roots.first() else {
            error!("{} has no real root on {:?}", equation.description(), range);
            panic!("{} has no real root on {:?}", equation.description(), range);
        };
        let start = retry_or_fallback(
            rng,
            "root finding start",
            DRAW_ATTEMPTS,
            |rng| {
                let root = *roots.choose(rng).unwrap_or(&anchor);
                draw_start(&equation, method, root, rng)
            },
            |start| check_start(&solver, &equation, method, *start, &roots).is_some(),
            || start_at_root(&equation, method, anchor),
        );
        Self::with_config(method, equation, start, range, config.clone())
    }
}

impl Problem for RootFindingProblem {
    fn method(&self) -> Method {
        Method::RootFinding(self.method)
    }

    fn description(&self) -> String {
        let mut text = format!(
            "Find a root of f(x) = {} with {}.",
            self.equation.description(),
            self.method
        );
        let start = match self.start {
            RootStart::Bracket { a, b } => format!("Interval: [{}, {}]", a, b),
            RootStart::Guess { x0 } => format!("Start from x0 = {}", x0),
            RootStart::TwoGuesses { x0, x1 } => format!("Start from x0 = {}, x1 = {}", x0, x1),
            RootStart::Relaxed { x0, lambda } => format!(
                "Iterate x = g(x) with g(x) = {}, starting from x0 = {}",
                rewrite_text(lambda),
                x0
            ),
        };
        text.push('\n');
        text.push_str(&start);
        let count = self.roots.len();
        text.push_str(&format!(
            "\n{} valid root{} on [{}, {}]; any of them is accepted.",
            count,
            if count == 1 { "" } else { "s" },
            self.search_range.0,
            self.search_range.1
        ));
        text
    }

    fn reference_answer(&self) -> ReferenceAnswer {
        ReferenceAnswer::RootSet(self.roots.clone())
    }

    fn solve(&self) -> ReferenceAnswer {
        ReferenceAnswer::RootSet(roots_on(&self.equation, self.search_range))
    }

    fn answer_labels(&self) -> Vec<String> {
        vec!["x".to_string()]
    }
}
