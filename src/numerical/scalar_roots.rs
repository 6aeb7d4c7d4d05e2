use log::debug;
use std::fmt;
use strum_macros::{Display, EnumIter};

/// Enum to represent the root finding methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum RootFindingMethod {
    #[strum(to_string = "Bisection")]
    Bisection,
    #[strum(to_string = "False position")]
    FalsePosition,
    #[strum(to_string = "Fixed point")]
    FixedPoint,
    #[strum(to_string = "Newton-Raphson")]
    NewtonRaphson,
    #[strum(to_string = "Secant")]
    Secant,
}

impl RootFindingMethod {
    /// Bracketing methods need an interval with a sign change
    pub fn is_bracketing(&self) -> bool {
        matches!(
            self,
            RootFindingMethod::Bisection | RootFindingMethod::FalsePosition
        )
    }
}

/// Error types for root finding methods
#[derive(Debug, Clone, PartialEq)]
pub enum RootFindingError {
    MaxIterationsReached,
    InvalidInterval,
    DerivativeZero,
    Diverged,
    InvalidInput(String),
}

impl fmt::Display for RootFindingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RootFindingError::MaxIterationsReached => write!(f, "Maximum iterations reached"),
            RootFindingError::InvalidInterval => {
                write!(f, "Invalid interval: f(a) and f(b) must have opposite signs")
            }
            RootFindingError::DerivativeZero => write!(f, "Derivative is zero"),
            RootFindingError::Diverged => write!(f, "Iteration diverged"),
            RootFindingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for RootFindingError {}

//////////////////////////////////TRAITS AND IMPLEMENTATIONS/////////////////////////////////

/// Trait for representing a nonlinear equation f(x) = 0
pub trait NonlinearFunction {
    /// Evaluate the function at point x
    fn evaluate(&self, x: f64) -> f64;

    /// Evaluate the derivative at point x (optional, for methods that can use it)
    fn derivative(&self, _x: f64) -> Option<f64> {
        None
    }

    /// Get function name for debugging/logging
    fn name(&self) -> &str {
        "unnamed_function"
    }
}

/// Simple function wrapper for closures
pub struct ClosureFunction<F>
where
    F: Fn(f64) -> f64,
{
    func: F,
    name: String,
}

impl<F> ClosureFunction<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(func: F, name: String) -> Self {
        Self { func, name }
    }
}

impl<F> NonlinearFunction for ClosureFunction<F>
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        (self.func)(x)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Function wrapper with analytical derivative
pub struct FunctionWithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    func: F,
    derivative_func: D,
    name: String,
}

impl<F, D> FunctionWithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    pub fn new(func: F, derivative_func: D, name: String) -> Self {
        Self {
            func,
            derivative_func,
            name,
        }
    }
}

impl<F, D> NonlinearFunction for FunctionWithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        (self.func)(x)
    }

    fn derivative(&self, x: f64) -> Option<f64> {
        Some((self.derivative_func)(x))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Starting data a method iterates from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootStart {
    /// interval [a, b] for bisection and false position
    Bracket { a: f64, b: f64 },
    /// single initial guess for Newton-Raphson
    Guess { x0: f64 },
    /// two initial guesses for the secant method
    TwoGuesses { x0: f64, x1: f64 },
    /// fixed point iteration of g(x) = x - lambda * f(x)
    Relaxed { x0: f64, lambda: f64 },
}

/// Result structure for root finding methods
#[derive(Debug, Clone)]
pub struct RootFindingResult {
    pub root: f64,
    pub function_value: f64,
    pub iterations: usize,
    pub converged: bool,
    pub method: String,
}

impl RootFindingResult {
    fn converged(root: f64, function_value: f64, iterations: usize, method: &str) -> Self {
        Self {
            root,
            function_value,
            iterations,
            converged: true,
            method: method.to_string(),
        }
    }
}

/// Configuration for root finding methods
#[derive(Debug, Clone, PartialEq)]
pub struct RootFindingConfig {
    pub tolerance: f64,
    pub max_iterations: usize,
    pub verbose: bool,
}

impl Default for RootFindingConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 100,
            verbose: false,
        }
    }
}

/// iterates beyond this magnitude are treated as divergence
const DIVERGENCE_BOUND: f64 = 1e12;

fn escaped(x: f64) -> bool {
    !x.is_finite() || x.abs() > DIVERGENCE_BOUND
}

/// Main structure for scalar root finding methods
pub struct ScalarRootFinder {
    config: RootFindingConfig,
}

impl ScalarRootFinder {
    /// Create a new ScalarRootFinder with default configuration
    pub fn new() -> Self {
        Self {
            config: RootFindingConfig::default(),
        }
    }

    /// Create a new ScalarRootFinder with custom configuration
    pub fn with_config(config: RootFindingConfig) -> Self {
        Self { config }
    }

    ///////////////////////////////////////////SETTERS AND GETTERS///////////////////////////////////////////
    pub fn config(&self) -> &RootFindingConfig {
        &self.config
    }

    /// Set tolerance for convergence
    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.config.tolerance = tolerance;
    }

    /// Set maximum number of iterations
    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.config.max_iterations = max_iterations;
    }

    /// Solve with specific method; the start must match what the method iterates from
    pub fn solve_with_method<F>(
        &self,
        function: &F,
        method: RootFindingMethod,
        start: RootStart,
    ) -> Result<RootFindingResult, RootFindingError>
    where
        F: NonlinearFunction,
    {
        match (method, start) {
            (RootFindingMethod::Bisection, RootStart::Bracket { a, b }) => {
                self.bisection(function, a, b)
            }
            (RootFindingMethod::FalsePosition, RootStart::Bracket { a, b }) => {
                self.false_position(function, a, b)
            }
            (RootFindingMethod::NewtonRaphson, RootStart::Guess { x0 }) => {
                self.newton_raphson(function, x0)
            }
            (RootFindingMethod::Secant, RootStart::TwoGuesses { x0, x1 }) => {
                self.secant(function, x0, x1)
            }
            (RootFindingMethod::FixedPoint, RootStart::Relaxed { x0, lambda }) => {
                self.fixed_point(function, x0, lambda)
            }
            (method, start) => Err(RootFindingError::InvalidInput(format!(
                "{} cannot start from {:?}",
                method, start
            ))),
        }
    }

    /////////////////////////////////////////METHODS///////////////////////////////////////////

    /// Bisection method for finding roots
    /// Requires that f(a) and f(b) have opposite signs
    pub fn bisection<F>(
        &self,
        function: &F,
        mut a: f64,
        mut b: f64,
    ) -> Result<RootFindingResult, RootFindingError>
    where
        F: NonlinearFunction,
    {
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }

        let mut fa = function.evaluate(a);
        let fb = function.evaluate(b);

        if fa * fb > 0.0 {
            return Err(RootFindingError::InvalidInterval);
        }

        if fa.abs() < self.config.tolerance {
            return Ok(RootFindingResult::converged(a, fa, 0, "bisection"));
        }
        if fb.abs() < self.config.tolerance {
            return Ok(RootFindingResult::converged(b, fb, 0, "bisection"));
        }

        if self.config.verbose {
            debug!(
                "Bisection method for function: {}, interval [{}, {}]",
                function.name(),
                a,
                b
            );
        }

        for iteration in 1..=self.config.max_iterations {
            let c = (a + b) / 2.0;
            let fc = function.evaluate(c);

            if self.config.verbose {
                debug!(
                    "Iteration {}: x = {:.10}, f(x) = {:.2e}, interval = [{:.6}, {:.6}]",
                    iteration, c, fc, a, b
                );
            }

            if fc.abs() < self.config.tolerance || (b - a) / 2.0 < self.config.tolerance {
                return Ok(RootFindingResult::converged(c, fc, iteration, "bisection"));
            }

            if fa * fc < 0.0 {
                b = c;
            } else {
                a = c;
                fa = fc;
            }
        }

        Err(RootFindingError::MaxIterationsReached)
    }

    /// Regula falsi: c = (a·f(b) - b·f(a)) / (f(b) - f(a)) replaces the midpoint.
    /// When the same endpoint survives twice its stored value is halved (Illinois step)
    /// so convex functions do not stall on one side.
    pub fn false_position<F>(
        &self,
        function: &F,
        mut a: f64,
        mut b: f64,
    ) -> Result<RootFindingResult, RootFindingError>
    where
        F: NonlinearFunction,
    {
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }

        let mut fa = function.evaluate(a);
        let mut fb = function.evaluate(b);

        if fa * fb > 0.0 {
            return Err(RootFindingError::InvalidInterval);
        }
        if fa.abs() < self.config.tolerance {
            return Ok(RootFindingResult::converged(a, fa, 0, "false_position"));
        }
        if fb.abs() < self.config.tolerance {
            return Ok(RootFindingResult::converged(b, fb, 0, "false_position"));
        }

        if self.config.verbose {
            debug!(
                "False position method for function: {}, interval [{}, {}]",
                function.name(),
                a,
                b
            );
        }

        let mut previous = f64::NAN;
        // -1 when a was kept last time, +1 when b was kept
        let mut side = 0i8;
        for iteration in 1..=self.config.max_iterations {
            let c = (a * fb - b * fa) / (fb - fa);
            let fc = function.evaluate(c);

            if self.config.verbose {
                debug!(
                    "Iteration {}: x = {:.10}, f(x) = {:.2e}, interval = [{:.6}, {:.6}]",
                    iteration, c, fc, a, b
                );
            }

            if fc.abs() < self.config.tolerance || (c - previous).abs() < self.config.tolerance {
                return Ok(RootFindingResult::converged(
                    c,
                    fc,
                    iteration,
                    "false_position",
                ));
            }

            if fa * fc < 0.0 {
                b = c;
                fb = fc;
                if side == -1 {
                    fa /= 2.0;
                }
                side = -1;
            } else {
                a = c;
                fa = fc;
                if side == 1 {
                    fb /= 2.0;
                }
                side = 1;
            }
            previous = c;
        }

        Err(RootFindingError::MaxIterationsReached)
    }

    /// Fixed point iteration x_{n+1} = g(x_n) with g(x) = x - lambda·f(x).
    /// Convergence is not checked ahead of time: a runaway iterate is `Diverged`,
    /// running out of iterations is `MaxIterationsReached`.
    pub fn fixed_point<F>(
        &self,
        function: &F,
        mut x: f64,
        lambda: f64,
    ) -> Result<RootFindingResult, RootFindingError>
    where
        F: NonlinearFunction,
    {
        if lambda == 0.0 || !lambda.is_finite() {
            return Err(RootFindingError::InvalidInput(format!(
                "relaxation factor must be finite and nonzero, got {}",
                lambda
            )));
        }
        if self.config.verbose {
            debug!(
                "Fixed point iteration for function: {}, x0 = {}, g(x) = x - {}·f(x)",
                function.name(),
                x,
                lambda
            );
        }

        for iteration in 1..=self.config.max_iterations {
            let x_new = x - lambda * function.evaluate(x);
            if escaped(x_new) {
                return Err(RootFindingError::Diverged);
            }
            let f_new = function.evaluate(x_new);

            if self.config.verbose {
                debug!(
                    "Iteration {}: x = {:.10}, f(x) = {:.2e}",
                    iteration, x_new, f_new
                );
            }

            if (x_new - x).abs() < self.config.tolerance || f_new.abs() < self.config.tolerance {
                return Ok(RootFindingResult::converged(
                    x_new,
                    f_new,
                    iteration,
                    "fixed_point",
                ));
            }
            x = x_new;
        }

        Err(RootFindingError::MaxIterationsReached)
    }

    /// Secant method for finding roots
    /// Requires two initial guesses x0 and x1
    pub fn secant<F>(
        &self,
        function: &F,
        mut x0: f64,
        mut x1: f64,
    ) -> Result<RootFindingResult, RootFindingError>
    where
        F: NonlinearFunction,
    {
        let mut f0 = function.evaluate(x0);
        let mut f1 = function.evaluate(x1);

        if self.config.verbose {
            debug!(
                "Secant method for function: {}, x0 = {}, x1 = {}",
                function.name(),
                x0,
                x1
            );
        }

        if f0.abs() < self.config.tolerance {
            return Ok(RootFindingResult::converged(x0, f0, 0, "secant"));
        }
        if f1.abs() < self.config.tolerance {
            return Ok(RootFindingResult::converged(x1, f1, 0, "secant"));
        }

        for iteration in 1..=self.config.max_iterations {
            if (f1 - f0).abs() < 1e-15 {
                return Err(RootFindingError::DerivativeZero);
            }

            let x2 = x1 - f1 * (x1 - x0) / (f1 - f0);
            if escaped(x2) {
                return Err(RootFindingError::Diverged);
            }
            let f2 = function.evaluate(x2);

            if self.config.verbose {
                debug!("Iteration {}: x = {:.10}, f(x) = {:.2e}", iteration, x2, f2);
            }

            if f2.abs() < self.config.tolerance || (x2 - x1).abs() < self.config.tolerance {
                return Ok(RootFindingResult::converged(x2, f2, iteration, "secant"));
            }

            x0 = x1;
            f0 = f1;
            x1 = x2;
            f1 = f2;
        }

        Err(RootFindingError::MaxIterationsReached)
    }

    /// Newton-Raphson method; uses the analytical derivative when the function has one
    pub fn newton_raphson<F>(
        &self,
        function: &F,
        mut x: f64,
    ) -> Result<RootFindingResult, RootFindingError>
    where
        F: NonlinearFunction,
    {
        if self.config.verbose {
            debug!(
                "Newton-Raphson method for function: {}, x0 = {}",
                function.name(),
                x
            );
        }

        for iteration in 1..=self.config.max_iterations {
            let fx = function.evaluate(x);

            if self.config.verbose {
                debug!("Iteration {}: x = {:.10}, f(x) = {:.2e}", iteration, x, fx);
            }

            if fx.abs() < self.config.tolerance {
                return Ok(RootFindingResult::converged(
                    x,
                    fx,
                    iteration,
                    "newton_raphson",
                ));
            }

            let fpx = match function.derivative(x) {
                Some(deriv) => deriv,
                None => {
                    let h = 1e-8;
                    (function.evaluate(x + h) - function.evaluate(x - h)) / (2.0 * h)
                }
            };

            if fpx.abs() < 1e-15 {
                return Err(RootFindingError::DerivativeZero);
            }

            let x_new = x - fx / fpx;
            if escaped(x_new) {
                return Err(RootFindingError::Diverged);
            }

            if (x_new - x).abs() < self.config.tolerance {
                return Ok(RootFindingResult::converged(
                    x_new,
                    function.evaluate(x_new),
                    iteration,
                    "newton_raphson",
                ));
            }

            x = x_new;
        }

        Err(RootFindingError::MaxIterationsReached)
    }
}

impl Default for ScalarRootFinder {
    fn default() -> Self {
        Self::new()
    }
}

/////////////////////////////////////////ROOT DISCOVERY///////////////////////////////////////////

/// roots closer than this are the same root
pub const ROOT_DEDUP_EPS: f64 = 1e-3;
/// |f| below this at a local minimum of |f| without a sign change counts as a touching root
pub const TANGENCY_EPS: f64 = 0.01;

/// All real roots of `function` on [min, max].
/// The interval is sampled on `samples` equal steps; every sign change is refined
/// by bisection, and grid points where |f| has a local minimum below TANGENCY_EPS
/// without a sign change are kept as tangential roots. Roots within
/// ROOT_DEDUP_EPS of each other are merged. Result is sorted ascending.
pub fn find_real_roots<F>(function: &F, min: f64, max: f64, samples: usize) -> Vec<f64>
where
    F: NonlinearFunction,
{
    let samples = samples.max(2);
    let step = (max - min) / samples as f64;
    let xs: Vec<f64> = (0..=samples).map(|i| min + i as f64 * step).collect();
    let fs: Vec<f64> = xs.iter().map(|&x| function.evaluate(x)).collect();

    let mut refiner = ScalarRootFinder::new();
    refiner.set_tolerance(1e-12);
    refiner.set_max_iterations(200);

    let mut roots = Vec::new();
    for i in 0..samples {
        let (x0, x1) = (xs[i], xs[i + 1]);
        let (f0, f1) = (fs[i], fs[i + 1]);
        if f0 == 0.0 {
            roots.push(x0);
        } else if f0 * f1 < 0.0 {
            match refiner.bisection(function, x0, x1) {
                Ok(result) => roots.push(result.root),
                Err(_) => roots.push((x0 + x1) / 2.0),
            }
        }
    }
    if fs[samples] == 0.0 {
        roots.push(xs[samples]);
    }

    for i in 1..samples {
        let (fl, fc, fr) = (fs[i - 1], fs[i], fs[i + 1]);
        let touching = fc.abs() < TANGENCY_EPS
            && fc.abs() <= fl.abs()
            && fc.abs() <= fr.abs()
            && fl * fc > 0.0
            && fc * fr > 0.0;
        if touching {
            debug!(
                "find_real_roots: tangential root near x = {} for {}",
                xs[i],
                function.name()
            );
            roots.push(xs[i]);
        }
    }

    roots.sort_by(|a, b| a.total_cmp(b));
    roots.dedup_by(|later, earlier| (*later - *earlier).abs() < ROOT_DEDUP_EPS);
    roots
}

/////////////////////////////////////////TESTS////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use strum::IntoEnumIterator;

    fn approx_equal(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    fn cubic() -> FunctionWithDerivative<impl Fn(f64) -> f64, impl Fn(f64) -> f64> {
        // x^3 - x - 1, single real root
        FunctionWithDerivative::new(
            |x: f64| x * x * x - x - 1.0,
            |x: f64| 3.0 * x * x - 1.0,
            "x^3 - x - 1".to_string(),
        )
    }
    const CUBIC_ROOT: f64 = 1.324717957244746;

    #[test]
    fn test_closure_function() {
        let func = ClosureFunction::new(|x| x * x - 4.0, "x^2 - 4".to_string());
        assert_eq!(func.evaluate(2.0), 0.0);
        assert_eq!(func.evaluate(0.0), -4.0);
        assert_eq!(func.derivative(1.0), None);
        assert_eq!(func.name(), "x^2 - 4");
    }

    #[test]
    fn test_bisection_simple_quadratic() {
        let solver = ScalarRootFinder::new();
        let func = ClosureFunction::new(|x| x * x - 4.0, "x^2 - 4".to_string());

        let result = solver.bisection(&func, 0.0, 3.0).unwrap();
        assert!(approx_equal(result.root, 2.0, 1e-9));
        assert!(result.converged);
        assert_eq!(result.method, "bisection");

        let result = solver.bisection(&func, -3.0, 0.0).unwrap();
        assert!(approx_equal(result.root, -2.0, 1e-9));
    }

    #[test]
    fn test_bisection_trigonometric() {
        let solver = ScalarRootFinder::new();
        let func = ClosureFunction::new(|x| x.sin(), "sin(x)".to_string());
        let result = solver.bisection(&func, 3.0, 4.0).unwrap();
        assert!(approx_equal(result.root, PI, 1e-9));
    }

    #[test]
    fn test_bisection_invalid_interval() {
        let solver = ScalarRootFinder::new();
        let func = ClosureFunction::new(|x| x * x + 1.0, "x^2 + 1".to_string());
        let result = solver.bisection(&func, -1.0, 1.0);
        assert!(matches!(result, Err(RootFindingError::InvalidInterval)));
        let result = solver.false_position(&func, -1.0, 1.0);
        assert!(matches!(result, Err(RootFindingError::InvalidInterval)));
    }

    #[test]
    fn test_bisection_root_at_endpoint() {
        let solver = ScalarRootFinder::new();
        let func = ClosureFunction::new(|x| x - 2.0, "x - 2".to_string());
        let result = solver.bisection(&func, 1.0, 2.0).unwrap();
        assert!(approx_equal(result.root, 2.0, 1e-10));
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_bracketing_methods_reach_small_residual() {
        let solver = ScalarRootFinder::new();
        let functions: [(fn(f64) -> f64, f64, f64); 4] = [
            (|x| x * x * x - x - 1.0, 1.0, 2.0),
            (|x| (-x).exp() - x, 0.0, 1.0),
            (|x| x * x * x + 2.0 * x * x + 10.0 * x - 20.0, 1.0, 2.0),
            (|x| x.powi(10) - 1.0, 0.0, 1.3),
        ];
        for (f, a, b) in functions {
            let func = ClosureFunction::new(f, "bracketed".to_string());
            let bis = solver.bisection(&func, a, b).unwrap();
            let fp = solver.false_position(&func, a, b).unwrap();
            assert!(func.evaluate(bis.root).abs() < 1e-6);
            assert!(func.evaluate(fp.root).abs() < 1e-6);
            assert!(approx_equal(bis.root, fp.root, 1e-6));
        }
    }

    #[test]
    fn test_false_position_cubic() {
        let solver = ScalarRootFinder::new();
        let result = solver.false_position(&cubic(), 1.0, 2.0).unwrap();
        assert!(approx_equal(result.root, CUBIC_ROOT, 1e-8));
        assert_eq!(result.method, "false_position");
    }

    #[test]
    fn test_secant_cubic() {
        let solver = ScalarRootFinder::new();
        let result = solver.secant(&cubic(), 1.0, 2.0).unwrap();
        assert!(approx_equal(result.root, CUBIC_ROOT, 1e-8));
    }

    #[test]
    fn test_secant_derivative_zero_error() {
        let solver = ScalarRootFinder::new();
        let func = ClosureFunction::new(|x| x * x + 1.0, "x^2 + 1".to_string());
        // symmetric guesses give a flat secant
        let result = solver.secant(&func, -1.0, 1.0);
        assert!(matches!(result, Err(RootFindingError::DerivativeZero)));
    }

    #[test]
    fn test_newton_raphson_with_and_without_derivative() {
        let solver = ScalarRootFinder::new();
        let result = solver.newton_raphson(&cubic(), 1.5).unwrap();
        assert!(approx_equal(result.root, CUBIC_ROOT, 1e-9));

        let func = ClosureFunction::new(|x: f64| x.cos() - x, "cos(x) - x".to_string());
        let result = solver.newton_raphson(&func, 0.5).unwrap();
        assert!(approx_equal(result.root, 0.7390851332151607, 1e-8));
    }

    #[test]
    fn test_newton_raphson_derivative_zero() {
        let solver = ScalarRootFinder::new();
        let func = FunctionWithDerivative::new(|x| x * x + 1.0, |x| 2.0 * x, "x^2 + 1".to_string());
        let result = solver.newton_raphson(&func, 0.0);
        assert!(matches!(result, Err(RootFindingError::DerivativeZero)));
    }

    #[test]
    fn test_fixed_point_contractive() {
        let solver = ScalarRootFinder::new();
        // e^(-x) - x with lambda -1 gives g(x) = e^(-x), |g'| < 1 near the root
        let func = ClosureFunction::new(|x: f64| (-x).exp() - x, "e^(-x) - x".to_string());
        let result = solver.fixed_point(&func, 0.5, -1.0).unwrap();
        assert!(approx_equal(result.root, 0.5671432904097838, 1e-8));
        assert_eq!(result.method, "fixed_point");

        // lambda 1 gives g(x) = 2x - e^(-x), |g'| > 1: the iterate runs away
        let result = solver.fixed_point(&func, 0.5, 1.0);
        assert!(matches!(result, Err(RootFindingError::Diverged)));
    }

    #[test]
    fn test_fixed_point_divergence_is_distinct() {
        let solver = ScalarRootFinder::new();
        // g(x) = x - (-1)(x - 1) = 2x - 1 is repelling around x = 1
        let func = ClosureFunction::new(|x| x - 1.0, "x - 1".to_string());
        let result = solver.fixed_point(&func, 1.5, -1.0);
        assert!(matches!(result, Err(RootFindingError::Diverged)));

        // g(x) = x - 2(x - 1) oscillates between two values forever
        let result = solver.fixed_point(&func, 1.5, 2.0);
        assert!(matches!(result, Err(RootFindingError::MaxIterationsReached)));
    }

    #[test]
    fn test_solve_with_method_dispatch() {
        let solver = ScalarRootFinder::new();
        let f = cubic();
        let starts = [
            (RootFindingMethod::Bisection, RootStart::Bracket { a: 1.0, b: 2.0 }),
            (RootFindingMethod::FalsePosition, RootStart::Bracket { a: 1.0, b: 2.0 }),
            (RootFindingMethod::NewtonRaphson, RootStart::Guess { x0: 1.5 }),
            (RootFindingMethod::Secant, RootStart::TwoGuesses { x0: 1.2, x1: 1.6 }),
            // g'(r) = 1 - 0.2·(3r² - 1) ≈ 0.147
            (RootFindingMethod::FixedPoint, RootStart::Relaxed { x0: 1.3, lambda: 0.2 }),
        ];
        assert_eq!(starts.len(), RootFindingMethod::iter().count());
        for (method, start) in starts {
            let result = solver.solve_with_method(&f, method, start).unwrap();
            assert!(approx_equal(result.root, CUBIC_ROOT, 1e-8), "{}", method);
        }
        let mismatch = solver.solve_with_method(&f, RootFindingMethod::Bisection, RootStart::Guess { x0: 1.0 });
        assert!(matches!(mismatch, Err(RootFindingError::InvalidInput(_))));
    }

    #[test]
    fn test_solver_max_iterations() {
        let mut solver = ScalarRootFinder::new();
        solver.set_max_iterations(3);
        solver.set_tolerance(1e-14);
        let result = solver.bisection(&cubic(), 1.0, 2.0);
        assert!(matches!(result, Err(RootFindingError::MaxIterationsReached)));
    }

    #[test]
    fn test_find_real_roots_three_simple_roots() {
        // (x - 1)(x + 2)(x - 3)
        let f = ClosureFunction::new(
            |x: f64| x * x * x - 2.0 * x * x - 5.0 * x + 6.0,
            "x^3 - 2x^2 - 5x + 6".to_string(),
        );
        let roots = find_real_roots(&f, -3.0, 4.0, 1000);
        assert_eq!(roots.len(), 3);
        for (root, expected) in roots.iter().zip([-2.0, 1.0, 3.0]) {
            assert!(approx_equal(*root, expected, 1e-6));
        }
    }

    #[test]
    fn test_find_real_roots_tangency() {
        // (x - 1)^2 (x + 1) touches zero at x = 1
        let f = ClosureFunction::new(
            |x: f64| (x - 1.0) * (x - 1.0) * (x + 1.0),
            "(x-1)^2 (x+1)".to_string(),
        );
        let roots = find_real_roots(&f, -2.0, 2.3, 1000);
        assert_eq!(roots.len(), 2);
        assert!(approx_equal(roots[0], -1.0, 1e-6));
        assert!(approx_equal(roots[1], 1.0, 5e-3));
    }

    #[test]
    fn test_find_real_roots_none() {
        let f = ClosureFunction::new(|x: f64| x * x + 1.0, "x^2 + 1".to_string());
        assert!(find_real_roots(&f, -5.0, 5.0, 1000).is_empty());
    }
}
