//! Polynomial interpolation through a set of known points.
//!
//! Lagrange form, Newton form with divided differences, and Newton forward/backward
//! forms with finite differences. All functions take the points in any order and
//! sort a private copy by x. Duplicate x values are a caller error: the plain
//! functions panic on them, the `try_` variants return `InterpolationError`.
//!
//! Newton forward/backward need equally spaced nodes. When the spacing is irregular
//! they fall back to divided differences, which is the same polynomial written in a
//! form that does not assume a constant step.
use itertools::Itertools;
use log::{debug, error};
use std::fmt;
use strum_macros::{Display, EnumIter};

/// max - min of consecutive x steps below which the nodes count as equally spaced
pub const SPACING_EPS: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {:.4})", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationError {
    TooFewPoints(usize),
    DuplicateAbscissa(f64),
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InterpolationError::TooFewPoints(n) => {
                write!(f, "Interpolation needs at least one point, got {}", n)
            }
            InterpolationError::DuplicateAbscissa(x) => {
                write!(f, "Two known points share the abscissa x = {}", x)
            }
        }
    }
}

impl std::error::Error for InterpolationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum InterpolationMethod {
    #[strum(to_string = "Lagrange")]
    Lagrange,
    #[strum(to_string = "Newton forward")]
    NewtonForward,
    #[strum(to_string = "Newton backward")]
    NewtonBackward,
    #[strum(to_string = "Newton divided differences")]
    DividedDifferences,
}

impl InterpolationMethod {
    /// Forward and backward differences are only defined on a constant step
    pub fn requires_equal_spacing(&self) -> bool {
        matches!(
            self,
            InterpolationMethod::NewtonForward | InterpolationMethod::NewtonBackward
        )
    }
}

//////////////////////////////////////////VALIDATION//////////////////////////////////////////

/// Returns a copy sorted by x, rejecting empty input and repeated x.
pub fn sorted_points(points: &[Point]) -> Result<Vec<Point>, InterpolationError> {
    if points.is_empty() {
        return Err(InterpolationError::TooFewPoints(0));
    }
    let mut sorted = points.to_vec();
    sorted.sort_by(|p, q| p.x.total_cmp(&q.x));
    if let Some((p, _)) = sorted.iter().tuple_windows().find(|(p, q)| p.x == q.x) {
        return Err(InterpolationError::DuplicateAbscissa(p.x));
    }
    Ok(sorted)
}

fn checked_or_panic(points: &[Point]) -> Vec<Point> {
    match sorted_points(points) {
        Ok(sorted) => sorted,
        Err(e) => {
            error!("{}", e);
            panic!("interpolation precondition violated: {}", e);
        }
    }
}

/// True when consecutive x steps are constant (within SPACING_EPS).
/// One or two points are trivially equally spaced.
pub fn is_equally_spaced(points: &[Point]) -> bool {
    let mut xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    xs.sort_by(|a, b| a.total_cmp(b));
    let steps: Vec<f64> = xs.iter().tuple_windows().map(|(a, b)| b - a).collect();
    match steps.iter().minmax().into_option() {
        Some((min, max)) => max - min <= SPACING_EPS,
        None => true,
    }
}

//////////////////////////////////////////LAGRANGE//////////////////////////////////////////

fn lagrange_sorted(x: f64, points: &[Point]) -> f64 {
    let mut result = 0.0;
    for (i, pi) in points.iter().enumerate() {
        let mut term = pi.y;
        for (j, pj) in points.iter().enumerate() {
            if i != j {
                term *= (x - pj.x) / (pi.x - pj.x);
            }
        }
        result += term;
    }
    result
}

pub fn try_lagrange(x: f64, points: &[Point]) -> Result<f64, InterpolationError> {
    let sorted = sorted_points(points)?;
    Ok(lagrange_sorted(x, &sorted))
}

/// y = Σ yᵢ·Πⱼ≠ᵢ (x − xⱼ)/(xᵢ − xⱼ)
pub fn lagrange(x: f64, points: &[Point]) -> f64 {
    let sorted = checked_or_panic(points);
    lagrange_sorted(x, &sorted)
}

//////////////////////////////////////////DIFFERENCE TABLES//////////////////////////////////////////

/// Triangular table of divided differences over the points sorted by x.
/// `table[i][0] = yᵢ`, `table[i][j] = (table[i+1][j-1] - table[i][j-1]) / (x[i+j] - x[i])`;
/// row i holds n - i entries.
pub fn divided_differences(points: &[Point]) -> Vec<Vec<f64>> {
    let sorted = checked_or_panic(points);
    divided_differences_sorted(&sorted)
}

fn divided_differences_sorted(points: &[Point]) -> Vec<Vec<f64>> {
    let n = points.len();
    let mut table: Vec<Vec<f64>> = points.iter().map(|p| vec![p.y]).collect();
    for j in 1..n {
        for i in 0..n - j {
            let value = (table[i + 1][j - 1] - table[i][j - 1]) / (points[i + j].x - points[i].x);
            table[i].push(value);
        }
    }
    table
}

/// Triangular table of forward finite differences Δʲyᵢ over the points sorted by x.
pub fn finite_differences(points: &[Point]) -> Vec<Vec<f64>> {
    let sorted = checked_or_panic(points);
    finite_differences_sorted(&sorted)
}

fn finite_differences_sorted(points: &[Point]) -> Vec<Vec<f64>> {
    let n = points.len();
    let mut table: Vec<Vec<f64>> = points.iter().map(|p| vec![p.y]).collect();
    for j in 1..n {
        for i in 0..n - j {
            let value = table[i + 1][j - 1] - table[i][j - 1];
            table[i].push(value);
        }
    }
    table
}

//////////////////////////////////////////NEWTON FORMS//////////////////////////////////////////

fn newton_divided_sorted(x: f64, points: &[Point]) -> f64 {
    let table = divided_differences_sorted(points);
    let mut result = table[0][0];
    let mut product = 1.0;
    for i in 1..points.len() {
        product *= x - points[i - 1].x;
        result += table[0][i] * product;
    }
    result
}

/// Newton interpolating polynomial built from divided differences; works on any spacing
pub fn newton_divided_differences(x: f64, points: &[Point]) -> f64 {
    let sorted = checked_or_panic(points);
    newton_divided_sorted(x, &sorted)
}

/// Newton forward differences anchored at the first node, s = (x - x₀)/h.
/// Irregular spacing falls back to divided differences.
pub fn newton_forward(x: f64, points: &[Point]) -> f64 {
    let sorted = checked_or_panic(points);
    let n = sorted.len();
    if n == 1 {
        return sorted[0].y;
    }
    if !is_equally_spaced(&sorted) {
        debug!("newton_forward: irregular spacing, using divided differences");
        return newton_divided_sorted(x, &sorted);
    }
    let h = sorted[1].x - sorted[0].x;
    let s = (x - sorted[0].x) / h;
    let table = finite_differences_sorted(&sorted);

    let mut result = sorted[0].y;
    let mut product = 1.0;
    for j in 1..n {
        product *= (s - (j - 1) as f64) / j as f64;
        result += table[0][j] * product;
    }
    result
}

/// Newton backward differences anchored at the last node, s = (x - xₙ)/h.
/// Irregular spacing falls back to divided differences.
pub fn newton_backward(x: f64, points: &[Point]) -> f64 {
    let sorted = checked_or_panic(points);
    let n = sorted.len();
    if n == 1 {
        return sorted[0].y;
    }
    if !is_equally_spaced(&sorted) {
        debug!("newton_backward: irregular spacing, using divided differences");
        return newton_divided_sorted(x, &sorted);
    }
    let h = sorted[1].x - sorted[0].x;
    let s = (x - sorted[n - 1].x) / h;
    let table = finite_differences_sorted(&sorted);

    let mut result = sorted[n - 1].y;
    let mut product = 1.0;
    for j in 1..n {
        product *= (s + (j - 1) as f64) / j as f64;
        // ∇ʲyₙ sits in the opposite corner of the forward table
        result += table[n - 1 - j][j] * product;
    }
    result
}

/// Evaluate the interpolant of `points` at `x` with the chosen method
pub fn interpolate(method: InterpolationMethod, x: f64, points: &[Point]) -> f64 {
    match method {
        InterpolationMethod::Lagrange => lagrange(x, points),
        InterpolationMethod::NewtonForward => newton_forward(x, points),
        InterpolationMethod::NewtonBackward => newton_backward(x, points),
        InterpolationMethod::DividedDifferences => newton_divided_differences(x, points),
    }
}

pub fn try_interpolate(
    method: InterpolationMethod,
    x: f64,
    points: &[Point],
) -> Result<f64, InterpolationError> {
    sorted_points(points)?;
    Ok(interpolate(method, x, points))
}
