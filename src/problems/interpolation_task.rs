use crate::numerical::inter_n_extrapolate::{
    InterpolationMethod, Point, interpolate, is_equally_spaced,
};
use crate::numerical::polynomial::Polynomial;
use crate::problems::problem_instance::{Method, Problem, ReferenceAnswer};
use crate::problems::retry::retry_or_fallback;
use itertools::Itertools;
use rand::Rng;
use rand::seq::IndexedRandom;

const SPACING_ATTEMPTS: usize = 50;
const MIN_GAP: i64 = 2;

#[derive(Debug, Clone)]
pub struct InterpolationProblem {
    pub method: InterpolationMethod,
    /// ground truth the known points are sampled from
    pub polynomial: Polynomial,
    pub known_points: Vec<Point>,
    pub targets: Vec<f64>,
    /// the assigned method's value at each target; this is what gets graded
    pub reference: Vec<f64>,
    /// the polynomial's value at each target
    pub exact: Vec<f64>,
}

impl InterpolationProblem {
    /// Samples `polynomial` at `xs` and evaluates the assigned method at `targets`.
    /// Panics on repeated x (see `interpolate`).
    pub fn new(
        method: InterpolationMethod,
        polynomial: Polynomial,
        xs: &[f64],
        targets: Vec<f64>,
    ) -> Self {
        let known_points: Vec<Point> = xs
            .iter()
            .map(|&x| Point::new(x, polynomial.evaluate(x)))
            .collect();
        let reference = targets
            .iter()
            .map(|&t| interpolate(method, t, &known_points))
            .collect();
        let exact = targets.iter().map(|&t| polynomial.evaluate(t)).collect();
        Self {
            method,
            polynomial,
            known_points,
            targets,
            reference,
            exact,
        }
    }

    pub fn generate<R: Rng + ?Sized>(
        method: InterpolationMethod,
        difficulty: u32,
        rng: &mut R,
    ) -> Self {
        let (degree, n) = if difficulty <= 2 {
            let degree = rng.random_range(2..=3);
            (degree, degree + 2)
        } else {
            let degree = rng.random_range(3..=4);
            (degree, degree + 3)
        };
        let polynomial = random_polynomial(degree, rng);

        let equally_spaced = match method {
            InterpolationMethod::NewtonForward | InterpolationMethod::NewtonBackward => true,
            InterpolationMethod::DividedDifferences => false,
            InterpolationMethod::Lagrange => rng.random_bool(0.5),
        };
        let xs = if equally_spaced {
            equally_spaced_xs(n, rng)
        } else {
            irregular_xs(n, rng)
        };
        let targets = pick_targets(&xs, rng);
        let xs: Vec<f64> = xs.into_iter().map(|x| x as f64).collect();
        Self::new(method, polynomial, &xs, targets)
    }

    /// Forward/backward requested on irregular nodes
    pub fn uses_fallback(&self) -> bool {
        self.method.requires_equal_spacing() && !is_equally_spaced(&self.known_points)
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Highest degree coefficient gets the smallest range so values stay readable
fn random_polynomial<R: Rng + ?Sized>(degree: usize, rng: &mut R) -> Polynomial {
    let ranges: &[f64] = match degree {
        2 => &[2.0, 5.0, 10.0],
        3 => &[1.0, 3.0, 5.0, 10.0],
        _ => &[0.5, 2.0, 3.0, 5.0, 10.0],
    };
    let coefficients = ranges
        .iter()
        .map(|&r| round2(rng.random_range(-r..=r)))
        .collect();
    Polynomial::new(coefficients)
}

fn equally_spaced_xs<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<i64> {
    let n = n as i64;
    let step = *[2_i64, 3, 4].choose(rng).unwrap_or(&2);
    let max_start = (3 * n - (n - 1) * step).max(0);
    let start = rng.random_range(0..=max_start);
    (0..n).map(|i| start + i * step).collect()
}

fn gaps_ok(xs: &[i64]) -> bool {
    xs.iter().tuple_windows().all(|(a, b)| b - a >= MIN_GAP)
}

fn is_regular(xs: &[i64]) -> bool {
    xs.iter().tuple_windows().map(|(a, b)| b - a).all_equal()
}

/// Endpoints 0 and 3n, interior nodes drawn with a minimum gap, never a constant step
fn irregular_xs<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<i64> {
    let last = 3 * n as i64;
    let candidates: Vec<i64> = (MIN_GAP..=last - MIN_GAP).collect();
    retry_or_fallback(
        rng,
        "irregular interpolation nodes",
        SPACING_ATTEMPTS,
        |rng| {
            let mut xs: Vec<i64> = candidates
                .choose_multiple(rng, n.saturating_sub(2))
                .copied()
                .collect();
            xs.push(0);
            xs.push(last);
            xs.sort();
            xs
        },
        |xs| gaps_ok(xs) && !is_regular(xs),
        || {
            let mut xs: Vec<i64> = (0..n as i64 - 1).map(|i| 3 * i).collect();
            xs.push(last);
            xs
        },
    )
}

/// 2 or 3 integer targets strictly inside the node range, avoiding the nodes.
/// When the inside runs short the range is extended on both sides.
fn pick_targets<R: Rng + ?Sized>(xs: &[i64], rng: &mut R) -> Vec<f64> {
    let count = rng.random_range(2..=3);
    let (min, max) = match xs.iter().minmax().into_option() {
        Some((min, max)) => (*min, *max),
        None => (0, 0),
    };
    let mut candidates: Vec<i64> = (min + 1..max).filter(|x| !xs.contains(x)).collect();
    let mut offset = 1;
    while candidates.len() < count {
        candidates.push(max + offset);
        candidates.push(min - offset);
        offset += 1;
    }
    let mut targets: Vec<i64> = candidates.choose_multiple(rng, count).copied().collect();
    targets.sort();
    targets.into_iter().map(|t| t as f64).collect()
}

impl Problem for InterpolationProblem {
    fn method(&self) -> Method {
        Method::Interpolation(self.method)
    }

    fn description(&self) -> String {
        let points = self.known_points.iter().map(|p| p.to_string()).join(", ");
        let targets = self.targets.iter().map(|t| t.to_string()).join(", ");
        let mut text = format!(
            "Interpolate with {}.\nKnown points: {}\nFind y at x = {}",
            self.method, points, targets
        );
        if self.uses_fallback() {
            text.push_str(
                "\nThe points are not equally spaced, so Newton divided differences are used.",
            );
        }
        text
    }

    fn reference_answer(&self) -> ReferenceAnswer {
        ReferenceAnswer::PerTarget(
            self.targets
                .iter()
                .copied()
                .zip(self.reference.iter().copied())
                .collect(),
        )
    }

    fn solve(&self) -> ReferenceAnswer {
        ReferenceAnswer::PerTarget(
            self.targets
                .iter()
                .map(|&t| (t, interpolate(self.method, t, &self.known_points)))
                .collect(),
        )
    }

    fn answer_labels(&self) -> Vec<String> {
        self.targets.iter().map(|t| format!("y({})", t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_samples_polynomial() {
        let p = Polynomial::new(vec![1.0, 0.0, 1.0]);
        let problem =
            InterpolationProblem::new(InterpolationMethod::Lagrange, p, &[0.0, 1.0, 2.0], vec![3.0]);
        assert_eq!(problem.known_points[2], Point::new(2.0, 5.0));
        assert_relative_eq!(problem.reference[0], 10.0, epsilon = 1e-10);
        assert_relative_eq!(problem.exact[0], 10.0);
        assert_eq!(problem.answer_labels(), vec!["y(3)".to_string()]);
    }

    #[test]
    fn test_irregular_forward_mentions_fallback() {
        let p = Polynomial::new(vec![0.5, -1.0, 2.0]);
        let problem = InterpolationProblem::new(
            InterpolationMethod::NewtonForward,
            p,
            &[0.0, 1.0, 4.0, 6.0],
            vec![2.0, 5.0],
        );
        assert!(problem.uses_fallback());
        assert!(problem.description().contains("divided differences"));
        for (r, e) in problem.reference.iter().zip(&problem.exact) {
            assert_relative_eq!(*r, *e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_irregular_nodes() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in 4..=7 {
            let xs = irregular_xs(n, &mut rng);
            assert_eq!(xs.len(), n);
            assert_eq!(xs[0], 0);
            assert_eq!(*xs.last().unwrap(), 3 * n as i64);
            assert!(gaps_ok(&xs));
            assert!(!is_regular(&xs));
        }
    }

    #[test]
    fn test_equally_spaced_nodes() {
        let mut rng = StdRng::seed_from_u64(5);
        for n in 4..=7 {
            let xs = equally_spaced_xs(n, &mut rng);
            assert_eq!(xs.len(), n);
            assert!(xs[0] >= 0);
            assert!(is_regular(&xs));
            assert!([2, 3, 4].contains(&(xs[1] - xs[0])));
        }
    }

    #[test]
    fn test_targets_avoid_nodes() {
        let mut rng = StdRng::seed_from_u64(3);
        let xs = vec![0, 2, 4, 6];
        for _ in 0..20 {
            let targets = pick_targets(&xs, &mut rng);
            assert!((2..=3).contains(&targets.len()));
            for t in &targets {
                assert!(!xs.contains(&(*t as i64)));
            }
        }
    }
}
