//! Jacobi and Gauss-Seidel sweeps for 3×3 systems.
//! Convergence is only guaranteed for strictly diagonally dominant matrices;
//! the solvers do not check that, they stop at the sweep cap instead.
use crate::somelinalg::direct_solvers::LinearSystemError;
use log::{debug, warn};
use nalgebra::{Matrix3, Vector3};

#[derive(Debug, Clone, PartialEq)]
pub struct IterativeConfig {
    /// stop when max |x_new - x_old| drops below this
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for IterativeConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 200,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IterativeResult {
    pub solution: Vector3<f64>,
    pub iterations: usize,
    /// max-norm change of the last sweep
    pub last_change: f64,
}

fn check_diagonal(A: &Matrix3<f64>) -> Result<(), LinearSystemError> {
    match (0..3).find(|&i| A[(i, i)] == 0.0) {
        Some(i) => Err(LinearSystemError::ZeroPivot(i)),
        None => Ok(()),
    }
}

/// Each sweep uses only the previous sweep's vector
pub fn jacobi(
    A: &Matrix3<f64>,
    b: &Vector3<f64>,
    x0: Option<Vector3<f64>>,
    config: &IterativeConfig,
) -> Result<IterativeResult, LinearSystemError> {
    check_diagonal(A)?;
    let mut x = x0.unwrap_or_else(Vector3::zeros);
    let mut change = f64::INFINITY;
    for iteration in 1..=config.max_iterations {
        let mut x_new = Vector3::zeros();
        for i in 0..3 {
            let sigma: f64 = (0..3).filter(|&j| j != i).map(|j| A[(i, j)] * x[j]).sum();
            x_new[i] = (b[i] - sigma) / A[(i, i)];
        }
        change = (x_new - x).amax();
        x = x_new;
        debug!("jacobi sweep {}: x = {:?}, change = {:.3e}", iteration, x.as_slice(), change);
        if change < config.tolerance {
            return Ok(IterativeResult {
                solution: x,
                iterations: iteration,
                last_change: change,
            });
        }
    }
    warn!("jacobi: no convergence after {} sweeps", config.max_iterations);
    Err(LinearSystemError::NotConverged {
        iterations: config.max_iterations,
        residual: change,
    })
}

/// Each sweep uses the components already updated in the same sweep
pub fn gauss_seidel(
    A: &Matrix3<f64>,
    b: &Vector3<f64>,
    x0: Option<Vector3<f64>>,
    config: &IterativeConfig,
) -> Result<IterativeResult, LinearSystemError> {
    check_diagonal(A)?;
    let mut x = x0.unwrap_or_else(Vector3::zeros);
    let mut change = f64::INFINITY;
    for iteration in 1..=config.max_iterations {
        change = 0.0;
        for i in 0..3 {
            let sigma: f64 = (0..3).filter(|&j| j != i).map(|j| A[(i, j)] * x[j]).sum();
            let updated = (b[i] - sigma) / A[(i, i)];
            change = change.max((updated - x[i]).abs());
            x[i] = updated;
        }
        debug!(
            "gauss_seidel sweep {}: x = {:?}, change = {:.3e}",
            iteration,
            x.as_slice(),
            change
        );
        if change < config.tolerance {
            return Ok(IterativeResult {
                solution: x,
                iterations: iteration,
                last_change: change,
            });
        }
    }
    warn!("gauss_seidel: no convergence after {} sweeps", config.max_iterations);
    Err(LinearSystemError::NotConverged {
        iterations: config.max_iterations,
        residual: change,
    })
}
