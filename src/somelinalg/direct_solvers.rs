//! Direct solvers for 3×3 systems A·x = b: Gaussian elimination with partial
//! pivoting, Gauss-Jordan reduction, and Montante (Bareiss) fraction-free
//! elimination. All three work on the augmented matrix [A | b].
use crate::somelinalg::linear_sys_diagnostics::SINGULAR_EPS;
use log::debug;
use nalgebra::{Matrix3, Matrix3x4, Vector3};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LinearSystemError {
    Singular(f64),
    ZeroPivot(usize),
    NotConverged { iterations: usize, residual: f64 },
}

impl fmt::Display for LinearSystemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearSystemError::Singular(det) => {
                write!(f, "Matrix is singular, determinant = {:.3e}", det)
            }
            LinearSystemError::ZeroPivot(row) => write!(f, "Zero pivot in row {}", row),
            LinearSystemError::NotConverged {
                iterations,
                residual,
            } => write!(
                f,
                "No convergence after {} iterations, last change = {:.3e}",
                iterations, residual
            ),
        }
    }
}

impl std::error::Error for LinearSystemError {}

fn augmented(A: &Matrix3<f64>, b: &Vector3<f64>) -> Result<Matrix3x4<f64>, LinearSystemError> {
    let det = A.determinant();
    if det.abs() < SINGULAR_EPS {
        return Err(LinearSystemError::Singular(det));
    }
    Ok(Matrix3x4::from_columns(&[
        A.column(0).into_owned(),
        A.column(1).into_owned(),
        A.column(2).into_owned(),
        *b,
    ]))
}

/// swap the row with the largest |entry| in column k (rows k..3) into row k
fn partial_pivot(M: &mut Matrix3x4<f64>, k: usize) -> Result<(), LinearSystemError> {
    let (offset, pivot) = M
        .column(k)
        .rows(k, 3 - k)
        .iter()
        .enumerate()
        .fold((0, 0.0f64), |best, (i, v)| if v.abs() > best.1 { (i, v.abs()) } else { best });
    if pivot < SINGULAR_EPS {
        return Err(LinearSystemError::ZeroPivot(k));
    }
    if offset != 0 {
        M.swap_rows(k, k + offset);
    }
    Ok(())
}

/// Forward elimination with partial pivoting, then back substitution
pub fn gauss_elimination(
    A: &Matrix3<f64>,
    b: &Vector3<f64>,
) -> Result<Vector3<f64>, LinearSystemError> {
    let mut M = augmented(A, b)?;
    for k in 0..3 {
        partial_pivot(&mut M, k)?;
        for i in k + 1..3 {
            let factor = M[(i, k)] / M[(k, k)];
            for j in k..4 {
                M[(i, j)] -= factor * M[(k, j)];
            }
        }
    }
    debug!("gauss_elimination: upper triangular form {}", M);

    let mut x = Vector3::zeros();
    for i in (0..3).rev() {
        let known: f64 = (i + 1..3).map(|j| M[(i, j)] * x[j]).sum();
        x[i] = (M[(i, 3)] - known) / M[(i, i)];
    }
    Ok(x)
}

/// Reduces [A | b] to [I | x]
pub fn gauss_jordan(A: &Matrix3<f64>, b: &Vector3<f64>) -> Result<Vector3<f64>, LinearSystemError> {
    let mut M = augmented(A, b)?;
    for k in 0..3 {
        partial_pivot(&mut M, k)?;
        let pivot = M[(k, k)];
        for j in k..4 {
            M[(k, j)] /= pivot;
        }
        for i in (0..3).filter(|&i| i != k) {
            let factor = M[(i, k)];
            for j in k..4 {
                M[(i, j)] -= factor * M[(k, j)];
            }
        }
    }
    debug!("gauss_jordan: reduced form {}", M);
    Ok(Vector3::new(M[(0, 3)], M[(1, 3)], M[(2, 3)]))
}

/// Montante (Bareiss) elimination: every step is
/// m_ij ← (m_kk·m_ij − m_ik·m_kj) / previous pivot, which stays integral for
/// integer input. Division by the common pivot happens only at the end, when the
/// diagonal holds ±det(A).
pub fn montante(A: &Matrix3<f64>, b: &Vector3<f64>) -> Result<Vector3<f64>, LinearSystemError> {
    let mut M = augmented(A, b)?;
    let mut previous_pivot = 1.0;
    for k in 0..3 {
        if M[(k, k)] == 0.0 {
            match (k + 1..3).find(|&i| M[(i, k)] != 0.0) {
                Some(i) => M.swap_rows(k, i),
                None => return Err(LinearSystemError::ZeroPivot(k)),
            }
        }
        let pivot = M[(k, k)];
        for i in (0..3).filter(|&i| i != k) {
            let m_ik = M[(i, k)];
            for j in (0..4).filter(|&j| j != k) {
                M[(i, j)] = (pivot * M[(i, j)] - m_ik * M[(k, j)]) / previous_pivot;
            }
            M[(i, k)] = 0.0;
        }
        previous_pivot = pivot;
    }
    debug!("montante: final form {}, common pivot {}", M, previous_pivot);
    Ok(Vector3::new(
        M[(0, 3)] / previous_pivot,
        M[(1, 3)] / previous_pivot,
        M[(2, 3)] / previous_pivot,
    ))
}
