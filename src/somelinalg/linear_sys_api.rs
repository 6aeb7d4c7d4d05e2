use crate::somelinalg::direct_solvers::{LinearSystemError, gauss_elimination, gauss_jordan, montante};
use crate::somelinalg::iterative_solvers_cpu::{IterativeConfig, gauss_seidel, jacobi};
use nalgebra::{Matrix3, Vector3};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum LinearMethod {
    #[strum(to_string = "Gaussian elimination")]
    GaussElimination,
    #[strum(to_string = "Gauss-Jordan")]
    GaussJordan,
    #[strum(to_string = "Montante")]
    Montante,
    #[strum(to_string = "Jacobi")]
    Jacobi,
    #[strum(to_string = "Gauss-Seidel")]
    GaussSeidel,
}

impl LinearMethod {
    pub fn is_iterative(&self) -> bool {
        matches!(self, LinearMethod::Jacobi | LinearMethod::GaussSeidel)
    }
}

/// Solve A·x = b with the chosen method. `config` is only read by the iterative
/// methods, which start from the zero vector.
pub fn solve_linear_system(
    method: LinearMethod,
    A: &Matrix3<f64>,
    b: &Vector3<f64>,
    config: &IterativeConfig,
) -> Result<Vector3<f64>, LinearSystemError> {
    match method {
        LinearMethod::GaussElimination => gauss_elimination(A, b),
        LinearMethod::GaussJordan => gauss_jordan(A, b),
        LinearMethod::Montante => montante(A, b),
        LinearMethod::Jacobi => jacobi(A, b, None, config).map(|r| r.solution),
        LinearMethod::GaussSeidel => gauss_seidel(A, b, None, config).map(|r| r.solution),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_methods_agree_on_dominant_system() {
        let A = Matrix3::new(11.0, 4.0, -3.0, -2.0, 9.0, 5.0, 1.0, -3.0, 6.0);
        let x = Vector3::new(-4.0, 7.0, 2.0);
        let b = A * x;
        let config = IterativeConfig::default();
        for method in LinearMethod::iter() {
            let solution = solve_linear_system(method, &A, &b, &config).unwrap();
            assert_relative_eq!(solution, x, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_method_names() {
        assert!(LinearMethod::Jacobi.is_iterative());
        assert!(!LinearMethod::Montante.is_iterative());
        assert_eq!(LinearMethod::GaussSeidel.to_string(), "Gauss-Seidel");
    }
}
