use nalgebra::{Matrix3, Vector3};

/// determinants below this magnitude make a 3×3 system "effectively singular"
pub const SINGULAR_EPS: f64 = 1e-12;

pub fn determinant(A: &Matrix3<f64>) -> f64 {
    A.determinant()
}

/// |a_ii| > Σ_{j≠i} |a_ij| for every row; Jacobi and Gauss-Seidel converge on such matrices
pub fn is_strictly_diagonally_dominant(A: &Matrix3<f64>) -> bool {
    (0..3).all(|i| {
        let off_diagonal: f64 = (0..3).filter(|&j| j != i).map(|j| A[(i, j)].abs()).sum();
        A[(i, i)].abs() > off_diagonal
    })
}

/// max-norm of A·x - b
pub fn residual_norm(A: &Matrix3<f64>, x: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    (A * x - b).amax()
}

/// ratio of the extreme singular values
pub fn condition_number(A: &Matrix3<f64>) -> f64 {
    let singular_values = A.singular_values();
    singular_values.max() / singular_values.min()
}
