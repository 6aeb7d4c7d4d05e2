//! 3×3 linear systems: direct and iterative solvers plus diagnostics
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// Gaussian elimination, Gauss-Jordan and Montante (Bareiss) elimination
pub mod direct_solvers;
/// Jacobi and Gauss-Seidel iterations
pub mod iterative_solvers_cpu;
/// one entry point over all methods
pub mod linear_sys_api;
/// diagnostics for linear systems and matrices: if it is singular,
/// diagonally dominant or poorly conditioned
pub mod linear_sys_diagnostics;
