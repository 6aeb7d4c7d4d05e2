//! Randomised problem rounds for the four method families.
//!
//! Every problem carries the data shown to the user and the reference answer,
//! computed with the assigned method. Degenerate draws (singular matrices,
//! equations without a bracketed root, starts the method cannot finish from)
//! are re-drawn a bounded number of times and then replaced by a fixed
//! well-posed fallback, see `retry`.
pub mod generator;
mod generator_tests;
pub mod integration_task;
pub mod interpolation_task;
pub mod linear_system_task;
pub mod problem_instance;
pub mod retry;
pub mod root_finding_task;
