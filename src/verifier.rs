//! Grades free-form answers against a problem's reference answer.
//!
//! Inputs are parsed leniently (decimal comma, scientific notation, products
//! like `2×3`), compared with an adaptive tolerance per family, and reported
//! per answer slot. A parse failure is an incorrect entry, never an error.
pub mod answer_check;
pub mod input_parser;
pub mod tolerance;
pub mod verdict;
