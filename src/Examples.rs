//! examples of usage of RustedNumDrill
/// numeric core, problem generation and answer checking
pub mod drill_examples;
