use crate::Utils::engine_settings::EngineSettings;
use crate::problems::problem_instance::{Problem, ProblemInstance, ReferenceAnswer};
use crate::verifier::input_parser::parse_answer;
use crate::verifier::tolerance::ToleranceRule;
use crate::verifier::verdict::{SubVerdict, Verdict};
use log::debug;

/// Checks one input against one reference value
pub fn verify_answer(input: &str, reference: f64, rule: ToleranceRule) -> SubVerdict {
    verify_against_set(input, &[reference], rule, "answer")
}

/// Accepts the input when it is within tolerance of at least one member of `references`.
/// The entry reports the nearest member and its tolerance.
pub fn verify_against_set(
    input: &str,
    references: &[f64],
    rule: ToleranceRule,
    label: &str,
) -> SubVerdict {
    let submitted = parse_answer(input);
    let (reference, correct) = match &submitted {
        Ok(value) => {
            let nearest = references
                .iter()
                .copied()
                .min_by(|a, b| (a - value).abs().total_cmp(&(b - value).abs()))
                .unwrap_or(f64::NAN);
            let correct = references.iter().any(|r| rule.accepts(*value, *r));
            (nearest, correct)
        }
        Err(e) => {
            debug!("{}: {}", label, e);
            (references.first().copied().unwrap_or(f64::NAN), false)
        }
    };
    SubVerdict {
        label: label.to_string(),
        submitted,
        reference,
        tolerance: rule.tolerance_for(reference),
        correct,
    }
}

/// One input per answer slot, in the order of `answer_labels()`.
/// Missing inputs count as empty answers; extra inputs are ignored.
pub fn verify(problem: &ProblemInstance, inputs: &[&str]) -> Verdict {
    let rule = problem.family().default_tolerance();
    verify_with_rule(problem, inputs, rule)
}

/// Same as `verify`, with the tolerance rule taken from `settings`
pub fn verify_with_settings(
    problem: &ProblemInstance,
    inputs: &[&str],
    settings: &EngineSettings,
) -> Verdict {
    let rule = settings.tolerance_for_family(problem.family());
    verify_with_rule(problem, inputs, rule)
}

pub fn verify_with_rule(problem: &ProblemInstance, inputs: &[&str], rule: ToleranceRule) -> Verdict {
    let labels = problem.answer_labels();
    let input = |i: usize| inputs.get(i).copied().unwrap_or("");
    let entries = match problem.reference_answer() {
        ReferenceAnswer::Scalar(v) => vec![verify_against_set(input(0), &[v], rule, &labels[0])],
        ReferenceAnswer::PerTarget(pairs) => pairs
            .iter()
            .enumerate()
            .map(|(i, (_, y))| verify_against_set(input(i), &[*y], rule, &labels[i]))
            .collect(),
        ReferenceAnswer::Triple(values) => values
            .iter()
            .enumerate()
            .map(|(i, v)| verify_against_set(input(i), &[*v], rule, &labels[i]))
            .collect(),
        ReferenceAnswer::RootSet(roots) => {
            vec![verify_against_set(input(0), &roots, rule, &labels[0])]
        }
    };
    Verdict {
        method: problem.method(),
        entries,
    }
}
