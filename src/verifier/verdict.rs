use crate::problems::problem_instance::Method;
use crate::verifier::input_parser::ParseError;
use tabled::{builder::Builder, settings::Style};

/// Outcome for one answer slot
#[derive(Debug, Clone, PartialEq)]
pub struct SubVerdict {
    pub label: String,
    pub submitted: Result<f64, ParseError>,
    /// value compared against; for a root set the root nearest to the submission
    pub reference: f64,
    pub tolerance: f64,
    pub correct: bool,
}

impl SubVerdict {
    pub fn is_parse_error(&self) -> bool {
        self.submitted.is_err()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub method: Method,
    pub entries: Vec<SubVerdict>,
}

impl Verdict {
    pub fn all_correct(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|e| e.correct)
    }

    pub fn correct_count(&self) -> usize {
        self.entries.iter().filter(|e| e.correct).count()
    }

    pub fn table(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(["answer", "submitted", "reference", "tolerance", "result"]);
        for entry in &self.entries {
            let submitted = match &entry.submitted {
                Ok(v) => v.to_string(),
                Err(e) => e.to_string(),
            };
            builder.push_record([
                entry.label.clone(),
                submitted,
                format!("{:.6}", entry.reference),
                format!("±{:.4}", entry.tolerance),
                if entry.correct { "correct" } else { "incorrect" }.to_string(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.to_string()
    }
}
