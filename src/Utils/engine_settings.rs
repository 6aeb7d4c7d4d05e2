//! Tunables of the engine, readable from a task document:
//! ```text
//! tolerance
//! interpolation: 0.005, 0.01
//! integration: 0.02, 0.01
//! root_finding
//! tolerance: 1e-10
//! max_iterations: 100
//! linear_iterative
//! max_iterations: 200
//! logging
//! loglevel: warn
//! log_to_file: false
//! ```
//! Sections and keys that are not listed keep their defaults; unknown ones are ignored.
use crate::Utils::task_parser::{SectionMap, Value, parse_document_as};
use crate::numerical::scalar_roots::RootFindingConfig;
use crate::problems::problem_instance::ProblemFamily;
use crate::somelinalg::iterative_solvers_cpu::IterativeConfig;
use crate::verifier::tolerance::ToleranceRule;
use log::{info, warn};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    Parse(String),
    InvalidValue { key: String, value: String },
    Io(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SettingsError::Parse(msg) => write!(f, "Cannot parse settings: {}", msg),
            SettingsError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {}", key, value)
            }
            SettingsError::Io(msg) => write!(f, "Cannot read settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub interpolation_tolerance: ToleranceRule,
    pub linear_system_tolerance: ToleranceRule,
    pub root_finding_tolerance: ToleranceRule,
    pub integration_tolerance: ToleranceRule,
    pub root_finding: RootFindingConfig,
    pub iterative: IterativeConfig,
    pub loglevel: String,
    pub log_to_file: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            interpolation_tolerance: ProblemFamily::Interpolation.default_tolerance(),
            linear_system_tolerance: ProblemFamily::LinearSystem.default_tolerance(),
            root_finding_tolerance: ProblemFamily::RootFinding.default_tolerance(),
            integration_tolerance: ProblemFamily::Integration.default_tolerance(),
            root_finding: RootFindingConfig::default(),
            iterative: IterativeConfig::default(),
            loglevel: "info".to_string(),
            log_to_file: false,
        }
    }
}

fn invalid(key: &str, values: &[Value]) -> SettingsError {
    let value = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
    SettingsError::InvalidValue {
        key: key.to_string(),
        value,
    }
}

/// Values of `key`, or None when the key is absent
fn values<'a>(section: &'a SectionMap, key: &str) -> Option<&'a Vec<Value>> {
    section.get(key).and_then(|v| v.as_ref())
}

fn read_positive(section: &SectionMap, key: &str) -> Result<Option<f64>, SettingsError> {
    match values(section, key) {
        None => Ok(None),
        Some(vals) => match vals.as_slice() {
            [v] => match v.as_number() {
                Some(x) if x > 0.0 && x.is_finite() => Ok(Some(x)),
                _ => Err(invalid(key, vals)),
            },
            _ => Err(invalid(key, vals)),
        },
    }
}

fn read_count(section: &SectionMap, key: &str) -> Result<Option<usize>, SettingsError> {
    match values(section, key) {
        None => Ok(None),
        Some(vals) => match vals.as_slice() {
            [Value::Integer(n)] if *n > 0 => Ok(Some(*n as usize)),
            _ => Err(invalid(key, vals)),
        },
    }
}

fn read_bool(section: &SectionMap, key: &str) -> Result<Option<bool>, SettingsError> {
    match values(section, key) {
        None => Ok(None),
        Some(vals) => match vals.as_slice() {
            [Value::Boolean(b)] => Ok(Some(*b)),
            _ => Err(invalid(key, vals)),
        },
    }
}

/// "relative, absolute", both non-negative
fn read_rule(section: &SectionMap, key: &str) -> Result<Option<ToleranceRule>, SettingsError> {
    match values(section, key) {
        None => Ok(None),
        Some(vals) => {
            let numbers: Vec<Option<f64>> = vals.iter().map(|v| v.as_number()).collect();
            match numbers.as_slice() {
                [Some(rel), Some(abs)] if *rel >= 0.0 && *abs >= 0.0 => {
                    Ok(Some(ToleranceRule::new(*rel, *abs)))
                }
                _ => Err(invalid(key, vals)),
            }
        }
    }
}

impl EngineSettings {
    pub fn tolerance_for_family(&self, family: ProblemFamily) -> ToleranceRule {
        match family {
            ProblemFamily::Interpolation => self.interpolation_tolerance,
            ProblemFamily::LinearSystem => self.linear_system_tolerance,
            ProblemFamily::RootFinding => self.root_finding_tolerance,
            ProblemFamily::Integration => self.integration_tolerance,
        }
    }

    pub fn set_tolerance_for_family(&mut self, family: ProblemFamily, rule: ToleranceRule) {
        match family {
            ProblemFamily::Interpolation => self.interpolation_tolerance = rule,
            ProblemFamily::LinearSystem => self.linear_system_tolerance = rule,
            ProblemFamily::RootFinding => self.root_finding_tolerance = rule,
            ProblemFamily::Integration => self.integration_tolerance = rule,
        }
    }

    pub fn from_document(document: &str) -> Result<Self, SettingsError> {
        let parsed = parse_document_as(document, None).map_err(SettingsError::Parse)?;
        let mut settings = Self::default();

        for title in parsed.keys() {
            if !["tolerance", "root_finding", "linear_iterative", "logging"].contains(&title.as_str()) {
                warn!("settings: unknown section {} ignored", title);
            }
        }

        if let Some(section) = parsed.get("tolerance") {
            let families = [
                ("interpolation", ProblemFamily::Interpolation),
                ("linear_system", ProblemFamily::LinearSystem),
                ("root_finding", ProblemFamily::RootFinding),
                ("integration", ProblemFamily::Integration),
            ];
            for (key, family) in families {
                if let Some(rule) = read_rule(section, key)? {
                    settings.set_tolerance_for_family(family, rule);
                }
            }
        }
        if let Some(section) = parsed.get("root_finding") {
            if let Some(tol) = read_positive(section, "tolerance")? {
                settings.root_finding.tolerance = tol;
            }
            if let Some(n) = read_count(section, "max_iterations")? {
                settings.root_finding.max_iterations = n;
            }
            if let Some(verbose) = read_bool(section, "verbose")? {
                settings.root_finding.verbose = verbose;
            }
        }
        if let Some(section) = parsed.get("linear_iterative") {
            if let Some(tol) = read_positive(section, "tolerance")? {
                settings.iterative.tolerance = tol;
            }
            if let Some(n) = read_count(section, "max_iterations")? {
                settings.iterative.max_iterations = n;
            }
        }
        if let Some(section) = parsed.get("logging") {
            if let Some(vals) = values(section, "loglevel") {
                match vals.as_slice() {
                    [Value::String(level)] => settings.loglevel = level.clone(),
                    _ => return Err(invalid("loglevel", vals)),
                }
            }
            if let Some(to_file) = read_bool(section, "log_to_file")? {
                settings.log_to_file = to_file;
            }
        }
        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let document = fs::read_to_string(path)
            .map_err(|e| SettingsError::Io(format!("{}: {}", path.display(), e)))?;
        let settings = Self::from_document(&document)?;
        info!("settings loaded from {}", path.display());
        Ok(settings)
    }
}
