/// Adaptive tolerance: tol = |reference|·relative + absolute.
/// A zero reference leaves only the absolute floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceRule {
    pub relative: f64,
    pub absolute: f64,
}

pub const INTERPOLATION_TOLERANCE: ToleranceRule = ToleranceRule::new(0.005, 0.01);
pub const LINEAR_SYSTEM_TOLERANCE: ToleranceRule = ToleranceRule::new(0.01, 0.01);
pub const ROOT_FINDING_TOLERANCE: ToleranceRule = ToleranceRule::new(0.01, 0.01);
pub const INTEGRATION_TOLERANCE: ToleranceRule = ToleranceRule::new(0.02, 0.01);

impl ToleranceRule {
    pub const fn new(relative: f64, absolute: f64) -> Self {
        Self { relative, absolute }
    }

    pub fn tolerance_for(&self, reference: f64) -> f64 {
        if reference == 0.0 {
            self.absolute
        } else {
            reference.abs() * self.relative + self.absolute
        }
    }

    pub fn accepts(&self, submitted: f64, reference: f64) -> bool {
        (submitted - reference).abs() <= self.tolerance_for(reference)
    }
}
