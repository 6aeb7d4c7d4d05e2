use std::fmt;

/// Ground-truth polynomial used to sample interpolation points.
/// Coefficients are stored highest degree first, the way they are drawn:
/// `[a, b, c]` is `a*x^2 + b*x + c`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        assert!(
            !coefficients.is_empty(),
            "Polynomial needs at least one coefficient."
        );
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Horner evaluation
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |acc, &c| acc * x + c)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let degree = self.degree();
        let mut first = true;
        for (i, &c) in self.coefficients.iter().enumerate() {
            let power = degree - i;
            if c == 0.0 && !(first && power == 0) {
                continue;
            }
            let sign = if c < 0.0 { "-" } else { "+" };
            if first {
                if c < 0.0 {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {} ", sign)?;
            }
            match power {
                0 => write!(f, "{:.2}", c.abs())?,
                1 => write!(f, "{:.2}x", c.abs())?,
                _ => write!(f, "{:.2}x^{}", c.abs(), power)?,
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
