use log::debug;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::error::{Degree, RootsError};

use super::is_zero::IsZero;

/// Coefficients of `ax + b = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(default)]
pub struct Linear {
    /// Linear term
    pub a: f64,
    /// Constant term
    pub b: f64,
}

impl Default for Linear {
    fn default() -> Self {
        Linear { a: 1., b: 0. }
    }
}

impl Linear {
    pub fn new(a: f64, b: f64) -> Self {
        Linear { a, b }
    }

    pub fn root(&self) -> Result<f64, RootsError> {
        linear_roots(self.a, self.b)
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.a * x + self.b
    }
}

/// Root of `ax + b = 0`, i.e. `-b / a`.
///
/// Fails with [`RootsError::InvalidCoefficient`] when `a` is zero.
pub fn linear_roots(a: f64, b: f64) -> Result<f64, RootsError> {
    if a.is_zero() {
        return Err(RootsError::InvalidCoefficient(Degree::Linear));
    }
    let root = -b / a;
    debug!("linear_roots({}, {}) = {}", a, b, root);
    Ok(root)
}
