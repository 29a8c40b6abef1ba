use log::debug;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::error::{Degree, RootsError};

use super::{complex::{self, Complex, ComplexPair}, is_zero::IsZero};

/// Coefficients of `ax² + bx + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(default)]
pub struct Quadratic {
    /// Quadratic term
    pub a: f64,
    /// Linear term
    pub b: f64,
    /// Constant term
    pub c: f64,
}

impl Default for Quadratic {
    fn default() -> Self {
        Quadratic { a: 1., b: 2., c: 0. }
    }
}

impl Quadratic {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Quadratic { a, b, c }
    }

    pub fn discriminant(&self) -> f64 {
        let Quadratic { a, b, c } = *self;
        b * b - 4. * a * c
    }

    pub fn roots(&self) -> Result<ComplexPair<f64>, RootsError> {
        quad_roots(self.a, self.b, self.c)
    }

    pub fn eval(&self, x: Complex<f64>) -> Complex<f64> {
        x * x * self.a + x * self.b + self.c
    }
}

/// Both roots of `ax² + bx + c = 0`, as `((-b + √D) / 2a, (-b - √D) / 2a)` with `D = b² - 4ac`.
///
/// `√D` is taken over the complex numbers, so a negative discriminant yields a conjugate pair rather than an error. Real
/// roots come back with a zero imaginary part, and a zero discriminant yields the same root twice.
///
/// Fails with [`RootsError::InvalidCoefficient`] when `a` is zero.
pub fn quad_roots(a: f64, b: f64, c: f64) -> Result<ComplexPair<f64>, RootsError> {
    if a.is_zero() {
        return Err(RootsError::InvalidCoefficient(Degree::Quadratic));
    }
    let d = Quadratic::new(a, b, c).discriminant();
    let sqrt_d = complex::sqrt(d);
    let two_a = 2. * a;
    let r1 = (Complex::re(-b) + sqrt_d) / two_a;
    let r2 = (Complex::re(-b) - sqrt_d) / two_a;
    debug!("quad_roots({}, {}, {}): d = {}, roots = ({}, {})", a, b, c, d, r1, r2);
    Ok((r1, r2))
}
