use std::{fmt::{Display, Formatter, self}, ops::{Add, Div, Mul, Neg, Sub}};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use super::is_zero::IsZero;

#[derive(
    Clone, Copy, Debug, Default, PartialEq,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Neg,
    Serialize, Deserialize, Tsify,
)]
pub struct Complex<D> {
    pub re: D,
    pub im: D,
}

/// Ordered pair of roots: the `+√D` root first, the `-√D` root second.
pub type ComplexPair<D> = (Complex<D>, Complex<D>);

impl Complex<f64> {
    pub fn re(re: f64) -> Self {
        Self { re, im: 0. }
    }

    pub fn norm(&self) -> f64 {
        self.norm2().sqrt()
    }

    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }
}

impl<
    D
    : Clone
    + Neg<Output = D>
> Complex<D> {
    pub fn conj(&self) -> Self {
        Self {
            re: self.re.clone(),
            im: -self.im.clone(),
        }
    }
}

impl<
    D
    : Clone
    + Add<Output = D>
    + Mul<Output = D>
> Complex<D> {
    pub fn norm2(&self) -> D {
        let Complex { re, im } = self.clone();
        re.clone() * re + im.clone() * im
    }
}

/// Principal square root of a real number.
///
/// Negative inputs land on the positive imaginary axis; everything else stays real. `-0.` maps to `+0.`.
pub fn sqrt(x: f64) -> Complex<f64> {
    let r = x.abs().sqrt();
    if x.lt_zero() {
        Complex { re: 0., im: r }
    } else {
        Complex::re(r)
    }
}

impl<
    D
    : Clone
    + Add<Output = D>
> Add<D> for Complex<D> {
    type Output = Self;
    fn add(self, rhs: D) -> Self::Output {
        Self {
            re: self.re + rhs,
            im: self.im,
        }
    }
}

impl<
    D
    : Clone
    + Sub<Output = D>
> Sub<D> for Complex<D> {
    type Output = Self;
    fn sub(self, rhs: D) -> Self::Output {
        Self {
            re: self.re - rhs,
            im: self.im,
        }
    }
}

impl<
    D
    : Clone
    + Mul<Output = D>
> Mul<D> for Complex<D> {
    type Output = Self;
    fn mul(self, rhs: D) -> Self::Output {
        Self {
            re: self.re * rhs.clone(),
            im: self.im * rhs,
        }
    }
}

impl<
    D
    : Clone
    + Div<Output = D>
> Div<D> for Complex<D> {
    type Output = Self;
    fn div(self, rhs: D) -> Self::Output {
        Self {
            re: self.re / rhs.clone(),
            im: self.im / rhs,
        }
    }
}

impl<
    D
    : Clone
    + Add<Output = D>
    + Sub<Output = D>
    + Mul<Output = D>
> Mul for Complex<D>
{
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        let Complex { re: a, im: b } = self;
        let Complex { re: c, im: d } = rhs;
        Self {
            re: a.clone() * c.clone() - b.clone() * d.clone(),
            im: a * d + b * c,
        }
    }
}

impl Display for Complex<f64> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        let (sign, im) = if self.im.is_sign_negative() { ('-', -self.im) } else { ('+', self.im) };
        write!(f, "{:.*} {} {:.*}i", precision, self.re, sign, precision, im)
    }
}

impl<D: AbsDiffEq<Epsilon = f64>> AbsDiffEq for Complex<D> {
    type Epsilon = D::Epsilon;
    fn default_epsilon() -> Self::Epsilon {
        D::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.re.abs_diff_eq(&other.re, epsilon) && self.im.abs_diff_eq(&other.im, epsilon)
    }
}

impl<D: RelativeEq<Epsilon = f64>> RelativeEq for Complex<D>
{
    fn default_max_relative() -> Self::Epsilon {
        D::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.re.relative_eq(&other.re, epsilon, max_relative) && self.im.relative_eq(&other.im, epsilon, max_relative)
    }
}
