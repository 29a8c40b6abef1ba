use std::fmt;

/// Degree of the equation whose leading coefficient was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degree {
    Linear,
    Quadratic,
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degree::Linear => write!(f, "linear"),
            Degree::Quadratic => write!(f, "quadratic"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RootsError {
    #[error("The {0} coefficient is zero. This is not a {0} equation.")]
    InvalidCoefficient(Degree),
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LogLevelError {
    #[error("invalid log level: {0}")]
    Unrecognized(String),
}
