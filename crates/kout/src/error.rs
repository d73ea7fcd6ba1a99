pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("need at least 3 points, got {got}")]
    TooFewPoints { got: usize },

    #[error("outside-point budget must be non-negative, got {0}")]
    NegativeBudget(i64),

    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("points {a} and {b} coincide")]
    Duplicate { a: usize, b: usize },

    #[error("points {a}, {b} and {c} are collinear")]
    NotGeneralPosition { a: usize, b: usize, c: usize },

    #[error("enumeration exceeded the limit of {limit} polygons")]
    NodeLimit { limit: usize },

    #[error("could not draw a general-position point set after {attempts} attempts")]
    SamplingFailed { attempts: usize },
}
