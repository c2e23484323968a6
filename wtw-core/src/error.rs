//! Error taxonomy shared by normalization, enrichment and both resolvers.

use thiserror::Error;

/// Every way a single `wtw` invocation can fail.
///
/// There is no partial result: the first error aborts the invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WtwError {
    /// A categorical field holds a value outside its enumeration.
    #[error("invalid {field} {value:?}: expected one of {}", accepted.join(", "))]
    Validation {
        field: &'static str,
        value: String,
        accepted: &'static [&'static str],
    },

    #[error("unknown condition code {0}")]
    UnknownConditionCode(i32),

    #[error("conditions not available")]
    ConditionsUnavailable,

    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    /// The clock produced an hour with no day-part.
    #[error("cannot resolve time of day for hour {0}")]
    UnresolvedTime(u32),

    #[error("error loading current conditions: {0}")]
    WeatherFetch(String),

    #[error("malformed weather payload: {0}")]
    Decode(String),

    #[error("no answer for {0}")]
    NotFound(String),

    #[error("advice service error: {0}")]
    Remote(String),

    #[error("no answer")]
    NoAnswer,

    #[error("error loading answers: {0}")]
    TableLoad(String),
}

pub type Result<T> = std::result::Result<T, WtwError>;
