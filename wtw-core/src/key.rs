//! The seven-field canonical key and its composite fingerprint.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tokens::CategoricalFields;

/// Separator between fields in a fingerprint.
pub const FINGERPRINT_SEPARATOR: &str = ",";

/// Normalized tokens in fingerprint order.
///
/// Built by `Observation::normalize`; tokens are used verbatim, with no
/// case-folding or trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalKey {
    pub gender: String,
    pub temperature: String,
    pub conditions: String,
    pub wind: String,
    pub time: String,
    pub intensity: String,
    pub feel: String,
}

/// Name used for the gender query parameter by the advice service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStyle {
    /// `g=m`
    #[default]
    Short,
    /// `gender=m`
    Long,
}

impl CanonicalKey {
    /// Fields in fixed order: gender, temperature, conditions, wind, time, intensity, feel.
    pub fn fields(&self) -> [&str; 7] {
        [
            self.gender.as_str(),
            self.temperature.as_str(),
            self.conditions.as_str(),
            self.wind.as_str(),
            self.time.as_str(),
            self.intensity.as_str(),
            self.feel.as_str(),
        ]
    }

    /// Comma-joined composite key, e.g. `m,60,c,nw,day,n,ib`.
    pub fn fingerprint(&self) -> String {
        self.fields().join(FINGERPRINT_SEPARATOR)
    }

    /// Query parameters for the advice service, in fingerprint order.
    pub fn query_pairs(&self, style: QueryStyle) -> [(&'static str, &str); 7] {
        let gender = match style {
            QueryStyle::Short => "g",
            QueryStyle::Long => "gender",
        };
        [
            (gender, self.gender.as_str()),
            ("temp", self.temperature.as_str()),
            ("conditions", self.conditions.as_str()),
            ("wind", self.wind.as_str()),
            ("time", self.time.as_str()),
            ("intensity", self.intensity.as_str()),
            ("feel", self.feel.as_str()),
        ]
    }

    /// The six non-numeric fields, for validation.
    pub fn categorical(&self) -> CategoricalFields<'_> {
        CategoricalFields {
            gender: &self.gender,
            conditions: &self.conditions,
            wind: &self.wind,
            time: &self.time,
            intensity: &self.intensity,
            feel: &self.feel,
        }
    }

    /// The equivalent command line, used by verbose output.
    pub fn command_line(&self) -> String {
        format!(
            "wtw -gender {} -temp {} -conditions {} -wind {} -time {} -intensity {} -feel {}",
            self.gender,
            self.temperature,
            self.conditions,
            self.wind,
            self.time,
            self.intensity,
            self.feel
        )
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fingerprint())
    }
}
