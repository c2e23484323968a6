//! Closed token sets for the categorical fields, and the input validator.
//!
//! Only the remote path validates. The table path lets an unknown token
//! fall through to a table miss.

use crate::error::{Result, WtwError};

/// Marker accepted for `time`, resolved from the clock before resolution.
pub const CURRENT_TIME: &str = "current";

pub const GENDERS: &[&str] = &["m", "f"];
/// c (clear), pc (partly cloudy), o (overcast), r (heavy rain), lr (light rain), s (snowing)
pub const CONDITIONS: &[&str] = &["c", "pc", "o", "r", "lr", "s"];
/// nw (no wind), lw (light wind), hw (heavy wind)
pub const WINDS: &[&str] = &["nw", "lw", "hw"];
pub const TIMES: &[&str] = &["dawn", "day", "dusk", "night"];
pub const TIMES_OR_CURRENT: &[&str] = &["dawn", "day", "dusk", "night", CURRENT_TIME];
/// n (easy run), lr (long run), h (hard workout), r (race)
pub const INTENSITIES: &[&str] = &["n", "lr", "h", "r"];
/// c (cool), ib (in between), w (warm)
pub const FEELS: &[&str] = &["c", "ib", "w"];

/// The six non-numeric fields as supplied by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoricalFields<'a> {
    pub gender: &'a str,
    pub conditions: &'a str,
    pub wind: &'a str,
    pub time: &'a str,
    pub intensity: &'a str,
    pub feel: &'a str,
}

/// Check each field against its enumeration, in declaration order.
///
/// Stops at the first bad field; errors are not aggregated.
pub fn validate(fields: &CategoricalFields<'_>) -> Result<()> {
    check("gender", fields.gender, GENDERS)?;
    check("conditions", fields.conditions, CONDITIONS)?;
    check("wind", fields.wind, WINDS)?;
    check("time", fields.time, TIMES_OR_CURRENT)?;
    check("intensity", fields.intensity, INTENSITIES)?;
    check("feel", fields.feel, FEELS)?;
    Ok(())
}

fn check(field: &'static str, value: &str, accepted: &'static [&'static str]) -> Result<()> {
    if accepted.contains(&value) {
        Ok(())
    } else {
        Err(WtwError::Validation {
            field,
            value: value.to_string(),
            accepted,
        })
    }
}
