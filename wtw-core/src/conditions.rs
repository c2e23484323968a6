//! Weather-provider condition codes mapped onto the six local categories.
//!
//! Codes follow the Yahoo Weather condition list (0..=47, plus 3200 for
//! "not available"). Matching is exact; there is no nearest-code fallback.

use crate::error::{Result, WtwError};

/// Provider code meaning "not available".
pub const CODE_NOT_AVAILABLE: i32 = 3200;

/// Indexed by provider code.
static CONDITION_CODES: [&str; 48] = [
    "r",  // 0 tornado
    "r",  // 1 tropical storm
    "r",  // 2 hurricane
    "r",  // 3 severe thunderstorms
    "r",  // 4 thunderstorms
    "s",  // 5 mixed rain and snow
    "r",  // 6 mixed rain and sleet
    "s",  // 7 mixed snow and sleet
    "lr", // 8 freezing drizzle
    "lr", // 9 drizzle
    "r",  // 10 freezing rain
    "r",  // 11 showers
    "r",  // 12 showers
    "s",  // 13 snow flurries
    "s",  // 14 light snow showers
    "s",  // 15 blowing snow
    "s",  // 16 snow
    "s",  // 17 hail
    "s",  // 18 sleet
    "c",  // 19 dust
    "c",  // 20 foggy
    "c",  // 21 haze
    "c",  // 22 smoky
    "c",  // 23 blustery
    "c",  // 24 windy
    "c",  // 25 cold
    "o",  // 26 cloudy
    "o",  // 27 mostly cloudy (night)
    "o",  // 28 mostly cloudy (day)
    "pc", // 29 partly cloudy (night)
    "pc", // 30 partly cloudy (day)
    "c",  // 31 clear (night)
    "c",  // 32 sunny
    "c",  // 33 fair (night)
    "c",  // 34 fair (day)
    "r",  // 35 mixed rain and hail
    "c",  // 36 hot
    "r",  // 37 isolated thunderstorms
    "r",  // 38 scattered thunderstorms
    "r",  // 39 scattered thunderstorms
    "lr", // 40 scattered showers
    "s",  // 41 heavy snow
    "s",  // 42 scattered snow showers
    "s",  // 43 heavy snow
    "pc", // 44 partly cloudy
    "r",  // 45 thundershowers
    "s",  // 46 snow showers
    "r",  // 47 isolated thundershowers
];

/// Map a provider condition code to a conditions token.
pub fn weather_category(code: i32) -> Result<&'static str> {
    if code == CODE_NOT_AVAILABLE {
        return Err(WtwError::ConditionsUnavailable);
    }
    usize::try_from(code)
        .ok()
        .and_then(|idx| CONDITION_CODES.get(idx).copied())
        .ok_or(WtwError::UnknownConditionCode(code))
}
