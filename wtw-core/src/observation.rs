//! Raw, pre-normalization input and its reduction to a `CanonicalKey`.

use tracing::debug;

use crate::conditions::weather_category;
use crate::error::Result;
use crate::key::CanonicalKey;
use crate::normalize::{bucket_temperature, bucket_wind};
use crate::time::Clock;
use crate::tokens::CURRENT_TIME;

/// Wind as either a raw speed or an already-categorized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wind {
    SpeedMph(i32),
    Token(String),
}

/// Conditions as either a provider code or an already-categorized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conditions {
    ProviderCode(i32),
    Token(String),
}

/// Three raw values decoded from a weather-provider response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawWeather {
    /// Degrees Fahrenheit.
    pub temperature: i32,
    pub wind_speed_mph: i32,
    pub condition_code: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub gender: String,
    /// Degrees Fahrenheit.
    pub temperature: i32,
    pub conditions: Conditions,
    pub wind: Wind,
    /// A day-part token or `current`.
    pub time: String,
    pub intensity: String,
    pub feel: String,
}

impl Default for Observation {
    fn default() -> Self {
        Self {
            gender: "m".to_string(),
            temperature: 60,
            conditions: Conditions::Token("c".to_string()),
            wind: Wind::Token("nw".to_string()),
            time: CURRENT_TIME.to_string(),
            intensity: "n".to_string(),
            feel: "ib".to_string(),
        }
    }
}

impl Observation {
    /// Replace `current` with the clock's day-part. Other values are left alone.
    pub fn resolve_time(&mut self, clock: &Clock) -> Result<()> {
        if self.time == CURRENT_TIME {
            self.time = clock.day_part()?.to_string();
            debug!(time = %self.time, "resolved current time");
        }
        Ok(())
    }

    /// Overwrite temperature, wind and conditions from a provider reading.
    ///
    /// The condition code is mapped first, so on error nothing is touched.
    pub fn apply_weather(&mut self, raw: RawWeather) -> Result<()> {
        let conditions = weather_category(raw.condition_code)?;
        self.temperature = raw.temperature;
        self.wind = Wind::Token(bucket_wind(raw.wind_speed_mph).to_string());
        self.conditions = Conditions::Token(conditions.to_string());
        Ok(())
    }

    /// Reduce to the seven canonical tokens.
    ///
    /// Call `resolve_time` first; `time` is copied through unchanged.
    pub fn normalize(&self) -> Result<CanonicalKey> {
        let key = CanonicalKey {
            gender: self.gender.clone(),
            temperature: bucket_temperature(self.temperature),
            conditions: self.conditions_token()?,
            wind: self.wind_token(),
            time: self.time.clone(),
            intensity: self.intensity.clone(),
            feel: self.feel.clone(),
        };
        debug!(fingerprint = %key, "normalized observation");
        Ok(key)
    }

    fn conditions_token(&self) -> Result<String> {
        match &self.conditions {
            Conditions::ProviderCode(code) => Ok(weather_category(*code)?.to_string()),
            Conditions::Token(t) => Ok(t.clone()),
        }
    }

    fn wind_token(&self) -> String {
        match &self.wind {
            Wind::SpeedMph(speed) => bucket_wind(*speed).to_string(),
            Wind::Token(t) => t.clone(),
        }
    }
}
