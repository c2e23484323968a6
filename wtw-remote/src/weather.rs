//! Current conditions for a location from the weather provider.
//!
//! The provider answers with JSON nested as
//! `query.results.channel.{wind.speed, item.condition.{code, temp}}`,
//! where each leaf may be a number or a numeric string.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use tracing::info;
use wtw_core::{Observation, RawWeather, Result, WtwError};

pub const DEFAULT_WEATHER_URL: &str = "https://query.yahooapis.com/v1/public/yql";

#[derive(Debug, Deserialize)]
struct Payload {
    query: Query,
}

#[derive(Debug, Deserialize)]
struct Query {
    results: Results,
}

#[derive(Debug, Deserialize)]
struct Results {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    wind: WindReading,
    item: Item,
}

#[derive(Debug, Deserialize)]
struct WindReading {
    #[serde(deserialize_with = "int_or_string")]
    speed: i32,
}

#[derive(Debug, Deserialize)]
struct Item {
    condition: Condition,
}

#[derive(Debug, Deserialize)]
struct Condition {
    #[serde(deserialize_with = "int_or_string")]
    code: i32,
    #[serde(deserialize_with = "int_or_string")]
    temp: i32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

fn int_or_string<'de, D>(d: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(d)? {
        IntOrString::Int(n) => {
            i32::try_from(n).map_err(|_| D::Error::custom(format!("{n} out of range")))
        }
        IntOrString::Str(s) => s
            .parse::<i32>()
            .map_err(|e| D::Error::custom(format!("{s:?} is not an integer: {e}"))),
    }
}

/// Decode a provider response body into the three raw readings.
pub fn decode_payload(body: &str) -> Result<RawWeather> {
    let payload: Payload =
        serde_json::from_str(body).map_err(|e| WtwError::Decode(e.to_string()))?;
    let channel = payload.query.results.channel;
    Ok(RawWeather {
        temperature: channel.item.condition.temp,
        wind_speed_mph: channel.wind.speed,
        condition_code: channel.item.condition.code,
    })
}

/// Provider query expression for a free-form location.
pub fn location_query(location: &str) -> String {
    format!(
        r#"select * from weather.forecast where woeid in (select woeid from geo.places(1) where text="{location}")"#
    )
}

pub struct WeatherFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// One request, no retry.
    pub async fn fetch(&self, location: &str) -> Result<RawWeather> {
        let q = location_query(location);
        let url =
            reqwest::Url::parse_with_params(&self.base_url, [("q", q.as_str()), ("format", "json")])
                .map_err(|e| {
                    WtwError::WeatherFetch(format!("invalid weather url {}: {e}", self.base_url))
                })?;

        info!(location, "fetching current conditions");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WtwError::WeatherFetch(format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WtwError::WeatherFetch(status.to_string()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| WtwError::WeatherFetch(format!("read body: {e}")))?;

        let raw = decode_payload(&body)?;
        info!(
            temperature = raw.temperature,
            wind = raw.wind_speed_mph,
            code = raw.condition_code,
            "current conditions"
        );
        Ok(raw)
    }

    /// Fetch and overwrite the observation's temperature, wind and conditions.
    ///
    /// All three fields change together or not at all.
    pub async fn enrich(&self, location: &str, observation: &mut Observation) -> Result<()> {
        let raw = self.fetch(location).await?;
        observation.apply_weather(raw)
    }
}
