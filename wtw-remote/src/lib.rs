//! wtw-remote: the advice-service resolver and the weather-provider fetcher.

pub mod advice;
pub mod weather;

pub use advice::{RemoteResolver, DEFAULT_ADVICE_URL};
pub use weather::{decode_payload, WeatherFetcher, DEFAULT_WEATHER_URL};
