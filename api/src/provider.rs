//! Defines the weather provider trait and its HTTP implementation.

use crate::error::FetchError;
use crate::query::Query;
use crate::weather_reading::WeatherReading;

/// A service that can look up the current weather for a city.
pub trait WeatherProvider {
    /// Fetches the current conditions for `query`.
    ///
    /// Issues exactly one request; there is no retry.
    async fn current_weather(&self, query: &Query) -> Result<WeatherReading, FetchError>;
}

/// Current weather from the OpenWeatherMap `/data/2.5/weather` endpoint.
pub mod open_weather_map {
    use dioxus_logger::tracing::debug;
    use dioxus_logger::tracing::info;
    use dioxus_logger::tracing::warn;
    use reqwest::Client;

    use super::*;
    use crate::config::WeatherConfig;

    /// An implementation of the `WeatherProvider` trait for OpenWeatherMap.
    ///
    /// Cheap to clone; clones share the underlying connection pool.
    #[derive(Clone, Debug)]
    pub struct OpenWeatherMap {
        http: Client,
        config: WeatherConfig,
    }

    impl OpenWeatherMap {
        pub fn new(config: WeatherConfig) -> Result<Self, FetchError> {
            let builder = Client::builder();
            #[cfg(not(target_arch = "wasm32"))]
            let builder = builder.timeout(config.timeout);
            let http = builder.build().map_err(FetchError::Client)?;

            if !config.has_api_key() {
                warn!("OPENWEATHER_API_KEY is not set; every lookup will fail");
            }
            debug!("weather provider configured: {:?}", config);

            Ok(Self { http, config })
        }
    }

    impl WeatherProvider for OpenWeatherMap {
        async fn current_weather(&self, query: &Query) -> Result<WeatherReading, FetchError> {
            if !self.config.has_api_key() {
                return Err(FetchError::MissingApiKey);
            }

            info!("fetching current weather for {}", query);

            // `query` percent-encodes both values.
            let response = self
                .http
                .get(self.config.current_weather_url())
                .query(&[
                    ("q", query.as_str()),
                    ("appid", self.config.api_key.as_str()),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response.text().await?;
            let reading = WeatherReading::from_json(&body)?;
            debug!(
                "received weather for {}, {}: {}",
                reading.location, reading.country, reading.description
            );

            Ok(reading)
        }
    }
}
