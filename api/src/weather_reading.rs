//! The parsed "current weather" response for one city.

use serde::Deserialize;

use crate::error::FetchError;
use crate::temperature::Kelvin;

/// One successful lookup, flattened out of the provider's nested JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub location: String,
    pub country: String,
    pub temperature: Kelvin,
    pub feels_like: Kelvin,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Metres per second.
    pub wind_speed: f64,
    /// Hectopascal.
    pub pressure: u32,
    pub description: String,
}

impl WeatherReading {
    /// Parses an OpenWeatherMap `/data/2.5/weather` body.
    ///
    /// Fields the screen does not show are ignored. A body without at least one
    /// `weather` entry is rejected, since the condition text is mandatory.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let raw: RawCurrentWeather = serde_json::from_str(body)?;

        let description = raw
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| FetchError::Malformed("response has no weather condition".to_string()))?;

        Ok(Self {
            location: raw.name,
            country: raw.sys.country,
            temperature: raw.main.temp,
            feels_like: raw.main.feels_like,
            humidity: raw.main.humidity,
            wind_speed: raw.wind.speed,
            pressure: raw.main.pressure,
            description,
        })
    }
}

// --- Wire format ---

#[derive(Debug, Deserialize)]
struct RawCurrentWeather {
    name: String,
    sys: RawSys,
    main: RawMain,
    wind: RawWind,
    weather: Vec<RawCondition>,
}

#[derive(Debug, Deserialize)]
struct RawSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct RawMain {
    temp: Kelvin,
    feels_like: Kelvin,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct RawWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct RawCondition {
    description: String,
}
