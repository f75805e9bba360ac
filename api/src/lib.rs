//! Platform-independent weather logic shared by every SkyCast frontend.
//!
//! Nothing in here depends on the UI toolkit, so the same types back the web
//! and desktop builds and can be tested natively.

pub mod config;
pub mod display_model;
pub mod error;
pub mod provider;
pub mod query;
pub mod temperature;
pub mod weather_reading;

pub use config::WeatherConfig;
pub use display_model::DisplayModel;
pub use error::FetchError;
pub use error::FETCH_FAILURE_MESSAGE;
pub use provider::open_weather_map::OpenWeatherMap;
pub use provider::WeatherProvider;
pub use query::EmptyQuery;
pub use query::Query;
pub use temperature::Kelvin;
pub use weather_reading::WeatherReading;
