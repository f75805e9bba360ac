//! Values derived from a [`WeatherReading`] for rendering.

use crate::temperature::celsius_to_fahrenheit;
use crate::weather_reading::WeatherReading;

/// Everything the results screen prints, already converted and rounded.
///
/// This is a pure function of the reading it was built from; build a new one
/// whenever the reading changes rather than mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub location: String,
    pub celsius: i32,
    pub fahrenheit: i32,
    pub feels_like_celsius: i32,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub pressure: u32,
}

impl From<&WeatherReading> for DisplayModel {
    fn from(reading: &WeatherReading) -> Self {
        let celsius = reading.temperature.to_celsius();
        Self {
            location: format!("{}, {}", reading.location, reading.country),
            celsius,
            fahrenheit: celsius_to_fahrenheit(celsius),
            feels_like_celsius: reading.feels_like.to_celsius(),
            description: reading.description.clone(),
            humidity: reading.humidity,
            wind_speed: reading.wind_speed,
            pressure: reading.pressure,
        }
    }
}

impl DisplayModel {
    pub fn celsius_label(&self) -> String {
        format!("{}°C", self.celsius)
    }

    pub fn fahrenheit_label(&self) -> String {
        format!("{}°F", self.fahrenheit)
    }

    pub fn feels_like_label(&self) -> String {
        format!("{}°C", self.feels_like_celsius)
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity)
    }

    pub fn wind_label(&self) -> String {
        format!("{} m/s", self.wind_speed)
    }

    pub fn pressure_label(&self) -> String {
        format!("{} hPa", self.pressure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temperature::Kelvin;

    fn reading(temp: f64, feels_like: f64) -> WeatherReading {
        WeatherReading {
            location: "London".to_string(),
            country: "GB".to_string(),
            temperature: Kelvin(temp),
            feels_like: Kelvin(feels_like),
            humidity: 81,
            wind_speed: 4.1,
            pressure: 1012,
            description: "broken clouds".to_string(),
        }
    }

    #[test]
    fn london_scenario_labels() {
        let display = DisplayModel::from(&reading(283.15, 281.86));

        assert_eq!(display.location, "London, GB");
        assert_eq!(display.celsius_label(), "10°C");
        assert_eq!(display.fahrenheit_label(), "50°F");
        assert_eq!(display.feels_like_label(), "9°C");
        assert_eq!(display.humidity_label(), "81%");
        assert_eq!(display.wind_label(), "4.1 m/s");
        assert_eq!(display.pressure_label(), "1012 hPa");
        assert_eq!(display.description, "broken clouds");
    }

    #[test]
    fn whole_wind_speed_prints_without_decimals() {
        let mut r = reading(283.15, 283.15);
        r.wind_speed = 5.0;
        assert_eq!(DisplayModel::from(&r).wind_label(), "5 m/s");
    }

    #[test]
    fn feels_like_uses_the_same_conversion() {
        let display = DisplayModel::from(&reading(250.0, 250.0));
        assert_eq!(display.celsius, -23);
        assert_eq!(display.feels_like_celsius, -23);
        assert_eq!(display.fahrenheit, -9);
        assert_eq!(display.celsius_label(), "-23°C");
        assert_eq!(display.fahrenheit_label(), "-9°F");
    }

    #[test]
    fn same_reading_gives_same_model() {
        let r = reading(290.4, 289.9);
        assert_eq!(DisplayModel::from(&r), DisplayModel::from(&r));
    }
}
