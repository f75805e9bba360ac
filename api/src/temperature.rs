//! Temperature units and the conversions the results screen displays.

use serde::Deserialize;

/// Offset between the Kelvin and Celsius scales.
const ABSOLUTE_ZERO_CELSIUS: f64 = 273.15;

/// A temperature in Kelvin, as reported by the weather provider.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(pub f64);

impl Kelvin {
    /// Whole degrees Celsius, rounded half away from zero.
    ///
    /// # Examples
    /// ```
    /// assert_eq!(api::Kelvin(283.15).to_celsius(), 10);
    /// ```
    pub fn to_celsius(self) -> i32 {
        (self.0 - ABSOLUTE_ZERO_CELSIUS).round() as i32
    }
}

/// Converts an already rounded Celsius value to whole degrees Fahrenheit.
///
/// The input is the rounded Celsius figure rather than the raw reading, so the
/// two numbers shown side by side always agree with each other.
pub fn celsius_to_fahrenheit(celsius: i32) -> i32 {
    (f64::from(celsius) * 9.0 / 5.0 + 32.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_and_boiling_points() {
        assert_eq!(Kelvin(273.15).to_celsius(), 0);
        assert_eq!(celsius_to_fahrenheit(0), 32);
        assert_eq!(Kelvin(373.15).to_celsius(), 100);
        assert_eq!(celsius_to_fahrenheit(100), 212);
    }

    #[test]
    fn london_reading_shows_ten_and_fifty() {
        let celsius = Kelvin(283.15).to_celsius();
        assert_eq!(celsius, 10);
        assert_eq!(celsius_to_fahrenheit(celsius), 50);
    }

    #[test]
    fn rounds_to_nearest_degree() {
        assert_eq!(Kelvin(293.64).to_celsius(), 20);
        assert_eq!(Kelvin(293.66).to_celsius(), 21);
        assert_eq!(Kelvin(268.0).to_celsius(), -5);
    }

    #[test]
    fn fahrenheit_is_derived_from_rounded_celsius() {
        // 21.4°C would be 70.52°F, but the displayed 21°C maps to 69.8 -> 70.
        let celsius = Kelvin(294.55).to_celsius();
        assert_eq!(celsius, 21);
        assert_eq!(celsius_to_fahrenheit(celsius), 70);
        assert_eq!(celsius_to_fahrenheit(-40), -40);
        assert_eq!(celsius_to_fahrenheit(-273), -459);
    }

    #[test]
    fn conversion_is_deterministic() {
        let reading = Kelvin(301.37);
        let first = reading.to_celsius();
        for _ in 0..10 {
            assert_eq!(reading.to_celsius(), first);
            assert_eq!(celsius_to_fahrenheit(first), celsius_to_fahrenheit(first));
        }
    }
}
