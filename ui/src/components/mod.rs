//! Shared building blocks used by both screens.
pub mod back_button;
pub mod pico;
pub mod weather_detail;
