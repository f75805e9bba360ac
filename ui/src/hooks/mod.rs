pub mod use_weather;
