//=============================================================================
// File: src/screens/weather.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::back_button::BackButton;
use crate::components::pico::{Card, Container};
use crate::components::weather_detail::WeatherDetail;
use crate::hooks::use_weather::use_weather;
use crate::view_state::ViewState;
use api::DisplayModel;
use dioxus::prelude::*;

/// The loaded weather card. Only ever built from a complete reading.
#[component]
fn WeatherReport(display: DisplayModel) -> Element {
    rsx! {
        div {
            class: "weather-content",
            BackButton { label: "← Back to Home" }

            Card {
                class: "weather-card",
                h2 { class: "city-name", "{display.location}" }

                div {
                    class: "weather-main",
                    div {
                        class: "temperature",
                        span { class: "temp-celsius", "{display.celsius_label()}" }
                        span { class: "temp-fahrenheit", " ({display.fahrenheit_label()})" }
                    }
                    div { class: "weather-condition", "{display.description}" }
                }

                div {
                    class: "weather-details",
                    WeatherDetail { label: "Humidity", value: display.humidity_label() }
                    WeatherDetail { label: "Wind Speed", value: display.wind_label() }
                    WeatherDetail { label: "Feels Like", value: display.feels_like_label() }
                    WeatherDetail { label: "Pressure", value: display.pressure_label() }
                }
            }
        }
    }
}

/// Renders exactly one of the three states, nothing from the others.
#[component]
fn WeatherView(state: ViewState) -> Element {
    match state {
        ViewState::Loading => rsx! {
            div {
                class: "loading",
                p { "Loading weather data..." }
                progress {}
            }
        },
        ViewState::Error(message) => rsx! {
            Card {
                class: "error-container",
                p { class: "error-message", "{message}" }
                BackButton { label: "Back to Home" }
            }
        },
        ViewState::Loaded(reading) => rsx! {
            WeatherReport { display: DisplayModel::from(&reading) }
        },
    }
}

#[component]
pub fn WeatherScreen() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    // Taken, not read: a later visit to `/weather` needs a new search.
    let query = use_signal(|| app_state_mut.pending_query.take());
    let view_state = use_weather(query);

    // The hook is already redirecting; render nothing meanwhile.
    if query.read().is_none() {
        return rsx! {};
    }

    rsx! {
        Container {
            div {
                class: "weather-container",
                WeatherView { state: view_state() }
            }
        }
    }
}
