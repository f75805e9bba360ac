// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
mod components;
pub mod hooks;
mod screens;
pub mod search_form;
pub mod view_state;

use api::OpenWeatherMap;
use api::WeatherConfig;
use app_state::AppState;
use app_state_mut::AppStateMut;
use screens::search::SearchScreen;
use screens::weather::WeatherScreen;

/// The two screens of the app. The city travels between them through
/// `AppStateMut`, not through the URL, so `/weather` opened directly (or
/// after a reload) has no query and bounces back to `/`.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    SearchScreen {},
    #[route("/weather")]
    WeatherScreen {},
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        min-height: 100%;
        font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
        color: #1f2937;
        background: linear-gradient(160deg, #0ea5e9 0%, #6366f1 100%);
    }

    main.container {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1.5rem;
    }

    .card {
        background: #ffffff;
        border-radius: 1rem;
        padding: 2rem;
        box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);
    }

    /* --- BUTTONS --- */
    button {
        cursor: pointer;
        border-radius: 0.5rem;
        padding: 0.75rem 1.25rem;
        font-size: 1rem;
        border: 2px solid #0284c7;
    }
    .btn-primary { background: #0284c7; color: #ffffff; }
    .btn-secondary { background: #e0f2fe; color: #0c4a6e; border-color: #e0f2fe; }
    button.outline { background: transparent; color: #ffffff; border-color: #ffffff; }
    .card button.outline { color: #0284c7; border-color: #0284c7; }

    /* --- SEARCH SCREEN --- */
    .home-content { text-align: center; color: #ffffff; }
    .app-title { font-size: 3rem; margin: 0; }
    .app-subtitle { font-size: 1.25rem; opacity: 0.85; margin-top: 0.25rem; }
    .input-group { display: flex; gap: 0.5rem; margin-top: 2rem; }
    .city-input {
        flex: 1;
        min-width: 16rem;
        padding: 0.75rem 1rem;
        font-size: 1rem;
        border-radius: 0.5rem;
        border: 2px solid transparent;
    }
    .city-input.error { border-color: #dc2626; }
    .error-message { color: #fecaca; font-weight: 600; }
    .card .error-message { color: #dc2626; }

    /* --- WEATHER SCREEN --- */
    .weather-container { width: 100%; max-width: 32rem; }
    .loading { color: #ffffff; text-align: center; font-size: 1.25rem; }
    .loading progress { width: 100%; }
    .error-container { text-align: center; }
    .weather-content { display: flex; flex-direction: column; gap: 1rem; align-items: flex-start; }
    .weather-card { width: 100%; }
    .city-name { margin-top: 0; }
    .weather-main { text-align: center; margin: 1.5rem 0; }
    .temp-celsius { font-size: 3rem; font-weight: 700; }
    .temp-fahrenheit { font-size: 1.5rem; color: #6b7280; }
    .weather-condition { text-transform: capitalize; font-size: 1.25rem; margin-top: 0.5rem; }
    .weather-details { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
    .detail-item {
        display: flex;
        flex-direction: column;
        background: #f0f9ff;
        border-radius: 0.5rem;
        padding: 0.75rem;
    }
    .detail-label { font-size: 0.85rem; color: #6b7280; }
    .detail-value { font-size: 1.25rem; font-weight: 600; }

    /* --- Mobile Styles --- */
    @media (max-width: 480px) {
        .input-group { flex-direction: column; }
        .city-input { min-width: 0; }
        .weather-details { grid-template-columns: 1fr; }
    }
"#;

    rsx! {
        document::Title { "SkyCast" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Built once; a failure here means no request could ever be sent.
    let app_state = use_hook(|| {
        OpenWeatherMap::new(WeatherConfig::from_env())
            .map(AppState::new)
            .map_err(|e| e.to_string())
    });

    match app_state {
        Ok(app_state) => rsx! {
            LoadedApp {
                app_state,
            }
        },
        Err(e) => {
            dioxus_logger::tracing::error!("failed to start weather provider: {}", e);
            rsx! {
                p {
                    "An error occurred: {e}"
                }
            }
        }
    }
}

/// This component holds the main app logic and only runs when the provider is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    // Provide the mutable state, created at the top level so it survives
    // navigation between the screens.
    let pending_query = use_signal(|| None);
    use_context_provider(|| AppStateMut { pending_query });

    rsx! {
        Router::<Route> {}
    }
}
