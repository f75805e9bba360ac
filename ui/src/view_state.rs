//! The results screen's state machine, kept free of any rendering code.

use api::FetchError;
use api::Query;
use api::WeatherProvider;
use api::WeatherReading;
use dioxus_logger::tracing::warn;

/// What the results screen is currently showing. Exactly one variant holds.
#[derive(Clone, Debug, Default, PartialEq, strum::EnumIs)]
pub enum ViewState {
    #[default]
    Loading,
    /// The user-facing message; the cause has already been logged.
    Error(String),
    Loaded(WeatherReading),
}

impl ViewState {
    /// Folds a finished lookup into the state to render.
    pub fn from_outcome(outcome: Result<WeatherReading, FetchError>) -> Self {
        match outcome {
            Ok(reading) => Self::Loaded(reading),
            Err(e) => {
                warn!("weather lookup failed: {}", e);
                Self::Error(e.user_message().to_string())
            }
        }
    }

    /// Runs one lookup and returns the state it ends in.
    pub async fn load<P: WeatherProvider>(provider: &P, query: &Query) -> Self {
        Self::from_outcome(provider.current_weather(query).await)
    }
}

/// What the results screen must do when it becomes active.
#[derive(Clone, Debug, PartialEq, strum::EnumIs)]
pub enum Activation {
    /// No search preceded this visit; go back without fetching anything.
    RedirectToSearch,
    Fetch(Query),
}

impl Activation {
    pub fn for_query(query: Option<Query>) -> Self {
        match query {
            Some(query) => Self::Fetch(query),
            None => Self::RedirectToSearch,
        }
    }
}
