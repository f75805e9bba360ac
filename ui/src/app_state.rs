use api::OpenWeatherMap;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug)]
pub struct AppStateData {
    pub provider: OpenWeatherMap,
}

/// Stable, non-reactive application state shared through context.
#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// The provider holds an HTTP client, which has no notion of equality.
impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl AppState {
    pub fn new(provider: OpenWeatherMap) -> Self {
        Self(Arc::new(AppStateData { provider }))
    }
}
