//! Defines the mutable, reactive state for the application's UI.

use api::Query;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for UI state that outlives a single screen. It
/// is separate from the immutable `AppState`, and like any signal it is lost on
/// a page reload.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The city handed from the search screen to the results screen.
    /// Set on submit and taken by the results screen when it opens, so it is
    /// `None` again once the lookup has started.
    pub pending_query: Signal<Option<Query>>,
}
