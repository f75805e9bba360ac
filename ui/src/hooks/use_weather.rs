use api::Query;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::app_state::AppState;
use crate::view_state::Activation;
use crate::view_state::ViewState;
use crate::Route;

/// Drives the results screen: fetches once per distinct query and exposes the
/// resulting [`ViewState`].
///
/// - No query: redirects to the search screen and issues no request.
/// - Query: the resource restarts, which cancels any lookup still in
///   flight, so only the latest query can ever reach the view. The state reads
///   `Loading` until that lookup finishes.
///
/// The resource belongs to the calling component, so leaving the screen drops
/// an unfinished lookup along with its result.
pub fn use_weather(query: Signal<Option<Query>>) -> Memo<ViewState> {
    let app_state = use_context::<AppState>();
    let navigator = use_navigator();

    use_effect(move || {
        if Activation::for_query(query.cloned()).is_redirect_to_search() {
            debug!("weather screen opened without a search, redirecting");
            navigator.replace(Route::SearchScreen {});
        }
    });

    let lookup = use_resource(move || {
        // Read outside the future so the resource restarts when the query changes.
        let activation = Activation::for_query(query.cloned());
        let app_state = app_state.clone();
        async move {
            match activation {
                Activation::RedirectToSearch => None,
                Activation::Fetch(query) => {
                    Some(ViewState::load(&app_state.provider, &query).await)
                }
            }
        }
    });

    use_memo(move || {
        if *lookup.state().read() == UseResourceState::Pending {
            return ViewState::Loading;
        }
        lookup.cloned().flatten().unwrap_or_default()
    })
}
