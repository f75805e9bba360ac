//=============================================================================
// File: src/screens/search.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::pico::{Button, Container};
use crate::search_form::SearchForm;
use crate::Route;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

#[component]
pub fn SearchScreen() -> Element {
    let navigator = use_navigator();
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut form = use_signal(SearchForm::default);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        // Bind first so the write guard is released before navigating.
        let submitted = form.write().submit();
        if let Some(query) = submitted {
            info!("searching weather for {}", query);
            app_state_mut.pending_query.set(Some(query));
            navigator.push(Route::WeatherScreen {});
        }
    };

    let error = form.read().error().map(str::to_owned);

    rsx! {
        Container {
            div {
                class: "home-container",
                div {
                    class: "home-content",
                    h1 { class: "app-title", "SkyCast" }
                    p { class: "app-subtitle", "Find My Weather" }

                    form {
                        class: "search-form",
                        onsubmit: on_submit,
                        div {
                            class: "input-group",
                            input {
                                r#type: "text",
                                class: if error.is_some() { "city-input error" } else { "city-input" },
                                "aria-invalid": if error.is_some() { "true" } else { "false" },
                                placeholder: "Enter city name...",
                                value: "{form.read().draft()}",
                                oninput: move |event: FormEvent| form.write().edit(event.value()),
                            }
                            Button {
                                submit: true,
                                "Get Weather"
                            }
                        }
                        if let Some(message) = &error {
                            p { class: "error-message", "{message}" }
                        }
                    }
                }
            }
        }
    }
}
