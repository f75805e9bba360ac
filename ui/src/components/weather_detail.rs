use dioxus::prelude::*;

/// One labelled value in the details grid of the weather card.
#[component]
pub fn WeatherDetail(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "detail-item",
            span { class: "detail-label", "{label}" }
            span { class: "detail-value", "{value}" }
        }
    }
}
