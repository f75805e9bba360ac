use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::Route;

/// Returns to the search screen. The results screen's state goes with it.
#[component]
pub fn BackButton(label: String) -> Element {
    rsx! {
        Button {
            button_type: ButtonType::Secondary,
            outline: true,
            on_click: move |_| {
                navigator().push(Route::SearchScreen {});
            },
            "{label}"
        }
    }
}
