//! Inline error alert component

use dioxus::prelude::*;

/// Inline alert box replacing a region's content after a failed request
#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx! {
        div {
            class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded",
            role: "alert",
            p { "{message}" }
        }
    }
}
