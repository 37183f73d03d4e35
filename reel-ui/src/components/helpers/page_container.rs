//! Page container component

use dioxus::prelude::*;

/// Standard page container with consistent width and padding
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "max-w-3xl mx-auto w-full p-6", {children} }
    }
}
