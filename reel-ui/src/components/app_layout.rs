//! App layout view component
//!
//! Overall structure: navigation bar on top, routed page content below.

use dioxus::prelude::*;

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    /// Optional navigation bar at the top
    #[props(default)]
    nav_bar: Option<Element>,
) -> Element {
    rsx! {
        div { class: "h-screen flex flex-col",
            if let Some(nb) = nav_bar {
                {nb}
            }
            div { class: "flex-1 overflow-y-auto", {children} }
        }
    }
}
