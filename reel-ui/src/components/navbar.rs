//! Navigation bar view component
//!
//! Pure, props-based top bar with the app name and page links.

use crate::components::ChromelessButton;
use dioxus::prelude::*;
use reel_common::Page;

/// Navigation item for the top bar
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub page: Page,
    pub label: String,
    pub is_active: bool,
}

/// Navigation bar view (pure, props-based)
///
/// Exactly the items whose page matches the active route render as active;
/// on pages outside the menu (the movie page) none do.
#[component]
pub fn NavBarView(nav_items: Vec<NavItem>, on_nav_click: EventHandler<Page>) -> Element {
    rsx! {
        div { class: "shrink-0 h-12 bg-gray-900 flex items-center gap-6 px-4 border-b border-gray-800",
            span { class: "text-white font-semibold", "Reel" }
            div { class: "flex gap-2 items-center",
                for item in nav_items.iter() {
                    NavButton {
                        key: "{item.label}",
                        is_active: item.is_active,
                        on_click: {
                            let page = item.page;
                            move |_| on_nav_click.call(page)
                        },
                        "{item.label}"
                    }
                }
            }
        }
    }
}

/// Navigation button with generic children
#[component]
fn NavButton(is_active: bool, on_click: EventHandler<()>, children: Element) -> Element {
    let class = if is_active {
        "text-white text-sm cursor-pointer px-2 py-1.5 rounded bg-gray-700 transition-colors"
    } else {
        "text-gray-400 text-sm cursor-pointer px-2 py-1.5 rounded hover:bg-gray-700 hover:text-white transition-colors"
    };

    rsx! {
        ChromelessButton {
            class: Some(class.to_string()),
            onclick: move |_| on_click.call(()),
            {children}
        }
    }
}
