//! Movie detail view component - pure rendering, no data fetching

use crate::components::helpers::{BackButton, ErrorAlert};
use crate::components::{Button, ButtonVariant};
use dioxus::prelude::*;
use reel_common::{DetailPhase, FavoriteButton};

/// Fields copied from the detail response into the page, in render order.
/// Attributes the response lacks render as blanks.
pub const DETAIL_FIELDS: &[&str] = &[
    "Rated", "Released", "Runtime", "Genre", "Director", "Writer", "Actors", "Plot", "Language",
    "Country", "Awards",
];

/// Movie detail view (pure, props-based)
///
/// The field grid stays hidden until a response arrives; until then the
/// message region shows the loading placeholder or the error text.
#[component]
pub fn MovieDetailView(
    heading: String,
    phase: DetailPhase,
    button: FavoriteButton,
    back_text: String,
    on_back: EventHandler<()>,
    on_add_favorite: EventHandler<()>,
) -> Element {
    let button_label = button.label();
    let button_variant = if button.is_enabled() {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    };

    rsx! {
        div { class: "flex flex-col gap-4",
            BackButton { text: back_text, on_click: on_back }
            div { class: "flex items-center justify-between gap-4",
                h1 { class: "text-3xl font-bold text-white", "{heading}" }
                Button {
                    variant: button_variant,
                    disabled: !button.is_enabled(),
                    id: Some("favorite-button".to_string()),
                    onclick: move |_| on_add_favorite.call(()),
                    "{button_label}"
                }
            }
            DetailRegion { phase }
        }
    }
}

/// Message region plus the revealed field grid
#[component]
fn DetailRegion(phase: DetailPhase) -> Element {
    match phase {
        DetailPhase::Loading => rsx! {
            p { class: "text-gray-400", "Loading..." }
        },
        DetailPhase::Failed(message) => rsx! {
            ErrorAlert { message }
        },
        DetailPhase::Ready(detail) => {
            let rows: Vec<(&str, String)> = DETAIL_FIELDS
                .iter()
                .map(|name| (*name, detail.field(name).to_string()))
                .collect();
            rsx! {
                dl { class: "flex flex-col gap-2",
                    for (name, value) in rows {
                        div { key: "{name}", class: "grid grid-cols-[8rem_1fr] gap-x-6",
                            dt { class: "text-gray-500", "{name}" }
                            dd { class: "text-gray-300", "{value}" }
                        }
                    }
                }
            }
        }
    }
}
