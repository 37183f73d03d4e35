//! Reusable text input component

use dioxus::prelude::*;

/// Reusable text input component with consistent styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    onkeydown: EventHandler<KeyboardEvent>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] id: Option<String>,
) -> Element {
    rsx! {
        input {
            r#type: "text",
            class: "w-full bg-gray-800/50 rounded-lg px-3 py-2 focus:outline-none focus:ring-1 focus:ring-indigo-500/50 text-gray-300 placeholder-gray-500",
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            oninput: move |e| on_input.call(e.value()),
            onkeydown: move |e| onkeydown.call(e),
        }
    }
}
