use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn DealInput(
    label: String,
    value: String,
    error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        div { class: "field",
            label { class: "field-label", "{label}" }
            input {
                class: "{theme::input_class(invalid)}",
                placeholder: "{label}",
                "inputmode": "decimal",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}
