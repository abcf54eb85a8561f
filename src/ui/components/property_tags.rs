use dioxus::prelude::*;

use crate::domain::PropertyType;
use crate::ui::theme;

/// Row of property-type pills. Purely informational.
#[component]
pub fn PropertyTags(selected: Option<PropertyType>, onselect: EventHandler<PropertyType>) -> Element {
    rsx! {
        div { class: "tag-bar",
            for tag in PropertyType::ALL {
                button {
                    key: "{tag.label()}",
                    class: "{theme::tag_class(selected == Some(tag))}",
                    onclick: move |_| onselect.call(tag),
                    "{tag.label()}"
                }
            }
        }
    }
}
