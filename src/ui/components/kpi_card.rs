use dioxus::prelude::*;

use crate::domain::Theme;
use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, theme: Theme) -> Element {
    rsx! {
        div {
            class: "{theme::panel(theme)} kpi-card",
            h3 { class: "kpi-title", "{title}" }
            p { class: "kpi-value", "{value}" }
            if let Some(desc) = description {
                p { class: "kpi-desc", "{desc}" }
            }
        }
    }
}
