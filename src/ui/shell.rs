use dioxus::prelude::*;

use crate::app::persist_user_state;
use crate::domain::AppState;
use crate::ui::theme;
use crate::util::version::version_label;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current = state.with(|s| s.theme);
    let next = current.toggled();

    let mut state_mut = state;
    let on_toggle_theme = move |_| {
        state_mut.with_mut(|s| s.toggle_theme());
        persist_user_state(&state_mut);
    };

    rsx! {
        div { class: "{theme::root_class(current)}",
            header { class: "header",
                button {
                    class: "theme-toggle",
                    title: "Switch to {next.name()} theme",
                    onclick: on_toggle_theme,
                    "{next.icon()}"
                }
                h1 { class: "brand",
                    span { "BLACKGRID" }
                    span { class: "beta-badge",
                        span { class: "beta-ping" }
                        span { class: "beta-label", "BETA" }
                    }
                }
                p { class: "tagline", "Analyze investment properties instantly." }
            }
            main { class: "content",
                {children}
            }
            footer { class: "footer",
                "Built by investors, for investors. © BlackGrid · {version_label()}"
            }
        }
    }
}
