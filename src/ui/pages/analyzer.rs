use dioxus::prelude::*;
use tracing::{error, info, warn};

use crate::{
    domain::{AppState, DealField, DealMetrics, PropertyType, Theme},
    infra::workbook::{export_deal, ExportError},
    ui::{
        components::{
            deal_input::DealInput,
            kpi_card::KpiCard,
            projection_chart::ProjectionChart,
            property_tags::PropertyTags,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        format::{currency, or_na, percent, ratio},
        theme,
    },
    util::persistence::export_dir,
};

const FORM_FIELDS: [DealField; 5] = [
    DealField::PurchasePrice,
    DealField::Rent,
    DealField::Expenses,
    DealField::DownPayment,
    DealField::Appreciation,
];

#[component]
pub fn AnalyzerPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (form, metrics, app_theme) =
        state.with(|st| (st.form.clone(), st.metrics.clone(), st.theme));
    let mode = state.with(|st| st.mode());

    let inputs = FORM_FIELDS
        .iter()
        .map(|field| {
            let error = state.with(|st| st.field_error_for(*field).map(|err| err.to_string()));
            (*field, field.label(mode), form.value(*field).to_string(), error)
        })
        .collect::<Vec<_>>();

    let on_analyze = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let outcome = state.with_mut(|st| {
                let ignored = st.form.appreciation_ignored();
                st.run_analysis()
                    .map(|m| (m.annual_cash_flow, m.appreciation.is_some(), ignored))
            });
            match outcome {
                Ok((cash_flow, has_outlook, appreciation_ignored)) => {
                    info!(cash_flow, has_outlook, "deal analyzed");
                    if appreciation_ignored {
                        push_toast(
                            toasts.clone(),
                            ToastKind::Warning,
                            "Appreciation rate is not a number and was ignored; resale figures show N/A.",
                        );
                    } else if !has_outlook {
                        push_toast(
                            toasts.clone(),
                            ToastKind::Info,
                            "No appreciation rate given; resale figures show N/A.",
                        );
                    }
                }
                Err(err) => {
                    warn!(field = ?err.field, "analysis skipped: {err}");
                    push_toast(toasts.clone(), ToastKind::Warning, err.to_string());
                }
            }
        }
    };

    let on_toggle_mode = {
        let mut state = state.clone();
        move |_| state.with_mut(|st| st.toggle_mode())
    };

    let on_select_type = {
        let mut state = state.clone();
        move |tag: PropertyType| state.with_mut(|st| st.select_property_type(tag))
    };

    let on_export = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let metrics = state.with(|st| st.metrics.clone());
            let exported = export_dir()
                .ok_or(ExportError::DirectoryUnavailable)
                .and_then(|dir| export_deal(metrics.as_ref(), &dir));
            match exported {
                Ok(Some(path)) => push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    format!("Saved {}", path.display()),
                ),
                Ok(None) => {}
                Err(err) => {
                    error!("spreadsheet export failed: {err}");
                    push_toast(toasts.clone(), ToastKind::Error, format!("Export failed: {err}"));
                }
            }
        }
    };

    rsx! {
        PropertyTags { selected: form.property_type, onselect: on_select_type }

        div { class: "analyzer-grid",
            section {
                class: "{theme::panel(app_theme)} form-panel",
                if let Some(tag) = form.property_type {
                    p { class: "selected-tag",
                        "Selected: "
                        span { class: "accent", "{tag.label()}" }
                    }
                }
                div { class: "mode-row",
                    span { "Input Mode:" }
                    button {
                        class: "{theme::btn_secondary(app_theme)}",
                        onclick: on_toggle_mode,
                        "{mode.label()}"
                    }
                }
                for (field, label, value, error) in inputs {
                    DealInput {
                        key: "{label}",
                        label: label.clone(),
                        value,
                        error,
                        oninput: {
                            let mut state = state.clone();
                            move |text: String| state.with_mut(|st| st.set_field(field, text))
                        },
                    }
                }
                button {
                    class: "{theme::btn_primary(app_theme)} btn-wide",
                    onclick: on_analyze,
                    "Analyze Deal"
                }
            }

            if let Some(metrics) = metrics {
                section { class: "results",
                    ResultCards { metrics: metrics.clone(), theme: app_theme }
                    ProjectionChart { points: metrics.projection.clone(), theme: app_theme }
                    button {
                        class: "{theme::btn_secondary(app_theme)} btn-wide",
                        onclick: on_export,
                        "Download Spreadsheet (.xlsx)"
                    }
                }
            } else {
                section { class: "{theme::panel(app_theme)} empty-state",
                    p { "Enter a deal and press Analyze to see cap rate, returns and a 5-year projection." }
                }
            }
        }
    }
}

#[component]
fn ResultCards(metrics: DealMetrics, theme: Theme) -> Element {
    let outlook = metrics.appreciation;
    let cards = vec![
        ("Cap Rate", percent(metrics.cap_rate_pct), Some("Cash flow / purchase price")),
        ("Cash-on-Cash Return", percent(metrics.cash_on_cash_pct), Some("Cash flow / down payment")),
        ("GRM", ratio(metrics.gross_rent_multiplier), Some("Price / annual rent")),
        ("OER", percent(metrics.operating_expense_ratio_pct), Some("Expenses / annual rent")),
        ("Annual Cash Flow", currency(metrics.annual_cash_flow), None),
        (
            "Estimated Resale Value (Year 5)",
            or_na(outlook.map(|o| o.resale_value_year5), currency),
            None,
        ),
        (
            "Total ROI if Sold",
            or_na(outlook.map(|o| o.five_year_return_pct), percent),
            outlook.is_none().then_some("Add an appreciation rate to estimate"),
        ),
    ];

    rsx! {
        div { class: "kpi-grid",
            for (title, value, description) in cards {
                KpiCard {
                    key: "{title}",
                    title: title.to_string(),
                    value,
                    description: description.map(str::to_string),
                    theme,
                }
            }
        }
    }
}
