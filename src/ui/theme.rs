//! Theme-specific class and colour helpers for consistent styling.

use crate::domain::Theme;

// ============================================
// LAYOUT
// ============================================

pub fn root_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "app theme-dark",
        Theme::Light => "app theme-light",
    }
}

pub fn panel(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "panel panel-glow",
        Theme::Light => "panel panel-flat",
    }
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(_theme: Theme) -> &'static str {
    "btn btn-primary"
}

pub fn btn_secondary(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "btn btn-secondary",
        Theme::Light => "btn btn-secondary btn-outline",
    }
}

pub fn tag_class(active: bool) -> &'static str {
    if active {
        "tag tag-active"
    } else {
        "tag"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "input input-invalid"
    } else {
        "input"
    }
}

// ============================================
// CHART COLOURS
// ============================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPalette {
    pub stroke: &'static str,
    pub fill: &'static str,
    pub axis: &'static str,
    pub grid: &'static str,
}

pub fn chart_palette(theme: Theme) -> ChartPalette {
    match theme {
        Theme::Dark => ChartPalette {
            stroke: "#3b82f6",
            fill: "#3b82f6",
            axis: "#cccccc",
            grid: "#1f2937",
        },
        Theme::Light => ChartPalette {
            stroke: "#2563eb",
            fill: "#60a5fa",
            axis: "#475569",
            grid: "#e2e8f0",
        },
    }
}
