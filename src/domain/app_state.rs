use serde::{Deserialize, Serialize};

use super::deal::{DealField, DealForm, InputMode, PropertyType, ValidationError};
use super::metrics::{analyze, DealMetrics};

/// Colour scheme for the whole window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub theme: Theme,
    pub form: DealForm,
    /// Result of the last successful analysis.
    pub metrics: Option<DealMetrics>,
    /// Why the last Analyze click produced nothing.
    pub field_error: Option<ValidationError>,
}

impl AppState {
    /// Runs the engine on the current form. A failed run keeps the previous
    /// metrics on screen and only records the offending field.
    pub fn run_analysis(&mut self) -> Result<&DealMetrics, ValidationError> {
        match analyze(&self.form) {
            Ok(metrics) => {
                self.field_error = None;
                let stored: &DealMetrics = self.metrics.insert(metrics);
                Ok(stored)
            }
            Err(err) => {
                self.field_error = Some(err);
                Err(err)
            }
        }
    }

    pub fn set_field(&mut self, field: DealField, value: String) {
        self.form.set_value(field, value);
        if self.field_error.map(|err| err.field) == Some(field) {
            self.field_error = None;
        }
    }

    pub fn field_error_for(&self, field: DealField) -> Option<ValidationError> {
        self.field_error.filter(|err| err.field == field)
    }

    pub fn mode(&self) -> InputMode {
        self.form.mode
    }

    /// Switches units for the next analysis. Typed amounts are not rescaled.
    pub fn toggle_mode(&mut self) {
        self.form.mode = self.form.mode.toggled();
    }

    pub fn select_property_type(&mut self, property_type: PropertyType) {
        self.form.property_type = Some(property_type);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.theme = persisted.theme;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState { theme: self.theme }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub theme: Theme,
}
