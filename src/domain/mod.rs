//! Deal inputs, the metrics engine and the UI state that drives it.

pub mod app_state;
pub mod deal;
pub mod metrics;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState, Theme};
#[allow(unused_imports)]
pub use deal::{
    parse_amount, DealField, DealForm, DealInputs, InputMode, PropertyType, ValidationError,
    ValidationReason,
};
#[allow(unused_imports)]
pub use metrics::{
    analyze, compute, AppreciationOutlook, DealMetrics, ProjectionPoint, PROJECTION_YEARS,
};
