use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether rent and expenses are entered per month or per year.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    #[default]
    Monthly,
    Annual,
}

impl InputMode {
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Monthly => "Monthly",
            InputMode::Annual => "Annual",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            InputMode::Monthly => InputMode::Annual,
            InputMode::Annual => InputMode::Monthly,
        }
    }

    /// Multiplier that turns an amount entered in this mode into a yearly figure.
    pub fn annual_factor(&self) -> f64 {
        match self {
            InputMode::Monthly => 12.0,
            InputMode::Annual => 1.0,
        }
    }
}

/// Informational property tag. Never feeds the metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    SingleFamily,
    Duplex,
    Triplex,
    Quadplex,
    Townhome,
    Condo,
    Multifamily,
    ShortTermRental,
}

impl PropertyType {
    pub const ALL: [PropertyType; 8] = [
        PropertyType::SingleFamily,
        PropertyType::Duplex,
        PropertyType::Triplex,
        PropertyType::Quadplex,
        PropertyType::Townhome,
        PropertyType::Condo,
        PropertyType::Multifamily,
        PropertyType::ShortTermRental,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "Single-Family",
            PropertyType::Duplex => "Duplex",
            PropertyType::Triplex => "Triplex",
            PropertyType::Quadplex => "Quadplex",
            PropertyType::Townhome => "Townhome",
            PropertyType::Condo => "Condo",
            PropertyType::Multifamily => "Multifamily",
            PropertyType::ShortTermRental => "Short-Term Rental",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DealField {
    PurchasePrice,
    Rent,
    Expenses,
    DownPayment,
    Appreciation,
}

impl DealField {
    /// Label as shown next to the input. Rent and expenses follow the mode.
    pub fn label(&self, mode: InputMode) -> String {
        match self {
            DealField::PurchasePrice => "Purchase Price".to_string(),
            DealField::Rent => format!("{} Rent", mode.label()),
            DealField::Expenses => format!("{} Expenses", mode.label()),
            DealField::DownPayment => "Down Payment".to_string(),
            DealField::Appreciation => "Expected Appreciation (%)".to_string(),
        }
    }

    fn short_label(&self) -> &'static str {
        match self {
            DealField::PurchasePrice => "Purchase Price",
            DealField::Rent => "Rent",
            DealField::Expenses => "Expenses",
            DealField::DownPayment => "Down Payment",
            DealField::Appreciation => "Appreciation",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationReason {
    Missing,
    NotANumber,
    Zero,
    Negative,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::Missing => write!(f, "is required"),
            ValidationReason::NotANumber => write!(f, "must be a number"),
            ValidationReason::Zero => write!(f, "must not be zero"),
            ValidationReason::Negative => write!(f, "must not be negative"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{} {reason}", .field.short_label())]
pub struct ValidationError {
    pub field: DealField,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: DealField, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}

/// Raw strings as typed into the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DealForm {
    pub purchase_price: String,
    pub rent: String,
    pub expenses: String,
    pub down_payment: String,
    pub appreciation: String,
    pub mode: InputMode,
    pub property_type: Option<PropertyType>,
}

impl DealForm {
    pub fn value(&self, field: DealField) -> &str {
        match field {
            DealField::PurchasePrice => &self.purchase_price,
            DealField::Rent => &self.rent,
            DealField::Expenses => &self.expenses,
            DealField::DownPayment => &self.down_payment,
            DealField::Appreciation => &self.appreciation,
        }
    }

    pub fn set_value(&mut self, field: DealField, value: String) {
        match field {
            DealField::PurchasePrice => self.purchase_price = value,
            DealField::Rent => self.rent = value,
            DealField::Expenses => self.expenses = value,
            DealField::DownPayment => self.down_payment = value,
            DealField::Appreciation => self.appreciation = value,
        }
    }

    /// Parses the required fields in form order; the first failure wins.
    /// A blank or unreadable appreciation rate is treated as not given.
    pub fn to_inputs(&self) -> Result<DealInputs, ValidationError> {
        let required = |field: DealField| {
            parse_amount(self.value(field)).map_err(|reason| ValidationError::new(field, reason))
        };

        Ok(DealInputs {
            purchase_price: required(DealField::PurchasePrice)?,
            rent: required(DealField::Rent)?,
            expenses: required(DealField::Expenses)?,
            down_payment: required(DealField::DownPayment)?,
            appreciation_rate_pct: parse_amount(&self.appreciation).ok(),
            mode: self.mode,
        })
    }

    /// True when something was typed as the appreciation rate but it could
    /// not be read, so the analysis ran without one.
    pub fn appreciation_ignored(&self) -> bool {
        !self.appreciation.trim().is_empty() && parse_amount(&self.appreciation).is_err()
    }
}

/// Parsed form values. Rent and expenses are still in `mode` units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DealInputs {
    pub purchase_price: f64,
    pub rent: f64,
    pub expenses: f64,
    pub down_payment: f64,
    pub appreciation_rate_pct: Option<f64>,
    pub mode: InputMode,
}

impl DealInputs {
    pub fn annual_rent(&self) -> f64 {
        self.rent * self.mode.annual_factor()
    }

    pub fn annual_expenses(&self) -> f64 {
        self.expenses * self.mode.annual_factor()
    }
}

/// Reads a user-typed amount such as `"$200,000"` or `"3.5%"`.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationReason> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return Err(ValidationReason::Missing);
    }

    let cleaned: String = trimmed.chars().filter(|ch| *ch != ',' && *ch != '_').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(ValidationReason::NotANumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> DealForm {
        DealForm {
            purchase_price: "200000".to_string(),
            rent: "2000".to_string(),
            expenses: "500".to_string(),
            down_payment: "40000".to_string(),
            appreciation: "3".to_string(),
            mode: InputMode::Monthly,
            property_type: Some(PropertyType::Duplex),
        }
    }

    #[test]
    fn parse_amount_accepts_currency_and_separators() {
        assert_eq!(parse_amount("  $200,000 "), Ok(200_000.0));
        assert_eq!(parse_amount("1_500.50"), Ok(1500.5));
        assert_eq!(parse_amount("3.5%"), Ok(3.5));
        assert_eq!(parse_amount("-4"), Ok(-4.0));
    }

    #[test]
    fn parse_amount_rejects_blank_and_garbage() {
        assert_eq!(parse_amount(""), Err(ValidationReason::Missing));
        assert_eq!(parse_amount("   "), Err(ValidationReason::Missing));
        assert_eq!(parse_amount("$"), Err(ValidationReason::Missing));
        assert_eq!(parse_amount("abc"), Err(ValidationReason::NotANumber));
        assert_eq!(parse_amount("inf"), Err(ValidationReason::NotANumber));
        assert_eq!(parse_amount("NaN"), Err(ValidationReason::NotANumber));
    }

    #[test]
    fn to_inputs_keeps_entered_units() {
        let inputs = sample_form().to_inputs().unwrap();
        assert_eq!(inputs.purchase_price, 200_000.0);
        assert_eq!(inputs.rent, 2000.0);
        assert_eq!(inputs.annual_rent(), 24_000.0);
        assert_eq!(inputs.annual_expenses(), 6000.0);
        assert_eq!(inputs.appreciation_rate_pct, Some(3.0));
    }

    #[test]
    fn to_inputs_reports_first_invalid_field() {
        let mut form = sample_form();
        form.rent = "lots".to_string();
        form.down_payment = String::new();

        let err = form.to_inputs().unwrap_err();
        assert_eq!(err, ValidationError::new(DealField::Rent, ValidationReason::NotANumber));
        assert_eq!(err.to_string(), "Rent must be a number");
    }

    #[test]
    fn blank_or_invalid_appreciation_is_absent() {
        let mut form = sample_form();
        form.appreciation = String::new();
        assert_eq!(form.to_inputs().unwrap().appreciation_rate_pct, None);

        form.appreciation = "n/a".to_string();
        assert_eq!(form.to_inputs().unwrap().appreciation_rate_pct, None);
    }

    #[test]
    fn unreadable_appreciation_is_flagged_but_blank_is_not() {
        let mut form = sample_form();
        assert!(!form.appreciation_ignored());

        form.appreciation = "   ".to_string();
        assert!(!form.appreciation_ignored());

        form.appreciation = "3.5 pct".to_string();
        assert!(form.appreciation_ignored());
        assert_eq!(form.to_inputs().unwrap().appreciation_rate_pct, None);

        form.appreciation = "3.5%".to_string();
        assert!(!form.appreciation_ignored());
    }

    #[test]
    fn annual_mode_leaves_amounts_untouched() {
        let mut form = sample_form();
        form.mode = InputMode::Annual;
        let inputs = form.to_inputs().unwrap();
        assert_eq!(inputs.annual_rent(), 2000.0);
        assert_eq!(inputs.annual_expenses(), 500.0);
    }

    #[test]
    fn field_labels_follow_mode() {
        assert_eq!(DealField::Rent.label(InputMode::Monthly), "Monthly Rent");
        assert_eq!(DealField::Expenses.label(InputMode::Annual), "Annual Expenses");
        assert_eq!(InputMode::Monthly.toggled(), InputMode::Annual);
        assert_eq!(PropertyType::ALL.len(), 8);
        assert_eq!(PropertyType::ShortTermRental.label(), "Short-Term Rental");
    }
}
