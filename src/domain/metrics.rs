use super::deal::{DealField, DealForm, DealInputs, ValidationError, ValidationReason};

pub const PROJECTION_YEARS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionPoint {
    pub year: u32,
    pub value: f64,
}

impl ProjectionPoint {
    pub fn label(&self) -> String {
        format!("Year {}", self.year)
    }
}

/// Resale figures, only available when an appreciation rate was given.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppreciationOutlook {
    pub resale_value_year5: f64,
    pub equity_gain: f64,
    /// Equity gain plus five years of cash flow, relative to the down payment.
    pub five_year_return_pct: f64,
}

/// Everything derived from one set of deal inputs. All money figures are
/// yearly and unrounded.
#[derive(Clone, Debug, PartialEq)]
pub struct DealMetrics {
    pub purchase_price: f64,
    pub annual_rent: f64,
    pub annual_expenses: f64,
    pub down_payment: f64,
    pub appreciation_rate_pct: Option<f64>,
    pub annual_cash_flow: f64,
    pub cap_rate_pct: f64,
    pub cash_on_cash_pct: f64,
    pub gross_rent_multiplier: f64,
    pub operating_expense_ratio_pct: f64,
    pub five_year_cash_return_pct: f64,
    pub projection: Vec<ProjectionPoint>,
    pub appreciation: Option<AppreciationOutlook>,
}

impl DealMetrics {
    pub fn monthly_rent(&self) -> f64 {
        self.annual_rent / 12.0
    }

    pub fn monthly_expenses(&self) -> f64 {
        self.annual_expenses / 12.0
    }
}

/// Parses the form and computes its metrics.
pub fn analyze(form: &DealForm) -> Result<DealMetrics, ValidationError> {
    compute(&form.to_inputs()?)
}

pub fn compute(inputs: &DealInputs) -> Result<DealMetrics, ValidationError> {
    let purchase_price = divisor(DealField::PurchasePrice, inputs.purchase_price)?;
    let annual_rent = divisor(DealField::Rent, inputs.annual_rent())?;
    let annual_expenses = non_negative(DealField::Expenses, inputs.annual_expenses())?;
    let down_payment = divisor(DealField::DownPayment, inputs.down_payment)?;

    let annual_cash_flow = annual_rent - annual_expenses;

    let projection = (1..=PROJECTION_YEARS)
        .map(|year| ProjectionPoint {
            year,
            value: down_payment + annual_cash_flow * year as f64,
        })
        .collect();

    let five_years_cash = annual_cash_flow * PROJECTION_YEARS as f64;
    let appreciation_rate_pct = inputs.appreciation_rate_pct.filter(|rate| rate.is_finite());
    let appreciation = appreciation_rate_pct.map(|rate| {
        let resale_value_year5 =
            purchase_price * (1.0 + rate / 100.0).powi(PROJECTION_YEARS as i32);
        let equity_gain = resale_value_year5 - purchase_price;
        AppreciationOutlook {
            resale_value_year5,
            equity_gain,
            five_year_return_pct: (equity_gain + five_years_cash) / down_payment * 100.0,
        }
    });

    Ok(DealMetrics {
        purchase_price,
        annual_rent,
        annual_expenses,
        down_payment,
        appreciation_rate_pct,
        annual_cash_flow,
        cap_rate_pct: annual_cash_flow / purchase_price * 100.0,
        cash_on_cash_pct: annual_cash_flow / down_payment * 100.0,
        gross_rent_multiplier: purchase_price / annual_rent,
        operating_expense_ratio_pct: annual_expenses / annual_rent * 100.0,
        five_year_cash_return_pct: five_years_cash / down_payment * 100.0,
        projection,
        appreciation,
    })
}

fn divisor(field: DealField, value: f64) -> Result<f64, ValidationError> {
    let value = non_negative(field, value)?;
    if value == 0.0 {
        return Err(ValidationError::new(field, ValidationReason::Zero));
    }
    Ok(value)
}

fn non_negative(field: DealField, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        Err(ValidationError::new(field, ValidationReason::NotANumber))
    } else if value < 0.0 {
        Err(ValidationError::new(field, ValidationReason::Negative))
    } else {
        Ok(value)
    }
}
