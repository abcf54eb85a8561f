pub mod deal_input;
pub mod kpi_card;
pub mod projection_chart;
pub mod property_tags;
pub mod toast;
