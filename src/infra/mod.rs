//! File output for computed deals.

pub mod workbook;
