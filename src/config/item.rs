use serde::Deserialize;

/// A billable line item as it appears in the data file.
#[derive(Debug, Deserialize)]
pub struct Item {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}
