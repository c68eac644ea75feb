use chrono::NaiveDate;
use serde::Deserialize;

use super::{Client, Item};

/// A complete invoice data document as read from TOML.
#[derive(Debug, Deserialize)]
pub struct InvoiceFile {
    pub company: Company,
    pub client: Client,
    pub invoice: InvoiceSettings,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Company {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InvoiceSettings {
    pub number: String,
    /// Fixed invoice date; today's date when omitted
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub currency: String,
    pub currency_symbol: String,
    pub due_days: u32,
    #[serde(default)]
    pub tax_rate: f64,
}
