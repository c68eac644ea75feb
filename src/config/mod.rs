mod client;
mod company;
mod item;

pub use client::Client;
pub use company::{Company, InvoiceFile, InvoiceSettings};
pub use item::Item;

use crate::error::{InvoiceError, Result};
use std::fs;
use std::path::Path;

fn parse_invoice(content: &str, path: &Path) -> Result<InvoiceFile> {
    toml::from_str(content).map_err(|e| InvoiceError::DataParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load an invoice data file
pub fn load_invoice_file(path: &Path) -> Result<InvoiceFile> {
    if !path.exists() {
        return Err(InvoiceError::DataFileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_invoice(&content, path)
}

/// The built-in sample invoice, used when no data file is given
pub fn sample_invoice() -> Result<InvoiceFile> {
    parse_invoice(SAMPLE_TEMPLATE, Path::new("<built-in sample>"))
}

/// Embedded sample invoice data. Also the reference format for --data files.
pub const SAMPLE_TEMPLATE: &str = r#"[company]
name = "Acme Studio LLC"
address = "123 Market Street"
city = "San Francisco"
state = "CA"
zip = "94102"
country = "USA"
email = "billing@acmestudio.example"
phone = "+1-555-010-4477"       # optional
tax_id = "12-3456789"           # optional

[client]
name = "Example Client Inc."
contact = "Jane Smith"          # optional
email = "jane@example.com"
address = "456 Client Avenue"
city = "Los Angeles"
state = "CA"
zip = "90001"
# country = "USA"               # optional

[invoice]
number = "INV-2026-0001"
date = "2026-01-15"             # optional, defaults to today
currency = "USD"
currency_symbol = "$"
due_days = 30
tax_rate = 0.0                  # e.g., 0.0825 for 8.25%

[[items]]
description = "Design consultation"
quantity = 3
unit_price = 10.00

[[items]]
description = "Project setup"
quantity = 1
unit_price = 50.00
"#;
