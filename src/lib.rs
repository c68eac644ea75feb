pub mod config;
pub mod error;
pub mod invoice;
pub mod pdf;

pub use config::{Client, Company, InvoiceFile, InvoiceSettings, Item};
pub use error::{InvoiceError, Result};
pub use invoice::{build_invoice, format_money, InvoiceData, InvoiceLineItem};
