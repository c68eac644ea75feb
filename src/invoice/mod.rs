mod generator;

pub use generator::{build_invoice, format_money, InvoiceData, InvoiceLineItem};
