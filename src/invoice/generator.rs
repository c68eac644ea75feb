use chrono::{Local, NaiveDate};

use crate::config::{Client, Company, InvoiceFile, Item};
use crate::error::{InvoiceError, Result};

/// A line item on the invoice with its computed amount
#[derive(Debug)]
pub struct InvoiceLineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub amount: f64,
}

/// Complete invoice data for PDF generation
#[derive(Debug)]
pub struct InvoiceData {
    pub number: String,
    pub date: String,
    pub due_date: String,
    pub company: Company,
    pub client: Client,
    pub items: Vec<InvoiceLineItem>,
    pub subtotal: f64,
    /// Display tax rate as a percentage (e.g. 8.25)
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub currency_symbol: String,
    pub payment_terms: String,
}

fn validate_item(item: &Item) -> Result<()> {
    if item.quantity <= 0.0 {
        return Err(InvoiceError::InvalidQuantity {
            item: item.description.clone(),
            qty: item.quantity,
        });
    }
    if item.unit_price < 0.0 {
        return Err(InvoiceError::InvalidUnitPrice {
            item: item.description.clone(),
            price: item.unit_price,
        });
    }
    Ok(())
}

/// Build render-ready invoice data from a data file
pub fn build_invoice(file: &InvoiceFile) -> Result<InvoiceData> {
    if file.items.is_empty() {
        return Err(InvoiceError::NoItems);
    }
    if !(0.0..=1.0).contains(&file.invoice.tax_rate) {
        return Err(InvoiceError::InvalidTaxRate(file.invoice.tax_rate));
    }

    let mut line_items: Vec<InvoiceLineItem> = Vec::new();
    for item in &file.items {
        validate_item(item)?;
        line_items.push(InvoiceLineItem {
            description: item.description.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            amount: item.unit_price * item.quantity,
        });
    }

    // Calculate totals
    let subtotal: f64 = line_items.iter().map(|i| i.amount).sum();
    let tax_amount = subtotal * file.invoice.tax_rate;
    let total = subtotal + tax_amount;

    // Fixed date from the data file, today otherwise
    let invoice_date: NaiveDate = file
        .invoice
        .date
        .unwrap_or_else(|| Local::now().date_naive());
    let due_date = invoice_date
        .checked_add_signed(chrono::Duration::days(file.invoice.due_days as i64))
        .unwrap_or(invoice_date);

    let payment_terms = if file.invoice.due_days == 0 {
        "Due on receipt".to_string()
    } else {
        format!("Net {} days", file.invoice.due_days)
    };

    Ok(InvoiceData {
        number: file.invoice.number.clone(),
        date: invoice_date.format("%B %d, %Y").to_string(),
        due_date: due_date.format("%B %d, %Y").to_string(),
        company: file.company.clone(),
        client: file.client.clone(),
        items: line_items,
        subtotal,
        tax_rate: file.invoice.tax_rate * 100.0,
        tax_amount,
        total,
        currency_symbol: file.invoice.currency_symbol.clone(),
        payment_terms,
    })
}

/// Format a money amount with two decimal places and thousands separators
pub fn format_money(value: f64, currency_symbol: &str) -> String {
    let rounded = format!("{:.2}", value);
    let parts: Vec<&str> = rounded.split('.').collect();
    let whole = parts[0];
    let frac = parts[1];

    let negative = whole.starts_with('-');
    let digits = if negative { &whole[1..] } else { whole };
    let grouped = format_grouped_int(digits);

    if negative {
        format!("-{}{}.{}", currency_symbol, grouped, frac)
    } else {
        format!("{}{}.{}", currency_symbol, grouped, frac)
    }
}

fn format_grouped_int(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
