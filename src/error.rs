use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("Invoice data file not found: {0}")]
    DataFileNotFound(PathBuf),

    #[error("Failed to parse invoice data {path}: {source}")]
    DataParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invoice has no line items")]
    NoItems,

    #[error("Invalid quantity {qty} for item '{item}': must be greater than 0")]
    InvalidQuantity { item: String, qty: f64 },

    #[error("Invalid unit price {price} for item '{item}': must not be negative")]
    InvalidUnitPrice { item: String, price: f64 },

    #[error("Invalid tax rate {0}: must be between 0 and 1")]
    InvalidTaxRate(f64),

    #[error("Invoice has {count} line items but a single page fits at most {max}")]
    TooManyItems { count: usize, max: usize },

    #[error("Failed to render PDF: {0}")]
    PdfRender(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InvoiceError>;
