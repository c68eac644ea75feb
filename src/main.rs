mod config;
mod error;
mod invoice;
mod pdf;

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

use crate::config::{load_invoice_file, sample_invoice, SAMPLE_TEMPLATE};
use crate::error::Result;
use crate::invoice::{build_invoice, format_money, InvoiceData};

#[derive(Parser)]
#[command(name = "invoicegen")]
#[command(version, about = "Single-shot PDF invoice generator", long_about = None)]
struct Cli {
    /// Invoice data file (TOML); defaults to the built-in sample
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Output PDF path
    #[arg(short, long, default_value = "invoice.pdf")]
    output: PathBuf,

    /// Print the built-in sample data file and exit
    #[arg(long)]
    print_sample: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_sample {
        print!("{SAMPLE_TEMPLATE}");
        return Ok(());
    }

    let file = match cli.data {
        Some(path) => load_invoice_file(&path)?,
        None => sample_invoice()?,
    };

    let data = build_invoice(&file)?;

    // Render to bytes first so a failed render never leaves a file behind
    let bytes = pdf::render(&data)?;
    fs::write(&cli.output, bytes)?;

    print_summary(&data, &cli.output);

    Ok(())
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "QTY")]
    quantity: String,
    #[tabled(rename = "UNIT PRICE")]
    unit_price: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
}

fn print_summary(data: &InvoiceData, output: &PathBuf) {
    let symbol = &data.currency_symbol;

    let rows: Vec<ItemRow> = data
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| ItemRow {
            index: idx + 1,
            description: item.description.clone(),
            quantity: format!("{}", item.quantity),
            unit_price: format_money(item.unit_price, symbol),
            amount: format_money(item.amount, symbol),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    println!();
    println!("Generated {}", data.number);
    println!("  Client:   {}", data.client.name);
    println!("  Date:     {}", data.date);
    println!("  Subtotal: {}", format_money(data.subtotal, symbol));
    if data.tax_rate > 0.0 {
        println!(
            "  Tax:      {} ({}%)",
            format_money(data.tax_amount, symbol),
            data.tax_rate
        );
    }
    println!("  Total:    {}", format_money(data.total, symbol));
    println!("  Saved:    {}", output.display());
}
