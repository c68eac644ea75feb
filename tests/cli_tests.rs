use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn invoicegen_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("invoicegen"))
}

/// A minimal valid data file with the given invoice table contents
fn data_file(invoice_table: &str) -> String {
    format!(
        r#"[company]
name = "Test Co"
address = "1 Test Way"
city = "Testville"
state = "TS"
zip = "00001"
country = "USA"
email = "billing@test.example"

[client]
name = "Client Co"
email = "ap@client.example"
address = "2 Client Road"
city = "Clientburg"
state = "CL"
zip = "00002"

[invoice]
{invoice_table}

[[items]]
description = "Design consultation"
quantity = 3
unit_price = 10.00

[[items]]
description = "Project setup"
quantity = 1
unit_price = 50.00
"#
    )
}

const DEFAULT_INVOICE_TABLE: &str = r#"number = "INV-2026-0042"
date = "2026-01-15"
currency = "USD"
currency_symbol = "$"
due_days = 30
tax_rate = 0.0"#;

#[test]
fn test_help() {
    invoicegen_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Single-shot PDF invoice generator"));
}

#[test]
fn test_version() {
    invoicegen_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("invoicegen"));
}

#[test]
fn test_generate_default_sample() {
    let temp_dir = TempDir::new().unwrap();

    invoicegen_cmd()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated INV-2026-0001"))
        .stdout(predicate::str::contains("Subtotal: $80.00"))
        .stdout(predicate::str::contains("Total:    $80.00"))
        .stdout(predicate::str::contains("Saved:    invoice.pdf"));

    let pdf = fs::read(temp_dir.path().join("invoice.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn test_generate_lists_items() {
    let temp_dir = TempDir::new().unwrap();

    invoicegen_cmd()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DESCRIPTION"))
        .stdout(predicate::str::contains("Design consultation"))
        .stdout(predicate::str::contains("Project setup"));
}

#[test]
fn test_custom_output_path() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.pdf");

    invoicegen_cmd()
        .current_dir(temp_dir.path())
        .args(["--output", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("out.pdf"));

    let pdf = fs::read(&output).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
    assert!(!temp_dir.path().join("invoice.pdf").exists());
}

#[test]
fn test_rerun_overwrites_with_same_totals() {
    let temp_dir = TempDir::new().unwrap();

    for _ in 0..2 {
        invoicegen_cmd()
            .current_dir(temp_dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Total:    $80.00"));
    }

    let pdf = fs::read(temp_dir.path().join("invoice.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn test_data_file_with_tax() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("invoice.toml");
    let table = DEFAULT_INVOICE_TABLE.replace("tax_rate = 0.0", "tax_rate = 0.10");
    fs::write(&data_path, data_file(&table)).unwrap();

    invoicegen_cmd()
        .current_dir(temp_dir.path())
        .args(["--data", data_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated INV-2026-0042"))
        .stdout(predicate::str::contains("Subtotal: $80.00"))
        .stdout(predicate::str::contains("Tax:      $8.00 (10%)"))
        .stdout(predicate::str::contains("Total:    $88.00"));
}

#[test]
fn test_missing_data_file() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("nonexistent.toml");

    invoicegen_cmd()
        .current_dir(temp_dir.path())
        .args(["--data", data_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_malformed_data_file() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("invoice.toml");
    fs::write(&data_path, "this is not [valid toml").unwrap();

    invoicegen_cmd()
        .current_dir(temp_dir.path())
        .args(["--data", data_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse invoice data"));
}

#[test]
fn test_no_items() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("invoice.toml");
    let content = data_file(DEFAULT_INVOICE_TABLE);
    let without_items = &content[..content.find("[[items]]").unwrap()];
    fs::write(&data_path, without_items).unwrap();

    invoicegen_cmd()
        .current_dir(temp_dir.path())
        .args(["--data", data_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no line items"));
}

#[test]
fn test_invalid_quantity() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("invoice.toml");
    let content = data_file(DEFAULT_INVOICE_TABLE).replace("quantity = 3", "quantity = 0");
    fs::write(&data_path, content).unwrap();

    invoicegen_cmd()
        .current_dir(temp_dir.path())
        .args(["--data", data_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid quantity"));
}

#[test]
fn test_negative_unit_price() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("invoice.toml");
    let content =
        data_file(DEFAULT_INVOICE_TABLE).replace("unit_price = 50.00", "unit_price = -50.00");
    fs::write(&data_path, content).unwrap();

    invoicegen_cmd()
        .current_dir(temp_dir.path())
        .args(["--data", data_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid unit price"));
}

#[test]
fn test_invalid_tax_rate() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("invoice.toml");
    let table = DEFAULT_INVOICE_TABLE.replace("tax_rate = 0.0", "tax_rate = 1.5");
    fs::write(&data_path, data_file(&table)).unwrap();

    invoicegen_cmd()
        .current_dir(temp_dir.path())
        .args(["--data", data_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tax rate"));
}

#[test]
fn test_unwritable_output_location() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("missing-dir").join("invoice.pdf");

    invoicegen_cmd()
        .current_dir(temp_dir.path())
        .args(["--output", output.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    assert!(!output.exists());
}

#[test]
fn test_print_sample() {
    invoicegen_cmd()
        .arg("--print-sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("[company]"))
        .stdout(predicate::str::contains("INV-2026-0001"))
        .stdout(predicate::str::contains("[[items]]"));
}

#[test]
fn test_too_many_items() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("invoice.toml");

    let mut content = data_file(DEFAULT_INVOICE_TABLE);
    for i in 0..15 {
        content.push_str(&format!(
            "\n[[items]]\ndescription = \"Extra item {i}\"\nquantity = 1\nunit_price = 5.00\n"
        ));
    }
    fs::write(&data_path, content).unwrap();

    invoicegen_cmd()
        .current_dir(temp_dir.path())
        .args(["--data", data_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single page fits at most"));
}
