use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use crate::error::{InvoiceError, Result};
use crate::invoice::{format_money, InvoiceData};

// US letter, 1in margins
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 25.4;
const LEFT: f32 = MARGIN;
const RIGHT: f32 = PAGE_WIDTH - MARGIN;

// Line items table geometry (all in mm, baselines from the page bottom)
const TABLE_TOP: f32 = 168.0;
const ROW_PITCH: f32 = 7.0;
const COL_DESC: f32 = LEFT + 10.0;
const COL_QTY: f32 = LEFT + 105.0;
const COL_PRICE: f32 = LEFT + 135.0;

/// Line items that fit on the single page above the totals block
pub const MAX_ITEMS: usize = 12;

fn pdf_err(e: impl std::fmt::Display) -> InvoiceError {
    InvoiceError::PdfRender(e.to_string())
}

/// Approximate Helvetica advance widths in 1/1000 em. Used to right-align
/// the numeric columns and center the footer without embedding a font.
fn glyph_width(c: char) -> u32 {
    match c {
        'i' | 'j' | 'l' => 222,
        ' ' | ',' | '.' | ':' | ';' | '/' | '!' | 'f' | 't' => 278,
        'r' | '-' | '(' | ')' => 333,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' => 500,
        'm' => 833,
        'w' => 722,
        'I' => 278,
        'J' => 500,
        'M' => 833,
        'W' => 944,
        '@' => 1015,
        '%' => 889,
        _ if c.is_ascii_uppercase() => 690,
        _ => 556,
    }
}

/// Estimated width of `text` at `size` points, in mm
fn text_width(text: &str, size: f32) -> f32 {
    let em: u32 = text.chars().map(glyph_width).sum();
    em as f32 / 1000.0 * size * 25.4 / 72.0
}

/// Truncate `text` with an ellipsis so it fits into `max_width` mm
fn fit_to_width(text: &str, size: f32, max_width: f32) -> String {
    if text_width(text, size) <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        if text_width(&out, size) + text_width("...", size) > max_width {
            break;
        }
        out.push(c);
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out.push_str("...");
    out
}

struct Canvas {
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Canvas {
    fn text(&self, text: &str, size: f32, x: f32, y: f32, font: &IndirectFontRef) {
        self.layer.use_text(text, size, Mm(x), Mm(y), font);
    }

    fn text_right(&self, text: &str, size: f32, right: f32, y: f32, font: &IndirectFontRef) {
        self.text(text, size, right - text_width(text, size), y, font);
    }

    fn text_center(&self, text: &str, size: f32, center: f32, y: f32, font: &IndirectFontRef) {
        self.text(text, size, center - text_width(text, size) / 2.0, y, font);
    }

    fn rule(&self, x1: f32, x2: f32, y: f32, thickness: f32, gray: f32) {
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(gray, gray, gray, None)));
        self.layer.set_outline_thickness(thickness);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x1), Mm(y)), false),
                (Point::new(Mm(x2), Mm(y)), false),
            ],
            is_closed: false,
        });
    }

    fn set_text_gray(&self, gray: f32) {
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(gray, gray, gray, None)));
    }
}

/// Render the invoice as a single-page PDF and return the document bytes
pub fn render(data: &InvoiceData) -> Result<Vec<u8>> {
    if data.items.len() > MAX_ITEMS {
        return Err(InvoiceError::TooManyItems {
            count: data.items.len(),
            max: MAX_ITEMS,
        });
    }

    let (doc, page_idx, layer_idx) = PdfDocument::new(
        format!("Invoice {}", data.number),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let canvas = Canvas {
        layer: doc.get_page(page_idx).get_layer(layer_idx),
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err)?,
    };

    draw_header(&canvas, data);
    draw_bill_to(&canvas, data);
    let totals_top = draw_items_table(&canvas, data);
    draw_totals(&canvas, data, totals_top);
    draw_footer(&canvas, data);

    doc.save_to_bytes().map_err(pdf_err)
}

/// Company block on the left, invoice banner and dates on the right
fn draw_header(canvas: &Canvas, data: &InvoiceData) {
    let company = &data.company;
    canvas.text(&company.name, 18.0, LEFT, 248.0, &canvas.bold);
    canvas.text(&company.address, 10.0, LEFT, 240.0, &canvas.regular);
    let city_line = format!("{}, {} {}", company.city, company.state, company.zip);
    canvas.text(&city_line, 10.0, LEFT, 235.0, &canvas.regular);
    canvas.text(&company.email, 10.0, LEFT, 230.0, &canvas.regular);
    if let Some(phone) = &company.phone {
        canvas.text(phone, 10.0, LEFT, 225.0, &canvas.regular);
    }

    canvas.text_right("INVOICE", 24.0, RIGHT, 245.0, &canvas.bold);
    let number = format!("Invoice #: {}", data.number);
    canvas.text_right(&number, 10.0, RIGHT, 236.0, &canvas.regular);
    let date = format!("Date: {}", data.date);
    canvas.text_right(&date, 10.0, RIGHT, 231.0, &canvas.regular);
    let due = format!("Due Date: {}", data.due_date);
    canvas.text_right(&due, 10.0, RIGHT, 226.0, &canvas.regular);

    canvas.rule(LEFT, RIGHT, 219.0, 0.5, 0.6);
}

fn draw_bill_to(canvas: &Canvas, data: &InvoiceData) {
    let client = &data.client;
    canvas.text("Bill To:", 11.0, LEFT, 211.0, &canvas.bold);

    let mut y = 205.0;
    canvas.text(&client.name, 10.0, LEFT, y, &canvas.bold);
    y -= 5.0;
    if let Some(contact) = &client.contact {
        canvas.text(contact, 10.0, LEFT, y, &canvas.regular);
        y -= 5.0;
    }
    canvas.text(&client.address, 10.0, LEFT, y, &canvas.regular);
    y -= 5.0;
    let city_line = format!("{}, {} {}", client.city, client.state, client.zip);
    canvas.text(&city_line, 10.0, LEFT, y, &canvas.regular);
    y -= 5.0;
    canvas.text(&client.email, 10.0, LEFT, y, &canvas.regular);
}

/// Draw the line items table and return the baseline below its last row
fn draw_items_table(canvas: &Canvas, data: &InvoiceData) -> f32 {
    let symbol = &data.currency_symbol;

    canvas.text("#", 10.0, LEFT, TABLE_TOP, &canvas.bold);
    canvas.text("Description", 10.0, COL_DESC, TABLE_TOP, &canvas.bold);
    canvas.text_right("Qty", 10.0, COL_QTY, TABLE_TOP, &canvas.bold);
    canvas.text_right("Unit Price", 10.0, COL_PRICE, TABLE_TOP, &canvas.bold);
    canvas.text_right("Amount", 10.0, RIGHT, TABLE_TOP, &canvas.bold);
    canvas.rule(LEFT, RIGHT, TABLE_TOP - 2.5, 1.0, 0.0);

    let desc_width = COL_QTY - COL_DESC - 18.0;
    let mut y = TABLE_TOP - ROW_PITCH;
    for (i, item) in data.items.iter().enumerate() {
        canvas.text(&format!("{}", i + 1), 10.0, LEFT, y, &canvas.regular);
        let description = fit_to_width(&item.description, 10.0, desc_width);
        canvas.text(&description, 10.0, COL_DESC, y, &canvas.regular);
        canvas.text_right(&format_quantity(item.quantity), 10.0, COL_QTY, y, &canvas.regular);
        canvas.text_right(
            &format_money(item.unit_price, symbol),
            10.0,
            COL_PRICE,
            y,
            &canvas.regular,
        );
        canvas.text_right(
            &format_money(item.amount, symbol),
            10.0,
            RIGHT,
            y,
            &canvas.regular,
        );
        canvas.rule(LEFT, RIGHT, y - 2.5, 0.5, 0.75);
        y -= ROW_PITCH;
    }

    y
}

/// Subtotal, optional tax line, and total, right-aligned under the table
fn draw_totals(canvas: &Canvas, data: &InvoiceData, top: f32) {
    let symbol = &data.currency_symbol;
    let mut y = top - 4.0;

    canvas.text_right("Subtotal:", 10.0, COL_PRICE, y, &canvas.regular);
    canvas.text_right(&format_money(data.subtotal, symbol), 10.0, RIGHT, y, &canvas.regular);
    y -= 6.0;

    if data.tax_rate > 0.0 {
        let label = format!("Tax ({}%):", data.tax_rate);
        canvas.text_right(&label, 10.0, COL_PRICE, y, &canvas.regular);
        canvas.text_right(&format_money(data.tax_amount, symbol), 10.0, RIGHT, y, &canvas.regular);
        y -= 6.0;
    }

    canvas.rule(COL_PRICE - 25.0, RIGHT, y + 4.0, 1.0, 0.0);
    canvas.text_right("Total:", 11.0, COL_PRICE, y, &canvas.bold);
    canvas.text_right(&format_money(data.total, symbol), 11.0, RIGHT, y, &canvas.bold);
    y -= 14.0;

    canvas.text("Payment Terms:", 10.0, LEFT, y, &canvas.bold);
    let label_width = text_width("Payment Terms:", 10.0);
    canvas.text(&data.payment_terms, 10.0, LEFT + label_width + 2.0, y, &canvas.regular);
}

/// Centered contact footer at the bottom of the page
fn draw_footer(canvas: &Canvas, data: &InvoiceData) {
    let company = &data.company;
    let center = PAGE_WIDTH / 2.0;

    canvas.set_text_gray(0.45);

    let address = format!(
        "{}, {}, {} {}, {}",
        company.address, company.city, company.state, company.zip, company.country
    );
    canvas.text_center(&address, 9.0, center, 20.0, &canvas.regular);

    let contact = match &company.phone {
        Some(phone) => format!("{} - {}", company.email, phone),
        None => company.email.clone(),
    };
    canvas.text_center(&contact, 9.0, center, 15.5, &canvas.regular);

    if let Some(tax_id) = &company.tax_id {
        let line = format!("Tax ID: {}", tax_id);
        canvas.text_center(&line, 9.0, center, 11.0, &canvas.regular);
    }
}

fn format_quantity(qty: f64) -> String {
    if qty.fract() == 0.0 {
        format!("{}", qty as i64)
    } else {
        format!("{:.2}", qty)
    }
}
