use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::debug;
use wayfare_core::{Error, Result};

use crate::document::InvoiceDocument;

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Renders the invoice into a PDF byte stream: customer block followed by
/// the single-row package table, on one A4 page.
pub fn render_pdf(doc: &InvoiceDocument) -> Result<Vec<u8>> {
    let (pdf, page, layer) =
        PdfDocument::new("Travel Package Invoice", Mm(210.0), Mm(297.0), "invoice");

    let regular = pdf
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| Error::Render(e.to_string()))?;
    let bold = pdf
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| Error::Render(e.to_string()))?;

    let layer = pdf.get_page(page).get_layer(layer);

    layer.use_text("Travel Package Invoice", 18.0, Mm(20.0), Mm(270.0), &bold);

    // Customer block.
    layer.use_text("Customer Name:", 11.0, Mm(20.0), Mm(252.0), &bold);
    layer.use_text(doc.customer.name.as_str(), 11.0, Mm(58.0), Mm(252.0), &regular);
    layer.use_text("Email:", 11.0, Mm(20.0), Mm(245.0), &bold);
    layer.use_text(doc.customer.email.as_str(), 11.0, Mm(58.0), Mm(245.0), &regular);
    layer.use_text("Phone:", 11.0, Mm(20.0), Mm(238.0), &bold);
    layer.use_text(doc.customer.phone.as_str(), 11.0, Mm(58.0), Mm(238.0), &regular);

    layer.use_text("Package Details", 13.0, Mm(20.0), Mm(222.0), &bold);

    // Column origins for the single-row table, in mm from the left edge.
    let columns = [20.0, 55.0, 82.0, 105.0, 140.0, 172.0];

    let headers = [
        "Package",
        "Date",
        "Time",
        "Price per Person",
        "Travelers",
        "Total Price",
    ];
    for (x, header) in columns.into_iter().zip(headers) {
        layer.use_text(header, 10.0, Mm(x), Mm(210.0), &bold);
    }

    let row = [
        doc.title.clone(),
        doc.date.clone(),
        doc.time.clone(),
        money(doc.price_per_person),
        doc.travelers.to_string(),
        money(doc.total_price),
    ];
    for (x, cell) in columns.into_iter().zip(row) {
        layer.use_text(cell, 10.0, Mm(x), Mm(202.0), &regular);
    }

    let bytes = pdf
        .save_to_bytes()
        .map_err(|e| Error::Render(e.to_string()))?;
    debug!(size = bytes.len(), "invoice pdf rendered");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfare_core::Customer;

    #[test]
    fn produces_a_pdf_stream() {
        let doc = InvoiceDocument {
            customer: Customer {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                phone: "555-0100".into(),
            },
            title: "Beach Tour".into(),
            date: "2024-06-15".into(),
            time: "10:00".into(),
            price_per_person: 100.0,
            travelers: 3,
            total_price: 300.0,
        };

        let bytes = render_pdf(&doc).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 500);
    }
}
