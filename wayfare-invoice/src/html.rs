use crate::document::InvoiceDocument;

/// Escapes a value for interpolation into the HTML template.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Renders the invoice into its fixed tabular HTML layout: a customer
/// block followed by a single-row table with the package details.
pub fn render_html(doc: &InvoiceDocument) -> String {
    format!(
        r#"<html>
<head>
<style>
    body {{ font-family: Arial, sans-serif; margin: 20px; }}
    .invoice-container {{ border: 1px solid #ddd; padding: 20px; border-radius: 10px; }}
    h1 {{ color: #333; }}
    table {{ width: 100%; margin-top: 20px; border-collapse: collapse; }}
    table, th, td {{ border: 1px solid #ddd; text-align: left; }}
    th, td {{ padding: 8px; }}
    .total {{ font-weight: bold; color: green; }}
</style>
</head>
<body>
<div class="invoice-container">
    <h1>Travel Package Invoice</h1>
    <p><strong>Customer Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Phone:</strong> {phone}</p>
    <h3>Package Details</h3>
    <table>
        <tr>
            <th>Package</th>
            <th>Date</th>
            <th>Time</th>
            <th>Price per Person</th>
            <th>Number of Travelers</th>
            <th>Total Price</th>
        </tr>
        <tr>
            <td>{title}</td>
            <td>{date}</td>
            <td>{time}</td>
            <td>{price}</td>
            <td>{travelers}</td>
            <td class="total">{total}</td>
        </tr>
    </table>
</div>
</body>
</html>
"#,
        name = escape(&doc.customer.name),
        email = escape(&doc.customer.email),
        phone = escape(&doc.customer.phone),
        title = escape(&doc.title),
        date = escape(&doc.date),
        time = escape(&doc.time),
        price = money(doc.price_per_person),
        travelers = doc.travelers,
        total = money(doc.total_price),
    )
}
