use serde::Deserialize;
use wayfare_core::{total_price, Customer, Error, Result};

pub const MISSING_DETAILS: &str = "All customer and package details are required.";
pub const INVALID_TRAVELERS: &str = "Travelers must be a valid positive number.";
pub const INVALID_PRICE: &str = "Price must be a valid positive number.";

/// Request body for the standalone invoice endpoint. This path does not
/// consult the package store: the caller supplies the package details,
/// price included, and the total is computed from them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub travelers: Option<i32>,
    pub package_details: Option<PackageDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackageDetails {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Fully validated invoice, ready for rendering. The fixed tabular layout
/// (customer block plus a single table row) is produced from exactly these
/// fields.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDocument {
    pub customer: Customer,
    pub title: String,
    pub date: String,
    pub time: String,
    pub price_per_person: f64,
    pub travelers: i32,
    pub total_price: f64,
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl InvoiceRequest {
    /// Validates every field and computes the total independently of the
    /// package store.
    pub fn into_document(self) -> Result<InvoiceDocument> {
        let details = self.package_details.unwrap_or_default();

        let fields = (
            required(self.name),
            required(self.email),
            required(self.phone),
            self.travelers,
            required(details.title),
            details.price,
            required(details.date),
            required(details.time),
        );

        let (Some(name), Some(email), Some(phone), Some(travelers), Some(title), Some(price), Some(date), Some(time)) =
            fields
        else {
            return Err(Error::Validation(MISSING_DETAILS.to_string()));
        };

        if travelers <= 0 {
            return Err(Error::Validation(INVALID_TRAVELERS.to_string()));
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(Error::Validation(INVALID_PRICE.to_string()));
        }

        Ok(InvoiceDocument {
            customer: Customer { name, email, phone },
            title,
            date,
            time,
            price_per_person: price,
            travelers,
            total_price: total_price(travelers, price),
        })
    }
}
