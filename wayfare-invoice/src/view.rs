use serde::Serialize;
use wayfare_core::{Customer, TourPackage};

/// Placeholder shown when the customer left no special requests.
pub const NO_REQUESTS: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePackage {
    pub title: String,
    pub price_per_person: f64,
}

/// Structured invoice view returned inline with the booking-creation
/// response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub customer: Customer,
    pub package: InvoicePackage,
    pub travelers: i32,
    pub total_price: f64,
    pub special_requests: String,
}

impl Invoice {
    pub fn compose(
        customer: Customer,
        package: &TourPackage,
        travelers: i32,
        total_price: f64,
        special_requests: Option<String>,
    ) -> Self {
        Self {
            customer,
            package: InvoicePackage {
                title: package.title.clone(),
                price_per_person: package.price,
            },
            travelers,
            total_price,
            special_requests: special_requests.unwrap_or_else(|| NO_REQUESTS.to_string()),
        }
    }
}
