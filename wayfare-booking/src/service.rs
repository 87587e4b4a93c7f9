use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use wayfare_core::{
    repository::BookingRepository, Booking, BookingWithPackage, Customer, Error, NewBooking,
    Result,
};
use wayfare_invoice::Invoice;

pub const MISSING_FIELDS: &str =
    "All booking fields (name, email, phone, travelers, and packageId) are required.";
pub const INVALID_TRAVELERS: &str = "Travelers must be a valid positive number.";

/// Incoming booking request. Optional at the wire level so missing fields
/// surface as validation errors instead of deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub travelers: Option<i32>,
    pub package_id: Option<Uuid>,
    pub special_requests: Option<String>,
}

/// The persisted booking together with its composed invoice view.
#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub booking: Booking,
    pub invoice: Invoice,
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn validate_draft(draft: BookingDraft) -> Result<NewBooking> {
    let fields = (
        required(draft.name),
        required(draft.email),
        required(draft.phone),
        draft.travelers,
        draft.package_id,
    );
    let (Some(name), Some(email), Some(phone), Some(travelers), Some(package_id)) = fields else {
        return Err(Error::Validation(MISSING_FIELDS.to_string()));
    };
    if travelers <= 0 {
        return Err(Error::Validation(INVALID_TRAVELERS.to_string()));
    }

    Ok(NewBooking {
        package_id,
        customer: Customer { name, email, phone },
        travelers,
        special_requests: draft.special_requests.filter(|s| !s.trim().is_empty()),
    })
}

/// Books packages: validates the request, takes the price snapshot through
/// the repository's consistent lookup-and-insert step, and composes the
/// inline invoice view.
#[derive(Clone)]
pub struct BookingService {
    repo: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    /// No idempotency key: resubmitting the same request books again.
    pub async fn book(&self, draft: BookingDraft) -> Result<BookingConfirmation> {
        let new = validate_draft(draft)?;
        let customer = new.customer.clone();
        let travelers = new.travelers;
        let special_requests = new.special_requests.clone();

        let (booking, package) = self
            .repo
            .book(new)
            .await?
            .ok_or(Error::NotFound("Package"))?;

        info!(
            booking_id = %booking.id,
            package_id = %package.id,
            travelers,
            total_price = booking.total_price,
            "booking created"
        );

        let invoice = Invoice::compose(
            customer,
            &package,
            travelers,
            booking.total_price,
            special_requests,
        );

        Ok(BookingConfirmation { booking, invoice })
    }

    /// Admin view: every booking with its package details joined in.
    pub async fn list_with_packages(&self) -> Result<Vec<BookingWithPackage>> {
        self.repo.list_with_packages().await
    }
}
