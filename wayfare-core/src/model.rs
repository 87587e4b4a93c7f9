use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tour package as stored and served.
///
/// Identity is assigned at creation and never changes; every other field is
/// replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourPackage {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Calendar date of the tour, e.g. "2024-06-15".
    pub date: String,
    /// Time of day, e.g. "10:00".
    pub time: String,
    /// Image URI shown in listings.
    pub image: String,
}

/// Validated package fields, ready to persist. Produced by the catalog
/// validation pass; carries no id because the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageFields {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date: String,
    pub time: String,
    pub image: String,
}

impl PackageFields {
    pub fn into_package(self, id: Uuid) -> TourPackage {
        TourPackage {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            date: self.date,
            time: self.time,
            image: self.image,
        }
    }
}

/// Customer contact block carried on bookings and invoices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A persisted booking. `total_price` is a snapshot of
/// `travelers x package.price` taken at booking time; later package price
/// changes never rewrite it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    /// Soft reference: the package may be deleted out from under it.
    pub package_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub travelers: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub package_id: Uuid,
    pub customer: Customer,
    pub travelers: i32,
    pub special_requests: Option<String>,
}

/// Admin listing row: a booking joined with its package details.
/// `package` is `None` when the referenced package has been deleted.
#[derive(Debug, Clone, Serialize)]
pub struct BookingWithPackage {
    #[serde(flatten)]
    pub booking: Booking,
    pub package: Option<TourPackage>,
}

/// Price snapshot rule: travelers times the per-person price at call time.
pub fn total_price(travelers: i32, price_per_person: f64) -> f64 {
    f64::from(travelers) * price_per_person
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_price_is_travelers_times_price() {
        assert_eq!(total_price(3, 100.0), 300.0);
        assert_eq!(total_price(1, 49.5), 49.5);
    }

    #[test]
    fn booking_serializes_camel_case() {
        let booking = Booking {
            id: Uuid::new_v4(),
            package_id: Uuid::new_v4(),
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-0100".into(),
            travelers: 2,
            special_requests: None,
            total_price: 200.0,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&booking).unwrap();
        assert!(value.get("packageId").is_some());
        assert!(value.get("totalPrice").is_some());
        assert!(value.get("createdAt").is_some());
        // Omitted entirely when the customer left no requests.
        assert!(value.get("specialRequests").is_none());
    }
}
