use serde::Deserialize;
use wayfare_core::{Error, PackageFields, Result};

pub const MISSING_FIELDS: &str =
    "All fields (title, description, price, image, date, and time) are required.";
pub const INVALID_PRICE: &str = "Price must be a valid positive number.";

/// Incoming package fields as submitted by the client. Everything is
/// optional at the wire level so a missing field is reported through the
/// validation envelope rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackageDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// All-or-nothing validation: the first violated rule rejects the entire
/// write. Presence of all six fields is checked before the price rule.
pub fn validate_draft(draft: PackageDraft) -> Result<PackageFields> {
    let title = required(draft.title);
    let description = required(draft.description);
    let image = required(draft.image);
    let date = required(draft.date);
    let time = required(draft.time);

    match (title, description, draft.price, image, date, time) {
        (Some(title), Some(description), Some(price), Some(image), Some(date), Some(time)) => {
            if !price.is_finite() || price <= 0.0 {
                return Err(Error::Validation(INVALID_PRICE.to_string()));
            }
            Ok(PackageFields {
                title,
                description,
                price,
                date,
                time,
                image,
            })
        }
        _ => Err(Error::Validation(MISSING_FIELDS.to_string())),
    }
}
