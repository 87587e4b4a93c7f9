pub mod service;

pub use service::{BookingConfirmation, BookingDraft, BookingService};
