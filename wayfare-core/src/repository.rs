use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::model::{Booking, BookingWithPackage, NewBooking, PackageFields, TourPackage};

/// Repository trait for tour-package data access.
#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<TourPackage>>;

    async fn get(&self, id: Uuid) -> Result<Option<TourPackage>>;

    /// Persists validated fields under a freshly assigned id.
    async fn insert(&self, fields: PackageFields) -> Result<TourPackage>;

    /// Full-record replace. Returns the updated record, or `None` when no
    /// package exists under `id`.
    async fn replace(&self, id: Uuid, fields: PackageFields) -> Result<Option<TourPackage>>;

    /// Returns the removed record, or `None` when no package exists under
    /// `id`. Delete is not idempotent: a second call is a miss.
    async fn remove(&self, id: Uuid) -> Result<Option<TourPackage>>;
}

/// Repository trait for booking data access.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Looks up the referenced package and inserts the booking as one
    /// consistent step, so the price snapshot cannot straddle a concurrent
    /// package update. Returns the persisted booking together with the
    /// package the price was taken from, or `None` when the package does
    /// not exist — in which case nothing is written.
    async fn book(&self, new: NewBooking) -> Result<Option<(Booking, TourPackage)>>;

    /// Every booking joined with its package details; dangling references
    /// yield a row with no package.
    async fn list_with_packages(&self) -> Result<Vec<BookingWithPackage>>;
}
