use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use uuid::Uuid;
use wayfare_api::{app, AppState};
use wayfare_booking::BookingService;
use wayfare_catalog::PackageService;
use wayfare_core::{
    repository::{BookingRepository, PackageRepository},
    total_price, Booking, BookingWithPackage, NewBooking, PackageFields, Result, TourPackage,
};

/// In-memory stand-in for the Postgres store, backing both repositories so
/// the booking path sees the same package map the catalog writes to.
#[derive(Default)]
pub struct MemoryStore {
    pub packages: Mutex<HashMap<Uuid, TourPackage>>,
    pub bookings: Mutex<Vec<Booking>>,
}

#[async_trait]
impl PackageRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<TourPackage>> {
        Ok(self.packages.lock().unwrap().values().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<TourPackage>> {
        Ok(self.packages.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, fields: PackageFields) -> Result<TourPackage> {
        let package = fields.into_package(Uuid::new_v4());
        self.packages
            .lock()
            .unwrap()
            .insert(package.id, package.clone());
        Ok(package)
    }

    async fn replace(&self, id: Uuid, fields: PackageFields) -> Result<Option<TourPackage>> {
        let mut packages = self.packages.lock().unwrap();
        if !packages.contains_key(&id) {
            return Ok(None);
        }
        let package = fields.into_package(id);
        packages.insert(id, package.clone());
        Ok(Some(package))
    }

    async fn remove(&self, id: Uuid) -> Result<Option<TourPackage>> {
        Ok(self.packages.lock().unwrap().remove(&id))
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn book(&self, new: NewBooking) -> Result<Option<(Booking, TourPackage)>> {
        let package = match self.packages.lock().unwrap().get(&new.package_id) {
            Some(p) => p.clone(),
            None => return Ok(None),
        };

        let booking = Booking {
            id: Uuid::new_v4(),
            package_id: new.package_id,
            name: new.customer.name,
            email: new.customer.email,
            phone: new.customer.phone,
            travelers: new.travelers,
            special_requests: new.special_requests,
            total_price: total_price(new.travelers, package.price),
            created_at: Utc::now(),
        };
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(Some((booking, package)))
    }

    async fn list_with_packages(&self) -> Result<Vec<BookingWithPackage>> {
        let packages = self.packages.lock().unwrap();
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings
            .iter()
            .map(|b| BookingWithPackage {
                booking: b.clone(),
                package: packages.get(&b.package_id).cloned(),
            })
            .collect())
    }
}

pub fn test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState {
        packages: PackageService::new(store.clone()),
        bookings: BookingService::new(store.clone()),
    };
    (app(state), store)
}
