pub mod error;
pub mod model;
pub mod repository;

pub use error::{Error, Result};
pub use model::{
    total_price, Booking, BookingWithPackage, Customer, NewBooking, PackageFields, TourPackage,
};
