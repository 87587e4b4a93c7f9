use wayfare_booking::BookingService;
use wayfare_catalog::PackageService;

/// Shared handler state. The services carry the injected repository
/// handles; there is no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub packages: PackageService,
    pub bookings: BookingService,
}
