use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use wayfare_core::BookingWithPackage;

use crate::error::ApiError;
use crate::packages;
use crate::state::AppState;

/// Admin mount. The package routes here are aliases over the canonical
/// handlers in `packages`; there is one handler set, mounted twice for
/// wire compatibility.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/bookings", get(list_bookings))
        .route("/admin/packages", post(packages::create_package))
        .route(
            "/admin/packages/{id}",
            put(packages::update_package).delete(packages::delete_package),
        )
}

async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingWithPackage>>, ApiError> {
    Ok(Json(state.bookings.list_with_packages().await?))
}
