use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use wayfare_booking::BookingDraft;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/bookings", post(create_booking))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(draft): Json<BookingDraft>,
) -> Result<Response, ApiError> {
    let confirmation = state.bookings.book(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Booking successful",
            "booking": confirmation.booking,
            "invoice": confirmation.invoice,
        })),
    )
        .into_response())
}
