use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;
use wayfare_catalog::PackageDraft;
use wayfare_core::TourPackage;
use wayfare_invoice::InvoiceRequest;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/packages", get(list_packages))
        .route("/packages/admin", post(create_package))
        .route(
            "/packages/admin/{id}",
            put(update_package).delete(delete_package),
        )
        .route("/packages/invoice", post(generate_invoice))
        .route("/packages/{id}", get(get_package))
}

async fn list_packages(State(state): State<AppState>) -> Result<Json<Vec<TourPackage>>, ApiError> {
    Ok(Json(state.packages.list().await?))
}

async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TourPackage>, ApiError> {
    Ok(Json(state.packages.get(id).await?))
}

pub(crate) async fn create_package(
    State(state): State<AppState>,
    Json(draft): Json<PackageDraft>,
) -> Result<Response, ApiError> {
    let package = state.packages.create(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Package added successfully",
            "package": package,
        })),
    )
        .into_response())
}

pub(crate) async fn update_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<PackageDraft>,
) -> Result<Response, ApiError> {
    let package = state.packages.update(id, draft).await?;
    Ok(Json(json!({
        "message": "Package updated successfully",
        "package": package,
    }))
    .into_response())
}

pub(crate) async fn delete_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let package = state.packages.delete(id).await?;
    Ok(Json(json!({
        "message": "Package deleted successfully",
        "package": package,
    }))
    .into_response())
}

/// Standalone invoice: validates the caller-supplied details, renders the
/// PDF, and streams it back as an attachment.
async fn generate_invoice(Json(request): Json<InvoiceRequest>) -> Result<Response, ApiError> {
    let document = request.into_document()?;
    let bytes = wayfare_invoice::render_pdf(&document)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"invoice.pdf\"",
            ),
        ],
        bytes,
    )
        .into_response())
}
