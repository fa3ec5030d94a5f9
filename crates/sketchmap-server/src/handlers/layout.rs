//! Stateless full-batch layout handler (demo rendering path).

use axum::Json;

use sketchmap_layout::LayoutResult;

use crate::error::ApiError;
use crate::schema::LayoutRequest;

/// Lays out one complete concept set without touching any session.
///
/// `POST /layout`
pub async fn layout_batch(
    Json(req): Json<LayoutRequest>,
) -> Result<Json<LayoutResult>, ApiError> {
    Ok(Json(sketchmap_layout::layout(&req.concepts)))
}
