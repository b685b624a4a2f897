//! Request handlers mapping JSON bodies onto the evaluators.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::{json, Value};
use tracing::debug;

use super::error::ApiError;
use super::schema::{GridRequest, GridResponse, PointRequest, PointResponse};
use crate::fields::{electric_field_at, potential_at};
use crate::grid::{compute_grid, evaluate_grid};
use crate::math::{magnitude, mesh_rows, R2};

/// Evaluates a grid request synchronously.
///
/// # Errors
///
/// [`ApiError::NoCharges`] for an empty charge list, [`ApiError::Field`] for a zero resolution.
pub fn grid_response(req: GridRequest) -> Result<GridResponse, ApiError> {
    if req.charges.is_empty() {
        return Err(ApiError::NoCharges);
    }
    let b = req.bounds;
    let grid = compute_grid(b.xmin, b.xmax, b.ymin, b.ymax, req.resolution, req.resolution)?;
    let field = evaluate_grid(grid, &req.charges, req.softening)?;

    Ok(GridResponse {
        x: mesh_rows(&field.grid.x),
        y: mesh_rows(&field.grid.y),
        ex: mesh_rows(&field.ex),
        ey: mesh_rows(&field.ey),
        v: mesh_rows(&field.v),
        charges: req.charges,
    })
}

/// Evaluates a single-point request.
///
/// # Errors
///
/// [`ApiError::NoCharges`] for an empty charge list.
pub fn point_response(req: PointRequest) -> Result<PointResponse, ApiError> {
    if req.charges.is_empty() {
        return Err(ApiError::NoCharges);
    }
    let p = R2::from(req.point);
    let e = electric_field_at(p, &req.charges, req.softening)?;
    let v = potential_at(p, &req.charges, req.softening)?;

    Ok(PointResponse {
        point: req.point,
        e: e.into(),
        e_magnitude: magnitude(&e),
        v,
        charges: req.charges,
    })
}

/// `POST /api/calculate`
pub async fn calculate(
    payload: Result<Json<GridRequest>, JsonRejection>,
) -> Result<Json<GridResponse>, ApiError> {
    let Json(req) = payload?;
    debug!(charges = req.charges.len(), resolution = req.resolution, "grid request");
    // Large resolutions are CPU bound; keep them off the async workers.
    let response = tokio::task::spawn_blocking(move || grid_response(req))
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))??;
    Ok(Json(response))
}

/// `POST /api/calculate_point`
pub async fn calculate_point(
    payload: Result<Json<PointRequest>, JsonRejection>,
) -> Result<Json<PointResponse>, ApiError> {
    let Json(req) = payload?;
    debug!(charges = req.charges.len(), x = req.point.x, y = req.point.y, "point request");
    Ok(Json(point_response(req)?))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
