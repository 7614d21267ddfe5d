use crate::AppState;
use crate::domain::Driver;
use crate::error::ApiError;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

pub const DRIVER_NOT_FOUND: &str = "Driver not found";

pub fn drivers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers_handler))
        .route("/ref/{driver_ref}", get(get_driver_handler))
        .route("/{driver_ref}", get(get_driver_handler))
}

async fn list_drivers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Driver>>, ApiError> {
    let drivers = state.repo.list_drivers().await?;
    Ok(Json(drivers))
}

async fn get_driver_handler(
    State(state): State<AppState>,
    Path(driver_ref): Path<String>,
) -> Result<Json<Driver>, ApiError> {
    state
        .repo
        .get_driver_by_ref(&driver_ref)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(DRIVER_NOT_FOUND))
}
