use crate::AppState;
use crate::domain::Constructor;
use crate::error::ApiError;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

pub const CONSTRUCTOR_NOT_FOUND: &str = "Constructor not found";

pub fn constructors_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_constructors_handler))
        .route("/ref/{constructor_ref}", get(get_constructor_handler))
        .route("/{constructor_ref}", get(get_constructor_handler))
}

async fn list_constructors_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Constructor>>, ApiError> {
    let constructors = state.repo.list_constructors().await?;
    Ok(Json(constructors))
}

async fn get_constructor_handler(
    State(state): State<AppState>,
    Path(constructor_ref): Path<String>,
) -> Result<Json<Constructor>, ApiError> {
    state
        .repo
        .get_constructor_by_ref(&constructor_ref)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(CONSTRUCTOR_NOT_FOUND))
}
