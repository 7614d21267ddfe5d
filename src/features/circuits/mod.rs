pub mod lookup;

use crate::AppState;
use crate::domain::Circuit;
use crate::error::ApiError;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use lookup::CircuitLookup;
use tracing::debug;

pub const CIRCUIT_NOT_FOUND: &str = "Circuit not found";

pub fn circuits_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_circuits_handler))
        .route("/ref/{circuit_ref}", get(get_circuit_by_ref_handler))
        .route("/{param}", get(get_circuit_handler))
}

async fn list_circuits_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Circuit>>, ApiError> {
    let circuits = state.repo.list_circuits().await?;
    Ok(Json(circuits))
}

async fn get_circuit_by_ref_handler(
    State(state): State<AppState>,
    Path(circuit_ref): Path<String>,
) -> Result<Json<Circuit>, ApiError> {
    find_circuit(&state, CircuitLookup::ByRef(circuit_ref)).await
}

async fn get_circuit_handler(
    State(state): State<AppState>,
    Path(param): Path<String>,
) -> Result<Json<Circuit>, ApiError> {
    find_circuit(&state, CircuitLookup::from_param(&param)).await
}

async fn find_circuit(state: &AppState, lookup: CircuitLookup) -> Result<Json<Circuit>, ApiError> {
    let circuit = match &lookup {
        CircuitLookup::ById(id) => state.repo.get_circuit_by_id(*id).await?,
        CircuitLookup::ByRef(circuit_ref) => state.repo.get_circuit_by_ref(circuit_ref).await?,
    };

    if let Some(circuit) = &circuit {
        debug!(%circuit, ?lookup, "circuit resolved");
    }

    circuit.map(Json).ok_or(ApiError::NotFound(CIRCUIT_NOT_FOUND))
}
