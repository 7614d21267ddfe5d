use crate::AppState;
use crate::domain::Race;
use crate::error::ApiError;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use tracing::debug;

pub const RACE_NOT_FOUND: &str = "Race not found";
pub const NO_RACES_FOR_CIRCUIT: &str = "No races found for this circuit";
pub const NO_RACES_FOR_SEASON: &str = "No races found for this season";

// static segments ("circuits", "season") win over the {year} capture
pub fn races_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_races_handler))
        .route("/circuits/{circuit_ref}", get(races_by_circuit_handler))
        .route("/season/{year}", get(races_by_season_handler))
        .route("/season/{year}/{round}", get(race_by_year_round_handler))
        .route("/{year}/{round}", get(race_by_year_round_handler))
}

async fn list_races_handler(State(state): State<AppState>) -> Result<Json<Vec<Race>>, ApiError> {
    let races = state.repo.list_races().await?;
    Ok(Json(races))
}

async fn races_by_circuit_handler(
    State(state): State<AppState>,
    Path(circuit_ref): Path<String>,
) -> Result<Json<Vec<Race>>, ApiError> {
    let races = state.repo.get_races_by_circuit_ref(&circuit_ref).await?;
    non_empty(races, NO_RACES_FOR_CIRCUIT)
}

async fn races_by_season_handler(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<Vec<Race>>, ApiError> {
    let races = state.repo.get_races_by_season(&year).await?;
    non_empty(races, NO_RACES_FOR_SEASON)
}

async fn race_by_year_round_handler(
    State(state): State<AppState>,
    Path((year, round)): Path<(String, String)>,
) -> Result<Json<Race>, ApiError> {
    let race = state
        .repo
        .get_race_by_year_round(&year, &round)
        .await?
        .ok_or(ApiError::NotFound(RACE_NOT_FOUND))?;

    debug!(%race, circuit = %race.circuit_name, "race resolved");
    Ok(Json(race))
}

// filtered collections treat an empty result as not-found, plain listings don't
fn non_empty(races: Vec<Race>, message: &'static str) -> Result<Json<Vec<Race>>, ApiError> {
    if races.is_empty() {
        return Err(ApiError::NotFound(message));
    }
    Ok(Json(races))
}
