pub mod circuits;
pub mod constructors;
pub mod drivers;
pub mod races;

use crate::AppState;
use axum::Router;

// api router, where features are composed
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/circuits", circuits::circuits_router())
        .nest("/races", races::races_router())
        .nest("/drivers", drivers::drivers_router())
        .nest("/constructors", constructors::constructors_router())
}
