//! Database seeding endpoint.

use axum::extract::State;
use axum::response::Json;

use crate::routes::{ApiError, Envelope, reject};
use crate::services::seed;
use crate::state::AppState;

/// `POST /api/seed` — wipe the remote store and repopulate it from the
/// fixture dataset. Fails when no store is configured.
pub async fn run(State(state): State<AppState>) -> Result<Json<Envelope<()>>, ApiError> {
    seed::seed_database(&state).await.map_err(|e| reject(&e))?;
    Ok(Json(Envelope::message("Banco de dados populado com sucesso")))
}
