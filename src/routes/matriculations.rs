//! Matriculation endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::model::{Matriculation, MatriculationDraft};
use crate::routes::{ApiError, Envelope, reject};
use crate::services::matriculations;
use crate::state::AppState;

/// `GET /api/matriculations` — list all matriculations.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Matriculation>>>, ApiError> {
    let items = matriculations::list_matriculations(&state).await.map_err(|e| reject(&e))?;
    Ok(Json(Envelope::listing(items)))
}

/// `GET /api/matriculations/:id` — fetch one matriculation with grades.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Matriculation>>, ApiError> {
    let matriculation = matriculations::get_matriculation(&state, &id)
        .await
        .map_err(|e| reject(&e))?;
    Ok(Json(Envelope::data(matriculation)))
}

/// `POST /api/matriculations` — create a matriculation.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<MatriculationDraft>,
) -> Result<(StatusCode, Json<Envelope<Matriculation>>), ApiError> {
    let matriculation = matriculations::create_matriculation(&state, draft)
        .await
        .map_err(|e| reject(&e))?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(matriculation, "Matrícula criada com sucesso")),
    ))
}
