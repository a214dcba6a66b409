//! Lead endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::model::{Lead, LeadDraft};
use crate::routes::{ApiError, Envelope, reject};
use crate::services::leads;
use crate::state::AppState;

/// `GET /api/leads` — list all leads.
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Lead>>>, ApiError> {
    let items = leads::list_leads(&state).await.map_err(|e| reject(&e))?;
    Ok(Json(Envelope::listing(items)))
}

/// `GET /api/leads/:id` — fetch one lead.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Lead>>, ApiError> {
    let lead = leads::get_lead(&state, &id).await.map_err(|e| reject(&e))?;
    Ok(Json(Envelope::data(lead)))
}

/// `POST /api/leads` — create a lead.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<LeadDraft>,
) -> Result<(StatusCode, Json<Envelope<Lead>>), ApiError> {
    let lead = leads::create_lead(&state, draft).await.map_err(|e| reject(&e))?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(lead, "Lead criado com sucesso")),
    ))
}

/// `PUT /api/leads/:id` — update a lead.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<LeadDraft>,
) -> Result<Json<Envelope<Lead>>, ApiError> {
    let lead = leads::update_lead(&state, &id, draft).await.map_err(|e| reject(&e))?;
    Ok(Json(Envelope::with_message(lead, "Lead atualizado com sucesso")))
}

/// `DELETE /api/leads/:id` — delete a lead.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, ApiError> {
    leads::delete_lead(&state, &id).await.map_err(|e| reject(&e))?;
    Ok(Json(Envelope::message("Lead removido com sucesso")))
}
