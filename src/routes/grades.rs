//! Grade endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::model::{Grade, GradeDraft};
use crate::routes::{ApiError, Envelope, reject};
use crate::services::grades;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeListQuery {
    #[serde(default, alias = "matriculation_id")]
    pub matriculation_id: Option<String>,
}

/// `GET /api/grades?matriculationId=…` — list grades, optionally scoped
/// to one matriculation.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<GradeListQuery>,
) -> Result<Json<Envelope<Vec<Grade>>>, ApiError> {
    let items = match query.matriculation_id.as_deref() {
        Some(matriculation_id) => grades::list_grades_by_matriculation(&state, matriculation_id)
            .await
            .map_err(|e| reject(&e))?,
        None => grades::list_grades(&state).await.map_err(|e| reject(&e))?,
    };
    Ok(Json(Envelope::listing(items)))
}

/// `POST /api/grades` — record a grade.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<GradeDraft>,
) -> Result<(StatusCode, Json<Envelope<Grade>>), ApiError> {
    let grade = grades::create_grade(&state, draft).await.map_err(|e| reject(&e))?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(grade, "Nota registrada com sucesso")),
    ))
}
