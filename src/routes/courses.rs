//! Course endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::model::{Course, CourseDraft};
use crate::routes::{ApiError, Envelope, reject};
use crate::services::courses;
use crate::state::AppState;

/// `GET /api/courses` — list all courses.
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Course>>>, ApiError> {
    let items = courses::list_courses(&state).await.map_err(|e| reject(&e))?;
    Ok(Json(Envelope::listing(items)))
}

/// `GET /api/courses/:id` — fetch one course.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Course>>, ApiError> {
    let course = courses::get_course(&state, &id).await.map_err(|e| reject(&e))?;
    Ok(Json(Envelope::data(course)))
}

/// `POST /api/courses` — create a course.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<CourseDraft>,
) -> Result<(StatusCode, Json<Envelope<Course>>), ApiError> {
    let course = courses::create_course(&state, draft).await.map_err(|e| reject(&e))?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(course, "Curso criado com sucesso")),
    ))
}

/// `PUT /api/courses/:id` — update a course.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<CourseDraft>,
) -> Result<Json<Envelope<Course>>, ApiError> {
    let course = courses::update_course(&state, &id, draft).await.map_err(|e| reject(&e))?;
    Ok(Json(Envelope::with_message(course, "Curso atualizado com sucesso")))
}

/// `DELETE /api/courses/:id` — delete a course.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, ApiError> {
    courses::delete_course(&state, &id).await.map_err(|e| reject(&e))?;
    Ok(Json(Envelope::message("Curso removido com sucesso")))
}
