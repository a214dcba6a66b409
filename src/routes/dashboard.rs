//! Dashboard endpoint.

use axum::extract::State;
use axum::response::Json;

use crate::routes::{ApiError, Envelope, reject};
use crate::services::dashboard::{self, DashboardStats};
use crate::state::AppState;

/// `GET /api/dashboard/stats` — aggregate funnel and revenue figures.
pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<Envelope<DashboardStats>>, ApiError> {
    let stats = dashboard::get_dashboard_stats(&state).await.map_err(|e| reject(&e))?;
    Ok(Json(Envelope::data(stats)))
}
