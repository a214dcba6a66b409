//! Matriculation operations: list, get, create.
//!
//! Store rows carry no grades; `get_matriculation` attaches them with a
//! follow-up query so a single-record view is complete.

use time::OffsetDateTime;

use super::{DataError, fallback_id, mask_store_failure, surface_store_failure};
use crate::model::{Matriculation, MatriculationDraft, MatriculationRowInsert, MatriculationStatus, PaymentStatus};
use crate::services::grades;
use crate::state::AppState;

const TABLE: &str = "matriculations";
const ENTITY: &str = "matriculation";

/// List all matriculations, newest enrollment first when served from the
/// store. Grades are not attached on the list path.
///
/// # Errors
///
/// Never fails on store outages; the fixture list is served instead.
pub async fn list_matriculations(state: &AppState) -> Result<Vec<Matriculation>, DataError> {
    let Some(store) = state.store.as_ref() else {
        return Ok(state.fixtures.read().await.matriculations.clone());
    };

    match store.select_all::<Matriculation>(TABLE, "enrollment_date.desc").await {
        Ok(matriculations) => Ok(matriculations),
        Err(e) => {
            mask_store_failure(ENTITY, "list", &e);
            Ok(state.fixtures.read().await.matriculations.clone())
        }
    }
}

/// Fetch one matriculation by id, with its grades attached. A grade-fetch
/// failure leaves `grades` empty rather than failing the whole read.
///
/// # Errors
///
/// Returns `DataError::NotFound` when the id exists neither in the store
/// nor in the fixture dataset.
pub async fn get_matriculation(state: &AppState, id: &str) -> Result<Matriculation, DataError> {
    let Some(store) = state.store.as_ref() else {
        return fixture_matriculation(state, id).await;
    };

    match store.select_by_id::<Matriculation>(TABLE, id).await {
        Ok(mut matriculation) => {
            match grades::list_grades_by_matriculation(state, id).await {
                Ok(grades) => matriculation.grades = grades,
                Err(DataError::Store(e)) => mask_store_failure("grade", "list", &e),
                Err(_) => {}
            }
            Ok(matriculation)
        }
        Err(e) if e.is_row_missing() => Err(DataError::not_found(ENTITY, id)),
        Err(e) => {
            mask_store_failure(ENTITY, "get", &e);
            fixture_matriculation(state, id).await
        }
    }
}

/// Create a matriculation.
///
/// # Errors
///
/// Store rejections propagate unmodified (write path).
pub async fn create_matriculation(state: &AppState, draft: MatriculationDraft) -> Result<Matriculation, DataError> {
    let Some(store) = state.store.as_ref() else {
        return Ok(synthesize_matriculation(draft));
    };

    let enrollment_date = draft.enrollment_date.unwrap_or_else(OffsetDateTime::now_utc);
    let guarantor = draft.financial_guarantor;
    let row = MatriculationRowInsert {
        id: None,
        student_id: draft.student_id.unwrap_or_default(),
        student_name: draft.student_name.unwrap_or_default(),
        course_id: draft.course_id.unwrap_or_default(),
        course_name: draft.course_name.unwrap_or_default(),
        enrollment_date,
        start_date: draft.start_date.unwrap_or(enrollment_date.date()),
        end_date: draft.end_date.unwrap_or(enrollment_date.date()),
        status: draft.status.unwrap_or(MatriculationStatus::Ativa),
        payment_status: draft.payment_status.unwrap_or(PaymentStatus::Pendente),
        guarantor_name: guarantor.as_ref().map(|g| g.name.clone()),
        guarantor_relationship: guarantor.as_ref().map(|g| g.relationship.clone()),
        guarantor_phone: guarantor.as_ref().map(|g| g.phone.clone()),
        guarantor_email: guarantor.as_ref().map(|g| g.email.clone()),
    };

    store
        .insert::<_, Matriculation>(TABLE, &row)
        .await
        .map_err(|e| surface_store_failure(ENTITY, "create", e))
}

async fn fixture_matriculation(state: &AppState, id: &str) -> Result<Matriculation, DataError> {
    state
        .fixtures
        .read()
        .await
        .matriculations
        .iter()
        .find(|m| m.id == id)
        .cloned()
        .ok_or_else(|| DataError::not_found(ENTITY, id))
}

fn synthesize_matriculation(draft: MatriculationDraft) -> Matriculation {
    let enrollment_date = draft.enrollment_date.unwrap_or_else(OffsetDateTime::now_utc);
    Matriculation {
        id: fallback_id(),
        student_id: draft.student_id.unwrap_or_default(),
        student_name: draft.student_name.unwrap_or_default(),
        course_id: draft.course_id.unwrap_or_default(),
        course_name: draft.course_name.unwrap_or_default(),
        enrollment_date,
        start_date: draft.start_date.unwrap_or(enrollment_date.date()),
        end_date: draft.end_date.unwrap_or(enrollment_date.date()),
        status: draft.status.unwrap_or(MatriculationStatus::Ativa),
        payment_status: draft.payment_status.unwrap_or(PaymentStatus::Pendente),
        financial_guarantor: draft.financial_guarantor,
        grades: Vec::new(),
    }
}

#[cfg(test)]
#[path = "matriculations_test.rs"]
mod tests;
