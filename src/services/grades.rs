//! Grade operations: list (optionally scoped to a matriculation) and create.

use time::OffsetDateTime;

use super::{DataError, fallback_id, mask_store_failure, surface_store_failure};
use crate::model::{Grade, GradeDraft, GradeRowInsert, GradeStatus};
use crate::state::AppState;

const TABLE: &str = "grades";
const ENTITY: &str = "grade";

/// List all grades, newest first when served from the store.
///
/// # Errors
///
/// Never fails on store outages; the fixture list is served instead.
pub async fn list_grades(state: &AppState) -> Result<Vec<Grade>, DataError> {
    let Some(store) = state.store.as_ref() else {
        return Ok(state.fixtures.read().await.grades.clone());
    };

    match store.select_all::<Grade>(TABLE, "date.desc").await {
        Ok(grades) => Ok(grades),
        Err(e) => {
            mask_store_failure(ENTITY, "list", &e);
            Ok(state.fixtures.read().await.grades.clone())
        }
    }
}

/// List the grades recorded against one matriculation, newest first.
///
/// # Errors
///
/// Never fails on store outages; the matching fixture grades are served
/// instead.
pub async fn list_grades_by_matriculation(state: &AppState, matriculation_id: &str) -> Result<Vec<Grade>, DataError> {
    let Some(store) = state.store.as_ref() else {
        return Ok(fixture_grades_for(state, matriculation_id).await);
    };

    match store
        .select_eq::<Grade>(TABLE, "matriculation_id", matriculation_id, "date.desc")
        .await
    {
        Ok(grades) => Ok(grades),
        Err(e) => {
            mask_store_failure(ENTITY, "list", &e);
            Ok(fixture_grades_for(state, matriculation_id).await)
        }
    }
}

/// Record a grade.
///
/// # Errors
///
/// Store rejections propagate unmodified (write path).
pub async fn create_grade(state: &AppState, draft: GradeDraft) -> Result<Grade, DataError> {
    let Some(store) = state.store.as_ref() else {
        return Ok(synthesize_grade(draft));
    };

    let row = GradeRowInsert {
        id: None,
        matriculation_id: draft.matriculation_id.unwrap_or_default(),
        student_id: draft.student_id.unwrap_or_default(),
        student_name: draft.student_name.unwrap_or_default(),
        course_id: draft.course_id.unwrap_or_default(),
        course_name: draft.course_name.unwrap_or_default(),
        subject_name: draft.subject_name.unwrap_or_default(),
        period: draft.period.unwrap_or_default(),
        grade: draft.grade.unwrap_or(0.0),
        max_grade: draft.max_grade.unwrap_or(10.0),
        status: draft.status.unwrap_or(GradeStatus::EmAndamento),
        date: draft.date.unwrap_or_else(OffsetDateTime::now_utc),
    };

    store
        .insert::<_, Grade>(TABLE, &row)
        .await
        .map_err(|e| surface_store_failure(ENTITY, "create", e))
}

async fn fixture_grades_for(state: &AppState, matriculation_id: &str) -> Vec<Grade> {
    state
        .fixtures
        .read()
        .await
        .grades
        .iter()
        .filter(|g| g.matriculation_id == matriculation_id)
        .cloned()
        .collect()
}

fn synthesize_grade(draft: GradeDraft) -> Grade {
    Grade {
        id: fallback_id(),
        matriculation_id: draft.matriculation_id.unwrap_or_default(),
        student_id: draft.student_id.unwrap_or_default(),
        student_name: draft.student_name.unwrap_or_default(),
        course_id: draft.course_id.unwrap_or_default(),
        course_name: draft.course_name.unwrap_or_default(),
        subject_name: draft.subject_name.unwrap_or_default(),
        period: draft.period.unwrap_or_default(),
        grade: draft.grade.unwrap_or(0.0),
        max_grade: draft.max_grade.unwrap_or(10.0),
        status: draft.status.unwrap_or(GradeStatus::EmAndamento),
        date: draft.date.unwrap_or_else(OffsetDateTime::now_utc),
    }
}

#[cfg(test)]
#[path = "grades_test.rs"]
mod tests;
