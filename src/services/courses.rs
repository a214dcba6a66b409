//! Course operations: list, get, create, update, delete.

use time::OffsetDateTime;

use super::{DataError, fallback_id, mask_store_failure, surface_store_failure};
use crate::model::{Course, CourseDraft, CourseFormat, CourseLevel, CourseRowInsert, CourseRowPatch};
use crate::state::AppState;

const TABLE: &str = "courses";
const ENTITY: &str = "course";

/// List all courses, newest first when served from the store.
///
/// # Errors
///
/// Never fails on store outages; the fixture list is served instead.
pub async fn list_courses(state: &AppState) -> Result<Vec<Course>, DataError> {
    let Some(store) = state.store.as_ref() else {
        return Ok(state.fixtures.read().await.courses.clone());
    };

    match store.select_all::<Course>(TABLE, "created_at.desc").await {
        Ok(courses) => Ok(courses),
        Err(e) => {
            mask_store_failure(ENTITY, "list", &e);
            Ok(state.fixtures.read().await.courses.clone())
        }
    }
}

/// Fetch one course by id.
///
/// # Errors
///
/// Returns `DataError::NotFound` when the id exists neither in the store
/// nor in the fixture dataset.
pub async fn get_course(state: &AppState, id: &str) -> Result<Course, DataError> {
    let Some(store) = state.store.as_ref() else {
        return fixture_course(state, id).await;
    };

    match store.select_by_id::<Course>(TABLE, id).await {
        Ok(course) => Ok(course),
        Err(e) if e.is_row_missing() => Err(DataError::not_found(ENTITY, id)),
        Err(e) => {
            mask_store_failure(ENTITY, "get", &e);
            fixture_course(state, id).await
        }
    }
}

/// Create a course.
///
/// # Errors
///
/// Store rejections propagate unmodified (write path).
pub async fn create_course(state: &AppState, draft: CourseDraft) -> Result<Course, DataError> {
    let Some(store) = state.store.as_ref() else {
        return Ok(synthesize_course(draft));
    };

    let today = OffsetDateTime::now_utc().date();
    let row = CourseRowInsert {
        id: None,
        name: draft.name.unwrap_or_default(),
        level: draft.level.unwrap_or(CourseLevel::Tecnico),
        format: draft.format.unwrap_or(CourseFormat::Presencial),
        duration: draft.duration.unwrap_or_default(),
        price: draft.price.unwrap_or(0.0),
        start_date: draft.start_date.unwrap_or(today),
        enrollment_deadline: draft.enrollment_deadline.unwrap_or(today),
        description: draft.description,
    };

    store
        .insert::<_, Course>(TABLE, &row)
        .await
        .map_err(|e| surface_store_failure(ENTITY, "create", e))
}

/// Update a course. The fallback path merges the partial fields over the
/// fixture record in memory; the mutation lasts for the process lifetime.
///
/// # Errors
///
/// Returns `DataError::NotFound` for an unknown id; store rejections
/// propagate unmodified (write path).
pub async fn update_course(state: &AppState, id: &str, draft: CourseDraft) -> Result<Course, DataError> {
    let Some(store) = state.store.as_ref() else {
        return update_fixture_course(state, id, draft).await;
    };

    let patch = CourseRowPatch {
        name: draft.name,
        level: draft.level,
        format: draft.format,
        duration: draft.duration,
        price: draft.price,
        start_date: draft.start_date,
        enrollment_deadline: draft.enrollment_deadline,
        description: draft.description,
    };

    match store.update::<_, Course>(TABLE, id, &patch).await {
        Ok(course) => Ok(course),
        Err(e) if e.is_row_missing() => Err(DataError::not_found(ENTITY, id)),
        Err(e) => Err(surface_store_failure(ENTITY, "update", e)),
    }
}

/// Delete a course by id.
///
/// # Errors
///
/// Store rejections propagate unmodified (write path).
pub async fn delete_course(state: &AppState, id: &str) -> Result<(), DataError> {
    let Some(store) = state.store.as_ref() else {
        // Fallback delete reports success without removing anything.
        return Ok(());
    };

    store
        .delete(TABLE, id)
        .await
        .map_err(|e| surface_store_failure(ENTITY, "delete", e))
}

async fn fixture_course(state: &AppState, id: &str) -> Result<Course, DataError> {
    state
        .fixtures
        .read()
        .await
        .courses
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .ok_or_else(|| DataError::not_found(ENTITY, id))
}

async fn update_fixture_course(state: &AppState, id: &str, draft: CourseDraft) -> Result<Course, DataError> {
    let mut fixtures = state.fixtures.write().await;
    let Some(course) = fixtures.courses.iter_mut().find(|c| c.id == id) else {
        return Err(DataError::not_found(ENTITY, id));
    };

    if let Some(name) = draft.name {
        course.name = name;
    }
    if let Some(level) = draft.level {
        course.level = level;
    }
    if let Some(format) = draft.format {
        course.format = format;
    }
    if let Some(duration) = draft.duration {
        course.duration = duration;
    }
    if let Some(price) = draft.price {
        course.price = price;
    }
    if let Some(start_date) = draft.start_date {
        course.start_date = start_date;
    }
    if let Some(enrollment_deadline) = draft.enrollment_deadline {
        course.enrollment_deadline = enrollment_deadline;
    }

    Ok(course.clone())
}

fn synthesize_course(draft: CourseDraft) -> Course {
    let today = OffsetDateTime::now_utc().date();
    Course {
        id: fallback_id(),
        name: draft.name.unwrap_or_default(),
        level: draft.level.unwrap_or(CourseLevel::Tecnico),
        format: draft.format.unwrap_or(CourseFormat::Presencial),
        duration: draft.duration.unwrap_or_default(),
        price: draft.price.unwrap_or(0.0),
        start_date: draft.start_date.unwrap_or(today),
        enrollment_deadline: draft.enrollment_deadline.unwrap_or(today),
    }
}

#[cfg(test)]
#[path = "courses_test.rs"]
mod tests;
