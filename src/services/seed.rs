//! One-shot database seeding: clears the four tables and bulk-inserts the
//! fixture dataset with its original ids, so a fresh store serves the same
//! records the fallback path does.

use super::{DataError, surface_store_failure};
use crate::model::{
    CourseRowInsert, GradeRowInsert, LeadRowInsert, Matriculation, MatriculationRowInsert,
};
use crate::state::AppState;

/// Wipe and repopulate the remote store from the fixture dataset.
///
/// Deletion runs children-first (grades, matriculations, leads, courses)
/// so foreign keys never dangle mid-seed; inserts run in the reverse
/// order.
///
/// # Errors
///
/// Returns `DataError::StoreNotConfigured` in fallback mode; any store
/// rejection propagates unmodified (write path).
pub async fn seed_database(state: &AppState) -> Result<(), DataError> {
    let Some(store) = state.store.as_ref() else {
        return Err(DataError::StoreNotConfigured);
    };

    let fixtures = state.fixtures.read().await;

    for table in ["grades", "matriculations", "leads", "courses"] {
        store
            .delete_all(table)
            .await
            .map_err(|e| surface_store_failure("seed", "clear", e))?;
    }

    let courses: Vec<CourseRowInsert> = fixtures
        .courses
        .iter()
        .map(|c| CourseRowInsert {
            id: Some(c.id.clone()),
            name: c.name.clone(),
            level: c.level,
            format: c.format,
            duration: c.duration.clone(),
            price: c.price,
            start_date: c.start_date,
            enrollment_deadline: c.enrollment_deadline,
            description: Some(format!("Curso de {}", c.name)),
        })
        .collect();
    store
        .insert_many("courses", &courses)
        .await
        .map_err(|e| surface_store_failure("seed", "insert courses", e))?;

    let leads: Vec<LeadRowInsert> = fixtures
        .leads
        .iter()
        .map(|l| LeadRowInsert {
            id: Some(l.id.clone()),
            name: l.name.clone(),
            email: l.email.clone(),
            phone: l.phone.clone(),
            status: l.status,
            last_contact: l.last_contact,
            next_contact: l.next_contact,
            educational_background: l.educational_background.clone(),
            interest_areas: l.interest_areas.clone(),
            preferred_course_types: l.preferred_course_types.clone(),
            preferred_format: l.preferred_format.clone(),
            notes: l.notes.clone(),
            payment_plan: l.financial_info.payment_plan,
            scholarship: l.financial_info.scholarship,
            scholarship_percentage: l.financial_info.scholarship_percentage,
            payment_status: l.financial_info.payment_status,
            total_value: l.total_value,
        })
        .collect();
    store
        .insert_many("leads", &leads)
        .await
        .map_err(|e| surface_store_failure("seed", "insert leads", e))?;

    let matriculations: Vec<MatriculationRowInsert> =
        fixtures.matriculations.iter().map(matriculation_row).collect();
    store
        .insert_many("matriculations", &matriculations)
        .await
        .map_err(|e| surface_store_failure("seed", "insert matriculations", e))?;

    let grades: Vec<GradeRowInsert> = fixtures
        .grades
        .iter()
        .map(|g| GradeRowInsert {
            id: Some(g.id.clone()),
            matriculation_id: g.matriculation_id.clone(),
            student_id: g.student_id.clone(),
            student_name: g.student_name.clone(),
            course_id: g.course_id.clone(),
            course_name: g.course_name.clone(),
            subject_name: g.subject_name.clone(),
            period: g.period.clone(),
            grade: g.grade,
            max_grade: g.max_grade,
            status: g.status,
            date: g.date,
        })
        .collect();
    store
        .insert_many("grades", &grades)
        .await
        .map_err(|e| surface_store_failure("seed", "insert grades", e))?;

    Ok(())
}

fn matriculation_row(m: &Matriculation) -> MatriculationRowInsert {
    MatriculationRowInsert {
        id: Some(m.id.clone()),
        student_id: m.student_id.clone(),
        student_name: m.student_name.clone(),
        course_id: m.course_id.clone(),
        course_name: m.course_name.clone(),
        enrollment_date: m.enrollment_date,
        start_date: m.start_date,
        end_date: m.end_date,
        status: m.status,
        payment_status: m.payment_status,
        guarantor_name: m.financial_guarantor.as_ref().map(|g| g.name.clone()),
        guarantor_relationship: m.financial_guarantor.as_ref().map(|g| g.relationship.clone()),
        guarantor_phone: m.financial_guarantor.as_ref().map(|g| g.phone.clone()),
        guarantor_email: m.financial_guarantor.as_ref().map(|g| g.email.clone()),
    }
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
