//! Lead operations: list, get, create, update, delete.

use time::OffsetDateTime;

use super::{DataError, fallback_id, mask_store_failure, surface_store_failure};
use crate::model::{FinancialInfo, Lead, LeadDraft, LeadRowInsert, LeadRowPatch, PaymentStatus};
use crate::state::AppState;

const TABLE: &str = "leads";
const ENTITY: &str = "lead";

/// List all leads, newest first when served from the store.
///
/// # Errors
///
/// Never fails on store outages; only unexpected fixture state could error.
pub async fn list_leads(state: &AppState) -> Result<Vec<Lead>, DataError> {
    let Some(store) = state.store.as_ref() else {
        return Ok(state.fixtures.read().await.leads.clone());
    };

    match store.select_all::<Lead>(TABLE, "created_at.desc").await {
        Ok(leads) => Ok(leads),
        Err(e) => {
            mask_store_failure(ENTITY, "list", &e);
            Ok(state.fixtures.read().await.leads.clone())
        }
    }
}

/// Fetch one lead by id.
///
/// # Errors
///
/// Returns `DataError::NotFound` when the id exists neither in the store
/// nor in the fixture dataset.
pub async fn get_lead(state: &AppState, id: &str) -> Result<Lead, DataError> {
    let Some(store) = state.store.as_ref() else {
        return fixture_lead(state, id).await;
    };

    match store.select_by_id::<Lead>(TABLE, id).await {
        Ok(lead) => Ok(lead),
        Err(e) if e.is_row_missing() => Err(DataError::not_found(ENTITY, id)),
        Err(e) => {
            mask_store_failure(ENTITY, "get", &e);
            fixture_lead(state, id).await
        }
    }
}

/// Create a lead. Against a configured store this inserts and returns the
/// stored row; without one it synthesizes a record that is not persisted.
///
/// # Errors
///
/// Store rejections propagate unmodified (write path).
pub async fn create_lead(state: &AppState, draft: LeadDraft) -> Result<Lead, DataError> {
    let now = OffsetDateTime::now_utc();
    let Some(store) = state.store.as_ref() else {
        return Ok(synthesize_lead(draft, now));
    };

    let row = LeadRowInsert {
        id: None,
        name: draft.name.unwrap_or_default(),
        email: draft.email.unwrap_or_default(),
        phone: draft.phone.unwrap_or_default(),
        status: draft.status.unwrap_or_default(),
        last_contact: draft.last_contact.unwrap_or(now),
        next_contact: draft.next_contact,
        educational_background: draft.educational_background.unwrap_or_default(),
        interest_areas: draft.interest_areas.unwrap_or_default(),
        preferred_course_types: draft.preferred_course_types.unwrap_or_default(),
        preferred_format: draft.preferred_format.unwrap_or_default(),
        notes: draft.notes.unwrap_or_default(),
        payment_plan: None,
        scholarship: false,
        scholarship_percentage: None,
        payment_status: PaymentStatus::default(),
        total_value: draft.total_value.unwrap_or(0.0),
    };

    store
        .insert::<_, Lead>(TABLE, &row)
        .await
        .map_err(|e| surface_store_failure(ENTITY, "create", e))
}

/// Update a lead. The fallback path merges the partial fields over the
/// fixture record in memory; the mutation lasts for the process lifetime.
///
/// # Errors
///
/// Returns `DataError::NotFound` for an unknown id; store rejections
/// propagate unmodified (write path).
pub async fn update_lead(state: &AppState, id: &str, draft: LeadDraft) -> Result<Lead, DataError> {
    let Some(store) = state.store.as_ref() else {
        return update_fixture_lead(state, id, draft).await;
    };

    let patch = LeadRowPatch {
        name: draft.name,
        email: draft.email,
        phone: draft.phone,
        status: draft.status,
        last_contact: draft.last_contact,
        next_contact: draft.next_contact,
        educational_background: draft.educational_background,
        interest_areas: draft.interest_areas,
        preferred_course_types: draft.preferred_course_types,
        preferred_format: draft.preferred_format,
        notes: draft.notes,
        total_value: draft.total_value,
    };

    match store.update::<_, Lead>(TABLE, id, &patch).await {
        Ok(lead) => Ok(lead),
        Err(e) if e.is_row_missing() => Err(DataError::not_found(ENTITY, id)),
        Err(e) => Err(surface_store_failure(ENTITY, "update", e)),
    }
}

/// Delete a lead by id.
///
/// # Errors
///
/// Store rejections propagate unmodified (write path).
pub async fn delete_lead(state: &AppState, id: &str) -> Result<(), DataError> {
    let Some(store) = state.store.as_ref() else {
        // Fallback delete reports success without removing anything from
        // the fixture set. Documented demo-mode behavior, kept as-is.
        return Ok(());
    };

    store
        .delete(TABLE, id)
        .await
        .map_err(|e| surface_store_failure(ENTITY, "delete", e))
}

async fn fixture_lead(state: &AppState, id: &str) -> Result<Lead, DataError> {
    state
        .fixtures
        .read()
        .await
        .leads
        .iter()
        .find(|l| l.id == id)
        .cloned()
        .ok_or_else(|| DataError::not_found(ENTITY, id))
}

async fn update_fixture_lead(state: &AppState, id: &str, draft: LeadDraft) -> Result<Lead, DataError> {
    let mut fixtures = state.fixtures.write().await;
    let Some(lead) = fixtures.leads.iter_mut().find(|l| l.id == id) else {
        return Err(DataError::not_found(ENTITY, id));
    };

    if let Some(name) = draft.name {
        lead.name = name;
    }
    if let Some(email) = draft.email {
        lead.email = email;
    }
    if let Some(phone) = draft.phone {
        lead.phone = phone;
    }
    if let Some(status) = draft.status {
        lead.status = status;
    }
    if let Some(last_contact) = draft.last_contact {
        lead.last_contact = last_contact;
    }
    if let Some(next_contact) = draft.next_contact {
        lead.next_contact = Some(next_contact);
    }
    if let Some(educational_background) = draft.educational_background {
        lead.educational_background = educational_background;
    }
    if let Some(interest_areas) = draft.interest_areas {
        lead.interest_areas = interest_areas;
    }
    if let Some(preferred_course_types) = draft.preferred_course_types {
        lead.preferred_course_types = preferred_course_types;
    }
    if let Some(preferred_format) = draft.preferred_format {
        lead.preferred_format = preferred_format;
    }
    if let Some(notes) = draft.notes {
        lead.notes = notes;
    }
    if let Some(total_value) = draft.total_value {
        lead.total_value = total_value;
    }

    Ok(lead.clone())
}

fn synthesize_lead(draft: LeadDraft, now: OffsetDateTime) -> Lead {
    Lead {
        id: fallback_id(),
        name: draft.name.unwrap_or_default(),
        email: draft.email.unwrap_or_default(),
        phone: draft.phone.unwrap_or_default(),
        status: draft.status.unwrap_or_default(),
        last_contact: draft.last_contact.unwrap_or(now),
        next_contact: draft.next_contact,
        educational_background: draft.educational_background.unwrap_or_default(),
        interest_areas: draft.interest_areas.unwrap_or_default(),
        preferred_course_types: draft.preferred_course_types.unwrap_or_default(),
        preferred_format: draft.preferred_format.unwrap_or_default(),
        notes: draft.notes.unwrap_or_default(),
        interested_courses: Vec::new(),
        financial_info: FinancialInfo::default(),
        total_value: draft.total_value.unwrap_or(0.0),
        created_at: now,
    }
}

#[cfg(test)]
#[path = "leads_test.rs"]
mod tests;
