//! Dashboard aggregates: lead funnel counts, revenue, and conversion rate.
//!
//! With a configured store each figure comes from its own aggregate query;
//! one failed query abandons the remote attempt and recomputes everything
//! from the fixture collections so the numbers stay mutually consistent.

use serde::{Deserialize, Serialize};

use super::{DataError, mask_store_failure};
use crate::model::{LeadStatus, f64_lenient};
use crate::state::AppState;
use crate::store::{StoreClient, StoreError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_leads: i64,
    pub contacted_leads: i64,
    pub interested_leads: i64,
    pub enrolled_students: i64,
    pub total_revenue: f64,
    pub active_courses: i64,
    /// Enrollments over total leads as a percentage with one decimal,
    /// `"0.0"` when there are no leads.
    pub conversion_rate: String,
}

#[derive(Deserialize)]
struct RevenueRow {
    #[serde(deserialize_with = "f64_lenient")]
    total_value: f64,
}

/// Compute the dashboard figures.
///
/// # Errors
///
/// Never fails on store outages; the figures are recomputed from the
/// fixture collections instead.
pub async fn get_dashboard_stats(state: &AppState) -> Result<DashboardStats, DataError> {
    let Some(store) = state.store.as_ref() else {
        return Ok(compute_from_fixtures(state).await);
    };

    match query_store_stats(store).await {
        Ok(stats) => Ok(stats),
        Err(e) => {
            mask_store_failure("dashboard", "stats", &e);
            Ok(compute_from_fixtures(state).await)
        }
    }
}

async fn query_store_stats(store: &StoreClient) -> Result<DashboardStats, StoreError> {
    let total_leads = store.count("leads", None).await?;
    let contacted_leads = store
        .count("leads", Some(("status", LeadStatus::Contatado.as_str())))
        .await?;
    let interested_leads = store
        .count("leads", Some(("status", LeadStatus::Interessado.as_str())))
        .await?;
    let enrolled_students = store.count("matriculations", None).await?;
    let active_courses = store.count("courses", None).await?;
    let total_revenue = store
        .select_column::<RevenueRow>("leads", "total_value")
        .await?
        .iter()
        .map(|row| row.total_value)
        .sum();

    Ok(DashboardStats {
        total_leads,
        contacted_leads,
        interested_leads,
        enrolled_students,
        total_revenue,
        active_courses,
        conversion_rate: conversion_rate(enrolled_students, total_leads),
    })
}

#[allow(clippy::cast_possible_wrap)]
async fn compute_from_fixtures(state: &AppState) -> DashboardStats {
    let fixtures = state.fixtures.read().await;

    let total_leads = fixtures.leads.len() as i64;
    let contacted_leads = fixtures
        .leads
        .iter()
        .filter(|l| l.status == LeadStatus::Contatado)
        .count() as i64;
    let interested_leads = fixtures
        .leads
        .iter()
        .filter(|l| l.status == LeadStatus::Interessado)
        .count() as i64;
    let enrolled_students = fixtures.matriculations.len() as i64;
    let total_revenue = fixtures.leads.iter().map(|l| l.total_value).sum();
    let active_courses = fixtures.courses.len() as i64;

    DashboardStats {
        total_leads,
        contacted_leads,
        interested_leads,
        enrolled_students,
        total_revenue,
        active_courses,
        conversion_rate: conversion_rate(enrolled_students, total_leads),
    }
}

#[allow(clippy::cast_precision_loss)]
fn conversion_rate(enrolled: i64, total_leads: i64) -> String {
    if total_leads == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", enrolled as f64 / total_leads as f64 * 100.0)
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
