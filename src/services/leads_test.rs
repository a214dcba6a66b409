use super::*;
use crate::model::LeadStatus;
use crate::state::test_helpers;
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn list_serves_fixtures_without_a_store() {
    let state = test_helpers::fallback_state();
    let leads = list_leads(&state).await.expect("list should succeed");
    assert_eq!(leads.len(), 5);
}

#[tokio::test]
async fn list_masks_a_store_outage_with_fixtures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/leads");
        then.status(500).body("upstream unavailable");
    });
    let state = test_helpers::mock_store_state(&server.base_url());

    let leads = list_leads(&state).await.expect("outage must not surface on reads");
    assert_eq!(leads.len(), 5);
}

#[tokio::test]
async fn get_returns_the_documented_contacted_lead() {
    let state = test_helpers::fallback_state();
    let lead = get_lead(&state, "1").await.expect("lead 1 should exist");
    assert_eq!(lead.name, "Ana Carolina Silva");
    assert_eq!(lead.status, LeadStatus::Contatado);
    assert!((lead.total_value - 5000.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn get_unknown_id_is_not_found_with_the_id_in_the_message() {
    let state = test_helpers::fallback_state();
    let err = get_lead(&state, "999").await.expect_err("unknown id should fail");
    assert!(matches!(err, DataError::NotFound { .. }));
    assert!(err.to_string().contains("999"));
}

#[tokio::test]
async fn get_missing_store_row_is_not_found_not_masked() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/leads").query_param("id", "eq.999");
        then.status(406)
            .header("Content-Type", "application/json")
            .json_body(json!({"code": "PGRST116", "message": "no rows returned"}));
    });
    let state = test_helpers::mock_store_state(&server.base_url());

    let err = get_lead(&state, "999").await.expect_err("missing row should fail");
    assert!(matches!(err, DataError::NotFound { .. }));
}

#[tokio::test]
async fn get_masks_an_outage_by_serving_the_fixture_record() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/leads");
        then.status(500).body("upstream unavailable");
    });
    let state = test_helpers::mock_store_state(&server.base_url());

    let lead = get_lead(&state, "1").await.expect("outage must not surface on reads");
    assert_eq!(lead.name, "Ana Carolina Silva");
}

#[tokio::test]
async fn create_without_a_store_synthesizes_fresh_ids_and_defaults() {
    let state = test_helpers::fallback_state();

    let draft = LeadDraft { name: Some("Novo Lead".to_string()), ..LeadDraft::default() };
    let first = create_lead(&state, draft.clone()).await.expect("create should succeed");
    let second = create_lead(&state, draft).await.expect("create should succeed");

    assert!(!first.id.is_empty());
    assert_ne!(first.id, second.id);
    assert_eq!(first.status, LeadStatus::Prospecto);
    assert!((first.total_value - 0.0).abs() < f64::EPSILON);
    assert_eq!(first.financial_info, FinancialInfo::default());
    assert!(first.interested_courses.is_empty());

    // The synthesized record is not persisted into the fixture set.
    let leads = list_leads(&state).await.expect("list should succeed");
    assert_eq!(leads.len(), 5);
}

#[tokio::test]
async fn create_surfaces_a_store_rejection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/rest/v1/leads");
        then.status(409)
            .header("Content-Type", "application/json")
            .json_body(json!({"code": "23505", "message": "duplicate key value"}));
    });
    let state = test_helpers::mock_store_state(&server.base_url());

    let draft = LeadDraft { name: Some("Novo Lead".to_string()), ..LeadDraft::default() };
    let err = create_lead(&state, draft).await.expect_err("write failure must surface");
    assert!(matches!(err, DataError::Store(_)));
}

#[tokio::test]
async fn update_without_a_store_merges_into_the_fixture_record() {
    let state = test_helpers::fallback_state();

    let draft = LeadDraft { status: Some(LeadStatus::Interessado), ..LeadDraft::default() };
    let updated = update_lead(&state, "1", draft).await.expect("update should succeed");

    assert_eq!(updated.status, LeadStatus::Interessado);
    // Untouched fields survive the merge.
    assert_eq!(updated.name, "Ana Carolina Silva");

    // The mutation is visible to subsequent reads.
    let reread = get_lead(&state, "1").await.expect("lead 1 should exist");
    assert_eq!(reread.status, LeadStatus::Interessado);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let state = test_helpers::fallback_state();
    let err = update_lead(&state, "999", LeadDraft::default())
        .await
        .expect_err("unknown id should fail");
    assert!(matches!(err, DataError::NotFound { .. }));
}

#[tokio::test]
async fn delete_without_a_store_reports_success_but_removes_nothing() {
    let state = test_helpers::fallback_state();

    delete_lead(&state, "1").await.expect("fallback delete reports success");

    let leads = list_leads(&state).await.expect("list should succeed");
    assert_eq!(leads.len(), 5);
}
