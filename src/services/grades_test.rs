use super::*;
use crate::state::test_helpers;
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn list_serves_fixtures_without_a_store() {
    let state = test_helpers::fallback_state();
    let grades = list_grades(&state).await.expect("list should succeed");
    assert_eq!(grades.len(), 4);
}

#[tokio::test]
async fn list_by_matriculation_filters_the_fixture_set() {
    let state = test_helpers::fallback_state();
    let grades = list_grades_by_matriculation(&state, "2")
        .await
        .expect("list should succeed");

    assert_eq!(grades.len(), 2);
    assert!(grades.iter().all(|g| g.matriculation_id == "2"));
}

#[tokio::test]
async fn list_by_unknown_matriculation_is_empty_not_an_error() {
    let state = test_helpers::fallback_state();
    let grades = list_grades_by_matriculation(&state, "999")
        .await
        .expect("list should succeed");
    assert!(grades.is_empty());
}

#[tokio::test]
async fn list_by_matriculation_masks_an_outage_with_fixtures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/grades");
        then.status(500).body("upstream unavailable");
    });
    let state = test_helpers::mock_store_state(&server.base_url());

    let grades = list_grades_by_matriculation(&state, "1")
        .await
        .expect("outage must not surface on reads");
    assert_eq!(grades.len(), 2);
}

#[tokio::test]
async fn create_without_a_store_applies_documented_defaults() {
    let state = test_helpers::fallback_state();

    let draft = GradeDraft {
        matriculation_id: Some("1".to_string()),
        subject_name: Some("Estatística".to_string()),
        grade: Some(7.5),
        ..GradeDraft::default()
    };
    let grade = create_grade(&state, draft).await.expect("create should succeed");

    assert!(!grade.id.is_empty());
    assert!((grade.max_grade - 10.0).abs() < f64::EPSILON);
    assert_eq!(grade.status, GradeStatus::EmAndamento);
}

#[tokio::test]
async fn create_surfaces_a_store_rejection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/rest/v1/grades");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(json!({"code": "23503", "message": "foreign key violation"}));
    });
    let state = test_helpers::mock_store_state(&server.base_url());

    let draft = GradeDraft { matriculation_id: Some("999".to_string()), ..GradeDraft::default() };
    let err = create_grade(&state, draft).await.expect_err("write failure must surface");
    assert!(matches!(err, DataError::Store(_)));
}
