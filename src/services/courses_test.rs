use super::*;
use crate::state::test_helpers;
use httpmock::prelude::*;
use serde_json::json;
use time::macros::date;

#[tokio::test]
async fn list_serves_fixtures_without_a_store() {
    let state = test_helpers::fallback_state();
    let courses = list_courses(&state).await.expect("list should succeed");
    assert_eq!(courses.len(), 4);
}

#[tokio::test]
async fn list_decodes_store_rows_when_the_store_answers() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/courses");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([{
                "id": "10",
                "name": "Pós em Dados",
                "level": "pos",
                "format": "online",
                "duration": "14 meses",
                "price": "9800.00",
                "start_date": "2024-08-05",
                "enrollment_deadline": "2024-07-26"
            }]));
    });
    let state = test_helpers::mock_store_state(&server.base_url());

    let courses = list_courses(&state).await.expect("list should succeed");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].level, CourseLevel::Pos);
    assert!((courses[0].price - 9800.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let state = test_helpers::fallback_state();
    let err = get_course(&state, "999").await.expect_err("unknown id should fail");
    assert!(matches!(err, DataError::NotFound { .. }));
    assert!(err.to_string().contains("999"));
}

#[tokio::test]
async fn create_without_a_store_applies_documented_defaults() {
    let state = test_helpers::fallback_state();

    let draft = CourseDraft { name: Some("Novo Curso".to_string()), ..CourseDraft::default() };
    let course = create_course(&state, draft).await.expect("create should succeed");

    assert!(!course.id.is_empty());
    assert_eq!(course.level, CourseLevel::Tecnico);
    assert_eq!(course.format, CourseFormat::Presencial);
    assert!((course.price - 0.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn update_without_a_store_merges_into_the_fixture_record() {
    let state = test_helpers::fallback_state();

    let draft = CourseDraft {
        price: Some(6000.0),
        enrollment_deadline: Some(date!(2024 - 03 - 01)),
        ..CourseDraft::default()
    };
    let updated = update_course(&state, "1", draft).await.expect("update should succeed");

    assert!((updated.price - 6000.0).abs() < f64::EPSILON);
    assert_eq!(updated.enrollment_deadline, date!(2024 - 03 - 01));
    assert_eq!(updated.name, "Técnico em Enfermagem");

    let reread = get_course(&state, "1").await.expect("course 1 should exist");
    assert!((reread.price - 6000.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn update_surfaces_a_store_rejection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(httpmock::Method::PATCH).path("/rest/v1/courses");
        then.status(500).body("upstream unavailable");
    });
    let state = test_helpers::mock_store_state(&server.base_url());

    let err = update_course(&state, "1", CourseDraft::default())
        .await
        .expect_err("write failure must surface");
    assert!(matches!(err, DataError::Store(_)));
}

#[tokio::test]
async fn delete_without_a_store_reports_success_but_removes_nothing() {
    let state = test_helpers::fallback_state();

    delete_course(&state, "1").await.expect("fallback delete reports success");

    let courses = list_courses(&state).await.expect("list should succeed");
    assert_eq!(courses.len(), 4);
}
