use super::*;
use serde_json::json;
use time::macros::{date, datetime};

// ===== DUAL NAMING =====

#[test]
fn lead_deserializes_from_snake_case_store_row() {
    let row = json!({
        "id": "42",
        "name": "Ana Carolina Silva",
        "email": "ana.silva@email.com",
        "phone": "(11) 98765-4321",
        "status": "contatado",
        "last_contact": "2024-01-15T10:30:00+00:00",
        "next_contact": null,
        "educational_background": "Ensino médio completo",
        "interest_areas": ["Saúde"],
        "preferred_course_types": ["tecnico"],
        "preferred_format": ["presencial"],
        "notes": "",
        "payment_plan": "parcelado",
        "scholarship": false,
        "scholarship_percentage": null,
        "payment_status": "pendente",
        "total_value": 5000.0,
        "created_at": "2024-01-10T09:00:00+00:00"
    });

    let lead: Lead = serde_json::from_value(row).expect("store row should deserialize");
    assert_eq!(lead.id, "42");
    assert_eq!(lead.status, LeadStatus::Contatado);
    assert_eq!(lead.last_contact, datetime!(2024-01-15 10:30 UTC));
    assert_eq!(lead.financial_info.payment_plan, Some(PaymentPlan::Parcelado));
    assert_eq!(lead.financial_info.payment_status, PaymentStatus::Pendente);
    assert!((lead.total_value - 5000.0).abs() < f64::EPSILON);
}

#[test]
fn lead_row_and_domain_shapes_produce_equal_records() {
    let store_row = json!({
        "id": "7",
        "name": "Carla Mendes Oliveira",
        "email": "carla.mendes@email.com",
        "phone": "(21) 96543-2109",
        "status": "interessado",
        "last_contact": "2024-01-19T11:15:00+00:00",
        "educational_background": "Graduação em Enfermagem",
        "interest_areas": ["Gestão"],
        "preferred_course_types": ["especializacao"],
        "preferred_format": ["online"],
        "notes": "",
        "scholarship": true,
        "scholarship_percentage": "50",
        "payment_status": "pendente",
        "total_value": "3200.00",
        "created_at": "2024-01-12T08:30:00+00:00"
    });
    let domain_shape = json!({
        "id": "7",
        "name": "Carla Mendes Oliveira",
        "email": "carla.mendes@email.com",
        "phone": "(21) 96543-2109",
        "status": "interessado",
        "lastContact": "2024-01-19T11:15:00+00:00",
        "educationalBackground": "Graduação em Enfermagem",
        "interestAreas": ["Gestão"],
        "preferredCourseTypes": ["especializacao"],
        "preferredFormat": ["online"],
        "notes": "",
        "financialInfo": {
            "scholarship": true,
            "scholarshipPercentage": 50.0,
            "paymentStatus": "pendente"
        },
        "totalValue": 3200.0,
        "createdAt": "2024-01-12T08:30:00+00:00"
    });

    let from_row: Lead = serde_json::from_value(store_row).expect("row should deserialize");
    let from_domain: Lead = serde_json::from_value(domain_shape).expect("domain shape should deserialize");
    assert_eq!(from_row, from_domain);
}

#[test]
fn matriculation_rebuilds_guarantor_from_flat_columns() {
    let row = json!({
        "id": "2",
        "student_id": "6",
        "student_name": "Fernanda Souza Pereira",
        "course_id": "1",
        "course_name": "Técnico em Enfermagem",
        "enrollment_date": "2023-08-15T09:00:00+00:00",
        "start_date": "2023-09-04",
        "end_date": "2025-03-04",
        "status": "ativa",
        "payment_status": "pendente",
        "guarantor_name": "Marcos Souza Pereira",
        "guarantor_relationship": "pai",
        "guarantor_phone": "(11) 93210-9876",
        "guarantor_email": "marcos.pereira@email.com"
    });

    let m: Matriculation = serde_json::from_value(row).expect("row should deserialize");
    let guarantor = m.financial_guarantor.expect("guarantor should be rebuilt");
    assert_eq!(guarantor.name, "Marcos Souza Pereira");
    assert_eq!(guarantor.relationship, "pai");
    assert!(m.grades.is_empty());
}

#[test]
fn matriculation_empty_guarantor_name_means_none() {
    let row = json!({
        "id": "1",
        "student_id": "4",
        "student_name": "Diego Almeida Costa",
        "course_id": "2",
        "course_name": "Graduação em Administração",
        "enrollment_date": "2024-01-20T14:30:00+00:00",
        "start_date": "2024-02-19",
        "end_date": "2027-12-17",
        "status": "ativa",
        "payment_status": "parcial",
        "guarantor_name": ""
    });

    let m: Matriculation = serde_json::from_value(row).expect("row should deserialize");
    assert!(m.financial_guarantor.is_none());
}

// ===== NUMERIC COERCION =====

#[test]
fn course_price_accepts_numeric_string() {
    let row = json!({
        "id": "1",
        "name": "Técnico em Enfermagem",
        "level": "tecnico",
        "format": "presencial",
        "duration": "18 meses",
        "price": "5400.00",
        "start_date": "2024-03-04",
        "enrollment_deadline": "2024-02-23"
    });

    let course: Course = serde_json::from_value(row).expect("row should deserialize");
    assert!((course.price - 5400.0).abs() < f64::EPSILON);
    assert_eq!(course.start_date, date!(2024 - 03 - 04));
}

#[test]
fn grade_values_accept_numeric_strings() {
    let row = json!({
        "id": "9",
        "matriculation_id": "1",
        "student_id": "4",
        "student_name": "Diego Almeida Costa",
        "course_id": "2",
        "course_name": "Graduação em Administração",
        "subject_name": "Matemática Financeira",
        "period": "2024.2",
        "grade": "6.8",
        "max_grade": 10,
        "status": "em_andamento",
        "date": "2024-11-10T12:00:00+00:00"
    });

    let grade: Grade = serde_json::from_value(row).expect("row should deserialize");
    assert!((grade.grade - 6.8).abs() < f64::EPSILON);
    assert_eq!(grade.status, GradeStatus::EmAndamento);
}

// ===== DEFAULTS =====

#[test]
fn lead_defaults_fill_absent_optional_fields() {
    let row = json!({
        "id": "10",
        "name": "Bruno Ferreira Santos",
        "status": "prospecto",
        "created_at": "2024-01-18T16:45:00+00:00",
        "last_contact": "2024-01-18T16:45:00+00:00"
    });

    let lead: Lead = serde_json::from_value(row).expect("row should deserialize");
    assert!(lead.interest_areas.is_empty());
    assert!(lead.interested_courses.is_empty());
    assert_eq!(lead.financial_info, FinancialInfo::default());
    assert!((lead.total_value - 0.0).abs() < f64::EPSILON);
    assert!(lead.next_contact.is_none());
}

#[test]
fn enum_defaults_match_initial_statuses() {
    assert_eq!(LeadStatus::default(), LeadStatus::Prospecto);
    assert_eq!(PaymentStatus::default(), PaymentStatus::Pendente);
    assert_eq!(MatriculationStatus::default(), MatriculationStatus::Ativa);
    assert_eq!(GradeStatus::default(), GradeStatus::EmAndamento);
}

// ===== SERIALIZATION SHAPE =====

#[test]
fn lead_serializes_with_camel_case_names_and_nested_financial_info() {
    let row = json!({
        "id": "1",
        "name": "Ana Carolina Silva",
        "status": "contatado",
        "last_contact": "2024-01-15T10:30:00+00:00",
        "created_at": "2024-01-10T09:00:00+00:00",
        "payment_status": "parcial",
        "total_value": 5000.0
    });
    let lead: Lead = serde_json::from_value(row).expect("row should deserialize");

    let value = serde_json::to_value(&lead).expect("lead should serialize");
    let object = value.as_object().expect("should be an object");
    assert!(object.contains_key("lastContact"));
    assert!(object.contains_key("totalValue"));
    assert!(!object.contains_key("last_contact"));
    assert_eq!(value["financialInfo"]["paymentStatus"], "parcial");
}

#[test]
fn timestamps_tolerate_zone_free_and_date_only_input() {
    let zone_free = json!({
        "id": "1",
        "name": "x",
        "status": "prospecto",
        "last_contact": "2024-01-15T10:30:00",
        "created_at": "2024-01-10"
    });
    let lead: Lead = serde_json::from_value(zone_free).expect("row should deserialize");
    assert_eq!(lead.last_contact, datetime!(2024-01-15 10:30 UTC));
    assert_eq!(lead.created_at, datetime!(2024-01-10 00:00 UTC));
}

#[test]
fn row_patch_omits_absent_fields() {
    let patch = LeadRowPatch { status: Some(LeadStatus::Interessado), ..LeadRowPatch::default() };
    let value = serde_json::to_value(&patch).expect("patch should serialize");
    let object = value.as_object().expect("should be an object");
    assert_eq!(object.len(), 1);
    assert_eq!(value["status"], "interessado");
}
