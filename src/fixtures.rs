//! Fallback fixture dataset.
//!
//! DESIGN
//! ======
//! When the remote store is unconfigured or unreachable, every read serves
//! records from this dataset instead. It is an owned value hanging off
//! `AppState` (not a module-level singleton) so tests can build and reset
//! it freely. Only explicit update operations mutate it; the mutation lives
//! for the process lifetime and is never persisted.

use time::macros::{date, datetime};

use crate::model::{
    Course, CourseFormat, CourseInterest, CourseLevel, FinancialInfo, Grade, GradeStatus, Guarantor, InterestLevel,
    Lead, LeadStatus, Matriculation, MatriculationStatus, PaymentPlan, PaymentStatus,
};

/// In-memory fixture collections for all four entities.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub leads: Vec<Lead>,
    pub courses: Vec<Course>,
    pub matriculations: Vec<Matriculation>,
    pub grades: Vec<Grade>,
}

impl Fixtures {
    /// The built-in sample dataset served in fallback mode.
    #[must_use]
    pub fn sample() -> Self {
        let courses = sample_courses();
        let grades = sample_grades();
        let matriculations = sample_matriculations(&grades);
        let leads = sample_leads();
        Self { leads, courses, matriculations, grades }
    }

    /// An empty dataset, for tests that need full control over contents.
    #[must_use]
    pub fn empty() -> Self {
        Self { leads: Vec::new(), courses: Vec::new(), matriculations: Vec::new(), grades: Vec::new() }
    }
}

fn sample_courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            name: "Técnico em Enfermagem".to_string(),
            level: CourseLevel::Tecnico,
            format: CourseFormat::Presencial,
            duration: "18 meses".to_string(),
            price: 5400.0,
            start_date: date!(2024 - 03 - 04),
            enrollment_deadline: date!(2024 - 02 - 23),
        },
        Course {
            id: "2".to_string(),
            name: "Graduação em Administração".to_string(),
            level: CourseLevel::Graduacao,
            format: CourseFormat::Hibrido,
            duration: "8 semestres".to_string(),
            price: 18000.0,
            start_date: date!(2024 - 02 - 19),
            enrollment_deadline: date!(2024 - 02 - 09),
        },
        Course {
            id: "3".to_string(),
            name: "Especialização em Gestão de Projetos".to_string(),
            level: CourseLevel::Especializacao,
            format: CourseFormat::Online,
            duration: "12 meses".to_string(),
            price: 7800.0,
            start_date: date!(2024 - 04 - 01),
            enrollment_deadline: date!(2024 - 03 - 22),
        },
        Course {
            id: "4".to_string(),
            name: "Profissionalizante de Logística".to_string(),
            level: CourseLevel::Profissionalizante,
            format: CourseFormat::Online,
            duration: "6 meses".to_string(),
            price: 1900.0,
            start_date: date!(2024 - 03 - 11),
            enrollment_deadline: date!(2024 - 03 - 01),
        },
    ]
}

fn sample_leads() -> Vec<Lead> {
    vec![
        Lead {
            id: "1".to_string(),
            name: "Ana Carolina Silva".to_string(),
            email: "ana.silva@email.com".to_string(),
            phone: "(11) 98765-4321".to_string(),
            status: LeadStatus::Contatado,
            last_contact: datetime!(2024-01-15 10:30 UTC),
            next_contact: Some(datetime!(2024-01-22 14:00 UTC)),
            educational_background: "Ensino médio completo".to_string(),
            interest_areas: vec!["Saúde".to_string()],
            preferred_course_types: vec![CourseLevel::Tecnico],
            preferred_format: vec![CourseFormat::Presencial],
            notes: "Quer começar no próximo semestre; pediu detalhes de bolsa.".to_string(),
            interested_courses: vec![CourseInterest {
                course_id: "1".to_string(),
                course_name: "Técnico em Enfermagem".to_string(),
                interest_level: InterestLevel::Alto,
            }],
            financial_info: FinancialInfo {
                payment_plan: Some(PaymentPlan::Parcelado),
                scholarship: false,
                scholarship_percentage: None,
                payment_status: PaymentStatus::Pendente,
            },
            total_value: 5000.0,
            created_at: datetime!(2024-01-10 09:00 UTC),
        },
        Lead {
            id: "2".to_string(),
            name: "Bruno Ferreira Santos".to_string(),
            email: "bruno.santos@email.com".to_string(),
            phone: "(11) 97654-3210".to_string(),
            status: LeadStatus::Prospecto,
            last_contact: datetime!(2024-01-18 16:45 UTC),
            next_contact: None,
            educational_background: "Cursando ensino médio".to_string(),
            interest_areas: vec!["Logística".to_string(), "Administração".to_string()],
            preferred_course_types: vec![CourseLevel::Profissionalizante],
            preferred_format: vec![CourseFormat::Online],
            notes: String::new(),
            interested_courses: Vec::new(),
            financial_info: FinancialInfo::default(),
            total_value: 0.0,
            created_at: datetime!(2024-01-18 16:45 UTC),
        },
        Lead {
            id: "3".to_string(),
            name: "Carla Mendes Oliveira".to_string(),
            email: "carla.mendes@email.com".to_string(),
            phone: "(21) 96543-2109".to_string(),
            status: LeadStatus::Interessado,
            last_contact: datetime!(2024-01-19 11:15 UTC),
            next_contact: Some(datetime!(2024-01-26 10:00 UTC)),
            educational_background: "Graduação em Enfermagem".to_string(),
            interest_areas: vec!["Gestão".to_string()],
            preferred_course_types: vec![CourseLevel::Especializacao, CourseLevel::Pos],
            preferred_format: vec![CourseFormat::Online, CourseFormat::Hibrido],
            notes: "Bolsista em potencial, avaliar desconto de 50%.".to_string(),
            interested_courses: vec![CourseInterest {
                course_id: "3".to_string(),
                course_name: "Especialização em Gestão de Projetos".to_string(),
                interest_level: InterestLevel::Medio,
            }],
            financial_info: FinancialInfo {
                payment_plan: Some(PaymentPlan::AVista),
                scholarship: true,
                scholarship_percentage: Some(50.0),
                payment_status: PaymentStatus::Pendente,
            },
            total_value: 3200.0,
            created_at: datetime!(2024-01-12 08:30 UTC),
        },
        Lead {
            id: "4".to_string(),
            name: "Diego Almeida Costa".to_string(),
            email: "diego.costa@email.com".to_string(),
            phone: "(31) 95432-1098".to_string(),
            status: LeadStatus::Matriculado,
            last_contact: datetime!(2024-01-20 14:00 UTC),
            next_contact: None,
            educational_background: "Ensino médio completo".to_string(),
            interest_areas: vec!["Administração".to_string()],
            preferred_course_types: vec![CourseLevel::Graduacao],
            preferred_format: vec![CourseFormat::Hibrido],
            notes: "Matrícula confirmada na graduação.".to_string(),
            interested_courses: vec![CourseInterest {
                course_id: "2".to_string(),
                course_name: "Graduação em Administração".to_string(),
                interest_level: InterestLevel::Alto,
            }],
            financial_info: FinancialInfo {
                payment_plan: Some(PaymentPlan::Financiamento),
                scholarship: false,
                scholarship_percentage: None,
                payment_status: PaymentStatus::Parcial,
            },
            total_value: 18000.0,
            created_at: datetime!(2023-12-01 10:00 UTC),
        },
        Lead {
            id: "5".to_string(),
            name: "Elisa Rocha Lima".to_string(),
            email: "elisa.lima@email.com".to_string(),
            phone: "(41) 94321-0987".to_string(),
            status: LeadStatus::Desistente,
            last_contact: datetime!(2023-11-30 15:20 UTC),
            next_contact: None,
            educational_background: "Graduação incompleta".to_string(),
            interest_areas: vec!["Tecnologia".to_string()],
            preferred_course_types: vec![CourseLevel::Graduacao],
            preferred_format: vec![CourseFormat::Online],
            notes: "Desistiu por mudança de cidade.".to_string(),
            interested_courses: Vec::new(),
            financial_info: FinancialInfo::default(),
            total_value: 0.0,
            created_at: datetime!(2023-10-05 13:00 UTC),
        },
    ]
}

fn sample_grades() -> Vec<Grade> {
    vec![
        Grade {
            id: "1".to_string(),
            matriculation_id: "1".to_string(),
            student_id: "4".to_string(),
            student_name: "Diego Almeida Costa".to_string(),
            course_id: "2".to_string(),
            course_name: "Graduação em Administração".to_string(),
            subject_name: "Introdução à Administração".to_string(),
            period: "2024.1".to_string(),
            grade: 8.5,
            max_grade: 10.0,
            status: GradeStatus::Aprovado,
            date: datetime!(2024-06-28 12:00 UTC),
        },
        Grade {
            id: "2".to_string(),
            matriculation_id: "2".to_string(),
            student_id: "6".to_string(),
            student_name: "Fernanda Souza Pereira".to_string(),
            course_id: "1".to_string(),
            course_name: "Técnico em Enfermagem".to_string(),
            subject_name: "Anatomia e Fisiologia".to_string(),
            period: "2023.2".to_string(),
            grade: 7.0,
            max_grade: 10.0,
            status: GradeStatus::Aprovado,
            date: datetime!(2023-12-15 12:00 UTC),
        },
        Grade {
            id: "3".to_string(),
            matriculation_id: "2".to_string(),
            student_id: "6".to_string(),
            student_name: "Fernanda Souza Pereira".to_string(),
            course_id: "1".to_string(),
            course_name: "Técnico em Enfermagem".to_string(),
            subject_name: "Farmacologia Básica".to_string(),
            period: "2024.1".to_string(),
            grade: 4.2,
            max_grade: 10.0,
            status: GradeStatus::Reprovado,
            date: datetime!(2024-06-20 12:00 UTC),
        },
        Grade {
            id: "4".to_string(),
            matriculation_id: "1".to_string(),
            student_id: "4".to_string(),
            student_name: "Diego Almeida Costa".to_string(),
            course_id: "2".to_string(),
            course_name: "Graduação em Administração".to_string(),
            subject_name: "Matemática Financeira".to_string(),
            period: "2024.2".to_string(),
            grade: 6.8,
            max_grade: 10.0,
            status: GradeStatus::EmAndamento,
            date: datetime!(2024-11-10 12:00 UTC),
        },
    ]
}

fn sample_matriculations(grades: &[Grade]) -> Vec<Matriculation> {
    let grades_for = |matriculation_id: &str| -> Vec<Grade> {
        grades
            .iter()
            .filter(|g| g.matriculation_id == matriculation_id)
            .cloned()
            .collect()
    };

    vec![
        Matriculation {
            id: "1".to_string(),
            student_id: "4".to_string(),
            student_name: "Diego Almeida Costa".to_string(),
            course_id: "2".to_string(),
            course_name: "Graduação em Administração".to_string(),
            enrollment_date: datetime!(2024-01-20 14:30 UTC),
            start_date: date!(2024 - 02 - 19),
            end_date: date!(2027 - 12 - 17),
            status: MatriculationStatus::Ativa,
            payment_status: PaymentStatus::Parcial,
            financial_guarantor: None,
            grades: grades_for("1"),
        },
        Matriculation {
            id: "2".to_string(),
            student_id: "6".to_string(),
            student_name: "Fernanda Souza Pereira".to_string(),
            course_id: "1".to_string(),
            course_name: "Técnico em Enfermagem".to_string(),
            enrollment_date: datetime!(2023-08-15 09:00 UTC),
            start_date: date!(2023 - 09 - 04),
            end_date: date!(2025 - 03 - 04),
            status: MatriculationStatus::Ativa,
            payment_status: PaymentStatus::Pendente,
            financial_guarantor: Some(Guarantor {
                name: "Marcos Souza Pereira".to_string(),
                relationship: "pai".to_string(),
                phone: "(11) 93210-9876".to_string(),
                email: "marcos.pereira@email.com".to_string(),
            }),
            grades: grades_for("2"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_contains_documented_contacted_lead() {
        let fixtures = Fixtures::sample();
        let lead = fixtures
            .leads
            .iter()
            .find(|l| l.id == "1")
            .expect("lead 1 should exist");
        assert_eq!(lead.status, LeadStatus::Contatado);
        assert!((lead.total_value - 5000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sample_matriculations_embed_their_grades() {
        let fixtures = Fixtures::sample();
        for matriculation in &fixtures.matriculations {
            assert!(!matriculation.grades.is_empty());
            for grade in &matriculation.grades {
                assert_eq!(grade.matriculation_id, matriculation.id);
            }
        }
    }

    #[test]
    fn sample_minor_student_has_guarantor() {
        let fixtures = Fixtures::sample();
        let minor = fixtures
            .matriculations
            .iter()
            .find(|m| m.id == "2")
            .expect("matriculation 2 should exist");
        let guarantor = minor.financial_guarantor.as_ref().expect("guarantor required");
        assert_eq!(guarantor.relationship, "pai");
    }

    #[test]
    fn empty_has_no_records() {
        let fixtures = Fixtures::empty();
        assert!(fixtures.leads.is_empty());
        assert!(fixtures.courses.is_empty());
        assert!(fixtures.matriculations.is_empty());
        assert!(fixtures.grades.is_empty());
    }
}
