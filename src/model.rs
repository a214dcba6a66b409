//! Domain records and the row/domain transform.
//!
//! DESIGN
//! ======
//! The store speaks snake_case column names; the application and its JSON
//! API speak camelCase. Every record here deserializes from either shape
//! through an exhaustive per-field alias table (no runtime property
//! probing), and always serializes as the camelCase domain shape. Numeric
//! columns tolerate string-encoded values, date columns tolerate both
//! date-only and full timestamp encodings.
//!
//! Lead and Matriculation carry nested structures (`financialInfo`, the
//! guarantor) that the store flattens into columns; those two deserialize
//! through an intermediate wire struct that rebuilds the nesting.

use serde::{Deserialize, Deserializer, Serialize};
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

// =============================================================================
// ENUMS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseLevel {
    #[serde(rename = "tecnico")]
    Tecnico,
    #[serde(rename = "graduacao")]
    Graduacao,
    #[serde(rename = "pos")]
    Pos,
    #[serde(rename = "especializacao")]
    Especializacao,
    #[serde(rename = "profissionalizante")]
    Profissionalizante,
}

impl CourseLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tecnico => "tecnico",
            Self::Graduacao => "graduacao",
            Self::Pos => "pos",
            Self::Especializacao => "especializacao",
            Self::Profissionalizante => "profissionalizante",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseFormat {
    #[serde(rename = "presencial")]
    Presencial,
    #[serde(rename = "hibrido")]
    Hibrido,
    #[serde(rename = "online")]
    Online,
}

impl CourseFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Presencial => "presencial",
            Self::Hibrido => "hibrido",
            Self::Online => "online",
        }
    }
}

/// Pipeline position of a lead. `Prospecto` is the initial status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    #[default]
    #[serde(rename = "prospecto")]
    Prospecto,
    #[serde(rename = "contatado")]
    Contatado,
    #[serde(rename = "interessado")]
    Interessado,
    #[serde(rename = "inscrito")]
    Inscrito,
    #[serde(rename = "matriculado")]
    Matriculado,
    #[serde(rename = "desistente")]
    Desistente,
}

impl LeadStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prospecto => "prospecto",
            Self::Contatado => "contatado",
            Self::Interessado => "interessado",
            Self::Inscrito => "inscrito",
            Self::Matriculado => "matriculado",
            Self::Desistente => "desistente",
        }
    }
}

/// Payment status shared by leads and matriculations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    #[serde(rename = "pendente")]
    Pendente,
    #[serde(rename = "parcial")]
    Parcial,
    #[serde(rename = "completo")]
    Completo,
    #[serde(rename = "bolsa")]
    Bolsa,
}

impl PaymentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pendente => "pendente",
            Self::Parcial => "parcial",
            Self::Completo => "completo",
            Self::Bolsa => "bolsa",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentPlan {
    #[serde(rename = "avista")]
    AVista,
    #[serde(rename = "parcelado")]
    Parcelado,
    #[serde(rename = "financiamento")]
    Financiamento,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestLevel {
    #[serde(rename = "baixo")]
    Baixo,
    #[serde(rename = "medio")]
    Medio,
    #[serde(rename = "alto")]
    Alto,
}

/// Matriculation status. `Ativa` is the initial status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatriculationStatus {
    #[default]
    #[serde(rename = "ativa")]
    Ativa,
    #[serde(rename = "trancada")]
    Trancada,
    #[serde(rename = "concluida")]
    Concluida,
    #[serde(rename = "cancelada")]
    Cancelada,
}

impl MatriculationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ativa => "ativa",
            Self::Trancada => "trancada",
            Self::Concluida => "concluida",
            Self::Cancelada => "cancelada",
        }
    }
}

/// Grade status. `EmAndamento` is the initial status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeStatus {
    #[serde(rename = "aprovado")]
    Aprovado,
    #[serde(rename = "reprovado")]
    Reprovado,
    #[default]
    #[serde(rename = "em_andamento")]
    EmAndamento,
}

// =============================================================================
// COURSE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub level: CourseLevel,
    pub format: CourseFormat,
    #[serde(default)]
    pub duration: String,
    #[serde(deserialize_with = "f64_lenient")]
    pub price: f64,
    #[serde(alias = "start_date", with = "day")]
    pub start_date: Date,
    #[serde(alias = "enrollment_deadline", with = "day")]
    pub enrollment_deadline: Date,
}

// =============================================================================
// LEAD
// =============================================================================

/// Course interest entry attached to a lead. Application-side only; the
/// store has no column for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInterest {
    #[serde(alias = "course_id")]
    pub course_id: String,
    #[serde(alias = "course_name")]
    pub course_name: String,
    #[serde(alias = "interest_level")]
    pub interest_level: InterestLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInfo {
    #[serde(default, alias = "payment_plan", skip_serializing_if = "Option::is_none")]
    pub payment_plan: Option<PaymentPlan>,
    #[serde(default)]
    pub scholarship: bool,
    #[serde(
        default,
        alias = "scholarship_percentage",
        deserialize_with = "f64_lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub scholarship_percentage: Option<f64>,
    #[serde(default, alias = "payment_status")]
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "LeadWire")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: LeadStatus,
    #[serde(with = "timestamp")]
    pub last_contact: OffsetDateTime,
    #[serde(with = "timestamp_opt")]
    pub next_contact: Option<OffsetDateTime>,
    pub educational_background: String,
    pub interest_areas: Vec<String>,
    pub preferred_course_types: Vec<CourseLevel>,
    pub preferred_format: Vec<CourseFormat>,
    pub notes: String,
    pub interested_courses: Vec<CourseInterest>,
    pub financial_info: FinancialInfo,
    pub total_value: f64,
    #[serde(with = "timestamp")]
    pub created_at: OffsetDateTime,
}

/// Exhaustive list of accepted lead input fields: camelCase domain names
/// (primary) and snake_case store columns (aliases), plus the flat
/// `payment_*`/`scholarship*` columns that fold into `financialInfo`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeadWire {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    status: LeadStatus,
    #[serde(default, alias = "last_contact", deserialize_with = "timestamp_opt::deserialize")]
    last_contact: Option<OffsetDateTime>,
    #[serde(default, alias = "next_contact", deserialize_with = "timestamp_opt::deserialize")]
    next_contact: Option<OffsetDateTime>,
    #[serde(default, alias = "educational_background")]
    educational_background: String,
    #[serde(default, alias = "interest_areas")]
    interest_areas: Vec<String>,
    #[serde(default, alias = "preferred_course_types")]
    preferred_course_types: Vec<CourseLevel>,
    #[serde(default, alias = "preferred_format")]
    preferred_format: Vec<CourseFormat>,
    #[serde(default)]
    notes: String,
    #[serde(default, alias = "interested_courses")]
    interested_courses: Vec<CourseInterest>,
    #[serde(default, alias = "financial_info")]
    financial_info: Option<FinancialInfo>,
    #[serde(default, alias = "payment_plan")]
    payment_plan: Option<PaymentPlan>,
    #[serde(default)]
    scholarship: Option<bool>,
    #[serde(default, alias = "scholarship_percentage", deserialize_with = "f64_lenient_opt")]
    scholarship_percentage: Option<f64>,
    #[serde(default, alias = "payment_status")]
    payment_status: Option<PaymentStatus>,
    #[serde(default, alias = "total_value", deserialize_with = "f64_lenient_opt")]
    total_value: Option<f64>,
    #[serde(default, alias = "created_at", deserialize_with = "timestamp_opt::deserialize")]
    created_at: Option<OffsetDateTime>,
}

impl From<LeadWire> for Lead {
    fn from(wire: LeadWire) -> Self {
        let financial_info = wire.financial_info.unwrap_or(FinancialInfo {
            payment_plan: wire.payment_plan,
            scholarship: wire.scholarship.unwrap_or(false),
            scholarship_percentage: wire.scholarship_percentage,
            payment_status: wire.payment_status.unwrap_or_default(),
        });

        Self {
            id: wire.id,
            name: wire.name,
            email: wire.email,
            phone: wire.phone,
            status: wire.status,
            last_contact: wire.last_contact.unwrap_or_else(OffsetDateTime::now_utc),
            next_contact: wire.next_contact,
            educational_background: wire.educational_background,
            interest_areas: wire.interest_areas,
            preferred_course_types: wire.preferred_course_types,
            preferred_format: wire.preferred_format,
            notes: wire.notes,
            interested_courses: wire.interested_courses,
            financial_info,
            total_value: wire.total_value.unwrap_or(0.0),
            created_at: wire.created_at.unwrap_or_else(OffsetDateTime::now_utc),
        }
    }
}

// =============================================================================
// MATRICULATION
// =============================================================================

/// Financial guarantor, required when the student is a minor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "MatriculationWire")]
pub struct Matriculation {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub course_id: String,
    pub course_name: String,
    #[serde(with = "timestamp")]
    pub enrollment_date: OffsetDateTime,
    #[serde(with = "day")]
    pub start_date: Date,
    #[serde(with = "day")]
    pub end_date: Date,
    pub status: MatriculationStatus,
    pub payment_status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_guarantor: Option<Guarantor>,
    pub grades: Vec<Grade>,
}

/// Accepted matriculation input fields; the store flattens the guarantor
/// into `guarantor_*` columns, rebuilt here when the nested form is absent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatriculationWire {
    #[serde(default)]
    id: String,
    #[serde(default, alias = "student_id")]
    student_id: String,
    #[serde(default, alias = "student_name")]
    student_name: String,
    #[serde(default, alias = "course_id")]
    course_id: String,
    #[serde(default, alias = "course_name")]
    course_name: String,
    #[serde(default, alias = "enrollment_date", deserialize_with = "timestamp_opt::deserialize")]
    enrollment_date: Option<OffsetDateTime>,
    #[serde(alias = "start_date", deserialize_with = "day::deserialize")]
    start_date: Date,
    #[serde(alias = "end_date", deserialize_with = "day::deserialize")]
    end_date: Date,
    #[serde(default)]
    status: MatriculationStatus,
    #[serde(default, alias = "payment_status")]
    payment_status: PaymentStatus,
    #[serde(default, alias = "financial_guarantor")]
    financial_guarantor: Option<Guarantor>,
    #[serde(default, alias = "guarantor_name")]
    guarantor_name: Option<String>,
    #[serde(default, alias = "guarantor_relationship")]
    guarantor_relationship: Option<String>,
    #[serde(default, alias = "guarantor_phone")]
    guarantor_phone: Option<String>,
    #[serde(default, alias = "guarantor_email")]
    guarantor_email: Option<String>,
    #[serde(default)]
    grades: Vec<Grade>,
}

impl From<MatriculationWire> for Matriculation {
    fn from(wire: MatriculationWire) -> Self {
        let financial_guarantor = match (wire.financial_guarantor, wire.guarantor_name) {
            (Some(guarantor), _) => Some(guarantor),
            (None, Some(name)) if !name.is_empty() => Some(Guarantor {
                name,
                relationship: wire.guarantor_relationship.unwrap_or_default(),
                phone: wire.guarantor_phone.unwrap_or_default(),
                email: wire.guarantor_email.unwrap_or_default(),
            }),
            _ => None,
        };

        Self {
            id: wire.id,
            student_id: wire.student_id,
            student_name: wire.student_name,
            course_id: wire.course_id,
            course_name: wire.course_name,
            enrollment_date: wire.enrollment_date.unwrap_or_else(OffsetDateTime::now_utc),
            start_date: wire.start_date,
            end_date: wire.end_date,
            status: wire.status,
            payment_status: wire.payment_status,
            financial_guarantor,
            grades: wire.grades,
        }
    }
}

// =============================================================================
// GRADE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "matriculation_id")]
    pub matriculation_id: String,
    #[serde(default, alias = "student_id")]
    pub student_id: String,
    #[serde(default, alias = "student_name")]
    pub student_name: String,
    #[serde(default, alias = "course_id")]
    pub course_id: String,
    #[serde(default, alias = "course_name")]
    pub course_name: String,
    #[serde(default, alias = "subject_name")]
    pub subject_name: String,
    #[serde(default)]
    pub period: String,
    #[serde(deserialize_with = "f64_lenient")]
    pub grade: f64,
    #[serde(alias = "max_grade", deserialize_with = "f64_lenient")]
    pub max_grade: f64,
    #[serde(default)]
    pub status: GradeStatus,
    #[serde(with = "timestamp")]
    pub date: OffsetDateTime,
}

// =============================================================================
// STORE ROW SHAPES (serialize-only, snake_case columns)
// =============================================================================

/// Insert row for the `leads` table. `id` is only set by the seed path;
/// regular creates let the store assign one.
#[derive(Debug, Clone, Serialize)]
pub struct LeadRowInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: LeadStatus,
    #[serde(with = "timestamp")]
    pub last_contact: OffsetDateTime,
    #[serde(with = "timestamp_opt")]
    pub next_contact: Option<OffsetDateTime>,
    pub educational_background: String,
    pub interest_areas: Vec<String>,
    pub preferred_course_types: Vec<CourseLevel>,
    pub preferred_format: Vec<CourseFormat>,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_plan: Option<PaymentPlan>,
    pub scholarship: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scholarship_percentage: Option<f64>,
    pub payment_status: PaymentStatus,
    pub total_value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseRowInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub level: CourseLevel,
    pub format: CourseFormat,
    pub duration: String,
    pub price: f64,
    #[serde(with = "day")]
    pub start_date: Date,
    #[serde(with = "day")]
    pub enrollment_deadline: Date,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatriculationRowInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub student_id: String,
    pub student_name: String,
    pub course_id: String,
    pub course_name: String,
    #[serde(with = "timestamp")]
    pub enrollment_date: OffsetDateTime,
    #[serde(with = "day")]
    pub start_date: Date,
    #[serde(with = "day")]
    pub end_date: Date,
    pub status: MatriculationStatus,
    pub payment_status: PaymentStatus,
    pub guarantor_name: Option<String>,
    pub guarantor_relationship: Option<String>,
    pub guarantor_phone: Option<String>,
    pub guarantor_email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeRowInsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub matriculation_id: String,
    pub student_id: String,
    pub student_name: String,
    pub course_id: String,
    pub course_name: String,
    pub subject_name: String,
    pub period: String,
    pub grade: f64,
    pub max_grade: f64,
    pub status: GradeStatus,
    #[serde(with = "timestamp")]
    pub date: OffsetDateTime,
}

/// Partial update for the `leads` table; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LeadRowPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(with = "timestamp_opt", skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<OffsetDateTime>,
    #[serde(with = "timestamp_opt", skip_serializing_if = "Option::is_none")]
    pub next_contact: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educational_background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_areas: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_course_types: Option<Vec<CourseLevel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_format: Option<Vec<CourseFormat>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_value: Option<f64>,
}

/// Partial update for the `courses` table; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CourseRowPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<CourseLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<CourseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(with = "day_opt", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    #[serde(with = "day_opt", skip_serializing_if = "Option::is_none")]
    pub enrollment_deadline: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// DRAFTS (partial records accepted by create/update)
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<LeadStatus>,
    #[serde(default, alias = "last_contact", deserialize_with = "timestamp_opt::deserialize")]
    pub last_contact: Option<OffsetDateTime>,
    #[serde(default, alias = "next_contact", deserialize_with = "timestamp_opt::deserialize")]
    pub next_contact: Option<OffsetDateTime>,
    #[serde(default, alias = "educational_background")]
    pub educational_background: Option<String>,
    #[serde(default, alias = "interest_areas")]
    pub interest_areas: Option<Vec<String>>,
    #[serde(default, alias = "preferred_course_types")]
    pub preferred_course_types: Option<Vec<CourseLevel>>,
    #[serde(default, alias = "preferred_format")]
    pub preferred_format: Option<Vec<CourseFormat>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, alias = "total_value", deserialize_with = "f64_lenient_opt")]
    pub total_value: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub level: Option<CourseLevel>,
    #[serde(default)]
    pub format: Option<CourseFormat>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "f64_lenient_opt")]
    pub price: Option<f64>,
    #[serde(default, alias = "start_date", deserialize_with = "day_opt::deserialize")]
    pub start_date: Option<Date>,
    #[serde(default, alias = "enrollment_deadline", deserialize_with = "day_opt::deserialize")]
    pub enrollment_deadline: Option<Date>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatriculationDraft {
    #[serde(default, alias = "student_id")]
    pub student_id: Option<String>,
    #[serde(default, alias = "student_name")]
    pub student_name: Option<String>,
    #[serde(default, alias = "course_id")]
    pub course_id: Option<String>,
    #[serde(default, alias = "course_name")]
    pub course_name: Option<String>,
    #[serde(default, alias = "enrollment_date", deserialize_with = "timestamp_opt::deserialize")]
    pub enrollment_date: Option<OffsetDateTime>,
    #[serde(default, alias = "start_date", deserialize_with = "day_opt::deserialize")]
    pub start_date: Option<Date>,
    #[serde(default, alias = "end_date", deserialize_with = "day_opt::deserialize")]
    pub end_date: Option<Date>,
    #[serde(default)]
    pub status: Option<MatriculationStatus>,
    #[serde(default, alias = "payment_status")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, alias = "financial_guarantor")]
    pub financial_guarantor: Option<Guarantor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeDraft {
    #[serde(default, alias = "matriculation_id")]
    pub matriculation_id: Option<String>,
    #[serde(default, alias = "student_id")]
    pub student_id: Option<String>,
    #[serde(default, alias = "student_name")]
    pub student_name: Option<String>,
    #[serde(default, alias = "course_id")]
    pub course_id: Option<String>,
    #[serde(default, alias = "course_name")]
    pub course_name: Option<String>,
    #[serde(default, alias = "subject_name")]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default, deserialize_with = "f64_lenient_opt")]
    pub grade: Option<f64>,
    #[serde(default, alias = "max_grade", deserialize_with = "f64_lenient_opt")]
    pub max_grade: Option<f64>,
    #[serde(default)]
    pub status: Option<GradeStatus>,
    #[serde(default, deserialize_with = "timestamp_opt::deserialize")]
    pub date: Option<OffsetDateTime>,
}

// =============================================================================
// LENIENT CODECS
// =============================================================================

/// Accept a JSON number or a numeric string (the store occasionally returns
/// `numeric` columns as strings).
pub(crate) fn f64_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

fn f64_lenient_opt<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().map(Some).map_err(serde::de::Error::custom),
    }
}

const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, String> {
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(dt);
    }
    // Timestamps without a zone come back from `timestamp` columns.
    if let Ok(dt) = PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT) {
        return Ok(dt.assume_utc());
    }
    if let Ok(date) = Date::parse(raw, DAY_FORMAT) {
        return Ok(date.midnight().assume_utc());
    }
    Err(format!("unrecognized timestamp: {raw}"))
}

fn parse_day(raw: &str) -> Result<Date, String> {
    if let Ok(date) = Date::parse(raw, DAY_FORMAT) {
        return Ok(date);
    }
    parse_timestamp(raw).map(|dt| dt.date())
}

/// RFC 3339 timestamps, lenient on input.
pub(crate) mod timestamp {
    use super::{OffsetDateTime, Rfc3339, parse_timestamp};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = value.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OffsetDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// Optional RFC 3339 timestamps; `null` and absent both map to `None`.
pub(crate) mod timestamp_opt {
    use super::{OffsetDateTime, Rfc3339, parse_timestamp};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => {
                let formatted = dt.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
                serializer.serialize_some(&formatted)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse_timestamp(&raw).map(Some).map_err(serde::de::Error::custom),
        }
    }
}

/// `YYYY-MM-DD` dates, tolerating full timestamps on input.
pub(crate) mod day {
    use super::{DAY_FORMAT, Date, parse_day};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = value.format(&DAY_FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_day(&raw).map_err(serde::de::Error::custom)
    }
}

/// Optional `YYYY-MM-DD` dates.
pub(crate) mod day_opt {
    use super::{DAY_FORMAT, Date, parse_day};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => {
                let formatted = date.format(&DAY_FORMAT).map_err(serde::ser::Error::custom)?;
                serializer.serialize_some(&formatted)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Date>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse_day(&raw).map(Some).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
