//! Display formatting: pt-BR currency and dates, human-readable labels
//! for the enumerated statuses.

use time::{Date, OffsetDateTime};

use crate::model::{
    CourseFormat, CourseLevel, GradeStatus, LeadStatus, MatriculationStatus, PaymentStatus,
};

/// Format a monetary amount as Brazilian reais, e.g. `R$ 5.000,00`.
/// Negative amounts keep the sign ahead of the currency symbol.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{fraction:02}")
}

/// Format a date as `DD/MM/YYYY`.
#[must_use]
pub fn format_day(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

/// Whole days from today until `date`; negative when the date has passed.
#[must_use]
pub fn days_until(date: Date) -> i64 {
    (date - OffsetDateTime::now_utc().date()).whole_days()
}

#[must_use]
pub fn lead_status_label(status: LeadStatus) -> &'static str {
    match status {
        LeadStatus::Prospecto => "Prospecto",
        LeadStatus::Contatado => "Contatado",
        LeadStatus::Interessado => "Interessado",
        LeadStatus::Inscrito => "Inscrito",
        LeadStatus::Matriculado => "Matriculado",
        LeadStatus::Desistente => "Desistente",
    }
}

#[must_use]
pub fn payment_status_label(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pendente => "Pendente",
        PaymentStatus::Parcial => "Parcial",
        PaymentStatus::Completo => "Completo",
        PaymentStatus::Bolsa => "Bolsa",
    }
}

#[must_use]
pub fn matriculation_status_label(status: MatriculationStatus) -> &'static str {
    match status {
        MatriculationStatus::Ativa => "Ativa",
        MatriculationStatus::Trancada => "Trancada",
        MatriculationStatus::Concluida => "Concluída",
        MatriculationStatus::Cancelada => "Cancelada",
    }
}

#[must_use]
pub fn grade_status_label(status: GradeStatus) -> &'static str {
    match status {
        GradeStatus::Aprovado => "Aprovado",
        GradeStatus::Reprovado => "Reprovado",
        GradeStatus::EmAndamento => "Em Andamento",
    }
}

#[must_use]
pub fn course_level_label(level: CourseLevel) -> &'static str {
    match level {
        CourseLevel::Tecnico => "Técnico",
        CourseLevel::Graduacao => "Graduação",
        CourseLevel::Pos => "Pós-graduação",
        CourseLevel::Especializacao => "Especialização",
        CourseLevel::Profissionalizante => "Profissionalizante",
    }
}

#[must_use]
pub fn course_format_label(format: CourseFormat) -> &'static str {
    match format {
        CourseFormat::Presencial => "Presencial",
        CourseFormat::Hibrido => "Híbrido",
        CourseFormat::Online => "Online",
    }
}

#[cfg(test)]
#[path = "labels_test.rs"]
mod tests;
