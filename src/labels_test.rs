use super::*;
use time::macros::date;

#[test]
fn currency_groups_thousands_and_uses_comma_decimals() {
    assert_eq!(format_currency(5000.0), "R$ 5.000,00");
    assert_eq!(format_currency(18000.0), "R$ 18.000,00");
    assert_eq!(format_currency(1234567.89), "R$ 1.234.567,89");
    assert_eq!(format_currency(0.5), "R$ 0,50");
    assert_eq!(format_currency(0.0), "R$ 0,00");
}

#[test]
fn currency_keeps_the_sign_ahead_of_the_symbol() {
    assert_eq!(format_currency(-1900.0), "-R$ 1.900,00");
}

#[test]
fn days_render_in_brazilian_order() {
    assert_eq!(format_day(date!(2024 - 03 - 04)), "04/03/2024");
    assert_eq!(format_day(date!(2024 - 12 - 31)), "31/12/2024");
}

#[test]
fn days_until_today_is_zero() {
    assert_eq!(days_until(OffsetDateTime::now_utc().date()), 0);
}

#[test]
fn status_labels_are_human_readable() {
    assert_eq!(lead_status_label(LeadStatus::Prospecto), "Prospecto");
    assert_eq!(lead_status_label(LeadStatus::Desistente), "Desistente");
    assert_eq!(payment_status_label(PaymentStatus::Bolsa), "Bolsa");
    assert_eq!(matriculation_status_label(MatriculationStatus::Concluida), "Concluída");
    assert_eq!(grade_status_label(GradeStatus::EmAndamento), "Em Andamento");
}

#[test]
fn course_labels_carry_accents() {
    assert_eq!(course_level_label(CourseLevel::Tecnico), "Técnico");
    assert_eq!(course_level_label(CourseLevel::Pos), "Pós-graduação");
    assert_eq!(course_format_label(CourseFormat::Hibrido), "Híbrido");
}
