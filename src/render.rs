//! Terminal rendering for the booking form: field rows, inline errors
//! beneath the field that failed, and the summary alert banner.

use crate::form::{Alert, AlertKind, AppointmentForm, FieldId};

const LABEL_WIDTH: usize = 7;

/// Render the form as one row per field, with the error message (if any)
/// on its own line directly under the field.
pub fn render_form(form: &AppointmentForm) -> String {
    let mut out = String::new();
    for id in FieldId::ALL {
        let field = form.field(id);
        let marker = if field.is_invalid() { "*" } else { " " };
        out.push_str(&format!(
            "{} {:<width$}: {}\n",
            marker,
            id.label(),
            field.value,
            width = LABEL_WIDTH
        ));
        if let Some(message) = field.error {
            out.push_str(&format!("  {:<width$}  ! {}\n", "", message, width = LABEL_WIDTH));
        }
    }
    out
}

pub fn render_alert(alert: &Alert) -> String {
    match alert.kind {
        AlertKind::Danger => format!("[error] {}", alert.text),
        AlertKind::Success => format!("[ok] {}", alert.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{AppointmentForm, SubmitOutcome, MSG_NAME_REQUIRED};
    use crate::validation::WorkingHours;

    #[test]
    fn test_invalid_field_renders_marker_and_message() {
        let mut form = AppointmentForm::new(WorkingHours::default());
        assert!(matches!(form.submit(), SubmitOutcome::Rejected));

        let rendered = render_form(&form);
        assert!(rendered.contains("* name"));
        assert!(rendered.contains(&format!("! {}", MSG_NAME_REQUIRED)));
    }

    #[test]
    fn test_clean_field_renders_without_error_line() {
        let mut form = AppointmentForm::new(WorkingHours::default());
        form.edit(FieldId::Name, "Jo");

        let rendered = render_form(&form);
        assert!(rendered.contains("  name   : Jo"));
        assert!(!rendered.contains(&format!("! {}", MSG_NAME_REQUIRED)));
    }

    #[test]
    fn test_alert_banners() {
        assert_eq!(render_alert(&Alert::danger("nope")), "[error] nope");
        assert_eq!(render_alert(&Alert::success("booked")), "[ok] booked");
    }
}
