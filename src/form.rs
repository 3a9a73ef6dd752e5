//! The appointment form component: five field states, a summary alert, and
//! the validate-then-decide submit flow.

use crate::validation::{validate_date_future, validate_email, validate_required, WorkingHours};
use log::debug;
use serde::{Deserialize, Serialize};

pub const MSG_NAME_REQUIRED: &str = "Name is required.";
pub const MSG_EMAIL_INVALID: &str = "Enter a valid email address.";
pub const MSG_DATE_PAST: &str = "Date cannot be in the past.";
pub const MSG_TIME_WINDOW: &str = "Time must be between 09:00 and 17:00.";
pub const MSG_REASON_REQUIRED: &str = "Reason is required.";
pub const MSG_FIX_ERRORS: &str = "Please fix the errors and try again.";

/// The five bookable fields. Declaration order is validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
    Date,
    Time,
    Reason,
}

impl FieldId {
    pub const ALL: [FieldId; 5] =
        [FieldId::Name, FieldId::Email, FieldId::Date, FieldId::Time, FieldId::Reason];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Date => "date",
            FieldId::Time => "time",
            FieldId::Reason => "reason",
        }
    }

    pub fn from_label(label: &str) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|id| id.label() == label)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Current value and validation outcome of a single field. The field is
/// invalid iff `error` is set, and only the most recent submit attempt can
/// have set it; any edit clears it.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    pub value: String,
    pub error: Option<&'static str>,
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

/// Summary banner reflecting the aggregate outcome of the most recent submit
/// attempt.
#[derive(Debug, Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub text: String,
}

impl Alert {
    pub fn danger(text: impl Into<String>) -> Self {
        Self { kind: AlertKind::Danger, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: AlertKind::Success, text: text.into() }
    }
}

/// A complete booking request, constructed only from a form whose five
/// predicates all passed. Name, email and reason are trimmed; date and time
/// are taken as entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// All predicates passed; the appointment may proceed to the submission
    /// target.
    Accepted(Appointment),
    /// At least one field failed; submission is suppressed and the field
    /// errors plus the danger alert describe why.
    Rejected,
}

/// Gates submission of the booking form on the five field predicates and
/// owns the per-field error state and the summary alert.
pub struct AppointmentForm {
    fields: [FieldState; 5],
    alert: Option<Alert>,
    working_hours: WorkingHours,
}

impl AppointmentForm {
    pub fn new(working_hours: WorkingHours) -> Self {
        Self {
            fields: std::array::from_fn(|_| FieldState::default()),
            alert: None,
            working_hours,
        }
    }

    /// Build a form pre-populated from an existing appointment, for the
    /// edit/rebook flow.
    pub fn prefill(appointment: &Appointment, working_hours: WorkingHours) -> Self {
        let mut form = Self::new(working_hours);
        form.edit(FieldId::Name, &appointment.name);
        form.edit(FieldId::Email, &appointment.email);
        form.edit(FieldId::Date, &appointment.date);
        form.edit(FieldId::Time, &appointment.time);
        form.edit(FieldId::Reason, &appointment.reason);
        form
    }

    pub fn field(&self, id: FieldId) -> &FieldState {
        &self.fields[id.index()]
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn set_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    pub fn working_hours(&self) -> &WorkingHours {
        &self.working_hours
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(FieldState::is_invalid)
    }

    /// Store the new value and clear the field's error. Covers every kind of
    /// user edit; the error must not outlive the input that caused it.
    pub fn edit(&mut self, id: FieldId, value: &str) {
        let field = &mut self.fields[id.index()];
        field.value = value.to_string();
        field.error = None;
    }

    fn fail(&mut self, id: FieldId, message: &'static str) {
        self.fields[id.index()].error = Some(message);
    }

    /// Run all five predicates in fixed order and decide whether the booking
    /// may proceed. Every submit attempt starts from a clean error slate.
    pub fn submit(&mut self) -> SubmitOutcome {
        for field in &mut self.fields {
            field.error = None;
        }

        let name = self.field(FieldId::Name).value.trim().to_string();
        let email = self.field(FieldId::Email).value.trim().to_string();
        let date = self.field(FieldId::Date).value.clone();
        let time = self.field(FieldId::Time).value.clone();
        let reason = self.field(FieldId::Reason).value.trim().to_string();

        if !validate_required(&name) {
            self.fail(FieldId::Name, MSG_NAME_REQUIRED);
        }
        if !validate_email(&email) {
            self.fail(FieldId::Email, MSG_EMAIL_INVALID);
        }
        if !validate_date_future(&date) {
            self.fail(FieldId::Date, MSG_DATE_PAST);
        }
        if !self.working_hours.contains(&time) {
            self.fail(FieldId::Time, MSG_TIME_WINDOW);
        }
        if !validate_required(&reason) {
            self.fail(FieldId::Reason, MSG_REASON_REQUIRED);
        }

        if self.has_errors() {
            let invalid = self.fields.iter().filter(|f| f.is_invalid()).count();
            debug!("Submit rejected with {} invalid field(s)", invalid);
            self.alert = Some(Alert::danger(MSG_FIX_ERRORS));
            return SubmitOutcome::Rejected;
        }

        debug!("Submit accepted for {} on {} at {}", name, date, time);
        SubmitOutcome::Accepted(Appointment { name, email, date, time, reason })
    }
}
