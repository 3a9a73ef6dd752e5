//! Field validators for appointment booking input.
//
// Pure predicates from a field's current string value to pass/fail, plus the
// working-hours window bookings are checked against.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Permissive email shape: something@something.something. Stricter RFC
/// compliance is intentionally not attempted.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Inclusive booking window, compared as fixed-width "HH:MM" strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingHours {
    pub open: String,
    pub close: String,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self { open: "09:00".to_string(), close: "17:00".to_string() }
    }
}

impl WorkingHours {
    pub fn new(open: &str, close: &str) -> Self {
        Self { open: open.to_string(), close: close.to_string() }
    }

    /// True iff `time` falls within the window, bounds included. Empty input
    /// never qualifies.
    pub fn contains(&self, time: &str) -> bool {
        !time.is_empty() && time >= self.open.as_str() && time <= self.close.as_str()
    }
}

/// Validate that a trimmed value is non-empty.
pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validate email address shape. Empty input fails.
pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Validate that a YYYY-MM-DD date is today or later, at day granularity in
/// local time. Empty or unparsable input fails.
pub fn validate_date_future(value: &str) -> bool {
    date_on_or_after(value, Local::now().date_naive())
}

fn date_on_or_after(value: &str, today: NaiveDate) -> bool {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date >= today,
        Err(_) => false,
    }
}

/// Validate a time against the default 09:00-17:00 booking window.
pub fn validate_working_time(value: &str) -> bool {
    WorkingHours::default().contains(value)
}
