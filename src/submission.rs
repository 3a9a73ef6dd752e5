//! Submission boundary: where an accepted booking leaves the form.

use crate::form::Appointment;
use log::info;

/// Errors raised by a submission target. Field validation never surfaces
/// here; only delivery of an already-accepted appointment can fail.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Booking endpoint rejected the request: {0}")]
    Rejected(String),
    #[error("Failed to encode appointment payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Receives appointments whose fields have all passed validation. Stands in
/// for the real booking endpoint; the form never retries or re-validates on
/// its behalf.
pub trait SubmissionTarget {
    fn deliver(&mut self, appointment: &Appointment) -> Result<(), SubmissionError>;
}

/// Writes the booking as JSON to stdout for interactive use.
pub struct ConsoleTarget;

impl SubmissionTarget for ConsoleTarget {
    fn deliver(&mut self, appointment: &Appointment) -> Result<(), SubmissionError> {
        let payload = serde_json::to_string_pretty(appointment)?;
        info!("Delivering appointment for {}", appointment.name);
        println!("{}", payload);
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records everything delivered to it.
    #[derive(Default)]
    pub struct RecordingTarget {
        pub delivered: Vec<Appointment>,
    }

    impl SubmissionTarget for RecordingTarget {
        fn deliver(&mut self, appointment: &Appointment) -> Result<(), SubmissionError> {
            self.delivered.push(appointment.clone());
            Ok(())
        }
    }

    /// Refuses every delivery, for exercising the failure path.
    pub struct RefusingTarget;

    impl SubmissionTarget for RefusingTarget {
        fn deliver(&mut self, _appointment: &Appointment) -> Result<(), SubmissionError> {
            Err(SubmissionError::Rejected("endpoint unavailable".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{RecordingTarget, RefusingTarget};
    use super::*;

    fn sample() -> Appointment {
        Appointment {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            date: "2030-01-02".to_string(),
            time: "10:00".to_string(),
            reason: "checkup".to_string(),
        }
    }

    #[test]
    fn test_recording_target_keeps_payloads() {
        let mut target = RecordingTarget::default();
        target.deliver(&sample()).unwrap();
        assert_eq!(target.delivered.len(), 1);
        assert_eq!(target.delivered[0].email, "jo@x.com");
    }

    #[test]
    fn test_refusing_target_reports_rejection() {
        let mut target = RefusingTarget;
        let err = target.deliver(&sample()).unwrap_err();
        assert!(matches!(err, SubmissionError::Rejected(_)));
    }
}
