pub mod app;
pub mod config;
pub mod form;
pub mod render;
pub mod submission;
pub mod validation;

use anyhow::Result;
use log::info;

pub fn run() -> Result<()> {
    // Create and run the application
    let mut app = app::Application::new()?;
    info!("Initializing Appointly booking form");
    app.run()
}

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use form::{Alert, AlertKind, Appointment, AppointmentForm, FieldId, SubmitOutcome};
pub use submission::{ConsoleTarget, SubmissionError, SubmissionTarget};
pub use validation::WorkingHours;
