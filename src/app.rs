use crate::config::Config;
use crate::form::{Alert, AppointmentForm, FieldId, SubmitOutcome};
use crate::render;
use crate::submission::{ConsoleTarget, SubmissionTarget};
use crate::validation::WorkingHours;
use anyhow::Result;
use log::{debug, error, info};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Interactive front end for the booking form. Constructed once at startup,
/// it owns the form, dispatches edit and submit commands to it, and hands
/// accepted bookings to the submission target.
pub struct Application {
    form: AppointmentForm,
    target: Box<dyn SubmissionTarget>,
    working_hours: WorkingHours,
}

impl Application {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_target(config.working_hours(), Box::new(ConsoleTarget)))
    }

    pub fn with_target(working_hours: WorkingHours, target: Box<dyn SubmissionTarget>) -> Self {
        Self { form: AppointmentForm::new(working_hours.clone()), target, working_hours }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Appointly booking form");

        let mut rl = DefaultEditor::new()?;
        println!("Welcome to Appointly! Type 'help' for commands.");

        loop {
            match rl.readline(">> ") {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    match self.process_command(&line) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(err) => error!("Failed to process command: {:?}", err),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Dispatch a single command line. Returns `Ok(true)` when the user asked
    /// to leave.
    pub fn process_command(&mut self, input: &str) -> Result<bool> {
        let mut parts = split_input(input);
        if parts.is_empty() {
            return Ok(false);
        }
        let command = parts.remove(0);

        // Field names double as commands: `email jo@x.com` edits that field.
        if let Some(field) = FieldId::from_label(&command) {
            let value = parts.join(" ");
            debug!("Editing field '{}'", field.label());
            self.form.edit(field, &value);
            return Ok(false);
        }

        match command.as_str() {
            "show" => {
                self.show();
                Ok(false)
            }
            "submit" => {
                self.submit()?;
                Ok(false)
            }
            "clear" => {
                self.form = AppointmentForm::new(self.working_hours.clone());
                println!("Form cleared.");
                Ok(false)
            }
            "help" => {
                print_help();
                Ok(false)
            }
            "exit" | "quit" => Ok(true),
            _ => {
                println!("Unknown command. Type 'help' for available commands.");
                Ok(false)
            }
        }
    }

    fn show(&self) {
        print!("{}", render::render_form(&self.form));
        if let Some(alert) = self.form.alert() {
            println!("{}", render::render_alert(alert));
        }
    }

    fn submit(&mut self) -> Result<()> {
        match self.form.submit() {
            SubmitOutcome::Accepted(appointment) => {
                info!("Booking for {} accepted, delivering", appointment.name);
                match self.target.deliver(&appointment) {
                    Ok(()) => {
                        self.form.set_alert(Alert::success("Appointment request submitted."));
                    }
                    Err(err) => {
                        error!("Delivery failed: {}", err);
                        self.form.set_alert(Alert::danger(format!("Submission failed: {}", err)));
                    }
                }
                if let Some(alert) = self.form.alert() {
                    println!("{}", render::render_alert(alert));
                }
            }
            SubmitOutcome::Rejected => {
                debug!("Booking rejected by field validation");
                self.show();
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn form(&self) -> &AppointmentForm {
        &self.form
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  name <value>    - Set the patient name");
    println!("  email <value>   - Set the contact email");
    println!("  date <value>    - Set the appointment date (YYYY-MM-DD)");
    println!("  time <value>    - Set the appointment time (HH:MM)");
    println!("  reason <value>  - Set the reason for the visit");
    println!("  show            - Show the form with any errors");
    println!("  submit          - Validate and submit the booking");
    println!("  clear           - Reset the form");
    println!("  help            - Show this help");
    println!("  exit            - Leave the booking form");
}

/// Split a command line into whitespace-separated parts, keeping quoted
/// sections together.
fn split_input(input: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                if !in_quotes && !current.is_empty() {
                    parts.push(current.clone());
                    current.clear();
                }
            }
            ' ' if !in_quotes => {
                if !current.is_empty() {
                    parts.push(current.clone());
                    current.clear();
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }

    parts
}
