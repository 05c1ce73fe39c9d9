use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Uses an indicatif spinner while graph discovery is running; the number
/// of packages is unknown up front, so there is no bounded bar.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn get_or_create_spinner(&self) -> ProgressBar {
        let mut spinner_option = self.spinner.borrow_mut();
        if let Some(spinner) = spinner_option.as_ref() {
            spinner.clone()
        } else {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("   {spinner:.green} {msg}")
                    .expect("Failed to set spinner template"),
            );
            spinner.enable_steady_tick(Duration::from_millis(120));
            *spinner_option = Some(spinner.clone());
            spinner
        }
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        let spinner = self.get_or_create_spinner();
        spinner.set_message(message.to_string());
    }

    fn report_error(&self, message: &str) {
        // Clear the spinner so the warning is not mixed into its line
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }
}
