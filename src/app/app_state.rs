use std::path::PathBuf;
use std::sync::mpsc::channel;
use std::time::Instant;

use ratatui::layout::Rect;

use crate::care_plan::CarePlanView;
use crate::client::{BACKEND_UNREACHABLE, UNEXPECTED};
use crate::config::{ApiConfig, Config, resolve_output_dir};
use crate::error::CarePlanError;
use crate::form::FormState;
use crate::notification::NotificationState;
use crate::patient::samples::sample_patients;
use crate::patient::{HealthStatus, PatientRecord};
use crate::submission::{SubmissionEvent, SubmissionState, SubmitError, spawn_worker};

/// Which screen fills the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    CarePlan,
}

/// Last known state of the care plan service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Online(HealthStatus),
    Offline(String),
}

/// Application state
pub struct App {
    pub form: FormState,
    pub submission: SubmissionState,
    pub care_plan: Option<CarePlanView>,
    pub notification: NotificationState,
    pub backend: BackendStatus,
    /// Submission failure shown above the form until dismissed
    pub error: Option<String>,
    pub base_url: String,
    pub output_dir: Option<PathBuf>,
    samples: Vec<PatientRecord>,
    next_sample: usize,
    should_quit: bool,
    /// Click targets recorded during the last render
    pub(super) dismiss_error_area: Option<Rect>,
    pub(super) new_patient_area: Option<Rect>,
}

impl App {
    /// Create the app without starting the worker
    pub fn new(config: &Config) -> Self {
        Self {
            form: FormState::new(),
            submission: SubmissionState::new(),
            care_plan: None,
            notification: NotificationState::new(),
            backend: BackendStatus::Checking,
            error: None,
            base_url: config.api.base_url.clone(),
            output_dir: resolve_output_dir(&config.output),
            samples: sample_patients(),
            next_sample: 0,
            should_quit: false,
            dismiss_error_area: None,
            new_patient_area: None,
        }
    }

    /// Spawn the worker thread and ask it for the service health
    pub fn start_worker(&mut self, config: &ApiConfig) {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();
        spawn_worker(config, request_rx, response_tx);
        self.submission.set_channels(request_tx, response_rx);

        if !self.submission.request_health() {
            self.backend = BackendStatus::Offline(BACKEND_UNREACHABLE.to_string());
        }
    }

    pub fn view(&self) -> View {
        if self.care_plan.is_some() {
            View::CarePlan
        } else {
            View::Form
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_in_flight()
    }

    /// Replace the form with the built-in sample at `index` (wrapping)
    pub fn load_sample(&mut self, index: usize) {
        if self.samples.is_empty() {
            return;
        }
        let index = index % self.samples.len();
        self.form.load(&self.samples[index]);
        self.next_sample = index + 1;
        self.notification
            .show(&format!("Loaded sample patient: {}", self.samples[index].name));
    }

    /// Load the sample after the last one loaded
    pub fn cycle_sample(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.load_sample(self.next_sample);
    }

    /// Validate the form and hand the record to the worker
    ///
    /// A no-op while a request is already in flight.
    pub fn submit(&mut self) {
        if self.is_submitting() {
            return;
        }

        let record = match self.form.to_record() {
            Ok(record) => record,
            Err(e) => {
                log::debug!("Form invalid: {}", e);
                self.form.set_focus(e.field());
                self.error = Some(e.to_string());
                return;
            }
        };

        match self.submission.submit(record) {
            Ok(_) => self.error = None,
            Err(SubmitError::InFlight) => {}
            Err(SubmitError::WorkerUnavailable) => {
                log::warn!("Submit failed: worker unavailable");
                self.error = Some(UNEXPECTED.to_string());
            }
        }
    }

    /// Drop any result, error and outstanding request and start over
    pub fn new_patient(&mut self) {
        self.submission.abandon();
        self.care_plan = None;
        self.error = None;
        self.form = FormState::new();
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Write the printable copy of the shown plan to the output directory
    pub fn save_care_plan(&mut self) {
        let Some(view) = &self.care_plan else {
            return;
        };
        let result = match &self.output_dir {
            Some(dir) => view.save(dir),
            None => Err(CarePlanError::NoOutputDir),
        };
        match result {
            Ok(path) => {
                log::info!("Saved care plan to {}", path.display());
                self.notification
                    .show(&format!("Saved care plan to {}", path.display()));
            }
            Err(e) => {
                log::warn!("Saving care plan failed: {}", e);
                self.notification.show_warning(&e.to_string());
            }
        }
    }

    /// Apply worker responses and expire notifications; called every loop
    pub fn tick(&mut self) {
        for event in self.submission.poll() {
            match event {
                SubmissionEvent::Completed(plan) => {
                    self.error = None;
                    self.care_plan = Some(CarePlanView::new(plan));
                    self.notification.show("Care plan generated");
                }
                SubmissionEvent::Failed(message) => {
                    self.error = Some(message);
                }
                SubmissionEvent::Health(Ok(status)) => {
                    self.backend = BackendStatus::Online(status);
                }
                SubmissionEvent::Health(Err(message)) => {
                    self.backend = BackendStatus::Offline(message);
                }
            }
        }
        self.notification.clear_if_expired(Instant::now());
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
