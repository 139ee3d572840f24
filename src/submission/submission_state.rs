//! Submission state and the messages exchanged with the worker thread

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use thiserror::Error;

use crate::client::{BACKEND_UNREACHABLE, UNEXPECTED};
use crate::patient::{CarePlan, HealthStatus, PatientRecord};

/// Request messages sent to the worker thread
#[derive(Debug)]
pub enum SubmissionRequest {
    Generate {
        record: Box<PatientRecord>,
        /// Used to drop responses to abandoned requests
        request_id: u64,
    },
    Health,
}

/// Response messages received from the worker thread
#[derive(Debug)]
pub enum SubmissionResponse {
    Generated { plan: CarePlan, request_id: u64 },
    /// Already reduced to the sentence shown to the user
    Failed { message: String, request_id: u64 },
    Health(Result<HealthStatus, String>),
}

/// What a poll produced for the rest of the app
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEvent {
    Completed(CarePlan),
    Failed(String),
    Health(Result<HealthStatus, String>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A care plan request is already in progress")]
    InFlight,

    #[error("Care plan worker is not running")]
    WorkerUnavailable,
}

pub struct SubmissionState {
    /// Channel to send requests to the worker thread
    request_tx: Option<Sender<SubmissionRequest>>,
    /// Channel to receive responses from the worker thread
    response_rx: Option<Receiver<SubmissionResponse>>,
    /// Incremented for each generation request
    request_id: u64,
    in_flight_request_id: Option<u64>,
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionState {
    pub fn new() -> Self {
        Self {
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
        }
    }

    pub fn set_channels(
        &mut self,
        request_tx: Sender<SubmissionRequest>,
        response_rx: Receiver<SubmissionResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    pub fn in_flight_request_id(&self) -> Option<u64> {
        self.in_flight_request_id
    }

    /// Send `record` to the worker
    ///
    /// Returns the new request id. Nothing is sent while another request is
    /// outstanding.
    pub fn submit(&mut self, record: PatientRecord) -> Result<u64, SubmitError> {
        if self.is_in_flight() {
            log::debug!("Ignoring submit while request {:?} is in flight", self.in_flight_request_id);
            return Err(SubmitError::InFlight);
        }
        let tx = self.request_tx.as_ref().ok_or(SubmitError::WorkerUnavailable)?;

        let request_id = self.request_id.wrapping_add(1);
        tx.send(SubmissionRequest::Generate {
            record: Box::new(record),
            request_id,
        })
        .map_err(|_| SubmitError::WorkerUnavailable)?;

        self.request_id = request_id;
        self.in_flight_request_id = Some(request_id);
        log::info!("Submitted care plan request {}", request_id);
        Ok(request_id)
    }

    /// Stop waiting for the current request; its response will be ignored
    pub fn abandon(&mut self) {
        if let Some(id) = self.in_flight_request_id.take() {
            log::info!("Abandoned care plan request {}", id);
        }
    }

    pub fn request_health(&self) -> bool {
        self.request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(SubmissionRequest::Health).is_ok())
    }

    /// Drain every pending worker response
    pub fn poll(&mut self) -> Vec<SubmissionEvent> {
        let mut events = Vec::new();
        let Some(rx) = &self.response_rx else {
            return events;
        };

        loop {
            match rx.try_recv() {
                Ok(SubmissionResponse::Generated { plan, request_id }) => {
                    if self.in_flight_request_id == Some(request_id) {
                        self.in_flight_request_id = None;
                        events.push(SubmissionEvent::Completed(plan));
                    } else {
                        log::debug!("Ignoring stale response for request {}", request_id);
                    }
                }
                Ok(SubmissionResponse::Failed {
                    message,
                    request_id,
                }) => {
                    if self.in_flight_request_id == Some(request_id) {
                        self.in_flight_request_id = None;
                        events.push(SubmissionEvent::Failed(message));
                    } else {
                        log::debug!("Ignoring stale failure for request {}", request_id);
                    }
                }
                Ok(SubmissionResponse::Health(result)) => {
                    events.push(SubmissionEvent::Health(result));
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Care plan worker disconnected");
                    self.request_tx = None;
                    self.response_rx = None;
                    if self.in_flight_request_id.take().is_some() {
                        events.push(SubmissionEvent::Failed(UNEXPECTED.to_string()));
                    }
                    events.push(SubmissionEvent::Health(Err(BACKEND_UNREACHABLE.to_string())));
                    break;
                }
            }
        }

        events
    }
}

#[cfg(test)]
#[path = "submission_state_tests.rs"]
mod submission_state_tests;
