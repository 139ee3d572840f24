//! Care plan worker thread
//!
//! Owns the HTTP client and a current-thread tokio runtime so the UI thread
//! never blocks on the network. Requests arrive over one channel and results
//! go back over another.

use std::sync::mpsc::{Receiver, Sender};

use tokio::runtime::Runtime;

use super::submission_state::{SubmissionRequest, SubmissionResponse};
use crate::client::{BACKEND_UNREACHABLE, CarePlanClient, ClientError};
use crate::config::ApiConfig;

/// Spawn the worker thread
///
/// The thread exits once the request sender is dropped.
pub fn spawn_worker(
    config: &ApiConfig,
    request_rx: Receiver<SubmissionRequest>,
    response_tx: Sender<SubmissionResponse>,
) {
    let client_result = CarePlanClient::new(config);

    std::thread::spawn(move || {
        worker_loop(client_result, request_rx, response_tx);
    });
}

fn build_runtime(client: CarePlanClient) -> Result<(CarePlanClient, Runtime), ClientError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map(|runtime| (client, runtime))
        .map_err(|e| ClientError::Build(e.to_string()))
}

/// Process requests until the channel is closed
pub(super) fn worker_loop(
    client_result: Result<CarePlanClient, ClientError>,
    request_rx: Receiver<SubmissionRequest>,
    response_tx: Sender<SubmissionResponse>,
) {
    let backend = client_result.and_then(build_runtime);
    match &backend {
        Ok((client, _)) => log::debug!("Care plan worker ready for {}", client.base_url()),
        Err(e) => log::warn!("Care plan worker has no client: {}", e),
    }

    while let Ok(request) = request_rx.recv() {
        let response = match request {
            SubmissionRequest::Generate { record, request_id } => {
                log::debug!("Generating care plan for request {}", request_id);
                let result = match &backend {
                    Ok((client, runtime)) => runtime.block_on(client.generate_care_plan(&record)),
                    Err(e) => Err(ClientError::Build(e.to_string())),
                };
                match result {
                    Ok(plan) => SubmissionResponse::Generated { plan, request_id },
                    Err(e) => {
                        log::warn!("Care plan request {} failed: {}", request_id, e);
                        SubmissionResponse::Failed {
                            message: e.user_message(),
                            request_id,
                        }
                    }
                }
            }
            SubmissionRequest::Health => {
                let result = match &backend {
                    Ok((client, runtime)) => runtime.block_on(client.health()),
                    Err(e) => Err(ClientError::Build(e.to_string())),
                };
                SubmissionResponse::Health(result.map_err(|e| {
                    log::debug!("Health check failed: {}", e);
                    BACKEND_UNREACHABLE.to_string()
                }))
            }
        };

        if response_tx.send(response).is_err() {
            // Main thread is gone
            break;
        }
    }

    log::debug!("Care plan worker shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
