//! Tests for app_state

use super::*;
use crate::client::NO_RESPONSE;
use crate::config::ApiConfig;
use crate::form::FieldId;
use crate::patient::CarePlan;
use crate::submission::{SubmissionRequest, SubmissionResponse};
use crate::test_utils::test_helpers::{app_with_channels, test_app, tick_until};

fn plan(name: &str) -> CarePlan {
    CarePlan {
        patient_name: name.to_string(),
        care_plan_html: "<h1>Care Plan</h1><p>Monitor vitals.</p>".to_string(),
        generated_at: "2024-01-15T10:30:00Z".to_string(),
    }
}

fn sent_request_id(request: SubmissionRequest) -> u64 {
    match request {
        SubmissionRequest::Generate { request_id, .. } => request_id,
        SubmissionRequest::Health => panic!("expected a generate request"),
    }
}

#[test]
fn test_new_app_starts_on_blank_form() {
    let app = test_app();
    assert_eq!(app.view(), View::Form);
    assert_eq!(app.backend, BackendStatus::Checking);
    assert_eq!(app.base_url, "http://localhost:8000");
    assert!(app.error.is_none());
    assert!(!app.should_quit());
}

#[test]
fn test_invalid_form_sets_error_and_focus() {
    let (mut app, requests, _responses) = app_with_channels();
    app.form.set_focus(FieldId::Submit);

    app.submit();

    assert_eq!(app.error.as_deref(), Some("Patient Name is required"));
    assert_eq!(app.form.focus(), FieldId::Name);
    assert!(requests.try_recv().is_err());
    assert!(!app.is_submitting());
}

#[test]
fn test_submit_sends_record_once() {
    let (mut app, requests, _responses) = app_with_channels();
    app.load_sample(0);
    app.error = Some("old failure".to_string());

    app.submit();
    app.submit();

    match requests.try_recv().unwrap() {
        SubmissionRequest::Generate { record, .. } => assert_eq!(record.name, "John Doe"),
        SubmissionRequest::Health => panic!("expected a generate request"),
    }
    assert!(requests.try_recv().is_err());
    assert!(app.is_submitting());
    assert!(app.error.is_none());
}

#[test]
fn test_submit_without_worker_reports_unexpected() {
    let mut app = test_app();
    app.load_sample(1);

    app.submit();

    assert_eq!(app.error.as_deref(), Some(UNEXPECTED));
}

#[test]
fn test_success_switches_to_care_plan() {
    let (mut app, requests, responses) = app_with_channels();
    app.load_sample(0);
    app.submit();
    let request_id = sent_request_id(requests.try_recv().unwrap());

    responses
        .send(SubmissionResponse::Generated {
            plan: plan("John Doe"),
            request_id,
        })
        .unwrap();
    app.tick();

    assert_eq!(app.view(), View::CarePlan);
    assert!(!app.is_submitting());
    let view = app.care_plan.as_ref().unwrap();
    assert_eq!(view.plan().patient_name, "John Doe");
}

#[test]
fn test_failure_keeps_form_populated() {
    let (mut app, requests, responses) = app_with_channels();
    app.load_sample(0);
    app.submit();
    let request_id = sent_request_id(requests.try_recv().unwrap());

    responses
        .send(SubmissionResponse::Failed {
            message: NO_RESPONSE.to_string(),
            request_id,
        })
        .unwrap();
    app.tick();

    assert_eq!(app.view(), View::Form);
    assert_eq!(app.error.as_deref(), Some(NO_RESPONSE));
    assert_eq!(app.form.text(FieldId::Name), "John Doe");
    assert!(!app.is_submitting());
}

#[test]
fn test_new_patient_ignores_late_response() {
    let (mut app, requests, responses) = app_with_channels();
    app.load_sample(0);
    app.submit();
    let request_id = sent_request_id(requests.try_recv().unwrap());

    app.new_patient();
    responses
        .send(SubmissionResponse::Generated {
            plan: plan("John Doe"),
            request_id,
        })
        .unwrap();
    app.tick();

    assert_eq!(app.view(), View::Form);
    assert_eq!(app.form.text(FieldId::Name), "");
    assert!(!app.is_submitting());
}

#[test]
fn test_new_patient_clears_result_and_error() {
    let mut app = test_app();
    app.care_plan = Some(CarePlanView::new(plan("Jane")));
    app.error = Some("boom".to_string());

    app.new_patient();

    assert_eq!(app.view(), View::Form);
    assert!(app.error.is_none());
}

#[test]
fn test_health_response_updates_backend_status() {
    let (mut app, _requests, responses) = app_with_channels();
    let status = HealthStatus {
        status: "healthy".to_string(),
        environment: "development".to_string(),
        version: "1.0.0".to_string(),
    };

    responses
        .send(SubmissionResponse::Health(Ok(status.clone())))
        .unwrap();
    app.tick();
    assert_eq!(app.backend, BackendStatus::Online(status));

    responses
        .send(SubmissionResponse::Health(Err("down".to_string())))
        .unwrap();
    app.tick();
    assert_eq!(app.backend, BackendStatus::Offline("down".to_string()));
}

#[test]
fn test_samples_cycle_and_wrap() {
    let mut app = test_app();
    let names: Vec<String> = sample_patients().into_iter().map(|p| p.name).collect();

    for expected in names.iter().chain(names.first()) {
        app.cycle_sample();
        assert_eq!(app.form.text(FieldId::Name), expected);
    }
    let notification = app.notification.current().unwrap();
    assert_eq!(
        notification.message,
        format!("Loaded sample patient: {}", names[0])
    );
}

#[test]
fn test_save_care_plan_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = test_app();
    app.output_dir = Some(dir.path().to_path_buf());
    app.care_plan = Some(CarePlanView::new(plan("John Doe")));

    app.save_care_plan();

    let saved: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(saved.len(), 1);
    let message = &app.notification.current().unwrap().message;
    assert!(message.starts_with("Saved care plan to "));
    assert!(message.contains("care-plan-john-doe-"));
}

#[test]
fn test_save_without_output_dir_warns() {
    let mut app = test_app();
    app.output_dir = None;
    app.care_plan = Some(CarePlanView::new(plan("John Doe")));

    app.save_care_plan();

    let notification = app.notification.current().unwrap();
    assert_eq!(
        notification.message,
        "No output directory available for saving care plans"
    );
}

#[test]
fn test_worker_against_closed_port_reports_offline() {
    let mut app = test_app();
    app.start_worker(&ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 5,
    });

    let done = tick_until(&mut app, 5000, |app| {
        matches!(app.backend, BackendStatus::Offline(_))
    });

    assert!(done);
    assert_eq!(
        app.backend,
        BackendStatus::Offline(crate::client::BACKEND_UNREACHABLE.to_string())
    );
}
