//! Tests for app_events

use ratatui::crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::app::View;
use crate::care_plan::CarePlanView;
use crate::form::{FieldId, ListField};
use crate::patient::CarePlan;
use crate::submission::SubmissionRequest;
use crate::test_utils::test_helpers::{
    app_with_channels, ctrl, key, left_click, test_app, wheel,
};

fn long_plan() -> CarePlan {
    let items: String = (1..=60).map(|i| format!("<li>Intervention {}</li>", i)).collect();
    CarePlan {
        patient_name: "John Doe".to_string(),
        care_plan_html: format!("<h1>Plan</h1><ul>{}</ul>", items),
        generated_at: "2024-01-15T10:30:00Z".to_string(),
    }
}

fn draw(app: &mut crate::app::App) {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = test_app();
    app.handle_key_event(ctrl('c'));
    assert!(app.should_quit());
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = test_app();
    let mut release = key(KeyCode::Char('a'));
    release.kind = KeyEventKind::Release;

    app.handle_event(Event::Key(release));

    assert_eq!(app.form.text(FieldId::Name), "");
}

#[test]
fn test_typing_goes_to_form() {
    let mut app = test_app();
    app.handle_event(Event::Key(key(KeyCode::Char('J'))));
    assert_eq!(app.form.text(FieldId::Name), "J");
}

#[test]
fn test_ctrl_g_submits_and_disables_form() {
    let (mut app, requests, _responses) = app_with_channels();
    app.handle_key_event(ctrl('l'));

    app.handle_key_event(ctrl('g'));
    assert!(matches!(
        requests.try_recv(),
        Ok(SubmissionRequest::Generate { .. })
    ));

    app.form.set_focus(FieldId::Facility);
    app.handle_key_event(key(KeyCode::Char('x')));
    assert_eq!(app.form.text(FieldId::Facility), "Sunrise Senior Living");

    app.handle_key_event(ctrl('l'));
    assert_eq!(app.form.text(FieldId::Name), "John Doe");
}

#[test]
fn test_enter_in_select_does_not_submit() {
    let (mut app, requests, _responses) = app_with_channels();
    app.handle_key_event(ctrl('l'));
    app.form.set_focus(FieldId::Symptoms);
    for c in "Headache".chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }

    app.handle_key_event(key(KeyCode::Enter));

    assert!(requests.try_recv().is_err());
    assert!(
        app.form
            .selection(ListField::Symptoms)
            .contains("Headache")
    );
}

#[test]
fn test_ctrl_x_dismisses_error() {
    let mut app = test_app();
    app.error = Some("Failed to generate care plan".to_string());
    app.handle_key_event(ctrl('x'));
    assert!(app.error.is_none());
}

#[test]
fn test_ctrl_n_returns_to_form() {
    let mut app = test_app();
    app.care_plan = Some(CarePlanView::new(long_plan()));

    app.handle_key_event(ctrl('n'));

    assert_eq!(app.view(), View::Form);
}

#[test]
fn test_ctrl_n_keeps_filled_form() {
    let mut app = test_app();
    app.form.set_text(FieldId::Name, "Jane Roe");
    app.error = Some("Failed to generate care plan".to_string());

    app.handle_key_event(ctrl('n'));

    assert_eq!(app.form.text(FieldId::Name), "Jane Roe");
    assert!(app.error.is_some());
}

#[test]
fn test_care_plan_keys_scroll() {
    let mut app = test_app();
    app.care_plan = Some(CarePlanView::new(long_plan()));
    draw(&mut app);

    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Char('j')));
    assert_eq!(app.care_plan.as_ref().unwrap().scroll.offset, 2);

    app.handle_key_event(key(KeyCode::Char('G')));
    let scroll = app.care_plan.as_ref().unwrap().scroll;
    assert_eq!(scroll.offset, scroll.max_offset);
}

#[test]
fn test_wheel_scrolls_active_view() {
    let mut app = test_app();
    draw(&mut app);

    app.handle_mouse_event(wheel(true));
    assert_eq!(app.form.scroll.offset, 3);
}

#[test]
fn test_click_error_close_dismisses() {
    let mut app = test_app();
    app.error = Some("Failed to generate care plan".to_string());
    draw(&mut app);

    let area = app.dismiss_error_area.unwrap();
    app.handle_mouse_event(left_click(area.x + 1, area.y));

    assert!(app.error.is_none());
}

#[test]
fn test_click_new_patient_button() {
    let mut app = test_app();
    app.care_plan = Some(CarePlanView::new(long_plan()));
    draw(&mut app);

    let area = app.new_patient_area.unwrap();
    app.handle_mouse_event(left_click(area.x + 2, area.y));

    assert_eq!(app.view(), View::Form);
}

#[test]
fn test_paste_into_focused_field() {
    let mut app = test_app();
    app.handle_event(Event::Paste("Jane Roe".to_string()));
    assert_eq!(app.form.text(FieldId::Name), "Jane Roe");
}
