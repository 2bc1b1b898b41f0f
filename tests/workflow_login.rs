//! Integration tests for the login workflow.
//!
//! Tests the complete chain from form state to remote call:
//! - Validation failures never reach the API
//! - Only one call is in flight at a time
//! - Success keeps the fields and schedules the redirect to /home
//! - Failure keeps the fields and clears the busy flag

mod common;

use common::{yield_a_few, FakeApi, Harness};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use mindbloom::api::{ApiError, MindBloomApi};
use mindbloom::navigation::Route;
use mindbloom::screens::login::{LoginField, LOGIN_FAILURE_FALLBACK, LOGIN_SUCCESS_MESSAGE};
use mindbloom::screens::{LoginScreen, Screen, ScreenAction};
use mindbloom::utils::TextInput;
use mindbloom::widgets::{ToastPosition, ToastVariant};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn screen_with(api: &Arc<FakeApi>, email: &str, password: &str) -> LoginScreen {
    let api: Arc<dyn MindBloomApi> = api.clone();
    let mut screen = LoginScreen::new(api);
    screen.state_mut().email = TextInput::with_text(email);
    screen.state_mut().password = TextInput::with_text(password);
    screen
}

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

// ============================================================================
// VALIDATION
// ============================================================================

#[tokio::test]
async fn empty_fields_never_call_the_api() {
    let api = FakeApi::new().into_arc();
    let mut harness = Harness::new();

    for (email, password, reason) in [
        ("", "secret1", "Email is required"),
        ("   ", "secret1", "Email is required"),
        ("a@b.co", "", "Password is required"),
        ("a@b.co", "  ", "Password is required"),
    ] {
        let mut screen = screen_with(&api, email, password);
        assert!(!screen.submit(&mut harness.ctx()));
        assert!(!screen.is_submitting());
        assert_eq!(harness.toast_message(), reason);
    }

    yield_a_few().await;
    assert_eq!(api.login_calls(), 0);
}

#[tokio::test]
async fn invalid_email_reports_email_reason_even_without_password() {
    let api = FakeApi::new().into_arc();
    let mut harness = Harness::new();

    for email in ["plainaddress", "a@b", "a @b.co", "@."] {
        let mut screen = screen_with(&api, email, "");
        assert!(!screen.submit(&mut harness.ctx()));
        assert_eq!(harness.toast_message(), "Please enter a valid email");

        let toast = harness.toast().unwrap();
        assert_eq!(toast.variant, ToastVariant::Error);
        assert_eq!(toast.position, ToastPosition::TopRight);
        assert_eq!(toast.duration, Duration::from_millis(5000));
    }

    assert_eq!(api.login_calls(), 0);
}

// ============================================================================
// SUBMISSION
// ============================================================================

#[tokio::test]
async fn second_submit_while_busy_is_ignored() {
    let api = FakeApi::new().gated().into_arc();
    let mut harness = Harness::new();
    let mut screen = screen_with(&api, "user@example.com", "secret1");

    assert!(screen.submit(&mut harness.ctx()));
    assert!(screen.is_submitting());
    yield_a_few().await;

    assert!(!screen.submit(&mut harness.ctx()));
    screen.handle_event(press(KeyCode::Enter), &mut harness.ctx()).unwrap();
    yield_a_few().await;
    assert_eq!(api.login_calls(), 1);

    api.release();
    screen.settle(&mut harness.ctx()).await;
    assert!(!screen.is_submitting());
    assert_eq!(api.login_calls(), 1);
}

#[tokio::test]
async fn success_keeps_fields_and_schedules_home_redirect() {
    let api = FakeApi::new().into_arc();
    let mut harness = Harness::new();
    let mut screen = screen_with(&api, "user@example.com", "secret1");

    let submitted_at = Instant::now();
    assert!(screen.submit(&mut harness.ctx()));
    screen.settle(&mut harness.ctx()).await;

    assert!(!screen.is_submitting());
    assert_eq!(screen.state().email.text(), "user@example.com");
    assert_eq!(screen.state().password.text(), "secret1");

    let toast = harness.toast().unwrap();
    assert_eq!(toast.message, LOGIN_SUCCESS_MESSAGE);
    assert_eq!(toast.variant, ToastVariant::Success);
    assert_eq!(toast.position, ToastPosition::TopCenter);
    assert_eq!(toast.duration, Duration::from_millis(2000));

    let redirect = screen.navigator().pending().unwrap();
    assert_eq!(redirect.route, Route::Home);
    assert!(redirect.at > submitted_at);
    assert!(redirect.at <= Instant::now() + harness.config.redirect_delay());
}

#[tokio::test]
async fn redirect_fires_from_tick_once_due() {
    let api = FakeApi::new().into_arc();
    let mut harness = Harness::new();
    harness.config.redirect_delay_ms = 0;
    let mut screen = screen_with(&api, "user@example.com", "secret1");

    screen.submit(&mut harness.ctx());
    screen.settle(&mut harness.ctx()).await;

    assert_eq!(
        screen.tick(&mut harness.ctx()),
        ScreenAction::Navigate(Route::Home)
    );
    assert_eq!(screen.tick(&mut harness.ctx()), ScreenAction::None);
}

#[tokio::test]
async fn tick_collects_outcome_without_blocking() {
    let api = FakeApi::new().gated().into_arc();
    let mut harness = Harness::new();
    let mut screen = screen_with(&api, "user@example.com", "secret1");

    screen.submit(&mut harness.ctx());
    yield_a_few().await;
    assert_eq!(screen.tick(&mut harness.ctx()), ScreenAction::None);
    assert!(screen.is_submitting());

    api.release();
    yield_a_few().await;
    screen.tick(&mut harness.ctx());
    assert!(!screen.is_submitting());
    assert_eq!(harness.toast_message(), LOGIN_SUCCESS_MESSAGE);
}

// ============================================================================
// FAILURE
// ============================================================================

#[tokio::test]
async fn server_error_keeps_fields_and_clears_busy() {
    let api = FakeApi::new()
        .failing_login(ApiError::from_status(500, "server error".to_string()))
        .into_arc();
    let mut harness = Harness::new();
    let mut screen = screen_with(&api, "user@example.com", "secret1");

    screen.submit(&mut harness.ctx());
    screen.settle(&mut harness.ctx()).await;

    assert!(!screen.is_submitting());
    assert_eq!(screen.state().email.text(), "user@example.com");
    assert_eq!(screen.state().password.text(), "secret1");
    assert!(screen.navigator().pending().is_none());
    assert_eq!(harness.toast_message(), "API error (500): server error");
    assert_eq!(harness.toast().unwrap().variant, ToastVariant::Error);
}

#[tokio::test]
async fn failure_without_message_uses_fallback() {
    let api = FakeApi::new()
        .failing_login(ApiError::from_status(401, String::new()))
        .into_arc();
    let mut harness = Harness::new();
    let mut screen = screen_with(&api, "user@example.com", "secret1");

    screen.submit(&mut harness.ctx());
    screen.settle(&mut harness.ctx()).await;

    assert_eq!(harness.toast_message(), LOGIN_FAILURE_FALLBACK);
}

#[tokio::test]
async fn structured_rejection_is_shown_verbatim() {
    let api = FakeApi::new()
        .failing_login(ApiError::from_status(
            401,
            r#"{"message":"Invalid credentials"}"#.to_string(),
        ))
        .into_arc();
    let mut harness = Harness::new();
    let mut screen = screen_with(&api, "user@example.com", "secret1");

    screen.submit(&mut harness.ctx());
    screen.settle(&mut harness.ctx()).await;

    assert_eq!(harness.toast_message(), "Invalid credentials");
}

// ============================================================================
// NAVIGATION
// ============================================================================

#[tokio::test]
async fn register_link_navigates_unless_busy() {
    let api = FakeApi::new().gated().into_arc();
    let mut harness = Harness::new();
    let mut screen = screen_with(&api, "user@example.com", "secret1");
    screen.state_mut().focused = LoginField::RegisterLink;

    let action = screen
        .handle_event(press(KeyCode::Enter), &mut harness.ctx())
        .unwrap();
    assert_eq!(action, ScreenAction::Navigate(Route::Register));

    screen.submit(&mut harness.ctx());
    let action = screen
        .handle_event(press(KeyCode::Enter), &mut harness.ctx())
        .unwrap();
    assert_eq!(action, ScreenAction::None);

    api.release();
    screen.settle(&mut harness.ctx()).await;
}

#[tokio::test]
async fn typing_is_ignored_while_submitting() {
    let api = FakeApi::new().gated().into_arc();
    let mut harness = Harness::new();
    let mut screen = screen_with(&api, "user@example.com", "secret1");

    screen.submit(&mut harness.ctx());
    screen
        .handle_event(press(KeyCode::Char('x')), &mut harness.ctx())
        .unwrap();
    assert_eq!(screen.state().email.text(), "user@example.com");

    api.release();
    screen.settle(&mut harness.ctx()).await;
}
