//! Registration screen controller.

use crate::api::MindBloomApi;
use crate::navigation::{Navigator, Route};
use crate::screens::screen_trait::{Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::submission::{report_failure, Outcome, Submission};
use crate::utils::{center_rect, TextInput};
use crate::validation::validate_registration;
use crate::widgets::{
    Button, ButtonVariant, TextInputWidget, TextInputWidgetExt, Toast, ToastPosition,
};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to login...";
pub const REGISTRATION_FAILURE_FALLBACK: &str = "Registration failed. Please try again.";

/// Focusable controls, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationField {
    #[default]
    Username,
    Email,
    Password,
    LoginLink,
    Submit,
}

impl RegistrationField {
    const ORDER: [RegistrationField; 5] = [
        RegistrationField::Username,
        RegistrationField::Email,
        RegistrationField::Password,
        RegistrationField::LoginLink,
        RegistrationField::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationState {
    pub username: TextInput,
    pub email: TextInput,
    pub password: TextInput,
    pub focused: RegistrationField,
}

impl RegistrationState {
    fn clear_fields(&mut self) {
        self.username.clear();
        self.email.clear();
        self.password.clear();
    }
}

/// Registration screen controller.
pub struct RegistrationScreen {
    api: Arc<dyn MindBloomApi>,
    state: RegistrationState,
    submission: Submission<()>,
    navigator: Navigator,
}

impl RegistrationScreen {
    pub fn new(api: Arc<dyn MindBloomApi>) -> Self {
        Self {
            api,
            state: RegistrationState::default(),
            submission: Submission::new(),
            navigator: Navigator::new(),
        }
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RegistrationState {
        &mut self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_busy()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Validate and, if valid, start the registration call.
    pub fn submit(&mut self, ctx: &mut ScreenContext) -> bool {
        if self.submission.is_busy() {
            return false;
        }

        let input = match validate_registration(
            self.state.username.text(),
            self.state.email.text(),
            self.state.password.text(),
        ) {
            Ok(input) => input,
            Err(err) => {
                warn!("Registration validation failed: {}", err);
                ctx.toasts.push(Toast::error(err.to_string()));
                return false;
            }
        };

        info!("Submitting registration for {}", input.username);
        let api = Arc::clone(&self.api);
        self.submission.start(ctx.runtime, async move {
            api.register(&input).await
        })
    }

    pub fn poll_submission(&mut self, ctx: &mut ScreenContext) {
        if let Some(outcome) = self.submission.poll() {
            self.apply_outcome(outcome, ctx);
        }
    }

    pub async fn settle(&mut self, ctx: &mut ScreenContext<'_>) {
        if let Some(outcome) = self.submission.settle().await {
            self.apply_outcome(outcome, ctx);
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome<()>, ctx: &mut ScreenContext) {
        match outcome {
            Ok(()) => {
                info!("Registration succeeded, redirecting to {}", Route::Login);
                self.state.clear_fields();
                ctx.toasts.push(
                    Toast::success(REGISTRATION_SUCCESS_MESSAGE)
                        .with_position(ToastPosition::TopCenter)
                        .with_duration(Duration::from_millis(2000)),
                );
                self.navigator
                    .schedule(Route::Login, ctx.config.redirect_delay());
            }
            Err(err) => {
                warn!("Registration failed: {}", err);
                report_failure(ctx.toasts, &err, REGISTRATION_FAILURE_FALLBACK);
            }
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.state.focused {
            RegistrationField::Username => Some(&mut self.state.username),
            RegistrationField::Email => Some(&mut self.state.email),
            RegistrationField::Password => Some(&mut self.state.password),
            _ => None,
        }
    }
}

impl Screen for RegistrationScreen {
    fn route(&self) -> Route {
        Route::Register
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let busy = self.is_submitting();
        let focused = self.state.focused;
        let card = center_rect(area, 50, 17);

        let [title_area, username_area, email_area, password_area, _, buttons_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .areas(card);

        frame.render_widget(
            Paragraph::new("Registration")
                .alignment(Alignment::Center)
                .style(t.title_style()),
            title_area,
        );

        frame.render_text_input_widget(
            TextInputWidget::new(&self.state.username)
                .title("Username")
                .focused(focused == RegistrationField::Username)
                .disabled(busy),
            username_area,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.state.email)
                .title("Email")
                .placeholder("you@example.com")
                .focused(focused == RegistrationField::Email)
                .disabled(busy),
            email_area,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.state.password)
                .title("Password")
                .placeholder("at least 6 characters")
                .masked(true)
                .focused(focused == RegistrationField::Password)
                .disabled(busy),
            password_area,
        );

        let [login_area, submit_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(2)
                .areas(buttons_area);
        frame.render_widget(
            Button::new("Login")
                .variant(ButtonVariant::Outline)
                .focused(focused == RegistrationField::LoginLink)
                .disabled(busy),
            login_area,
        );
        frame.render_widget(
            Button::new(if busy { "Submitting..." } else { "Submit" })
                .focused(focused == RegistrationField::Submit)
                .disabled(busy),
            submit_area,
        );
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        match key.code {
            KeyCode::Esc => return Ok(ScreenAction::Quit),
            KeyCode::Tab | KeyCode::Down => self.state.focused = self.state.focused.next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focused = self.state.focused.prev(),
            KeyCode::Enter => match self.state.focused {
                RegistrationField::LoginLink if !self.is_submitting() => {
                    return Ok(ScreenAction::Navigate(Route::Login));
                }
                RegistrationField::LoginLink => {}
                _ => {
                    self.submit(ctx);
                }
            },
            _ => {
                if !self.is_submitting() {
                    if let Some(input) = self.focused_input() {
                        input.handle_key(key);
                    }
                }
            }
        }

        Ok(ScreenAction::None)
    }

    fn tick(&mut self, ctx: &mut ScreenContext) -> ScreenAction {
        self.poll_submission(ctx);
        match self.navigator.due(Instant::now()) {
            Some(route) => ScreenAction::Navigate(route),
            None => ScreenAction::None,
        }
    }
}
