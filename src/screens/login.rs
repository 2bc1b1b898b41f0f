//! Login screen controller.

use crate::api::MindBloomApi;
use crate::navigation::{Navigator, Route};
use crate::screens::screen_trait::{Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::submission::{report_failure, Outcome, Submission};
use crate::utils::{center_rect, TextInput};
use crate::validation::validate_login;
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

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const LOGIN_FAILURE_FALLBACK: &str =
    "Login failed. Please check your credentials and try again.";

/// Focusable controls, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    RegisterLink,
    Submit,
}

impl LoginField {
    fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::RegisterLink,
            LoginField::RegisterLink => LoginField::Submit,
            LoginField::Submit => LoginField::Email,
        }
    }

    fn prev(self) -> Self {
        match self {
            LoginField::Email => LoginField::Submit,
            LoginField::Password => LoginField::Email,
            LoginField::RegisterLink => LoginField::Password,
            LoginField::Submit => LoginField::RegisterLink,
        }
    }
}

/// Values the user typed into the login form.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub email: TextInput,
    pub password: TextInput,
    pub focused: LoginField,
}

/// Login screen controller.
pub struct LoginScreen {
    api: Arc<dyn MindBloomApi>,
    state: LoginState,
    submission: Submission<()>,
    navigator: Navigator,
}

impl LoginScreen {
    pub fn new(api: Arc<dyn MindBloomApi>) -> Self {
        Self {
            api,
            state: LoginState::default(),
            submission: Submission::new(),
            navigator: Navigator::new(),
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut LoginState {
        &mut self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_busy()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Validate and, if valid, start the login call.
    ///
    /// Returns true if a call was started. A call already in flight makes
    /// this a no-op.
    pub fn submit(&mut self, ctx: &mut ScreenContext) -> bool {
        if self.submission.is_busy() {
            return false;
        }

        let credentials = match validate_login(self.state.email.text(), self.state.password.text())
        {
            Ok(credentials) => credentials,
            Err(err) => {
                warn!("Login validation failed: {}", err);
                ctx.toasts.push(Toast::error(err.to_string()));
                return false;
            }
        };

        info!("Submitting login for {}", credentials.email);
        let api = Arc::clone(&self.api);
        self.submission.start(ctx.runtime, async move {
            api.login(&credentials).await
        })
    }

    /// Apply the outcome if the call has settled.
    pub fn poll_submission(&mut self, ctx: &mut ScreenContext) {
        if let Some(outcome) = self.submission.poll() {
            self.apply_outcome(outcome, ctx);
        }
    }

    /// Wait for the in-flight call and apply its outcome.
    pub async fn settle(&mut self, ctx: &mut ScreenContext<'_>) {
        if let Some(outcome) = self.submission.settle().await {
            self.apply_outcome(outcome, ctx);
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome<()>, ctx: &mut ScreenContext) {
        match outcome {
            Ok(()) => {
                info!("Login succeeded, redirecting to {}", Route::Home);
                ctx.toasts.push(
                    Toast::success(LOGIN_SUCCESS_MESSAGE)
                        .with_position(ToastPosition::TopCenter)
                        .with_duration(Duration::from_millis(2000)),
                );
                self.navigator
                    .schedule(Route::Home, ctx.config.redirect_delay());
            }
            Err(err) => {
                warn!("Login failed: {}", err);
                report_failure(ctx.toasts, &err, LOGIN_FAILURE_FALLBACK);
            }
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.state.focused {
            LoginField::Email => Some(&mut self.state.email),
            LoginField::Password => Some(&mut self.state.password),
            _ => None,
        }
    }
}

impl Screen for LoginScreen {
    fn route(&self) -> Route {
        Route::Login
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let busy = self.is_submitting();
        let card = center_rect(area, 50, 14);

        let [title_area, email_area, password_area, _, buttons_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(card);

        frame.render_widget(
            Paragraph::new("Login")
                .alignment(Alignment::Center)
                .style(t.title_style()),
            title_area,
        );

        frame.render_text_input_widget(
            TextInputWidget::new(&self.state.email)
                .title("Email")
                .placeholder("you@example.com")
                .focused(self.state.focused == LoginField::Email)
                .disabled(busy),
            email_area,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.state.password)
                .title("Password")
                .masked(true)
                .focused(self.state.focused == LoginField::Password)
                .disabled(busy),
            password_area,
        );

        let [register_area, submit_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(2)
                .areas(buttons_area);
        frame.render_widget(
            Button::new("Register")
                .variant(ButtonVariant::Outline)
                .focused(self.state.focused == LoginField::RegisterLink)
                .disabled(busy),
            register_area,
        );
        frame.render_widget(
            Button::new(if busy { "Logging in..." } else { "Login" })
                .focused(self.state.focused == LoginField::Submit)
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
                LoginField::RegisterLink if !self.is_submitting() => {
                    return Ok(ScreenAction::Navigate(Route::Register));
                }
                LoginField::RegisterLink => {}
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
