//! Screen trait and associated types.
//!
//! Screens own their form state and return an action instead of reaching
//! into the app. Everything a screen borrows from the app for the duration
//! of one call comes in through [`ScreenContext`].

use crate::config::Config;
use crate::navigation::Route;
use crate::widgets::ToastManager;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use tokio::runtime::Handle;

/// Shared resources lent to a screen while it handles an event or ticks.
pub struct ScreenContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Runtime that remote calls are spawned on.
    pub runtime: &'a Handle,
    /// Where screens report outcomes to the user.
    pub toasts: &'a mut ToastManager,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, runtime: &'a Handle, toasts: &'a mut ToastManager) -> Self {
        Self {
            config,
            runtime,
            toasts,
        }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Full navigation: the current screen is discarded and the target is
    /// built from scratch.
    Navigate(Route),
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
pub trait Screen {
    /// The route this screen is mounted at.
    fn route(&self) -> Route;

    /// Render the screen body.
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Handle an input event.
    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction>;

    /// Advance time-driven state: settled submissions and due redirects.
    fn tick(&mut self, _ctx: &mut ScreenContext) -> ScreenAction {
        ScreenAction::None
    }

    /// Key hints shown in the footer.
    fn key_hints(&self) -> &'static str {
        "Tab: Next field │ Enter: Submit │ Esc: Quit"
    }
}
