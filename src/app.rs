use crate::api::{HttpApi, MindBloomApi, TokenStore};
use crate::components::{Footer, Header};
use crate::config::Config;
use crate::mood::MoodContext;
use crate::navigation::Route;
use crate::screens::{
    HomeScreen, LoginScreen, RegistrationScreen, Screen, ScreenAction, ScreenContext,
};
use crate::tui::Tui;
use crate::widgets::ToastManager;
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::info;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const BANNER: &str = "Welcome to Mind-Bloom";

/// Build a fresh screen for `route`.
///
/// Navigation always goes through here, so no form state carries over.
pub fn build_screen(
    route: Route,
    api: &Arc<dyn MindBloomApi>,
    mood: &MoodContext,
) -> Box<dyn Screen> {
    match route {
        Route::Login => Box::new(LoginScreen::new(Arc::clone(api))),
        Route::Register => Box::new(RegistrationScreen::new(Arc::clone(api))),
        Route::Home => Box::new(HomeScreen::new(Arc::clone(api), mood.clone())),
    }
}

/// Main application state
pub struct App {
    config: Config,
    tui: Tui,
    runtime: Runtime,
    api: Arc<dyn MindBloomApi>,
    mood: MoodContext,
    toasts: ToastManager,
    active: Box<dyn Screen>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, start: Route) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let tokens = TokenStore::in_dir(&crate::utils::get_config_dir());
        let api: Arc<dyn MindBloomApi> = Arc::new(HttpApi::new(
            config.api_base_url.clone(),
            config.request_timeout(),
            tokens,
        )?);
        let mood = MoodContext::new();
        let active = build_screen(start, &api, &mood);
        let tui = Tui::new()?;

        info!("Using API at {}", config.api_base_url);

        Ok(Self {
            config,
            tui,
            runtime,
            api,
            mood,
            toasts: ToastManager::new(),
            active,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        info!("Starting at {}", self.active.route());

        while !self.should_quit {
            self.draw()?;

            if let Some(event) = self.tui.poll_event(POLL_INTERVAL)? {
                self.handle_event(event)?;
            }

            self.tick();
        }

        self.tui.exit()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let route = self.active.route();
        let hints = self.active.key_hints();
        let active = &mut self.active;
        let toasts = &self.toasts;

        self.tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            let [header_area, body_area, footer_area] = Layout::vertical([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .areas(area);

            Header::render(frame, header_area, BANNER, route.path());
            active.render(frame, body_area);
            Footer::render(frame, footer_area, hints);
            toasts.render(frame, area);
        })?;

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = &event {
            if key.kind == KeyEventKind::Press
                && key.code == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL)
            {
                self.should_quit = true;
                return Ok(());
            }
        }

        let handle = self.runtime.handle().clone();
        let mut ctx = ScreenContext::new(&self.config, &handle, &mut self.toasts);
        let action = self.active.handle_event(event, &mut ctx)?;
        self.apply(action);
        Ok(())
    }

    fn tick(&mut self) {
        let handle = self.runtime.handle().clone();
        let mut ctx = ScreenContext::new(&self.config, &handle, &mut self.toasts);
        let action = self.active.tick(&mut ctx);
        self.apply(action);
        self.toasts.tick();
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(route) => {
                info!("Navigating to {}", route);
                self.active = build_screen(route, &self.api, &self.mood);
            }
            ScreenAction::Quit => self.should_quit = true,
        }
    }
}
