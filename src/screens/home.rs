//! Home screen: mood selection and the journal entry form.
//!
//! The selected mood lives in a [`MoodContext`] passed in by the app, so the
//! picker and the entry form agree without either owning it.

use crate::api::{Affirmation, JournalSaved, MindBloomApi};
use crate::mood::{Mood, MoodContext};
use crate::navigation::Route;
use crate::screens::screen_trait::{Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::submission::{report_failure, Outcome, Submission};
use crate::utils::{center_rect, TextInput};
use crate::validation::validate_journal;
use crate::widgets::{
    AffirmationPanel, Button, MoodPicker, TextInputWidget, TextInputWidgetExt, Toast,
};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::sync::Arc;
use tracing::{info, warn};

pub const JOURNAL_SUCCESS_MESSAGE: &str = "Journal entry saved successfully!";
pub const JOURNAL_FAILURE_FALLBACK: &str = "Failed to save journal entry";

/// Focusable controls, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeField {
    Mood,
    #[default]
    Content,
    Save,
}

impl HomeField {
    fn next(self) -> Self {
        match self {
            HomeField::Mood => HomeField::Content,
            HomeField::Content => HomeField::Save,
            HomeField::Save => HomeField::Mood,
        }
    }

    fn prev(self) -> Self {
        match self {
            HomeField::Mood => HomeField::Save,
            HomeField::Content => HomeField::Mood,
            HomeField::Save => HomeField::Content,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JournalState {
    pub content: TextInput,
    /// Last affirmation received; kept after the panel is closed
    pub affirmation: Option<Affirmation>,
    pub show_affirmation: bool,
    pub focused: HomeField,
}

impl JournalState {
    /// The affirmation to display, if the panel is open.
    pub fn visible_affirmation(&self) -> Option<&Affirmation> {
        self.affirmation.as_ref().filter(|_| self.show_affirmation)
    }
}

/// Home screen controller.
pub struct HomeScreen {
    api: Arc<dyn MindBloomApi>,
    mood: MoodContext,
    mood_picker: MoodPicker,
    state: JournalState,
    submission: Submission<(Mood, JournalSaved)>,
}

impl HomeScreen {
    pub fn new(api: Arc<dyn MindBloomApi>, mood: MoodContext) -> Self {
        Self {
            api,
            mood_picker: MoodPicker::new(mood.clone()),
            mood,
            state: JournalState::default(),
            submission: Submission::new(),
        }
    }

    pub fn state(&self) -> &JournalState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut JournalState {
        &mut self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_busy()
    }

    /// Close the affirmation panel.
    pub fn dismiss_affirmation(&mut self) {
        self.state.show_affirmation = false;
    }

    /// Validate and, if valid, start saving the entry.
    pub fn submit(&mut self, ctx: &mut ScreenContext) -> bool {
        if self.submission.is_busy() {
            return false;
        }

        let draft = match validate_journal(self.state.content.text(), self.mood.selected()) {
            Ok(draft) => draft,
            Err(err) => {
                warn!("Journal validation failed: {}", err);
                ctx.toasts.push(Toast::error(err.to_string()));
                return false;
            }
        };

        info!(
            "Saving journal entry ({} chars, mood {})",
            draft.content.chars().count(),
            draft.mood.as_str()
        );
        let api = Arc::clone(&self.api);
        self.submission.start(ctx.runtime, async move {
            let mood = draft.mood;
            api.save_journal_entry(&draft)
                .await
                .map(|saved| (mood, saved))
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

    fn apply_outcome(&mut self, outcome: Outcome<(Mood, JournalSaved)>, ctx: &mut ScreenContext) {
        match outcome {
            Ok((mood, saved)) => {
                info!(
                    "Journal entry saved (affirmation: {})",
                    saved.affirmation.is_some()
                );
                // A blank affirmation counts as none.
                if let Some(content) = saved.affirmation.filter(|a| !a.trim().is_empty()) {
                    self.state.affirmation = Some(Affirmation {
                        content,
                        mood_type: mood.as_str().to_string(),
                    });
                    self.state.show_affirmation = true;
                }
                self.state.content.clear();
                ctx.toasts.push(Toast::success(JOURNAL_SUCCESS_MESSAGE));
            }
            Err(err) => {
                warn!("Saving journal entry failed: {}", err);
                report_failure(ctx.toasts, &err, JOURNAL_FAILURE_FALLBACK);
            }
        }
    }
}

impl Screen for HomeScreen {
    fn route(&self) -> Route {
        Route::Home
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let busy = self.is_submitting();
        let focused = self.state.focused;
        let card = center_rect(area, 80, 20);

        let [title_area, mood_area, selected_area, content_area, _, save_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .areas(card);

        frame.render_widget(
            Paragraph::new("Journal Entry")
                .alignment(Alignment::Center)
                .style(t.title_style()),
            title_area,
        );

        frame.render_widget(
            self.mood_picker.widget(focused == HomeField::Mood, false),
            mood_area,
        );

        if let Some(mood) = self.mood.selected() {
            let line = Line::from(vec![
                Span::styled("Mood: ", t.text_style()),
                Span::styled(mood.label(), t.bloom_style()),
            ]);
            frame.render_widget(
                Paragraph::new(line).alignment(Alignment::Center),
                selected_area,
            );
        }

        frame.render_text_input_widget(
            TextInputWidget::new(&self.state.content)
                .title("Journal")
                .placeholder("Write your journal entry here...")
                .wrap(true)
                .focused(focused == HomeField::Content)
                .disabled(busy),
            content_area,
        );

        let save_area = center_rect(save_area, 28, 3);
        frame.render_widget(
            Button::new(if busy { "Saving..." } else { "Save Entry" })
                .focused(focused == HomeField::Save)
                .disabled(busy),
            save_area,
        );

        if let Some(affirmation) = self.state.visible_affirmation() {
            frame.render_widget(AffirmationPanel::new(affirmation), center_rect(area, 60, 10));
        }
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        // The affirmation panel is modal until closed
        if self.state.show_affirmation {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.dismiss_affirmation();
            }
            return Ok(ScreenAction::None);
        }

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit(ctx);
            return Ok(ScreenAction::None);
        }

        match key.code {
            KeyCode::Esc => return Ok(ScreenAction::Quit),
            KeyCode::Tab => self.state.focused = self.state.focused.next(),
            KeyCode::BackTab => self.state.focused = self.state.focused.prev(),
            KeyCode::Enter => match self.state.focused {
                HomeField::Mood => self.mood_picker.select_highlighted(),
                HomeField::Content | HomeField::Save => {
                    self.submit(ctx);
                }
            },
            _ => match self.state.focused {
                HomeField::Mood => {
                    self.mood_picker.handle_key(key);
                }
                HomeField::Content if !self.is_submitting() => {
                    self.state.content.handle_key(key);
                }
                _ => {}
            },
        }

        Ok(ScreenAction::None)
    }

    fn tick(&mut self, ctx: &mut ScreenContext) -> ScreenAction {
        self.poll_submission(ctx);
        ScreenAction::None
    }

    fn key_hints(&self) -> &'static str {
        if self.state.show_affirmation {
            "Esc/Enter: Close"
        } else {
            "Tab: Next │ ←/→ Space: Pick mood │ Ctrl+S: Save │ Esc: Quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_affirmation_respects_flag() {
        let mut state = JournalState {
            affirmation: Some(Affirmation {
                content: "You are enough".to_string(),
                mood_type: "calm".to_string(),
            }),
            ..JournalState::default()
        };
        assert!(state.visible_affirmation().is_none());
        state.show_affirmation = true;
        assert_eq!(state.visible_affirmation().unwrap().content, "You are enough");
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(HomeField::default(), HomeField::Content);
        assert_eq!(HomeField::Save.next(), HomeField::Mood);
        assert_eq!(HomeField::Mood.prev(), HomeField::Save);
    }
}
