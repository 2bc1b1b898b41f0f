//! Mood selection shared between the mood picker and the journal entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, RwLock};

/// A mood the user can attach to a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Sad,
    Anxious,
    Angry,
    Tired,
}

impl Mood {
    /// All moods, in picker order.
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Sad,
        Mood::Anxious,
        Mood::Angry,
        Mood::Tired,
    ];

    /// Name sent to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Angry => "angry",
            Mood::Tired => "tired",
        }
    }

    /// Human-readable label for the picker.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Calm => "Calm",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Angry => "Angry",
            Mood::Tired => "Tired",
        }
    }

    /// Position in [`Mood::ALL`].
    pub fn index(&self) -> usize {
        Mood::ALL.iter().position(|m| m == self).unwrap_or(0)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shared handle to the currently selected mood.
///
/// The app creates one and hands clones to whoever needs it. The mood picker
/// writes it; the journal entry only reads it.
#[derive(Debug, Clone, Default)]
pub struct MoodContext {
    selected: Arc<RwLock<Option<Mood>>>,
}

impl MoodContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a mood already selected.
    pub fn with_mood(mood: Mood) -> Self {
        let ctx = Self::new();
        ctx.select(Some(mood));
        ctx
    }

    /// The currently selected mood, if any.
    pub fn selected(&self) -> Option<Mood> {
        match self.selected.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Replace the selection.
    pub fn select(&self, mood: Option<Mood>) {
        match self.selected.write() {
            Ok(mut guard) => *guard = mood,
            Err(poisoned) => *poisoned.into_inner() = mood,
        }
    }
}
