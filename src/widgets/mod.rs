// Reusable UI widgets

pub mod affirmation;
pub mod button;
pub mod mood_picker;
pub mod text_input;
pub mod toast;

pub use affirmation::AffirmationPanel;
pub use button::{Button, ButtonVariant};
pub use mood_picker::{MoodPicker, MoodPickerWidget};
pub use text_input::{TextInputWidget, TextInputWidgetExt};
pub use toast::{Toast, ToastManager, ToastPosition, ToastVariant};
