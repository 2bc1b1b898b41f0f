//! Mind-Bloom - a terminal client for the Mind-Bloom mood journal
//!
//! This library provides the login, registration and journal screens, the
//! form validation behind them, and the HTTP client for the Mind-Bloom API.

// Core modules
pub mod api;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod mood;
pub mod navigation;
pub mod screens;
pub mod styles;
pub mod submission;
pub mod tui;
pub mod utils;
pub mod validation;
pub mod widgets;

// Re-exports for convenience
pub use api::{ApiError, HttpApi, MindBloomApi, TokenStore};
pub use config::Config;
pub use mood::{Mood, MoodContext};
pub use navigation::{Navigator, Route};
pub use validation::ValidationError;
