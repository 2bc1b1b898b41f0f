//! Screen controllers for the application.
//!
//! Each screen owns its form state and handles both rendering and events.
//! The app keeps exactly one screen alive at a time and replaces it on
//! navigation.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      App                               │
//! │  active: Box<dyn Screen>                               │
//! │    handle_event(event, ctx) -> ScreenAction            │
//! │    tick(ctx)                -> ScreenAction            │
//! │                                                        │
//! │  ScreenAction::Navigate(route) => build_screen(route)  │
//! └────────────────────────────────────────────────────────┘
//!
//! submit:  validate ──fail──> error toast
//!              │
//!              └─ok──> spawn remote call (busy)
//! tick:    call settled ──> clear busy, toast, maybe schedule redirect
//! ```

pub mod home;
pub mod login;
pub mod registration;
pub mod screen_trait;

pub use home::HomeScreen;
pub use login::LoginScreen;
pub use registration::RegistrationScreen;
pub use screen_trait::{Screen, ScreenAction, ScreenContext};
