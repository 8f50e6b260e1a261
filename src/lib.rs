//! A numeric input control with `%`/`px` units, steppers and unit-aware
//! clamping.
//!
//! [`NumberField`] is the headless state machine. [`FieldEditor`] binds it to
//! crossterm key events and renders it as a ratatui widget. [`Notifier`]
//! forwards the emitted [`FieldEvent`]s to owner callbacks.

pub mod config;
pub mod editor;
pub mod error;
pub mod field;
pub mod input;
pub mod notify;
pub mod widget;

pub use config::FieldProps;
pub use editor::FieldEditor;
pub use error::FieldError;
pub use field::{Bounds, FieldEvent, FieldState, NumberField, Unit, clamp, effective_max};
pub use notify::Notifier;
