/*! Core types for the documentation shell. */

#![allow(missing_docs)]

mod error;
mod event;
mod find;
mod navigation;
mod window;

pub use error::{ShellError, ShellResult};
pub use event::SurfaceEvent;
pub use find::{FindBarState, FindKey, FindOptions, FindOutcome, FindSession};
pub use navigation::{Decision, NavigationKind, NavigationRequest, SurfaceKind};
pub use window::WindowState;
