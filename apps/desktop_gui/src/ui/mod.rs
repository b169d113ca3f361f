//! UI layer for the desktop GUI: app shell, screens, and the swipe card
//! widget.

pub mod app;
pub mod swipe_card;

pub use app::{AppPaths, DesktopGuiApp};
