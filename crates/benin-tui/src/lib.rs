//! Terminal dashboard for Benin's post-independence statistics.
//!
//! The [`ui`] module holds string-rendered building blocks (menu, layout,
//! panes, callouts). [`panes`] implements the nine views on top of the
//! dataset catalog from `benin-io` and the renderers from `benin-viz`.
//! [`app`] wires them to keyboard input.

pub mod app;
pub mod panes;
pub mod ui;
pub mod utils;

pub use app::{run_tui, App, Control, CrosstermEventSource, EventSource};
pub use panes::View;
