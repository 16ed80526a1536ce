//! Rendering functions for the TUI.

mod form;

pub use form::render_tip_form;
