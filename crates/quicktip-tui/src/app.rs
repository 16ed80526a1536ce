//! Application state and key handling for the TUI.

use crossterm::event::{KeyCode, KeyModifiers};
use quicktip_core::{Field, Result, Theme, TipForm};
use tracing::{debug, error};

/// Main application state
pub struct App {
    pub form: TipForm,
    pub theme: Theme,
    pub status_message: Option<String>,
    pub show_reset_confirm: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(form: TipForm, theme: Theme) -> Self {
        Self {
            form,
            theme,
            status_message: None,
            show_reset_confirm: false,
            should_quit: false,
        }
    }

    /// Cursor offset inside the focused field
    pub fn cursor_position(&self) -> usize {
        match self.form.focused() {
            Field::Price => self.form.price_text().len(),
            Field::CustomTip => self.form.custom_tip_text().len(),
        }
    }

    pub fn handle_key(&mut self, key_code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key_code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.show_reset_confirm {
            self.handle_reset_confirm_key(key_code);
            return;
        }

        match key_code {
            KeyCode::Esc => {
                if self.form.is_dirty() {
                    self.show_reset_confirm = true;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('q') if !self.form.is_dirty() => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.form.focus_next();
            }
            KeyCode::Up => {
                let result = self.form.focus(Field::Price);
                self.apply(result);
            }
            KeyCode::Down => {
                let result = self.form.focus(Field::CustomTip);
                self.apply(result);
            }
            KeyCode::Left | KeyCode::Right => {
                if self.form.view().show_options {
                    let result = if key_code == KeyCode::Right {
                        self.form.next_segment()
                    } else {
                        self.form.prev_segment()
                    };
                    self.apply(result);
                } else {
                    self.status_message = Some("Enter a price first".to_string());
                }
            }
            KeyCode::Backspace => {
                let result = self.form.pop_char();
                self.apply(result);
            }
            KeyCode::Delete => {
                let result = self.form.clear_focused();
                self.apply(result);
            }
            KeyCode::Char(c) => {
                let result = self.form.push_char(c);
                self.apply(result);
            }
            _ => {}
        }
    }

    fn handle_reset_confirm_key(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Enter => {
                self.show_reset_confirm = false;
                self.form.reset();
                self.status_message = None;
            }
            KeyCode::Esc => {
                self.show_reset_confirm = false;
            }
            _ => {}
        }
    }

    /// Record the outcome of an edit: clear the status on success, show why
    /// a keystroke was refused on bad input, and log anything else as a fault.
    fn apply(&mut self, result: Result<()>) {
        match result {
            Ok(()) => self.status_message = None,
            Err(e) if e.is_input_error() => {
                debug!("Keystroke rejected: {e}");
                self.status_message = Some(e.to_string());
            }
            Err(e) => {
                error!("Form update failed: {e}");
                self.status_message = Some(format!("Internal error: {e}"));
            }
        }
    }
}
