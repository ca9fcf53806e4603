//! Defines the core state structures for the application.

use std::time::{Duration, Instant};

use unicode_width::UnicodeWidthStr;

use crate::definitions::{ControlRegistry, FocusArea, RegionRegistry};
use crate::expression::{Expression, Operator};

/// Error line shown when a Set Operand request is rejected.
pub(crate) const OPERAND_FAILED: &str = "Failed to set operand.";
/// Error line shown when a Set Operator request is rejected.
pub(crate) const OPERATOR_FAILED: &str = "Failed to set operator.";

/// Status-bar hint shown when no more recent message is displayed.
pub(crate) const STATUS_HINT: &str =
    "Click a region or use Left/Right to select, Tab to switch focus, Ctrl+Q to quit";

/// How long a transient status message lingers before falling back to the
/// hint.
pub(crate) const STATUS_LINGER: Duration = Duration::from_secs(5);

/// The main application state.
///
/// Single source of truth for the session: the expression model plus the
/// presentation state wrapped around it.
pub struct App {
    /// Flag to indicate the application should quit.
    pub should_quit: bool,
    /// The UI area keyboard input is routed to.
    pub focus: FocusArea,
    /// The expression model; sole authority over slot contents and result.
    pub expression: Expression,
    /// Candidate operand text, applied by the Set Operand action.
    pub operand_entry: OperandComposer,
    /// The operator radio currently chosen, applied by Set Operator.
    pub operator_choice: Operator,
    /// Error line below the controls; cleared by the next successful set.
    pub error_message: Option<String>,
    /// The message shown in the status bar.
    pub status_message: String,
    /// Screen rectangles of the five expression regions, rebuilt per frame.
    pub regions: RegionRegistry,
    /// Screen rectangles of the clickable controls, rebuilt per frame.
    pub controls: ControlRegistry,
    /// When the current status message was set.
    pub(crate) status_set_at: Instant,
}

impl App {
    /// Replaces the status-bar message and restarts its linger window.
    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_set_at = Instant::now();
    }
}

/// Single-line text field for candidate operand input.
///
/// The field accepts any text; validation happens in the expression model
/// when the content is applied, so a rejected entry stays visible for the
/// user to correct.
#[derive(Debug, Clone, Default)]
pub struct OperandComposer {
    buffer: String,
    cursor: usize,
}

impl OperandComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Inserts a character at the current cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.buffer.drain(idx..self.cursor);
            self.cursor = idx;
        }
    }

    /// Deletes the character at the cursor (delete).
    pub fn delete(&mut self) {
        if self.cursor >= self.buffer.len() {
            return;
        }
        if let Some((_, ch)) = self.buffer[self.cursor..].char_indices().next() {
            let end = self.cursor + ch.len_utf8();
            self.buffer.drain(self.cursor..end);
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some((offset, ch)) = self.buffer[self.cursor..].char_indices().next() {
            self.cursor += offset + ch.len_utf8();
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Display column of the cursor within the field, accounting for wide
    /// characters.
    pub fn cursor_display_column(&self) -> u16 {
        UnicodeWidthStr::width(&self.buffer[..self.cursor]).min(u16::MAX as usize) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composer_edits_around_the_cursor() {
        let mut entry = OperandComposer::new();
        entry.insert_char('4');
        entry.insert_char('2');
        entry.move_left();
        entry.insert_char('0');
        assert_eq!(entry.buffer(), "402");
        entry.backspace();
        assert_eq!(entry.buffer(), "42");
        entry.delete();
        assert_eq!(entry.buffer(), "4");
    }

    #[test]
    fn composer_clear_resets_buffer_and_cursor() {
        let mut entry = OperandComposer::new();
        entry.insert_char('7');
        entry.clear();
        assert!(entry.is_empty());
        assert_eq!(entry.cursor_display_column(), 0);
    }

    #[test]
    fn cursor_column_counts_display_width() {
        let mut entry = OperandComposer::new();
        entry.insert_char('５');
        assert_eq!(entry.cursor_display_column(), 2);
        entry.move_left();
        assert_eq!(entry.cursor_display_column(), 0);
    }
}
