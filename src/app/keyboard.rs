use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;
use crate::definitions::FocusArea;
use crate::expression::Operator;

// Implementation block for keyboard event handling in the App.
impl App {
    /// The main entry point for handling keyboard events. Routes the key to
    /// the focused area after checking the global shortcuts.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.handle_global_shortcuts(key) {
            return;
        }

        match self.focus {
            FocusArea::Expression => self.handle_expression_key(key),
            FocusArea::OperandEntry => self.handle_entry_key(key),
        }
    }

    /// Returns `true` if the key was consumed by a global shortcut.
    fn handle_global_shortcuts(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (KeyCode::Tab, _) => {
                self.focus = self.focus.toggle();
                self.set_status(format!("Focus: {}", self.focus.label()));
            }
            _ => return false,
        }
        true
    }

    /// Keys while the expression panel is focused: arrows move the
    /// selection, digit and operator keys attempt a direct set.
    fn handle_expression_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                let slot = self.expression.selected().saturating_sub(1);
                self.select_slot(slot);
            }
            KeyCode::Right => {
                // select_slot clamps at the last slot.
                self.select_slot(self.expression.selected() + 1);
            }
            KeyCode::Char(ch) => {
                if ch.is_ascii_digit() {
                    self.apply_operand_text(&ch.to_string());
                } else if let Some(operator) = Operator::parse(ch.to_string().as_str()) {
                    self.choose_operator(operator);
                    self.apply_operator_choice();
                }
            }
            _ => {}
        }
    }

    /// Keys while the operand entry field is focused.
    fn handle_entry_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.apply_operand_entry(),
            KeyCode::Backspace => self.operand_entry.backspace(),
            KeyCode::Delete => self.operand_entry.delete(),
            KeyCode::Left => self.operand_entry.move_left(),
            KeyCode::Right => self.operand_entry.move_right(),
            KeyCode::Esc => self.operand_entry.clear(),
            KeyCode::Char(ch) if !ch.is_control() => self.operand_entry.insert_char(ch),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_apply_directly_when_expression_focused() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('7')));
        assert_eq!(app.expression.operands(), &[7, 0, 0]);
        assert_eq!(app.error_message, None);
    }

    #[test]
    fn operator_keys_choose_and_apply() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::Char('*')));
        assert_eq!(app.operator_choice, Operator::Multiply);
        assert_eq!(app.expression.operators()[0], Operator::Multiply);
    }

    #[test]
    fn operator_key_on_an_operand_slot_sets_the_error() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('+')));
        assert_eq!(
            app.error_message.as_deref(),
            Some("Failed to set operator.")
        );
    }

    #[test]
    fn arrows_move_the_selection_within_bounds() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Left));
        assert_eq!(app.expression.selected(), 0);
        for _ in 0..6 {
            app.handle_key(press(KeyCode::Right));
        }
        assert_eq!(app.expression.selected(), 4);
    }

    #[test]
    fn tab_switches_focus_and_enter_applies_the_entry() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, FocusArea::OperandEntry);
        app.handle_key(press(KeyCode::Char('9')));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.expression.operands(), &[9, 0, 0]);
    }

    #[test]
    fn entry_editing_keys_edit_the_buffer() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Char('1')));
        app.handle_key(press(KeyCode::Char('2')));
        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.operand_entry.buffer(), "1");
        app.handle_key(press(KeyCode::Esc));
        assert!(app.operand_entry.is_empty());
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::new();
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new();
        let mut key = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.expression.operands(), &[0, 0, 0]);
    }
}
