use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::App;
use crate::definitions::{ControlKind, FocusArea};

// Implementation block for mouse event handling in the App.
impl App {
    /// The main entry point for handling mouse events. Only left-button
    /// presses matter; everything else is ignored.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = event.kind {
            self.handle_mouse_down(event.column, event.row);
        }
    }

    fn handle_mouse_down(&mut self, column: u16, row: u16) {
        // Expression regions first, then the control row. Clicks that land
        // in neither are ignored.
        if let Some(slot) = self.regions.hit_test(column, row) {
            self.select_slot(slot);
            return;
        }

        if let Some(control) = self.controls.hit_test(column, row) {
            match control {
                ControlKind::OperandEntry => {
                    self.focus = FocusArea::OperandEntry;
                }
                ControlKind::OperatorChoice(operator) => self.choose_operator(operator),
                ControlKind::SetOperand => self.apply_operand_entry(),
                ControlKind::SetOperator => self.apply_operator_choice(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    use crate::expression::Operator;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn clicking_a_region_selects_its_slot() {
        let mut app = App::new();
        app.regions.register(3, rect(10, 2, 5, 3));
        app.handle_mouse(click(12, 3));
        assert_eq!(app.expression.selected(), 3);
    }

    #[test]
    fn clicks_outside_every_region_are_ignored() {
        let mut app = App::new();
        app.regions.register(1, rect(10, 2, 5, 3));
        app.handle_mouse(click(50, 20));
        assert_eq!(app.expression.selected(), 0);
    }

    #[test]
    fn clicking_set_operand_applies_the_entry() {
        let mut app = App::new();
        app.operand_entry.insert_char('4');
        app.controls
            .register(ControlKind::SetOperand, rect(0, 10, 16, 1));
        app.handle_mouse(click(3, 10));
        assert_eq!(app.expression.operands(), &[4, 0, 0]);
    }

    #[test]
    fn clicking_a_radio_chooses_the_operator() {
        let mut app = App::new();
        app.controls.register(
            ControlKind::OperatorChoice(Operator::Subtract),
            rect(20, 10, 5, 1),
        );
        app.handle_mouse(click(21, 10));
        assert_eq!(app.operator_choice, Operator::Subtract);
        // The radio only records the choice; nothing is applied yet.
        assert_eq!(app.expression.operators(), &[Operator::Add, Operator::Add]);
    }

    #[test]
    fn clicking_the_entry_field_focuses_it() {
        let mut app = App::new();
        app.controls
            .register(ControlKind::OperandEntry, rect(0, 8, 14, 3));
        app.handle_mouse(click(5, 9));
        assert_eq!(app.focus, FocusArea::OperandEntry);
    }

    #[test]
    fn scroll_events_are_ignored() {
        let mut app = App::new();
        app.regions.register(2, rect(10, 2, 5, 3));
        let event = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 12,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(event);
        assert_eq!(app.expression.selected(), 0);
    }
}
