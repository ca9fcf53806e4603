use log::{debug, warn};

use super::state::{App, OPERAND_FAILED, OPERATOR_FAILED};
use crate::definitions::FocusArea;
use crate::expression::Operator;

// Implementation block for the operations behind the buttons and the
// direct expression keys.
impl App {
    /// Selects a slot and moves keyboard focus to the expression panel.
    pub(crate) fn select_slot(&mut self, slot: usize) {
        self.expression.select_slot(slot);
        self.focus = FocusArea::Expression;
        let selected = self.expression.selected();
        self.set_status(format!(
            "Selected {} slot {}",
            self.expression.selected_kind().label(),
            selected
        ));
    }

    /// Switches the operator radio without touching the expression.
    pub(crate) fn choose_operator(&mut self, operator: Operator) {
        self.operator_choice = operator;
        self.set_status(format!("Operator choice: {}", operator.symbol()));
    }

    /// The Set Operand action: applies the entry field's current text to
    /// the selected slot.
    pub(crate) fn apply_operand_entry(&mut self) {
        let content = self.operand_entry.buffer().to_string();
        self.apply_operand_text(&content);
    }

    /// Applies candidate operand text to the selected slot and reports the
    /// outcome through the error line.
    pub(crate) fn apply_operand_text(&mut self, content: &str) {
        match self.expression.try_set_selected_content(content) {
            Ok(()) => {
                debug!("operand {:?} set on slot {}", content, self.expression.selected());
                self.error_message = None;
                self.set_status(format!("Operand set to {content}"));
            }
            Err(reason) => {
                warn!(
                    "rejected operand {:?} for slot {}: {}",
                    content,
                    self.expression.selected(),
                    reason
                );
                self.error_message = Some(String::from(OPERAND_FAILED));
            }
        }
    }

    /// The Set Operator action: applies the chosen radio operator's symbol
    /// to the selected slot.
    pub(crate) fn apply_operator_choice(&mut self) {
        let symbol = self.operator_choice.symbol();
        if self.expression.set_selected_content(symbol) {
            debug!("operator {} set on slot {}", symbol, self.expression.selected());
            self.error_message = None;
            self.set_status(format!("Operator set to {symbol}"));
        } else {
            warn!(
                "rejected operator {} for slot {}",
                symbol,
                self.expression.selected()
            );
            self.error_message = Some(String::from(OPERATOR_FAILED));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Operator;

    #[test]
    fn set_operand_applies_entry_text() {
        let mut app = App::new();
        app.operand_entry.insert_char('5');
        app.apply_operand_entry();
        assert_eq!(app.expression.operands(), &[5, 0, 0]);
        assert_eq!(app.error_message, None);
    }

    #[test]
    fn set_operand_failure_reports_the_exact_message() {
        let mut app = App::new();
        app.operand_entry.insert_char('5');
        app.operand_entry.insert_char('5');
        app.apply_operand_entry();
        assert_eq!(app.error_message.as_deref(), Some("Failed to set operand."));
        assert_eq!(app.expression.operands(), &[0, 0, 0]);
    }

    #[test]
    fn set_operator_failure_reports_the_exact_message() {
        // Slot 0 is selected at startup, an operand slot.
        let mut app = App::new();
        app.apply_operator_choice();
        assert_eq!(
            app.error_message.as_deref(),
            Some("Failed to set operator.")
        );
        assert_eq!(app.expression.operators(), &[Operator::Add, Operator::Add]);
    }

    #[test]
    fn success_clears_a_previous_error() {
        let mut app = App::new();
        app.apply_operator_choice();
        assert!(app.error_message.is_some());

        app.select_slot(1);
        app.choose_operator(Operator::Multiply);
        app.apply_operator_choice();
        assert_eq!(app.error_message, None);
        assert_eq!(app.expression.operators()[0], Operator::Multiply);
    }

    #[test]
    fn select_slot_moves_focus_to_the_expression() {
        let mut app = App::new();
        app.focus = FocusArea::OperandEntry;
        app.select_slot(4);
        assert_eq!(app.focus, FocusArea::Expression);
        assert_eq!(app.expression.selected(), 4);
    }

    #[test]
    fn choosing_an_operator_does_not_touch_the_expression() {
        let mut app = App::new();
        app.choose_operator(Operator::Subtract);
        assert_eq!(app.operator_choice, Operator::Subtract);
        assert_eq!(app.expression.operators(), &[Operator::Add, Operator::Add]);
    }
}
