use std::fmt;

use thiserror::Error;

/// Number of editable slots in the expression, left to right:
/// operand, operator, operand, operator, operand.
pub const SLOT_COUNT: usize = 5;

/// A binary operator the expression supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

    /// Parses an operator from its exact textual symbol.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
        }
    }

    pub fn apply(&self, lhs: i32, rhs: i32) -> i32 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The kind of content a slot holds. Even slots hold operands, odd slots
/// hold operators; the mapping never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Operand,
    Operator,
}

impl SlotKind {
    pub fn of(slot: usize) -> Self {
        if slot % 2 == 0 {
            SlotKind::Operand
        } else {
            SlotKind::Operator
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::Operand => "operand",
            SlotKind::Operator => "operator",
        }
    }
}

/// Why a content-set request was rejected. Callers outside the model only
/// ever branch on the boolean from [`Expression::set_selected_content`];
/// the distinction exists for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("operand content must be a single digit 0-9")]
    InvalidOperand,
    #[error("operator content must be one of +, - or *")]
    InvalidOperator,
}

/// The five-slot expression `operand0 operator0 operand1 operator1 operand2`
/// together with the currently selected slot.
///
/// This is the sole authority over what each slot may hold and what the
/// expression evaluates to. The UI routes selection and content-set requests
/// here and repaints from the accessors; it never holds expression state of
/// its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    operands: [u8; 3],
    operators: [Operator; 2],
    selected: usize,
}

impl Expression {
    pub fn new() -> Self {
        Self {
            operands: [0, 0, 0],
            operators: [Operator::Add, Operator::Add],
            selected: 0,
        }
    }

    /// Selects the slot the next content-set request targets. Callers obtain
    /// slot indices from hit-tested regions, so anything out of range is
    /// clamped to the last slot rather than trusted.
    pub fn select_slot(&mut self, slot: usize) {
        self.selected = slot.min(SLOT_COUNT - 1);
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_kind(&self) -> SlotKind {
        SlotKind::of(self.selected)
    }

    pub fn operands(&self) -> &[u8; 3] {
        &self.operands
    }

    pub fn operators(&self) -> &[Operator; 2] {
        &self.operators
    }

    /// Attempts to set the selected slot from user-entered text, reporting
    /// the outcome as a bare accept/reject. An operand slot takes exactly
    /// one of `"0"`..`"9"`; an operator slot takes exactly `"+"`, `"-"` or
    /// `"*"`. The slot is left untouched on rejection.
    pub fn set_selected_content(&mut self, content: &str) -> bool {
        self.try_set_selected_content(content).is_ok()
    }

    /// As [`Expression::set_selected_content`], with the rejection reason
    /// preserved.
    pub fn try_set_selected_content(&mut self, content: &str) -> Result<(), ContentError> {
        match self.selected_kind() {
            SlotKind::Operand => {
                let digit = match content.as_bytes() {
                    &[byte @ b'0'..=b'9'] => byte - b'0',
                    _ => return Err(ContentError::InvalidOperand),
                };
                self.operands[self.selected / 2] = digit;
            }
            SlotKind::Operator => {
                let operator = Operator::parse(content).ok_or(ContentError::InvalidOperator)?;
                self.operators[(self.selected - 1) / 2] = operator;
            }
        }
        Ok(())
    }

    /// Left-to-right evaluation of the two binary applications. Operator
    /// precedence is deliberately ignored, so `2 + 3 * 4` yields `20`.
    pub fn evaluate(&self) -> i32 {
        let mut result = i32::from(self.operands[0]);
        result = self.operators[0].apply(result, i32::from(self.operands[1]));
        result = self.operators[1].apply(result, i32::from(self.operands[2]));
        result
    }

    /// Display text for a single slot, as drawn inside its region.
    pub fn slot_text(&self, slot: usize) -> String {
        match SlotKind::of(slot) {
            SlotKind::Operand => self.operands[slot / 2].to_string(),
            SlotKind::Operator => self.operators[(slot - 1) / 2].symbol().to_string(),
        }
    }
}

impl Default for Expression {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.operands[0],
            self.operators[0],
            self.operands[1],
            self.operators[1],
            self.operands[2]
        )
    }
}
