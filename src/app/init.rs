use std::time::Instant;

use log::debug;

use super::state::{App, OperandComposer, STATUS_HINT};
use crate::definitions::{ControlRegistry, FocusArea, RegionRegistry};
use crate::expression::{Expression, Operator};

impl App {
    /// Creates the initial application state: the default expression
    /// `0 + 0 + 0` with the left-most slot selected.
    pub fn new() -> Self {
        debug!("initialising application state");
        Self {
            should_quit: false,
            focus: FocusArea::Expression,
            expression: Expression::new(),
            operand_entry: OperandComposer::new(),
            operator_choice: Operator::Add,
            error_message: None,
            status_message: String::from(STATUS_HINT),
            regions: RegionRegistry::default(),
            controls: ControlRegistry::default(),
            status_set_at: Instant::now(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
