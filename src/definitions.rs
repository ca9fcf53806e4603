use std::collections::HashMap;

use ratatui::layout::Rect;

use crate::expression::Operator;

/// The UI area keyboard input is currently routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusArea {
    Expression,
    OperandEntry,
}

impl FocusArea {
    pub fn label(&self) -> &'static str {
        match self {
            FocusArea::Expression => "expression",
            FocusArea::OperandEntry => "operand entry",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            FocusArea::Expression => FocusArea::OperandEntry,
            FocusArea::OperandEntry => FocusArea::Expression,
        }
    }
}

/// Clickable controls outside the expression regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    OperandEntry,
    OperatorChoice(Operator),
    SetOperand,
    SetOperator,
}

/// Screen rectangles of the five expression regions.
///
/// The renderer rebuilds the registry on every frame; mouse handlers resolve
/// click positions against it. A click that lands in no region resolves to
/// `None` and is ignored by the caller.
#[derive(Debug, Default, Clone)]
pub struct RegionRegistry {
    regions: Vec<(usize, Rect)>,
}

impl RegionRegistry {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, slot: usize, area: Rect) {
        self.regions.push((slot, area));
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        self.regions
            .iter()
            .find(|(_, rect)| rect_contains(rect, column, row))
            .map(|(slot, _)| *slot)
    }
}

/// As [`RegionRegistry`], for the entry field, the operator radios and the
/// two buttons.
#[derive(Debug, Default, Clone)]
pub struct ControlRegistry {
    entries: HashMap<ControlKind, Rect>,
}

impl ControlRegistry {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn register(&mut self, kind: ControlKind, area: Rect) {
        self.entries.insert(kind, area);
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<ControlKind> {
        self.entries.iter().find_map(|(kind, rect)| {
            if rect_contains(rect, column, row) {
                Some(*kind)
            } else {
                None
            }
        })
    }
}

pub fn rect_contains(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
