use crossterm::event::{KeyEvent, MouseEvent};

/// Events the main loop dispatches on.
#[derive(Debug)]
pub enum Event {
    /// Periodic tick, used for presentation housekeeping only.
    Tick,
    /// A key press.
    Key(KeyEvent),
    /// A mouse action.
    Mouse(MouseEvent),
}
