use super::App;
use super::state::{STATUS_HINT, STATUS_LINGER};

// Implementation block for tick-related logic in the App.
impl App {
    /// Called on every tick of the main loop. Transient status messages
    /// fall back to the key hint once their linger window has passed; the
    /// error line is untouched, it only clears on a successful set.
    pub(crate) fn on_tick(&mut self) {
        if self.status_message != STATUS_HINT && self.status_set_at.elapsed() >= STATUS_LINGER {
            self.status_message = String::from(STATUS_HINT);
        }
    }
}
