//! Application state and input routing.
//!
//! The `App` struct holds everything the renderer needs: the expression
//! model, the operand entry field, the operator choice, the error and
//! status lines, and the hit-test registries the renderer repopulates on
//! every frame. The submodules split the logic by input source.

/// `actions` module: the operations behind the buttons and direct keys.
mod actions;
/// `init` module: construction of the initial `App` state.
mod init;
/// `keyboard` module: all keyboard input handling.
mod keyboard;
/// `mouse` module: all mouse input handling.
mod mouse;
/// `state` module: the `App` struct and the operand entry field.
mod state;
/// `tick` module: time-based housekeeping.
mod tick;

pub use state::{App, OperandComposer};
