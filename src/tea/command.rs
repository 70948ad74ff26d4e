//! Commands for the TEA pattern.
//!
//! Commands are the side effects `update` asks the runtime to perform.

/// Output commands from the update function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Terminal bell, the keystroke sound stub.
    Bell,
    Quit,
}
