//! Keyboard state
//!
//! The host forwards raw key-down/key-up events (`KeyboardEvent.key`
//! strings); the frame loop reads the resulting held/released record once
//! per tick.

mod bindings;
mod key_state;

pub use bindings::KeyBindings;
pub use key_state::InputState;
