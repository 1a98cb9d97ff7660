use std::collections::HashMap;

/// Last-write-wins record of which keys are held.
///
/// Several events for the same key between two reads collapse to the final
/// one; no event queue is kept.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    keys_pressed: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event.
    pub fn press(&mut self, key: &str) {
        self.set(key, true);
    }

    /// Record a key-up event.
    pub fn release(&mut self, key: &str) {
        self.set(key, false);
    }

    fn set(&mut self, key: &str, down: bool) {
        match self.keys_pressed.get_mut(key) {
            Some(state) => *state = down,
            None => {
                self.keys_pressed.insert(key.to_string(), down);
            }
        }
    }

    /// Forget every key, e.g. when the page loses focus and key-up events
    /// will never arrive.
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
    }

    pub fn is_key_down(&self, key: &str) -> bool {
        self.keys_pressed.get(key).copied().unwrap_or(false)
    }

    /// Keys never seen count as up.
    pub fn is_key_up(&self, key: &str) -> bool {
        !self.is_key_down(key)
    }
}
