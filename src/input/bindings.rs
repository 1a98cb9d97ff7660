use serde::{Deserialize, Serialize};

/// Key names (as reported by `KeyboardEvent.key`) for each action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub jump: String,
}

impl KeyBindings {
    pub fn validate(&self) -> Result<(), String> {
        for (action, key) in [("left", &self.left), ("right", &self.right), ("jump", &self.jump)] {
            if key.is_empty() {
                return Err(format!("key binding for '{}' is empty", action));
            }
        }
        Ok(())
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: "ArrowLeft".to_string(),
            right: "ArrowRight".to_string(),
            jump: "ArrowUp".to_string(),
        }
    }
}
