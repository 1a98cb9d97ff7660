//! Entities (movable body, static platforms, the player preset) and the
//! level layout they are built from.

pub mod body;
pub mod level;
pub mod platform;
pub mod player;

pub use body::{BodyConfig, MovableBody};
pub use level::{LevelConfig, PlatformSpec, PlayerSpawn};
pub use platform::Platform;
pub use player::PLAYER;
