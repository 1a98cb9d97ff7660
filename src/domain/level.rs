use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::geometry::Rect;
use crate::input::KeyBindings;

use super::body::MovableBody;
use super::platform::Platform;
use super::player;

pub const DEFAULT_WIDTH: f64 = 512.0;
pub const DEFAULT_HEIGHT: f64 = 288.0;
pub const DEFAULT_PLAYER_SPEED: f64 = 5.0;

/// Everything fixed at session construction: canvas size, spawn point,
/// platform layout and controls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LevelConfig {
    pub width: f64,
    pub height: f64,
    pub player: PlayerSpawn,
    /// Horizontal distance per tick while a direction key is held
    pub player_speed: f64,
    pub platforms: Vec<PlatformSpec>,
    pub keys: KeyBindings,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerSpawn {
    pub x: f64,
    pub y: f64,
    /// Floor line; the canvas bottom when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_y: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    #[serde(flatten)]
    pub rect: Rect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            player: PlayerSpawn::default(),
            player_speed: DEFAULT_PLAYER_SPEED,
            platforms: vec![PlatformSpec {
                rect: Rect::new(20.0, 200.0, 35.0, 10.0),
                color: None,
            }],
            keys: KeyBindings::default(),
        }
    }
}

impl LevelConfig {
    /// The default layout on a canvas of the given size.
    pub fn fitted(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let level: LevelConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        level.validate()?;
        Ok(level)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn ground_y(&self) -> f64 {
        self.player.ground_y.unwrap_or(self.height)
    }

    pub fn spawn_player(&self) -> MovableBody {
        player::spawn(self.player.x, self.player.y, self.ground_y())
    }

    pub fn build_platforms(&self) -> Vec<Platform> {
        self.platforms
            .iter()
            .map(|p| Platform::with_color(p.rect, p.color.unwrap_or(Color::PLATFORM)))
            .collect()
    }

    /// Reject layouts the simulation would misbehave on.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(format!("width must be positive, got {}", self.width));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(format!("height must be positive, got {}", self.height));
        }
        if !(self.player_speed.is_finite() && self.player_speed >= 0.0) {
            return Err(format!("playerSpeed must be >= 0, got {}", self.player_speed));
        }
        if !(self.player.x.is_finite() && self.player.y.is_finite() && self.ground_y().is_finite()) {
            return Err("player spawn must be finite".to_string());
        }
        for (i, p) in self.platforms.iter().enumerate() {
            let r = &p.rect;
            if ![r.x, r.y, r.w, r.h].iter().all(|v| v.is_finite()) {
                return Err(format!("platform {} has a non-finite coordinate", i));
            }
            if r.w <= 0.0 || r.h <= 0.0 {
                return Err(format!("platform {} must have positive size, got {}x{}", i, r.w, r.h));
            }
        }
        self.keys.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_matches_stock_layout() {
        let level = LevelConfig::default();
        assert_eq!((level.width, level.height), (512.0, 288.0));
        assert_eq!(level.ground_y(), 288.0);
        assert_eq!(level.player_speed, 5.0);

        let platforms = level.build_platforms();
        assert_eq!(platforms.len(), 1);
        assert_eq!(*platforms[0].rect(), Rect::new(20.0, 200.0, 35.0, 10.0));
        assert_eq!(platforms[0].color(), Color::PLATFORM);

        let player = level.spawn_player();
        assert_eq!((player.x(), player.y()), (0.0, 0.0));
        assert_eq!(player.ground_y, 288.0);
    }

    #[test]
    fn empty_object_is_the_default_level() {
        let level = LevelConfig::from_json("{}").unwrap();
        assert_eq!(level, LevelConfig::default());
    }

    #[test]
    fn parses_full_level() {
        let json = r##"{
            "width": 640, "height": 360,
            "player": { "x": 10, "y": 20, "groundY": 300 },
            "playerSpeed": 3.5,
            "platforms": [
                { "x": 0, "y": 250, "w": 100, "h": 8 },
                { "x": 150, "y": 200, "w": 60, "h": 8, "color": "#0a0" }
            ],
            "keys": { "left": "a", "right": "d", "jump": "w" }
        }"##;
        let level = LevelConfig::from_json(json).unwrap();
        assert_eq!(level.ground_y(), 300.0);
        assert_eq!(level.player_speed, 3.5);
        assert_eq!(level.keys.jump, "w");

        let platforms = level.build_platforms();
        assert_eq!(platforms[0].color(), Color::PLATFORM);
        assert_eq!(platforms[1].color(), Color::rgb(0, 0xaa, 0));
        assert_eq!(*platforms[1].rect(), Rect::new(150.0, 200.0, 60.0, 8.0));
    }

    #[test]
    fn fitted_keeps_floor_at_canvas_bottom() {
        let level = LevelConfig::fitted(800.0, 600.0);
        assert_eq!(level.ground_y(), 600.0);
        assert_eq!(level.platforms, LevelConfig::default().platforms);
    }

    #[test]
    fn rejects_bad_levels() {
        assert!(LevelConfig::from_json("not json").is_err());
        assert!(LevelConfig::from_json(r#"{ "width": 0 }"#).is_err());
        assert!(LevelConfig::from_json(r#"{ "playerSpeed": -1 }"#).is_err());

        let err = LevelConfig::from_json(r#"{ "platforms": [ { "x": 0, "y": 0, "w": 10, "h": 0 } ] }"#)
            .unwrap_err();
        assert!(err.contains("platform 0"), "{err}");

        let err = LevelConfig::from_json(r#"{ "platforms": [ { "x": 0, "y": 0, "w": 1, "h": 1, "color": "red" } ] }"#)
            .unwrap_err();
        assert!(err.contains("red"), "{err}");

        assert!(LevelConfig::from_json(r#"{ "keys": { "jump": "" } }"#).is_err());
    }

    #[test]
    fn json_export_parses_back() {
        let mut level = LevelConfig::default();
        level.platforms.push(PlatformSpec {
            rect: Rect::new(1.0, 2.0, 3.0, 4.0),
            color: Some(Color::RED),
        });
        level.player.ground_y = Some(250.0);
        let back = LevelConfig::from_json(&level.to_json()).unwrap();
        assert_eq!(back, level);
    }
}
