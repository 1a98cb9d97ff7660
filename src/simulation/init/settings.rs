use crate::input::KeyBindings;

use super::frame_stats::FrameStats;
use super::SessionCore;

pub(super) fn set_player_speed(session: &mut SessionCore, speed: f64) -> Result<(), String> {
    if !(speed.is_finite() && speed >= 0.0) {
        return Err(format!("playerSpeed must be >= 0, got {}", speed));
    }
    session.player_speed = speed;
    session.level.player_speed = speed;
    Ok(())
}

pub(super) fn set_key_bindings(session: &mut SessionCore, keys: KeyBindings) -> Result<(), String> {
    keys.validate()?;
    session.level.keys = keys.clone();
    session.keys = keys;
    Ok(())
}

pub(super) fn enable_perf_metrics(session: &mut SessionCore, enabled: bool) {
    if session.perf_enabled != enabled {
        console_log!("perf metrics {}", if enabled { "on" } else { "off" });
    }
    session.perf_enabled = enabled;
}

pub(super) fn get_frame_stats(session: &SessionCore) -> FrameStats {
    session.stats.clone()
}
