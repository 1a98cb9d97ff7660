use crate::domain::LevelConfig;

use super::frame_stats::FrameStats;
use super::{FrameClock, SessionCore};

pub(super) fn create_session(level: LevelConfig) -> SessionCore {
    console_log!(
        "platformer session {}x{} with {} platform(s)",
        level.width,
        level.height,
        level.platforms.len()
    );

    SessionCore {
        player: level.spawn_player(),
        platforms: level.build_platforms(),
        input: Default::default(),
        width: level.width,
        height: level.height,
        player_speed: level.player_speed,
        keys: level.keys.clone(),
        clock: FrameClock::new(),
        frame: 0,
        perf_enabled: false,
        stats: FrameStats::default(),
        level,
    }
}

pub(super) fn reset_session(session: &mut SessionCore) {
    session.player = session.level.spawn_player();
    session.input.clear();
    session.clock.reset();
    session.frame = 0;
    session.stats = FrameStats::default();
}
