use crate::render::DrawSurface;
use crate::systems::collision::resolve_platforms;
use crate::systems::movement::apply_input;

use super::{PerfTimer, SessionCore};

pub(super) fn tick(session: &mut SessionCore, timestamp_ms: f64, surface: &mut dyn DrawSurface) {
    let timer = if session.perf_enabled { Some(PerfTimer::start()) } else { None };

    // === CLEAR & PHYSICS ===
    surface.clear(0.0, 0.0, session.width, session.height);
    let dt = session.clock.advance(timestamp_ms);
    session.player.integrate(dt);

    // === PLATFORM RESOLUTION ===
    // Draws each platform, then lands the player on it on overlap.
    let contacts = resolve_platforms(&mut session.player, &session.platforms, surface);

    // === INPUT & RENDER ===
    // Landing flags seen here come from the resolution pass above.
    apply_input(
        &mut session.player,
        &session.input,
        &session.keys,
        session.player_speed,
    );
    session.player.draw(surface);

    session.frame += 1;
    session.stats.frames = session.frame;
    session.stats.dt_ms = dt;
    session.stats.platform_contacts = contacts;
    session.stats.tick_ms = timer.map_or(0.0, |t| t.elapsed_ms());
}
