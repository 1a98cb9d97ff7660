//! Body-vs-platform resolution
//!
//! Platforms are passive; the body is the only participant that moves.
//! Any overlap is resolved by snapping the body on top of the platform,
//! whatever side it came from. Platforms are visited in list order, so when
//! several overlap in one tick the last one decides the final position.

use crate::domain::{MovableBody, Platform};
use crate::render::DrawSurface;

/// Put `body` on top of `platform` and stop its fall.
pub fn land_on(body: &mut MovableBody, platform: &Platform) {
    body.is_on_platform = true;
    body.move_y_absolute(platform.rect().y - body.h());
    body.reset_gravity();
}

/// Draw every platform and land `body` on each one it overlaps.
///
/// Returns the number of platforms that were overlapping.
pub fn resolve_platforms(
    body: &mut MovableBody,
    platforms: &[Platform],
    surface: &mut dyn DrawSurface,
) -> u32 {
    let mut contacts = 0;
    for platform in platforms {
        platform.draw(surface);
        if body.intersects(platform.rect()) {
            land_on(body, platform);
            contacts += 1;
        }
    }
    contacts
}
