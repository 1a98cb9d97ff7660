use crate::core::color::Color;
use crate::core::geometry::Rect;
use crate::render::DrawSurface;

/// Fixed parameters of a body kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyConfig {
    pub w: f64,
    pub h: f64,
    /// Acceleration in px per ms².
    pub gravity: f64,
    /// Upward velocity added by a jump (px per step).
    pub jump_strength: f64,
    pub color: Color,
}

/// A rectangle that falls, jumps and lands.
#[derive(Clone, Debug, PartialEq)]
pub struct MovableBody {
    // === Shape / position ===
    pub rect: Rect,

    // === Fixed at creation ===
    /// Logical floor line: the bottom edge never goes below it
    pub ground_y: f64,
    pub gravity: f64,
    pub jump_strength: f64,
    pub color: Color,

    // === Kinematic state ===
    /// Vertical velocity, negative is up
    pub vy: f64,
    /// Resting on the floor line
    pub is_grounded: bool,
    /// Resting on a platform surface
    pub is_on_platform: bool,
}

impl MovableBody {
    pub fn new(config: &BodyConfig, x: f64, y: f64, ground_y: f64) -> Self {
        Self {
            rect: Rect::new(x, y, config.w, config.h),
            ground_y,
            gravity: config.gravity,
            jump_strength: config.jump_strength,
            color: config.color,
            vy: 0.0,
            is_grounded: false,
            is_on_platform: false,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.rect.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.rect.y
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.rect.w
    }

    #[inline]
    pub fn h(&self) -> f64 {
        self.rect.h
    }

    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.rect.x += dx;
        self.rect.y += dy;
    }

    pub fn move_x(&mut self, dx: f64) {
        self.rect.x += dx;
    }

    pub fn move_y(&mut self, dy: f64) {
        self.rect.y += dy;
    }

    pub fn move_absolute(&mut self, x: f64, y: f64) {
        self.rect.x = x;
        self.rect.y = y;
    }

    pub fn move_x_absolute(&mut self, x: f64) {
        self.rect.x = x;
    }

    pub fn move_y_absolute(&mut self, y: f64) {
        self.rect.y = y;
    }

    /// Apply the jump impulse.
    ///
    /// Consumes one landing flag (floor before platform). The impulse is
    /// applied even when neither flag is set; callers gate on
    /// `is_grounded || is_on_platform`.
    pub fn jump(&mut self) {
        if self.is_grounded {
            self.is_grounded = false;
        } else if self.is_on_platform {
            self.is_on_platform = false;
        }
        self.vy -= self.jump_strength;
    }

    pub fn reset_gravity(&mut self) {
        self.vy = 0.0;
    }

    /// Advance by `dt` milliseconds and clamp to the floor line.
    pub fn integrate(&mut self, dt: f64) {
        self.vy += dt * self.gravity / 1000.0;
        self.rect.y += self.vy;

        if self.rect.bottom() >= self.ground_y {
            self.rect.y = self.ground_y - self.rect.h;
            self.vy = 0.0;
            self.is_grounded = true;
        }
    }

    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.rect.intersects(other)
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.fill(&self.rect, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, DrawList};

    const TEST_BODY: BodyConfig = BodyConfig {
        w: 10.0,
        h: 20.0,
        gravity: 2.0,
        jump_strength: 3.0,
        color: Color::RED,
    };

    #[test]
    fn relative_and_absolute_moves() {
        let mut body = MovableBody::new(&TEST_BODY, 5.0, 5.0, 100.0);
        body.move_by(1.0, -2.0);
        assert_eq!((body.x(), body.y()), (6.0, 3.0));
        body.move_x(4.0);
        body.move_y(7.0);
        assert_eq!((body.x(), body.y()), (10.0, 10.0));

        body.move_absolute(-30.0, 400.0);
        assert_eq!((body.x(), body.y()), (-30.0, 400.0));
        body.move_x_absolute(1.5);
        body.move_y_absolute(2.5);
        assert_eq!((body.x(), body.y()), (1.5, 2.5));
        assert_eq!(body.vy, 0.0);
    }

    #[test]
    fn falling_accelerates_by_dt_times_gravity() {
        let mut body = MovableBody::new(&TEST_BODY, 0.0, 0.0, 1.0e9);
        let step = 16.0 * TEST_BODY.gravity / 1000.0;
        let mut prev_vy = body.vy;
        for _ in 0..10 {
            body.integrate(16.0);
            assert!(body.vy > prev_vy);
            assert!((body.vy - prev_vy - step).abs() < 1e-12);
            prev_vy = body.vy;
        }
        assert!(!body.is_grounded);
    }

    #[test]
    fn zero_dt_keeps_velocity() {
        let mut body = MovableBody::new(&TEST_BODY, 0.0, 0.0, 1000.0);
        body.vy = 1.25;
        body.integrate(0.0);
        assert_eq!(body.vy, 1.25);
        assert_eq!(body.y(), 1.25);
    }

    #[test]
    fn floor_clamp_is_exact() {
        let mut body = MovableBody::new(&TEST_BODY, 0.0, 75.0, 100.0);
        body.vy = 9.0;
        body.integrate(16.0);
        assert_eq!(body.y() + body.h(), 100.0);
        assert_eq!(body.vy, 0.0);
        assert!(body.is_grounded);
    }

    #[test]
    fn floor_clamp_triggers_when_touching() {
        let mut body = MovableBody::new(&TEST_BODY, 0.0, 80.0, 100.0);
        body.integrate(0.0);
        assert_eq!(body.y(), 80.0);
        assert!(body.is_grounded);
    }

    #[test]
    fn jump_from_ground_consumes_only_grounded() {
        let mut body = MovableBody::new(&TEST_BODY, 0.0, 0.0, 100.0);
        body.is_grounded = true;
        body.is_on_platform = true;
        body.vy = 0.5;
        body.jump();
        assert!(!body.is_grounded);
        assert!(body.is_on_platform);
        assert_eq!(body.vy, 0.5 - TEST_BODY.jump_strength);
    }

    #[test]
    fn jump_from_platform_consumes_on_platform() {
        let mut body = MovableBody::new(&TEST_BODY, 0.0, 0.0, 100.0);
        body.is_on_platform = true;
        body.jump();
        assert!(!body.is_on_platform);
        assert!(!body.is_grounded);
        assert_eq!(body.vy, -TEST_BODY.jump_strength);
    }

    #[test]
    fn airborne_jump_still_applies_impulse() {
        let mut body = MovableBody::new(&TEST_BODY, 0.0, 0.0, 100.0);
        body.jump();
        body.jump();
        assert_eq!(body.vy, -2.0 * TEST_BODY.jump_strength);
    }

    #[test]
    fn reset_gravity_is_idempotent() {
        let mut body = MovableBody::new(&TEST_BODY, 0.0, 0.0, 100.0);
        body.vy = 4.0;
        body.reset_gravity();
        assert_eq!(body.vy, 0.0);
        body.reset_gravity();
        assert_eq!(body.vy, 0.0);
    }

    #[test]
    fn draws_own_rect_in_own_color() {
        let body = MovableBody::new(&TEST_BODY, 3.0, 4.0, 100.0);
        let mut list = DrawList::new();
        body.draw(&mut list);
        assert_eq!(
            list.commands(),
            &[DrawCommand::Fill(Rect::new(3.0, 4.0, 10.0, 20.0), Color::RED)]
        );
    }
}
