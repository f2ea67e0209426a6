//! Straight-line projectiles
//!
//! A bullet's velocity is fixed when it is fired. It is never re-aimed, so a
//! shot at a moving zombie can miss.

use crate::collision::{Bounds, Collidable};
use crate::config::BulletConfig;
use glam::Vec2;

#[derive(Debug, Clone)]
pub struct Bullet {
    /// Center of the bullet in world units
    pub position: Vec2,
    /// Units per second
    pub velocity: Vec2,
    /// Render rotation in degrees; 0 points up the screen
    pub angle: f32,
    /// Hit-box width, already scaled by the zoom at fire time
    pub width: f32,
    /// Hit-box height, already scaled by the zoom at fire time
    pub height: f32,
}

impl Bullet {
    /// Fires from `origin` toward `target`
    ///
    /// Returns `None` when the two points coincide, since there is no
    /// direction to fly in.
    pub fn new(origin: Vec2, target: Vec2, zoom: f32, config: &BulletConfig) -> Option<Self> {
        let delta = target - origin;
        let direction = delta.try_normalize()?;

        Some(Bullet {
            position: origin,
            velocity: direction * config.speed,
            angle: (-delta.y).atan2(delta.x).to_degrees() - 90.0,
            width: config.width * zoom,
            height: config.height * zoom,
        })
    }

    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// True once the center has left the `width` × `height` playfield
    pub fn is_off_screen(&self, width: f32, height: f32) -> bool {
        self.position.x < 0.0 || self.position.x > width || self.position.y < 0.0 || self.position.y > height
    }
}

impl Collidable for Bullet {
    fn get_bounds(&self) -> Bounds {
        Bounds::centered(self.position, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BulletConfig {
        BulletConfig::default()
    }

    #[test]
    fn test_velocity_points_at_target() {
        let origin = Vec2::new(100.0, 100.0);
        let target = Vec2::new(400.0, 500.0);
        let bullet = Bullet::new(origin, target, 1.0, &config()).unwrap();

        let expected = (target - origin).normalize();
        assert!((bullet.velocity.normalize() - expected).length() < 1e-5);
        assert!((bullet.velocity.length() - 600.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_distance_fires_nothing() {
        let p = Vec2::new(50.0, 50.0);
        assert!(Bullet::new(p, p, 1.0, &config()).is_none());
    }

    #[test]
    fn test_angle_convention() {
        let origin = Vec2::new(100.0, 100.0);
        let up = Bullet::new(origin, Vec2::new(100.0, 0.0), 1.0, &config()).unwrap();
        let right = Bullet::new(origin, Vec2::new(200.0, 100.0), 1.0, &config()).unwrap();

        assert!(up.angle.abs() < 1e-4);
        assert!((right.angle + 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_hitbox_scales_with_zoom() {
        let bullet = Bullet::new(Vec2::ZERO, Vec2::X, 2.0, &config()).unwrap();
        assert_eq!((bullet.width, bullet.height), (20.0, 60.0));
        let bounds = bullet.get_bounds();
        assert_eq!(bounds.center(), bullet.position);
    }

    #[test]
    fn test_update_and_off_screen() {
        let mut bullet = Bullet::new(Vec2::new(10.0, 10.0), Vec2::new(0.0, 10.0), 1.0, &config()).unwrap();
        assert!(!bullet.is_off_screen(1280.0, 720.0));
        bullet.update(1.0 / 60.0);
        assert!((bullet.position.x - 0.0).abs() < 1e-4);
        bullet.update(1.0 / 60.0);
        assert!(bullet.is_off_screen(1280.0, 720.0));
    }
}
