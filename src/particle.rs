use rand::Rng;
use raylib::prelude::*;
use crate::config::{EdgeMode, VelocityUnits};
use crate::constants::*;

/// A glowing disc. Position is stored in physical pixels, radius in logical ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub color: Color,
}

impl Particle {
    /// Random particle anywhere in `[0, physical_width) x [0, physical_height)`.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        color: Color,
        physical_width: f32,
        physical_height: f32,
        narrow: bool,
    ) -> Self {
        let (radius_range, (scale_x, scale_y)) = if narrow {
            (NARROW_RADIUS, NARROW_VELOCITY_SCALE)
        } else {
            (WIDE_RADIUS, WIDE_VELOCITY_SCALE)
        };

        Self {
            x: random_coordinate(rng, physical_width),
            y: random_coordinate(rng, physical_height),
            radius: rng.random_range(radius_range),
            velocity_x: rng.random_range(-1.0f32..1.0) * scale_x,
            velocity_y: rng.random_range(-1.0f32..1.0) * scale_y,
            color,
        }
    }

    pub fn logical_position(&self, device_pixel_ratio: f32) -> Vector2 {
        Vector2::new(self.x / device_pixel_ratio, self.y / device_pixel_ratio)
    }

    pub fn glow_blur(&self) -> f32 {
        GLOW_MIN_BLUR.max(self.radius * GLOW_RADIUS_FACTOR)
    }

    /// Moves one frame along the velocity.
    pub fn advance(&mut self, device_pixel_ratio: f32, units: VelocityUnits) {
        let step = match units {
            VelocityUnits::Logical => device_pixel_ratio,
            VelocityUnits::Physical => 1.0,
        };
        self.x += self.velocity_x * step;
        self.y += self.velocity_y * step;
    }

    /// Bounces off the logical viewport edges. Velocity only flips while the
    /// particle is outside and still heading away, so a shrunk viewport never
    /// traps a particle flipping back and forth beyond the edge.
    pub fn reflect(&mut self, logical_width: f32, logical_height: f32, device_pixel_ratio: f32, mode: EdgeMode) {
        let position = self.logical_position(device_pixel_ratio);
        if let Some(edge) = crossed_edge(position.x, self.velocity_x, logical_width) {
            self.velocity_x = -self.velocity_x;
            if mode == EdgeMode::Clamp {
                self.x = edge * device_pixel_ratio;
            }
        }
        if let Some(edge) = crossed_edge(position.y, self.velocity_y, logical_height) {
            self.velocity_y = -self.velocity_y;
            if mode == EdgeMode::Clamp {
                self.y = edge * device_pixel_ratio;
            }
        }
    }
}

fn random_coordinate<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 { rng.random_range(0.0..extent) } else { 0.0 }
}

/// The edge the coordinate went past while moving outward, if any.
fn crossed_edge(position: f32, velocity: f32, extent: f32) -> Option<f32> {
    if position < 0.0 && velocity < 0.0 {
        Some(0.0)
    } else if position > extent && velocity > 0.0 {
        Some(extent)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn particle(x: f32, y: f32, velocity_x: f32, velocity_y: f32) -> Particle {
        Particle { x, y, radius: 4.0, velocity_x, velocity_y, color: Color::WHITE }
    }

    #[test]
    fn spawn_respects_narrow_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, Color::RED, 300.0, 600.0, true);
            assert!(p.x >= 0.0 && p.x < 300.0);
            assert!(p.y >= 0.0 && p.y < 600.0);
            assert!(p.radius >= 3.0 && p.radius < 13.0);
            assert!(p.velocity_x >= -2.0 && p.velocity_x < 2.0);
            assert!(p.velocity_y >= -7.0 && p.velocity_y < 7.0);
            assert_eq!(p.color, Color::RED);
        }
    }

    #[test]
    fn spawn_respects_wide_ranges() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, Color::RED, 2000.0, 1000.0, false);
            assert!(p.radius >= 5.0 && p.radius < 15.0);
            assert!(p.velocity_x >= -3.0 && p.velocity_x < 3.0);
            assert!(p.velocity_y >= -9.0 && p.velocity_y < 9.0);
        }
    }

    #[test]
    fn glow_has_a_floor() {
        assert_eq!(particle(0.0, 0.0, 0.0, 0.0).glow_blur(), 12.0);
        let mut small = particle(0.0, 0.0, 0.0, 0.0);
        small.radius = 2.0;
        assert_eq!(small.glow_blur(), 8.0);
    }

    #[test]
    fn logical_velocity_scales_with_pixel_ratio() {
        let mut p = particle(100.0, 100.0, 1.0, -2.0);
        p.advance(2.0, VelocityUnits::Logical);
        assert_eq!((p.x, p.y), (102.0, 96.0));

        let mut p = particle(100.0, 100.0, 1.0, -2.0);
        p.advance(2.0, VelocityUnits::Physical);
        assert_eq!((p.x, p.y), (101.0, 98.0));
    }

    #[test]
    fn reflection_tolerates_one_step_outside() {
        let mut p = particle(210.0, 50.0, 3.0, 0.0);
        p.reflect(200.0, 100.0, 1.0, EdgeMode::Tolerate);
        assert_eq!(p.velocity_x, -3.0);
        assert_eq!(p.x, 210.0);
    }

    #[test]
    fn reflection_clamps_onto_edge() {
        let mut p = particle(420.0, -4.0, 3.0, -5.0);
        p.reflect(200.0, 100.0, 2.0, EdgeMode::Clamp);
        assert_eq!((p.velocity_x, p.velocity_y), (-3.0, 5.0));
        assert_eq!((p.x, p.y), (400.0, 0.0));
    }

    #[test]
    fn particle_heading_back_inside_keeps_its_velocity() {
        let mut p = particle(250.0, 50.0, -3.0, 0.0);
        p.reflect(200.0, 100.0, 1.0, EdgeMode::Tolerate);
        assert_eq!(p.velocity_x, -3.0);
    }
}
