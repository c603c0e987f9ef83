// Simple particle struct to keep track of individual position, velocity, size and color

use crate::color::Color;
use crate::config::FieldConfig;
use crate::pointer::PointerState;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(
        pos_x: f64,
        pos_y: f64,
        vel_x: f64,
        vel_y: f64,
        radius: f64,
        color: Color,
    ) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    /// Draws a particle somewhere inside a `width` x `height` canvas.
    pub fn random<R: Rng>(rng: &mut R, width: u32, height: u32, config: &FieldConfig) -> Particle {
        let pos_x = rng.gen::<f64>() * width as f64;
        let pos_y = rng.gen::<f64>() * height as f64;
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        let vel_x = rng.gen::<f64>() * 2.0 * config.max_speed - config.max_speed;
        let vel_y = rng.gen::<f64>() * 2.0 * config.max_speed - config.max_speed;
        let color = if rng.gen::<f64>() > 0.5 {
            config.palette[0]
        } else {
            config.palette[1]
        };
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color)
    }

    // Velocity flips once the particle is past an edge; the overshoot is left alone
    pub fn advance(&mut self, width: u32, height: u32) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
        if self.pos[0] > width as f64 || self.pos[0] < 0.0 {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] > height as f64 || self.pos[1] < 0.0 {
            self.vel[1] = -self.vel[1];
        }
    }

    /// One simulation tick: move, bounce off edges, then shy away from the pointer.
    pub fn update(
        &mut self,
        pointer: &PointerState,
        width: u32,
        height: u32,
        config: &FieldConfig,
    ) {
        self.advance(width, height);
        self.repel(pointer, width, height, config);
    }

    /// Pushes the particle away from the pointer one step per axis, but
    /// never towards an edge it is already close to.
    pub fn repel(
        &mut self,
        pointer: &PointerState,
        width: u32,
        height: u32,
        config: &FieldConfig,
    ) {
        let target = match pointer.pos {
            Some(target) => target,
            None => return,
        };
        let distance = vecmath::vec2_len(vecmath::vec2_sub(target, self.pos));
        if distance >= pointer.radius {
            return;
        }

        let margin = self.radius * config.repel_edge_factor;
        let step = config.repel_step;
        if target[0] < self.pos[0] && self.pos[0] < width as f64 - margin {
            self.pos[0] += step;
        }
        if target[0] > self.pos[0] && self.pos[0] > margin {
            self.pos[0] -= step;
        }
        if target[1] < self.pos[1] && self.pos[1] < height as f64 - margin {
            self.pos[1] += step;
        }
        if target[1] > self.pos[1] && self.pos[1] > margin {
            self.pos[1] -= step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    // Hands out the same word for every draw
    struct FixedDraws(u64);

    impl RngCore for FixedDraws {
        fn next_u32(&mut self) -> u32 {
            (self.0 >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest {
                *byte = (self.0 >> 56) as u8;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn particle_at(x: f64, y: f64) -> Particle {
        Particle::new(x, y, 0.0, 0.0, 2.0, Color::BLUE_MIST)
    }

    #[test]
    fn random_particles_respect_ranges() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800, 600, &config);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            assert!(p.radius >= 1.0 && p.radius < 4.0);
            assert!(p.vel[0] >= -0.5 && p.vel[0] < 0.5);
            assert!(p.vel[1] >= -0.5 && p.vel[1] < 0.5);
            assert!(config.palette.contains(&p.color));
        }
    }

    #[test]
    fn color_draw_above_half_picks_first_palette_entry() {
        let config = FieldConfig::default();

        let p = Particle::random(&mut FixedDraws(u64::MAX), 800, 600, &config);
        assert_eq!(p.color, config.palette[0]);

        // top bit only: every draw is exactly 0.5
        let p = Particle::random(&mut FixedDraws(1 << 63), 800, 600, &config);
        assert_eq!(p.color, config.palette[1]);
        assert_eq!(p.pos, [400.0, 300.0]);

        let p = Particle::random(&mut FixedDraws(0), 800, 600, &config);
        assert_eq!(p.color, config.palette[1]);
        assert_eq!(p.radius, 1.0);
        assert_eq!(p.vel, [-0.5, -0.5]);
    }

    #[test]
    fn advance_flips_velocity_without_clamping() {
        let mut p = Particle::new(99.8, 50.0, 0.4, -0.3, 1.0, Color::BLUE_MIST);
        p.advance(100, 100);
        assert!((p.pos[0] - 100.2).abs() < 1e-9);
        assert_eq!(p.vel, [-0.4, -0.3]);

        let mut p = Particle::new(10.0, 0.1, 0.0, -0.3, 1.0, Color::BLUE_MIST);
        p.advance(100, 100);
        assert!(p.pos[1] < 0.0);
        assert_eq!(p.vel[1], 0.3);
    }

    #[test]
    fn advance_inside_bounds_keeps_velocity() {
        let mut p = Particle::new(50.0, 50.0, 0.5, 0.5, 1.0, Color::BLUE_MIST);
        p.advance(100, 100);
        assert_eq!(p.pos, [50.5, 50.5]);
        assert_eq!(p.vel, [0.5, 0.5]);
    }

    #[test]
    fn repel_without_pointer_is_noop() {
        let config = FieldConfig::default();
        let mut p = particle_at(300.0, 300.0);
        p.repel(&PointerState::new(150.0), 800, 600, &config);
        assert_eq!(p.pos, [300.0, 300.0]);
    }

    #[test]
    fn no_repulsion_near_origin_before_first_move() {
        let config = FieldConfig::default();
        let mut p = particle_at(50.0, 50.0);
        p.update(&PointerState::new(150.0), 800, 600, &config);
        assert_eq!(p.pos, [50.0, 50.0]);
    }

    #[test]
    fn repel_pushes_away_on_both_axes() {
        let config = FieldConfig::default();
        let mut pointer = PointerState::new(150.0);
        pointer.move_to(250.0, 250.0);

        let mut p = particle_at(300.0, 300.0);
        p.repel(&pointer, 800, 600, &config);
        assert_eq!(p.pos, [302.0, 302.0]);

        let mut p = particle_at(200.0, 200.0);
        p.repel(&pointer, 800, 600, &config);
        assert_eq!(p.pos, [198.0, 198.0]);
    }

    #[test]
    fn repel_ignores_particles_outside_radius() {
        let config = FieldConfig::default();
        let mut pointer = PointerState::new(150.0);
        pointer.move_to(0.0, 0.0);
        let mut p = particle_at(150.0, 0.0);
        p.repel(&pointer, 800, 600, &config);
        assert_eq!(p.pos, [150.0, 0.0]);
    }

    #[test]
    fn repel_holds_back_near_edges() {
        let config = FieldConfig::default();
        let mut pointer = PointerState::new(150.0);

        // margin is radius 2 * 10 = 20px
        pointer.move_to(700.0, 15.0);
        let mut p = particle_at(785.0, 10.0);
        p.repel(&pointer, 800, 600, &config);
        assert_eq!(p.pos, [785.0, 10.0]);

        pointer.move_to(30.0, 580.0);
        let mut p = particle_at(15.0, 585.0);
        p.repel(&pointer, 800, 600, &config);
        assert_eq!(p.pos, [15.0, 585.0]);
    }

    #[test]
    fn repel_skips_axis_when_pointer_aligned() {
        let config = FieldConfig::default();
        let mut pointer = PointerState::new(150.0);
        pointer.move_to(300.0, 250.0);
        let mut p = particle_at(300.0, 300.0);
        p.repel(&pointer, 800, 600, &config);
        assert_eq!(p.pos, [300.0, 302.0]);
    }
}
