// The particle field: owns the particles, canvas size, pointer and random source.
// Everything here is target independent; drawing goes through `Surface`.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::surface::Surface;
use rand::Rng;

pub struct ParticleField<R> {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
    pointer: PointerState,
    config: FieldConfig,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    /// An empty 0x0 field. Call `initialize` before rendering.
    pub fn new(config: FieldConfig, rng: R) -> Self {
        let pointer = PointerState::new(config.pointer_radius);
        ParticleField {
            width: 0,
            height: 0,
            particles: Vec::new(),
            pointer,
            config,
            rng,
        }
    }

    pub fn initialize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        let num_particles = self.config.particle_count(width, height);
        let mut particles = Vec::with_capacity(num_particles);
        for _ in 0..num_particles {
            particles.push(Particle::random(&mut self.rng, width, height, &self.config));
        }
        self.particles = particles;
    }

    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.update(&self.pointer, self.width, self.height, &self.config);
        }
    }

    // O(n²); the particle count is bounded by canvas area so this stays cheap
    pub fn connect<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let threshold = self.config.connection_threshold(self.width, self.height);
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance_sq = vecmath::vec2_square_len(vecmath::vec2_sub(a.pos, b.pos));
                if distance_sq < threshold {
                    let (color, width) = (self.config.line_color, self.config.line_width);
                    surface.stroke_line(a.pos, b.pos, color, width)?;
                }
            }
        }
        Ok(())
    }

    /// Clears the surface, steps and draws every particle, then draws connections.
    pub fn render<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear(self.width as f64, self.height as f64)?;
        for particle in &mut self.particles {
            particle.update(&self.pointer, self.width, self.height, &self.config);
            surface.fill_circle(particle.pos, particle.radius, particle.color)?;
        }
        self.connect(surface)
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.initialize(width, height);
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
