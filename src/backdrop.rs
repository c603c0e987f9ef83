// Owns one particle field and the surface it draws on, for one page

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::surface::Surface;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    Uninitialized,
    Running,
}

pub struct Backdrop<S, R> {
    field: ParticleField<R>,
    surface: S,
    state: LoopState,
    frames: u64,
}

impl<S: Surface, R: Rng> Backdrop<S, R> {
    /// Returns `None` on viewports at or below the mobile breakpoint; there
    /// is no reduced mode, the backdrop simply doesn't exist there.
    pub fn mount(viewport: Viewport, surface: S, config: FieldConfig, rng: R) -> Option<Self> {
        if !config.allows_viewport(viewport.width) {
            return None;
        }
        let mut field = ParticleField::new(config, rng);
        field.initialize(viewport.width, viewport.height);
        Some(Backdrop {
            field,
            surface,
            state: LoopState::Uninitialized,
            frames: 0,
        })
    }

    pub fn render_frame(&mut self) -> Result<(), S::Error> {
        self.field.render(&mut self.surface)?;
        self.frames += 1;
        self.state = LoopState::Running;
        Ok(())
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.field.on_resize(viewport.width, viewport.height);
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.field.on_pointer_move(x, y);
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
