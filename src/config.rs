// Tunables for the backdrop. Defaults reproduce the landing page look.

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Canvas area (px²) per particle; count is floor(area / this).
    pub area_per_particle: f64,
    /// Each velocity component is drawn from [-max_speed, max_speed).
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub palette: [Color; 2],
    pub pointer_radius: f64,
    /// Distance a particle is pushed per axis per frame while near the pointer.
    pub repel_step: f64,
    /// Particles within radius * this of an edge are not pushed towards it.
    pub repel_edge_factor: f64,
    /// Connection threshold is (width / d) * (height / d), squared px.
    pub connection_divisor: f64,
    pub line_color: Color,
    pub line_width: f64,
    /// Viewports this wide or narrower get no backdrop at all.
    pub mobile_breakpoint: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            area_per_particle: 25000.0,
            max_speed: 0.5,
            min_radius: 1.0,
            max_radius: 4.0,
            palette: [Color::BLUE_MIST, Color::VIOLET_MIST],
            pointer_radius: 150.0,
            repel_step: 2.0,
            repel_edge_factor: 10.0,
            connection_divisor: 7.0,
            line_color: Color::VIOLET_HAZE,
            line_width: 1.0,
            mobile_breakpoint: 768,
        }
    }
}

impl FieldConfig {
    pub fn particle_count(&self, width: u32, height: u32) -> usize {
        let area = width as f64 * height as f64;
        (area / self.area_per_particle).floor() as usize
    }

    pub fn connection_threshold(&self, width: u32, height: u32) -> f64 {
        (width as f64 / self.connection_divisor) * (height as f64 / self.connection_divisor)
    }

    pub fn allows_viewport(&self, viewport_width: u32) -> bool {
        viewport_width > self.mobile_breakpoint
    }
}
