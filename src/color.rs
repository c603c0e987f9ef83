// Simple color struct, RGB bytes plus a CSS-style alpha in [0, 1]

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Color {
    pub const BLUE_MIST: Color = Color::rgba(59, 130, 246, 0.3);
    pub const VIOLET_MIST: Color = Color::rgba(139, 92, 246, 0.3);
    pub const VIOLET_HAZE: Color = Color::rgba(139, 92, 246, 0.03);

    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Color {
        Color { r, g, b, alpha }
    }

    /// Formats the color the way canvas `fillStyle`/`strokeStyle` expect.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}
