// Drawing primitives the backdrop needs, implemented for the 2D canvas context

use crate::color::Color;
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    type Error;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    fn fill_circle(
        &mut self,
        center: [f64; 2],
        radius: f64,
        color: Color,
    ) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        color: Color,
        line_width: f64,
    ) -> Result<(), Self::Error>;
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) -> Result<(), JsValue> {
        self.set_fill_style_str(&color.to_css());
        self.begin_path();
        self.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        color: Color,
        line_width: f64,
    ) -> Result<(), JsValue> {
        self.set_stroke_style_str(&color.to_css());
        self.set_line_width(line_width);
        self.begin_path();
        self.move_to(from[0], from[1]);
        self.line_to(to[0], to[1]);
        self.stroke();
        Ok(())
    }
}
