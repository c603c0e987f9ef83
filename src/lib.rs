mod utils;

pub mod backdrop;
pub mod color;
pub mod config;
mod dom;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod surface;

use wasm_bindgen::prelude::*;

pub use backdrop::{Backdrop, LoopState, Viewport};
pub use config::FieldConfig;
pub use field::ParticleField;
pub use surface::Surface;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub const DEFAULT_CANVAS_ID: &str = "particle-canvas";

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    start_on(DEFAULT_CANVAS_ID)
}

#[wasm_bindgen]
pub fn start_on(canvas_id: &str) -> Result<(), JsValue> {
    dom::start_on(canvas_id, FieldConfig::default())
}
