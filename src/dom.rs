// Browser wiring: canvas lookup, window listeners and the animation frame loop

use crate::backdrop::{Backdrop, Viewport};
use crate::config::FieldConfig;
use crate::utils::Timer;
use rand::rngs::ThreadRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

type CanvasBackdrop = Backdrop<CanvasRenderingContext2d, ThreadRng>;

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn viewport(window: &Window) -> Result<Viewport, JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or("innerWidth is not a number")?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or("innerHeight is not a number")?;
    Ok(Viewport {
        width: width as u32,
        height: height as u32,
    })
}

fn find_canvas(window: &Window, canvas_id: &str) -> Result<Option<HtmlCanvasElement>, JsValue> {
    let document = window.document().ok_or("no document on window")?;
    match document.get_element_by_id(canvas_id) {
        Some(element) => Ok(Some(element.dyn_into::<HtmlCanvasElement>()?)),
        None => Ok(None),
    }
}

fn fit_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width);
    canvas.set_height(viewport.height);
}

fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(f.as_ref().unchecked_ref::<js_sys::Function>())
}

/// Mounts the backdrop on `#canvas_id` and runs it until the page goes away.
pub fn start_on(canvas_id: &str, config: FieldConfig) -> Result<(), JsValue> {
    let window = window()?;
    let viewport = viewport(&window)?;
    if !config.allows_viewport(viewport.width) {
        let message = format!(
            "particle backdrop disabled at {}px and narrower",
            config.mobile_breakpoint
        );
        console::log_1(&message.into());
        return Ok(());
    }
    let canvas = match find_canvas(&window, canvas_id)? {
        Some(canvas) => canvas,
        None => {
            console::log_1(&format!("no #{} canvas, particle backdrop skipped", canvas_id).into());
            return Ok(());
        }
    };
    fit_canvas(&canvas, viewport);

    let context = canvas
        .get_context("2d")?
        .ok_or("failed to get 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()?;
    let backdrop = match Backdrop::mount(viewport, context, config, rand::thread_rng()) {
        Some(backdrop) => Rc::new(RefCell::new(backdrop)),
        None => return Ok(()),
    };

    listen_for_resize(&window, &canvas, &backdrop)?;
    listen_for_pointer(&window, &backdrop)?;
    run_frame_loop(&window, backdrop)
}

fn listen_for_resize(
    window: &Window,
    canvas: &HtmlCanvasElement,
    backdrop: &Rc<RefCell<CanvasBackdrop>>,
) -> Result<(), JsValue> {
    let backdrop = backdrop.clone();
    let canvas = canvas.clone();
    let resize_window = window.clone();
    let on_resize = Closure::wrap(Box::new(move || match viewport(&resize_window) {
        Ok(viewport) => {
            let _timer = Timer::new("ParticleField::on_resize");
            fit_canvas(&canvas, viewport);
            backdrop.borrow_mut().resize(viewport);
        }
        Err(err) => console::error_1(&err),
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

fn listen_for_pointer(
    window: &Window,
    backdrop: &Rc<RefCell<CanvasBackdrop>>,
) -> Result<(), JsValue> {
    let backdrop = backdrop.clone();
    let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
        backdrop
            .borrow_mut()
            .pointer_moved(event.client_x() as f64, event.client_y() as f64);
    }) as Box<dyn FnMut(MouseEvent)>);
    window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    Ok(())
}

// The closure re-requests itself every frame; nothing ever cancels it
fn run_frame_loop(window: &Window, backdrop: Rc<RefCell<CanvasBackdrop>>) -> Result<(), JsValue> {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    let frame_window = window.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(err) = backdrop.borrow_mut().render_frame() {
            console::error_1(&err);
        }
        if let Some(callback) = next_frame.borrow().as_ref() {
            if let Err(err) = request_animation_frame(&frame_window, callback) {
                console::error_1(&err);
            }
        }
    }) as Box<dyn FnMut()>));

    let started = match frame.borrow().as_ref() {
        Some(callback) => request_animation_frame(window, callback).map(|_| ()),
        None => Err("frame callback missing".into()),
    };
    started
}
