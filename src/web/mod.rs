//! Browser bindings.
//!
//! The host page calls `setup` once with a canvas id and the setup snapshot,
//! then `tick` for every simulation step. Frames are drawn from a
//! `requestAnimationFrame` loop until `stop` is called or `setup` runs again.

pub mod renderer;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ipnviz_core::{LoopHandle, SceneConfig, SceneDriver};
use ipnviz_data::{SetupSnapshot, TickSnapshot};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use self::renderer::WebRenderer;

type FrameCallback = Closure<dyn FnMut(f64)>;

struct Viewer {
    driver: SceneDriver,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Viewer {
    fn render(&mut self, now: f64) -> Result<(), JsValue> {
        let renderer = WebRenderer::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        let list = self.driver.frame(now, renderer.viewport());
        renderer.render(&self.ctx, &list)
    }
}

/// A running `requestAnimationFrame` chain. The callback slot is shared with
/// the callback itself so it can reschedule.
struct FrameLoop {
    handle: LoopHandle,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    fn start(viewer: Rc<RefCell<Viewer>>) -> Result<Self, JsValue> {
        let handle = LoopHandle::new();
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let next = callback.clone();
        let running = handle.clone();
        let scheduled = pending.clone();
        *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            scheduled.set(None);
            if !running.is_running() {
                return;
            }
            if let Err(e) = viewer.borrow_mut().render(timestamp / 1000.0) {
                web_sys::console::error_1(&e);
            }
            // Schedule the next frame before returning so the chain never
            // depends on a tick arriving.
            if let Some(cb) = next.borrow().as_ref() {
                match request_animation_frame(cb) {
                    Ok(id) => scheduled.set(Some(id)),
                    Err(e) => web_sys::console::error_1(&e),
                }
            }
        }));

        if let Some(cb) = callback.borrow().as_ref() {
            pending.set(Some(request_animation_frame(cb)?));
        }
        Ok(Self {
            handle,
            pending,
            callback,
        })
    }

    fn stop(&self) {
        self.handle.stop();
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.callback.borrow_mut().take();
    }
}

struct Session {
    viewer: Rc<RefCell<Viewer>>,
    frames: FrameLoop,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

fn js_error(err: impl ToString) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn request_animation_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| js_error("no global window"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

fn find_canvas(canvas_id: &str) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| js_error("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| js_error(format!("no element with id {canvas_id}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| js_error(format!("element {canvas_id} is not a canvas")))?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| js_error("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| js_error("2d context has an unexpected type"))?;
    Ok((canvas, ctx))
}

/// Builds the scene from a setup snapshot and starts drawing into the canvas
/// with id `canvas_id`. Calling it again tears down the previous scene.
#[wasm_bindgen]
pub fn setup(canvas_id: &str, snapshot: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let setup = from_value::<SetupSnapshot>(snapshot).map_err(js_error)?;
    let (canvas, ctx) = find_canvas(canvas_id)?;
    stop();

    let viewer = Rc::new(RefCell::new(Viewer {
        driver: SceneDriver::setup(&setup, SceneConfig::default()),
        canvas,
        ctx,
    }));
    let frames = FrameLoop::start(viewer.clone())?;
    web_sys::console::log_1(&JsValue::from_str(&format!(
        "Scene set up: {} nodes, {} bodies",
        setup.nodes.len(),
        setup.bodies.len()
    )));

    SESSION.with(|session| *session.borrow_mut() = Some(Session { viewer, frames }));
    Ok(())
}

/// Applies one tick snapshot. Must follow `setup`.
#[wasm_bindgen]
pub fn tick(snapshot: JsValue) -> Result<(), JsValue> {
    let tick = from_value::<TickSnapshot>(snapshot).map_err(js_error)?;
    SESSION.with(|session| match session.borrow().as_ref() {
        Some(session) => {
            session.viewer.borrow_mut().driver.tick(&tick);
            Ok(())
        }
        None => Err(js_error("tick called before setup")),
    })
}

/// Camera position in simulation units, as `{x, y, z}`.
#[wasm_bindgen(js_name = getCameraPosition)]
pub fn get_camera_position() -> Result<JsValue, JsValue> {
    SESSION.with(|session| match session.borrow().as_ref() {
        Some(session) => to_value(&session.viewer.borrow().driver.camera_position()).map_err(js_error),
        None => Err(js_error("getCameraPosition called before setup")),
    })
}

/// Stops the frame loop. The scene stays as last drawn.
#[wasm_bindgen]
pub fn stop() {
    SESSION.with(|session| {
        if let Some(session) = session.borrow_mut().take() {
            session.frames.stop();
        }
    });
}

/// Orbits the camera by whole steps, for host-side controls.
#[wasm_bindgen(js_name = orbitCamera)]
pub fn orbit_camera(azimuth_steps: f32, polar_steps: f32) {
    SESSION.with(|session| {
        if let Some(session) = session.borrow().as_ref() {
            session.viewer.borrow_mut().driver.camera_mut().orbit(azimuth_steps, polar_steps);
        }
    });
}

#[wasm_bindgen(js_name = zoomCamera)]
pub fn zoom_camera(steps: i32) {
    SESSION.with(|session| {
        if let Some(session) = session.borrow().as_ref() {
            session.viewer.borrow_mut().driver.camera_mut().zoom(steps);
        }
    });
}

/// Scene counters, serialized as an object.
#[wasm_bindgen(js_name = getStats)]
pub fn get_stats() -> Result<JsValue, JsValue> {
    SESSION.with(|session| match session.borrow().as_ref() {
        Some(session) => to_value(&session.viewer.borrow().driver.stats()).map_err(js_error),
        None => Err(js_error("getStats called before setup")),
    })
}
