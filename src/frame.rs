use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{Camera, CancelToken, ParticleField, SceneState};
use crate::input::PointerState;
use crate::render;

/// Everything the per-frame callback touches, owned in one place.
pub struct FrameContext<'a> {
    pub scene: SceneState,
    pub field: ParticleField,
    pub camera: Camera,
    pub rng: StdRng,

    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,

    pub gpu: Option<render::GpuState<'a>>,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed_sec = self.started.elapsed().as_secs_f32();

        let pointer = *self.pointer.borrow();
        self.scene.advance(
            &mut self.field,
            [pointer.nx, pointer.ny],
            elapsed_sec,
            &mut self.rng,
        );

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.camera.aspect = w as f32 / h.max(1) as f32;

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&self.camera, &self.scene, &mut self.field) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, field).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive the frame loop from requestAnimationFrame until `cancel` fires.
/// A cancelled tick does not re-schedule, which drops the closure chain.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>, cancel: CancelToken) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancel.is_cancelled() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
