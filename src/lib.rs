#![cfg(target_arch = "wasm32")]
use crate::core::{Camera, CancelToken, FieldParams, ParticleField, SceneState};
use glam::Vec3;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("driftfield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ELEMENT_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // One generator drives both the initial layout and the per-frame jitter.
    let mut rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);
    let params = FieldParams::default();
    let field = ParticleField::generate(&params, &mut rng);
    log::info!(
        "[field] particles={} spread={} max_gray={}",
        field.len(),
        params.spread,
        params.max_gray
    );

    let camera = Camera {
        eye: Vec3::new(0.0, 0.0, constants::CAMERA_Z),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: canvas.width() as f32 / canvas.height().max(1) as f32,
        fovy_radians: constants::CAMERA_FOVY_DEG.to_radians(),
        znear: constants::CAMERA_ZNEAR,
        zfar: constants::CAMERA_ZFAR,
    };

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    events::wire_pointer_tracking(pointer.clone());
    events::wire_button_proximity(&document);

    // Initialize WebGPU; on failure the loop still runs, it just has nothing
    // to draw into.
    let gpu = frame::init_gpu(&canvas, &field).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: SceneState::default(),
        field,
        camera,
        rng,
        canvas: canvas.clone(),
        pointer,
        gpu,
        started: Instant::now(),
    }));

    // The loop runs for the lifetime of the page; the token is the hook for
    // shutting it down early.
    let cancel = CancelToken::new();
    frame::start_loop(frame_ctx, cancel);

    Ok(())
}
