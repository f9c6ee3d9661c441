#![cfg(target_arch = "wasm32")]

use instant::Instant;
use knot_core::{PointerState, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("knot-web starting");

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
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Size the backing store once; the viewport does not track window resize.
    dom::sync_canvas_backing_size(&canvas);

    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let scene = Scene::build(aspect, &mut rand::thread_rng())?;

    let scene = Rc::new(RefCell::new(scene));
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    events::wire_pointer_handlers(&canvas, scene.clone(), pointer.clone());

    let gpu = frame::init_gpu(&canvas, &scene.borrow()).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        pointer,
        gpu,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
