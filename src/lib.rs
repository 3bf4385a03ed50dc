#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod choreo;
mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod gsap;
mod hover;
mod lenis;
mod motion;
mod particles;
mod reveal;

use constants::RAIN_PARTICLE_COUNT;
use hover::PreviewFollower;
use particles::ParticleField;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Smooth scrolling runs for the page's whole lifetime; the frame loop
    // below advances it.
    let smoother = lenis::build();

    // The cursor indicators are structural; refuse to start without them.
    let dot = dom::query_el(&document, ".cursor-dot")
        .ok_or_else(|| anyhow::anyhow!("missing .cursor-dot"))?;
    let outline = dom::query_el(&document, ".cursor-outline")
        .ok_or_else(|| anyhow::anyhow!("missing .cursor-outline"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let cursor_rig = Rc::new(RefCell::new(events::DomCursor { dot, outline, body }));

    // Viewport is sampled once; the preview offset math and the rain canvas
    // both keep startup dimensions for the page's lifetime.
    let (vw, vh) = dom::viewport_size(&window);
    let preview = Rc::new(RefCell::new(PreviewFollower::new(Vec2::new(vw, vh))));
    let preview_panel = dom::element_by_id(&document, "work-preview");

    let wiring = events::Wiring {
        window: window.clone(),
        document: document.clone(),
        cursor: cursor_rig,
        preview,
        preview_panel,
    };
    events::wire_pointer_tracking(&wiring);
    events::wire_magnetic_group(&wiring);
    events::wire_ambient_group(&document);
    events::wire_work_items(&wiring);

    reveal::wire_reveals(&document);

    let rain = build_rain(&document, vw, vh);
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext { smoother, rain })));
    Ok(())
}

/// Hero rain canvas. A missing canvas or unavailable 2D context leaves the
/// effect out while the rest of the page keeps running.
fn build_rain(document: &web::Document, vw: f32, vh: f32) -> Option<frame::RainLayer> {
    let canvas = document
        .get_element_by_id("hero-canvas")?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    canvas.set_width(vw as u32);
    canvas.set_height(vh as u32);
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let field = ParticleField::new(vw, vh, RAIN_PARTICLE_COUNT, seed);
    Some(frame::RainLayer { field, ctx })
}
