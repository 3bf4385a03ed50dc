//! Per-frame driver: one requestAnimationFrame loop advancing the scroll
//! smoother and repainting the particle canvas.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{RAIN_FILL, RAIN_MARK_HEIGHT, RAIN_MARK_WIDTH};
use crate::lenis::Lenis;
use crate::particles::ParticleField;

/// Canvas-backed rain layer. Built only when the canvas and its 2D context
/// are available; otherwise the effect is absent and nothing else notices.
pub struct RainLayer {
    pub field: ParticleField,
    pub ctx: web::CanvasRenderingContext2d,
}

impl RainLayer {
    /// Clear, draw every particle at its current position, then advance the
    /// field.
    pub fn paint(&mut self) {
        let w = self.field.width() as f64;
        let h = self.field.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style_str(RAIN_FILL);
        for p in &self.field.particles {
            self.ctx
                .fill_rect(p.x as f64, p.y as f64, RAIN_MARK_WIDTH, RAIN_MARK_HEIGHT);
        }
        self.field.tick();
    }
}

pub struct FrameContext {
    pub smoother: Lenis,
    pub rain: Option<RainLayer>,
}

impl FrameContext {
    pub fn frame(&mut self, time_ms: f64) {
        self.smoother.raf(time_ms);
        if let Some(rain) = &mut self.rain {
            rain.paint();
        }
    }
}

/// Self-rescheduling animation-frame loop; runs until the page unloads.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |time: f64| {
        frame_ctx_tick.borrow_mut().frame(time);
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
