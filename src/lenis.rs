//! Binding to the page's scroll-smoothing engine. The engine owns the
//! virtual scroll position; this crate only advances it once per frame.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::constants::SCROLL_DURATION_SECS;
use crate::motion::scroll_ease;

#[wasm_bindgen]
extern "C" {
    pub type Lenis;

    #[wasm_bindgen(constructor)]
    fn new(options: &JsValue) -> Lenis;

    /// Advance the smoother; must be called every animation frame or
    /// smoothing stalls.
    #[wasm_bindgen(method)]
    pub fn raf(this: &Lenis, time: f64);
}

/// Build the smoother with the site's tuning: 1.2 s glide, vertical wheel
/// and gesture orientation, smoothed wheel input, exponential ease-out.
pub fn build() -> Lenis {
    let options = Object::new();
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("duration"),
        &JsValue::from_f64(SCROLL_DURATION_SECS),
    );
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("orientation"),
        &JsValue::from_str("vertical"),
    );
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("gestureOrientation"),
        &JsValue::from_str("vertical"),
    );
    let _ = Reflect::set(&options, &JsValue::from_str("smoothWheel"), &JsValue::TRUE);
    let easing = Closure::wrap(Box::new(scroll_ease) as Box<dyn Fn(f64) -> f64>);
    let _ = Reflect::set(&options, &JsValue::from_str("easing"), easing.as_ref());
    easing.forget();
    Lenis::new(&options)
}
