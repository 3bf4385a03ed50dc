//! Bindings to the page's tween engine. The vendor script is loaded by the
//! host page; this module builds vars objects from the typed requests in
//! [`crate::motion`] and issues them.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::motion::{Fade, Glide, RevealVars, ScaleTo};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &JsValue);

    #[wasm_bindgen(js_namespace = gsap, js_name = from)]
    fn gsap_from(targets: &JsValue, vars: &JsValue);

    #[wasm_bindgen(js_namespace = gsap, js_name = registerPlugin)]
    fn gsap_register_plugin(plugin: &JsValue);
}

/// Tween the target's properties toward `vars`.
pub fn to(target: &JsValue, vars: &Object) {
    gsap_to(target, vars);
}

/// Animate the target from `vars` back to its resting state.
pub fn from(target: &JsValue, vars: &Object) {
    gsap_from(target, vars);
}

/// Register the scroll-trigger plugin from the page global. A missing
/// global leaves scroll-gated reveals inert and everything else running.
pub fn register_scroll_trigger() -> bool {
    match Reflect::get(&js_sys::global(), &JsValue::from_str("ScrollTrigger")) {
        Ok(plugin) if !plugin.is_undefined() && !plugin.is_null() => {
            gsap_register_plugin(&plugin);
            true
        }
        _ => {
            log::warn!("ScrollTrigger global missing; scroll reveals disabled");
            false
        }
    }
}

fn set_f32(obj: &Object, key: &str, value: f32) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), &JsValue::from_f64(value as f64));
}

fn set_str(obj: &Object, key: &str, value: &str) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), &JsValue::from_str(value));
}

pub fn glide_vars(glide: &Glide) -> Object {
    let vars = Object::new();
    set_f32(&vars, "x", glide.x);
    set_f32(&vars, "y", glide.y);
    set_f32(&vars, "duration", glide.duration);
    if let Some(name) = glide.ease.name() {
        set_str(&vars, "ease", name);
    }
    vars
}

pub fn scale_vars(scale: &ScaleTo) -> Object {
    let vars = Object::new();
    set_f32(&vars, "scale", scale.scale);
    vars
}

pub fn fade_vars(fade: &Fade) -> Object {
    let vars = Object::new();
    set_f32(&vars, "opacity", fade.opacity);
    set_f32(&vars, "scale", fade.scale);
    set_f32(&vars, "duration", fade.duration);
    vars
}

/// Vars for a from-state reveal. `trigger_target` (an element or selector)
/// becomes the scroll trigger when the reveal is scroll-gated.
pub fn reveal_vars(reveal: &RevealVars, trigger_target: Option<&JsValue>) -> Object {
    let vars = Object::new();
    if let Some(x) = reveal.from_x {
        set_f32(&vars, "x", x);
    }
    if let Some(y) = reveal.from_y {
        set_f32(&vars, "y", y);
    }
    if let Some(opacity) = reveal.from_opacity {
        set_f32(&vars, "opacity", opacity);
    }
    if let Some(duration) = reveal.duration {
        set_f32(&vars, "duration", duration);
    }
    if let Some(delay) = reveal.delay {
        set_f32(&vars, "delay", delay);
    }
    if let Some(stagger) = reveal.stagger {
        set_f32(&vars, "stagger", stagger);
    }
    if let Some(name) = reveal.ease.name() {
        set_str(&vars, "ease", name);
    }
    if let (Some(trigger), Some(target)) = (&reveal.trigger, trigger_target) {
        let st = Object::new();
        let _ = Reflect::set(&st, &JsValue::from_str("trigger"), target);
        set_str(&st, "start", trigger.start);
        if let Some(actions) = trigger.toggle_actions {
            set_str(&st, "toggleActions", actions);
        }
        if let Some(scrub) = trigger.scrub {
            set_f32(&st, "scrub", scrub);
        }
        let _ = Reflect::set(&vars, &JsValue::from_str("scrollTrigger"), &st);
    }
    vars
}
