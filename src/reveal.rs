//! One-time scroll-entrance wiring. All temporal and progress logic is
//! delegated to the scroll-trigger capability; this module only hands it
//! per-group configuration.

use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::JsValue;
use web_sys as web;

use crate::choreo;
use crate::dom;
use crate::gsap;

static WIRED: AtomicBool = AtomicBool::new(false);

/// Configure every reveal exactly once. A second call is a logged no-op so
/// triggers cannot be registered twice for the same elements.
pub fn wire_reveals(document: &web::Document) {
    if WIRED.swap(true, Ordering::SeqCst) {
        log::warn!("reveal triggers already wired; ignoring");
        return;
    }
    let scroll_ok = gsap::register_scroll_trigger();

    // Hero headline: one staggered tween across the whole collection,
    // fired unconditionally at startup.
    if let Ok(lines) = document.query_selector_all(".reveal-text") {
        if lines.length() > 0 {
            gsap::from(
                lines.as_ref(),
                &gsap::reveal_vars(&choreo::hero_entrance(), None),
            );
        }
    }
    if !scroll_ok {
        return;
    }

    // List rows enter individually, staggered by index.
    for (index, item) in dom::query_all(document, ".reveal-item")
        .into_iter()
        .enumerate()
    {
        let target: &JsValue = item.as_ref();
        gsap::from(
            target,
            &gsap::reveal_vars(&choreo::list_item_entrance(index), Some(target)),
        );
    }

    // About text scrubs against its enclosing section.
    gsap::from(
        &JsValue::from_str(".about-text"),
        &gsap::reveal_vars(
            &choreo::parallax_drift(),
            Some(&JsValue::from_str(".about-section")),
        ),
    );
}
