//! Scroll-entrance choreography: declarative configurations handed to the
//! scroll-trigger capability once at startup. No playback state lives here.

use crate::motion::{Ease, RevealVars, TriggerVars};

/// Hero headline lines rise in once, staggered, shortly after load. Not
/// scroll-gated.
pub fn hero_entrance() -> RevealVars {
    RevealVars {
        from_y: Some(100.0),
        from_opacity: Some(0.0),
        duration: Some(1.5),
        stagger: Some(0.2),
        delay: Some(0.5),
        ease: Ease::Power4Out,
        ..RevealVars::default()
    }
}

/// List rows slide in from the left as they cross 80% of the viewport,
/// staggered by index, and reverse back out when scrolled above the
/// threshold.
pub fn list_item_entrance(index: usize) -> RevealVars {
    RevealVars {
        from_x: Some(-50.0),
        from_opacity: Some(0.0),
        duration: Some(0.8),
        delay: Some(index as f32 * 0.1),
        ease: Ease::Power3Out,
        trigger: Some(TriggerVars {
            start: "top 80%",
            toggle_actions: Some("play none none reverse"),
            scrub: None,
        }),
        ..RevealVars::default()
    }
}

/// The about text is scrubbed: offset and opacity follow the enclosing
/// section's scroll progress instead of a timed tween.
pub fn parallax_drift() -> RevealVars {
    RevealVars {
        from_y: Some(100.0),
        from_opacity: Some(0.5),
        trigger: Some(TriggerVars {
            start: "top 80%",
            toggle_actions: None,
            scrub: Some(1.0),
        }),
        ..RevealVars::default()
    }
}
