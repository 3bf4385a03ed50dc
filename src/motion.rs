//! Typed requests handed to the page's tween engine.
//!
//! Nothing in this module interpolates anything. Each type describes a
//! property tween for the external engine to perform; repeated requests
//! against the same target and property supersede each other (the engine's
//! last-writer-wins contract), so callers never cancel or queue.

/// Easing curve vocabulary used by this site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    /// Engine default; no `ease` key is sent.
    #[default]
    Standard,
    Power2Out,
    Power3Out,
    Power4Out,
}

impl Ease {
    /// Name understood by the tween engine.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Ease::Standard => None,
            Ease::Power2Out => Some("power2.out"),
            Ease::Power3Out => Some("power3.out"),
            Ease::Power4Out => Some("power4.out"),
        }
    }
}

/// Move a target's x/y toward a point over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glide {
    pub x: f32,
    pub y: f32,
    pub duration: f32,
    pub ease: Ease,
}

/// One-shot scale tween with the engine's default duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTo {
    pub scale: f32,
}

/// Opacity + scale tween used to show and hide the preview panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    pub opacity: f32,
    pub scale: f32,
    pub duration: f32,
}

/// Scroll gating for a reveal, handed to the scroll-trigger capability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerVars {
    /// Viewport offset at which the trigger fires, e.g. "top 80%".
    pub start: &'static str,
    /// Playback policy on enter/leave/re-enter/leave-back.
    pub toggle_actions: Option<&'static str>,
    /// When set, progress is a pure function of scroll position.
    pub scrub: Option<f32>,
}

/// A from-state reveal: the element animates from these values to rest.
/// Unset fields are omitted from the request entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealVars {
    pub from_x: Option<f32>,
    pub from_y: Option<f32>,
    pub from_opacity: Option<f32>,
    pub duration: Option<f32>,
    pub delay: Option<f32>,
    pub stagger: Option<f32>,
    pub ease: Ease,
    pub trigger: Option<TriggerVars>,
}

/// Easing curve the smooth-scroll engine is configured with.
pub fn scroll_ease(t: f64) -> f64 {
    (1.001 - 2.0_f64.powf(-10.0 * t)).min(1.0)
}
