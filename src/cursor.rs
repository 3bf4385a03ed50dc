//! Custom cursor: an immediate dot and a trailing outline.

use crate::constants::{OUTLINE_GLIDE_SECS, OUTLINE_HOVER_SCALE, OUTLINE_REST_SCALE};
use crate::motion::{Ease, Glide, ScaleTo};

/// Where cursor updates land. The browser wiring points these at the two
/// indicator elements and the document root; tests record the calls.
pub trait CursorSink {
    /// Synchronous position write for the immediate indicator.
    fn place_dot(&mut self, x: f32, y: f32);
    /// Tween request for the trailing indicator's position.
    fn glide_outline(&mut self, glide: Glide);
    /// Tween request for the trailing indicator's scale.
    fn scale_outline(&mut self, scale: ScaleTo);
    /// Document-level marker consumed by the stylesheet.
    fn set_hover_marker(&mut self, hovering: bool);
}

/// The dot lands on the pointer first; the outline is then asked to catch
/// up over a short glide.
pub fn pointer_moved(sink: &mut impl CursorSink, x: f32, y: f32) {
    sink.place_dot(x, y);
    sink.glide_outline(Glide {
        x,
        y,
        duration: OUTLINE_GLIDE_SECS,
        ease: Ease::Power2Out,
    });
}

pub fn magnetic_entered(sink: &mut impl CursorSink) {
    sink.set_hover_marker(true);
    sink.scale_outline(ScaleTo {
        scale: OUTLINE_HOVER_SCALE,
    });
}

pub fn magnetic_left(sink: &mut impl CursorSink) {
    sink.set_hover_marker(false);
    sink.scale_outline(ScaleTo {
        scale: OUTLINE_REST_SCALE,
    });
}
