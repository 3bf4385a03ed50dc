//! Reactors for the element groups sharing one mutable target: the ambient
//! backdrop and the floating work-item preview panel.
//!
//! Overlapping enters on items sharing a target resolve by last write; the
//! writes are plain property assignments on a single thread, so no
//! reference counting is kept.

use glam::Vec2;

use crate::constants::{
    PREVIEW_FADE_SECS, PREVIEW_GLIDE_SECS, PREVIEW_HIDDEN_SCALE, PREVIEW_POINTER_OFFSET,
};
use crate::motion::{Ease, Fade, Glide};

/// Write against the shared ambient backdrop element.
#[derive(Clone, Debug, PartialEq)]
pub enum BackdropWrite {
    Image(String),
    Clear,
}

/// Entering an item swaps the backdrop to the item's image, when it names
/// one. Items without a reference leave the backdrop untouched.
pub fn ambient_entered(image: Option<&str>) -> Option<BackdropWrite> {
    image.map(|url| BackdropWrite::Image(url.to_owned()))
}

/// Leaving always clears, exposing the solid backdrop underneath.
pub fn ambient_left() -> BackdropWrite {
    BackdropWrite::Clear
}

/// Request against the shared preview panel.
#[derive(Clone, Debug, PartialEq)]
pub enum PreviewCmd {
    /// Stage the item's image over the placeholder fill.
    Stage(String),
    FadeIn(Fade),
    FadeOut(Fade),
    Glide(Glide),
}

/// Hover state and pointer feed for the floating preview panel.
pub struct PreviewFollower {
    viewport: Vec2,
    hovering: bool,
    staged_image: Option<String>,
}

impl PreviewFollower {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            hovering: false,
            staged_image: None,
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn staged_image(&self) -> Option<&str> {
        self.staged_image.as_deref()
    }

    /// Enter: stage the item's image when it names one, then fade the panel
    /// in. A missing reference skips the restage but still shows the panel.
    pub fn enter(&mut self, image: Option<&str>, out: &mut Vec<PreviewCmd>) {
        self.hovering = true;
        if let Some(url) = image {
            self.staged_image = Some(url.to_owned());
            out.push(PreviewCmd::Stage(url.to_owned()));
        }
        out.push(PreviewCmd::FadeIn(Fade {
            opacity: 1.0,
            scale: 1.0,
            duration: PREVIEW_FADE_SECS,
        }));
    }

    /// Leave: fade the panel out. The staged image stays until the next
    /// enter restages it.
    pub fn leave(&mut self, out: &mut Vec<PreviewCmd>) {
        self.hovering = false;
        out.push(PreviewCmd::FadeOut(Fade {
            opacity: 0.0,
            scale: PREVIEW_HIDDEN_SCALE,
            duration: PREVIEW_FADE_SECS,
        }));
    }

    /// While an item is hovered the panel drifts toward the pointer. The
    /// target recenters the panel's transform origin just off the cursor.
    pub fn pointer_moved(&mut self, pos: Vec2, out: &mut Vec<PreviewCmd>) {
        if !self.hovering {
            return;
        }
        let target = pos - self.viewport * 0.5 + Vec2::splat(PREVIEW_POINTER_OFFSET);
        out.push(PreviewCmd::Glide(Glide {
            x: target.x,
            y: target.y,
            duration: PREVIEW_GLIDE_SECS,
            ease: Ease::Power2Out,
        }));
    }
}
