//! Browser wiring: the pointer tracker and the hover reactor groups.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use web_sys as web;

use crate::constants::PREVIEW_PLACEHOLDER;
use crate::cursor::{self, CursorSink};
use crate::dom;
use crate::gsap;
use crate::hover::{self, BackdropWrite, PreviewCmd, PreviewFollower};
use crate::motion::{Glide, ScaleTo};

/// Cursor indicator elements plus the document-level hover marker.
pub struct DomCursor {
    pub dot: web::HtmlElement,
    pub outline: web::HtmlElement,
    pub body: web::HtmlElement,
}

impl CursorSink for DomCursor {
    fn place_dot(&mut self, x: f32, y: f32) {
        dom::set_style(&self.dot, "left", &format!("{x}px"));
        dom::set_style(&self.dot, "top", &format!("{y}px"));
    }

    fn glide_outline(&mut self, glide: Glide) {
        gsap::to(self.outline.as_ref(), &gsap::glide_vars(&glide));
    }

    fn scale_outline(&mut self, scale: ScaleTo) {
        gsap::to(self.outline.as_ref(), &gsap::scale_vars(&scale));
    }

    fn set_hover_marker(&mut self, hovering: bool) {
        let classes = self.body.class_list();
        if hovering {
            let _ = classes.add_1("hovering");
        } else {
            let _ = classes.remove_1("hovering");
        }
    }
}

#[derive(Clone)]
pub struct Wiring {
    pub window: web::Window,
    pub document: web::Document,
    pub cursor: Rc<RefCell<DomCursor>>,
    pub preview: Rc<RefCell<PreviewFollower>>,
    pub preview_panel: Option<web::HtmlElement>,
}

/// One window-level pointermove drives both the cursor rig and the preview
/// follower; the follower ignores moves while no work item is hovered.
pub fn wire_pointer_tracking(w: &Wiring) {
    let cursor = w.cursor.clone();
    let preview = w.preview.clone();
    let panel = w.preview_panel.clone();
    dom::add_pointer_listener(&w.window, "pointermove", move |ev| {
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        cursor::pointer_moved(&mut *cursor.borrow_mut(), x, y);
        if let Some(panel) = &panel {
            let mut cmds = Vec::new();
            preview.borrow_mut().pointer_moved(Vec2::new(x, y), &mut cmds);
            apply_preview_cmds(panel, &cmds);
        }
    });
}

pub fn wire_magnetic_group(w: &Wiring) {
    for el in dom::query_all(&w.document, ".magnetic") {
        let cursor_in = w.cursor.clone();
        dom::add_hover_listener(&el, "pointerenter", move || {
            cursor::magnetic_entered(&mut *cursor_in.borrow_mut());
        });
        let cursor_out = w.cursor.clone();
        dom::add_hover_listener(&el, "pointerleave", move || {
            cursor::magnetic_left(&mut *cursor_out.borrow_mut());
        });
    }
}

/// Project rows swap the shared ambient backdrop image while hovered. The
/// attribute is read at event time so markup edits take effect live.
pub fn wire_ambient_group(document: &web::Document) {
    let Some(backdrop) = dom::element_by_id(document, "ambient-background") else {
        return;
    };
    for item in dom::query_all(document, ".project-item") {
        let backdrop_in = backdrop.clone();
        let item_in = item.clone();
        dom::add_hover_listener(&item, "pointerenter", move || {
            if let Some(write) = hover::ambient_entered(dom::data_image(&item_in).as_deref()) {
                apply_backdrop_write(&backdrop_in, &write);
            }
        });
        let backdrop_out = backdrop.clone();
        dom::add_hover_listener(&item, "pointerleave", move || {
            apply_backdrop_write(&backdrop_out, &hover::ambient_left());
        });
    }
}

/// Work items show the floating preview panel while hovered.
pub fn wire_work_items(w: &Wiring) {
    let Some(panel) = w.preview_panel.clone() else {
        return;
    };
    for item in dom::query_all(&w.document, ".work-item") {
        let preview_in = w.preview.clone();
        let panel_in = panel.clone();
        let item_in = item.clone();
        dom::add_hover_listener(&item, "pointerenter", move || {
            let mut cmds = Vec::new();
            preview_in
                .borrow_mut()
                .enter(dom::data_image(&item_in).as_deref(), &mut cmds);
            apply_preview_cmds(&panel_in, &cmds);
        });
        let preview_out = w.preview.clone();
        let panel_out = panel.clone();
        dom::add_hover_listener(&item, "pointerleave", move || {
            let mut cmds = Vec::new();
            preview_out.borrow_mut().leave(&mut cmds);
            apply_preview_cmds(&panel_out, &cmds);
        });
    }
}

fn apply_backdrop_write(backdrop: &web::HtmlElement, write: &BackdropWrite) {
    match write {
        BackdropWrite::Image(url) => {
            dom::set_style(backdrop, "background-image", &format!("url({url})"));
        }
        BackdropWrite::Clear => dom::set_style(backdrop, "background-image", "none"),
    }
}

fn apply_preview_cmds(panel: &web::HtmlElement, cmds: &[PreviewCmd]) {
    for cmd in cmds {
        match cmd {
            PreviewCmd::Stage(url) => {
                dom::set_style(panel, "background-color", PREVIEW_PLACEHOLDER);
                dom::set_style(panel, "background-image", &format!("url({url})"));
            }
            PreviewCmd::FadeIn(fade) | PreviewCmd::FadeOut(fade) => {
                gsap::to(panel.as_ref(), &gsap::fade_vars(fade));
            }
            PreviewCmd::Glide(glide) => {
                gsap::to(panel.as_ref(), &gsap::glide_vars(glide));
            }
        }
    }
}
