// Host-side tests for the shared-target hover reactors.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/motion.rs"]
mod motion;
#[path = "../src/hover.rs"]
mod hover;

use glam::Vec2;
use hover::*;
use motion::Ease;

#[test]
fn ambient_enter_swaps_image_and_leave_clears() {
    assert_eq!(
        ambient_entered(Some("a.jpg")),
        Some(BackdropWrite::Image("a.jpg".into()))
    );
    assert_eq!(ambient_left(), BackdropWrite::Clear);
}

#[test]
fn ambient_enter_without_reference_is_a_no_op() {
    assert_eq!(ambient_entered(None), None);
}

#[test]
fn preview_enter_stages_then_fades_in() {
    let mut preview = PreviewFollower::new(Vec2::new(1024.0, 768.0));
    let mut cmds = Vec::new();
    preview.enter(Some("a.jpg"), &mut cmds);
    assert_eq!(cmds.len(), 2);
    assert_eq!(cmds[0], PreviewCmd::Stage("a.jpg".into()));
    match &cmds[1] {
        PreviewCmd::FadeIn(f) => {
            assert_eq!(f.opacity, 1.0);
            assert_eq!(f.scale, 1.0);
            assert!((f.duration - 0.3).abs() < 1e-6);
        }
        other => panic!("expected a fade-in, got {other:?}"),
    }
    assert!(preview.is_hovering());
}

#[test]
fn preview_leave_fades_out_and_keeps_the_stale_image() {
    let mut preview = PreviewFollower::new(Vec2::new(1024.0, 768.0));
    let mut cmds = Vec::new();
    preview.enter(Some("a.jpg"), &mut cmds);
    cmds.clear();
    preview.leave(&mut cmds);
    assert_eq!(cmds.len(), 1);
    match &cmds[0] {
        PreviewCmd::FadeOut(f) => {
            assert_eq!(f.opacity, 0.0);
            assert!((f.scale - 0.8).abs() < 1e-6);
        }
        other => panic!("expected a fade-out, got {other:?}"),
    }
    assert_eq!(preview.staged_image(), Some("a.jpg"));
    assert!(!preview.is_hovering());
}

#[test]
fn re_enter_restages_only_when_the_item_names_an_image() {
    let mut preview = PreviewFollower::new(Vec2::new(1024.0, 768.0));
    let mut cmds = Vec::new();
    preview.enter(Some("a.jpg"), &mut cmds);
    cmds.clear();
    preview.leave(&mut cmds);

    // A different item restages on enter, never on leave.
    cmds.clear();
    preview.enter(Some("b.jpg"), &mut cmds);
    assert_eq!(cmds[0], PreviewCmd::Stage("b.jpg".into()));
    assert_eq!(preview.staged_image(), Some("b.jpg"));

    // An item without a reference still shows the panel over whatever is
    // already staged.
    cmds.clear();
    preview.leave(&mut cmds);
    cmds.clear();
    preview.enter(None, &mut cmds);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(cmds[0], PreviewCmd::FadeIn(_)));
    assert_eq!(preview.staged_image(), Some("b.jpg"));
}

#[test]
fn preview_follows_the_pointer_only_while_hovering() {
    let mut preview = PreviewFollower::new(Vec2::new(1024.0, 768.0));
    let mut cmds = Vec::new();
    preview.pointer_moved(Vec2::new(500.0, 400.0), &mut cmds);
    assert!(cmds.is_empty());

    preview.enter(Some("a.jpg"), &mut cmds);
    cmds.clear();
    preview.pointer_moved(Vec2::new(500.0, 400.0), &mut cmds);
    assert_eq!(cmds.len(), 1);
    match &cmds[0] {
        PreviewCmd::Glide(g) => {
            // Recentered against the viewport midpoint, nudged 20px off the
            // cursor: (500 - 512 + 20, 400 - 384 + 20).
            assert_eq!(g.x, 8.0);
            assert_eq!(g.y, 36.0);
            assert!((g.duration - 0.5).abs() < 1e-6);
            assert_eq!(g.ease, Ease::Power2Out);
        }
        other => panic!("expected a glide, got {other:?}"),
    }

    cmds.clear();
    preview.leave(&mut cmds);
    cmds.clear();
    preview.pointer_moved(Vec2::new(10.0, 10.0), &mut cmds);
    assert!(cmds.is_empty());
}
