// Host-side tests for the particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/particles.rs"]
mod particles;

use particles::*;

#[test]
fn seeding_respects_count_and_ranges() {
    let field = ParticleField::new(800.0, 600.0, 50, 7);
    assert_eq!(field.particles.len(), 50);
    for p in &field.particles {
        assert!(p.x >= 0.0 && p.x < 800.0, "x out of range: {}", p.x);
        assert!(p.y >= 0.0 && p.y < 600.0, "y out of range: {}", p.y);
        assert!(
            p.speed >= 0.5 && p.speed < 2.5,
            "speed out of range: {}",
            p.speed
        );
    }
}

#[test]
fn same_seed_reproduces_the_field() {
    let a = ParticleField::new(800.0, 600.0, 50, 42);
    let b = ParticleField::new(800.0, 600.0, 50, 42);
    for (p, q) in a.particles.iter().zip(&b.particles) {
        assert_eq!(p.x, q.x);
        assert_eq!(p.y, q.y);
        assert_eq!(p.speed, q.speed);
    }
}

#[test]
fn distinct_seeds_give_distinct_fields() {
    let a = ParticleField::new(800.0, 600.0, 50, 1);
    let b = ParticleField::new(800.0, 600.0, 50, 2);
    assert!(a
        .particles
        .iter()
        .zip(&b.particles)
        .any(|(p, q)| p.x != q.x || p.y != q.y));
}

#[test]
fn tick_advances_y_and_leaves_x_and_speed_alone() {
    let mut field = ParticleField::new(800.0, 600.0, 10, 11);
    let before = field.particles.clone();
    field.tick();
    for (p, q) in before.iter().zip(&field.particles) {
        assert_eq!(p.x, q.x);
        assert_eq!(p.speed, q.speed);
        let expected = (p.y + p.speed) % 600.0;
        assert!((q.y - expected).abs() < 1e-4);
    }
}

#[test]
fn y_follows_modular_arithmetic_over_many_ticks() {
    let mut field = ParticleField::new(800.0, 600.0, 25, 3);
    let start = field.particles.clone();
    let n = 100u32;
    for _ in 0..n {
        field.tick();
    }
    for (p0, p) in start.iter().zip(&field.particles) {
        let expected = (p0.y + n as f32 * p0.speed) % 600.0;
        assert!(
            (p.y - expected).abs() < 1e-2,
            "expected {expected}, got {}",
            p.y
        );
    }
}

#[test]
fn unit_speed_field_returns_after_a_full_wrap() {
    // 1024x768 surface, 50 particles, speed pinned to 1.0: after 768 ticks
    // every particle has wrapped exactly once back to its start.
    let mut field = ParticleField::new(1024.0, 768.0, 50, 9);
    for p in &mut field.particles {
        p.speed = 1.0;
    }
    let start = field.particles.clone();
    for _ in 0..768 {
        field.tick();
    }
    for (p0, p) in start.iter().zip(&field.particles) {
        assert!((p.y - p0.y).abs() < 1e-3, "expected {}, got {}", p0.y, p.y);
    }
}
