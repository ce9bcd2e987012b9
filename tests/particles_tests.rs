// Host-side tests for the particle field.

use invite_core::constants::*;
use invite_core::ParticleField;

fn assert_in_bounds(field: &ParticleField, w: f32, h: f32) {
    for (i, p) in field.particles().iter().enumerate() {
        assert!(
            p.pos.x >= 0.0 && p.pos.x < w && p.pos.y >= 0.0 && p.pos.y < h,
            "particle {i} out of bounds: {:?}",
            p.pos
        );
    }
}

#[test]
fn new_field_spawns_particles_within_ranges() {
    let field = ParticleField::new(PARTICLE_COUNT, 800.0, 600.0, 7);
    assert_eq!(field.particles().len(), 100);
    assert_in_bounds(&field, 800.0, 600.0);
    for p in field.particles() {
        assert!(p.vel.x >= -0.25 && p.vel.x < 0.25);
        assert!(p.vel.y >= -0.25 && p.vel.y < 0.25);
        assert!(p.size >= 0.5 && p.size <= 2.5);
        assert!(p.alpha >= 0.1 && p.alpha <= 0.6);
    }
}

#[test]
fn ticks_keep_particles_inside_viewport() {
    let mut field = ParticleField::new(PARTICLE_COUNT, 320.0, 240.0, 11);
    for _ in 0..5_000 {
        field.tick();
    }
    assert_in_bounds(&field, 320.0, 240.0);
}

#[test]
fn tick_moves_particles_by_their_velocity() {
    let mut field = ParticleField::new(20, 10_000.0, 10_000.0, 3);
    let before = field.particles().to_vec();
    field.tick();
    for (a, b) in before.iter().zip(field.particles()) {
        // Far from the edges nothing wraps in a single step.
        if a.pos.x > 1.0 && a.pos.x < 9_999.0 && a.pos.y > 1.0 && a.pos.y < 9_999.0 {
            assert!((b.pos - (a.pos + a.vel)).length() < 1e-3);
        }
        assert_eq!(a.vel, b.vel);
    }
}

#[test]
fn resize_keeps_state_and_only_changes_bounds() {
    let mut field = ParticleField::new(PARTICLE_COUNT, 1024.0, 768.0, 5);
    let before = field.particles().to_vec();
    field.on_resize(200.0, 100.0);
    assert_eq!(field.bounds(), glam::Vec2::new(200.0, 100.0));
    for (a, b) in before.iter().zip(field.particles()) {
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.vel, b.vel);
        assert_eq!(a.size, b.size);
        assert_eq!(a.alpha, b.alpha);
    }
    field.tick();
    assert_in_bounds(&field, 200.0, 100.0);
    for (a, b) in before.iter().zip(field.particles()) {
        assert_eq!(a.vel, b.vel, "relocation must not touch velocity");
    }
}

#[test]
fn zero_sized_viewport_does_not_panic() {
    let mut field = ParticleField::new(10, 0.0, 0.0, 1);
    field.tick();
    assert!(field.particles().iter().all(|p| p.pos.x == 0.0 && p.pos.y == 0.0));
}

#[test]
fn same_seed_gives_same_field() {
    let a = ParticleField::new(PARTICLE_COUNT, 640.0, 480.0, 99);
    let b = ParticleField::new(PARTICLE_COUNT, 640.0, 480.0, 99);
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.vel, pb.vel);
    }
}
