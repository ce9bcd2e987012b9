//! Ambient "spores" drifting behind the page.
//!
//! The field owns a fixed set of particles and moves each one by its own
//! velocity once per displayed frame. Anything that drifts off the viewport
//! is dropped back in at a random coordinate on the axis it left, so the
//! density stays roughly uniform without ever respawning particles.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub alpha: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(count: usize, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bounds = Vec2::new(width.max(0.0), height.max(0.0));
        let particles = (0..count)
            .map(|_| spawn_particle(&mut rng, bounds))
            .collect::<Vec<_>>();
        Self {
            particles,
            bounds,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Change the wrap-around bounds. Particle state is left untouched; any
    /// particle now outside is relocated on its next tick.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
    }

    pub fn tick(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.pos += p.vel;
            if !(0.0..bounds.x).contains(&p.pos.x) {
                p.pos.x = random_coord(&mut self.rng, bounds.x);
            }
            if !(0.0..bounds.y).contains(&p.pos.y) {
                p.pos.y = random_coord(&mut self.rng, bounds.y);
            }
        }
    }
}

fn spawn_particle(rng: &mut StdRng, bounds: Vec2) -> Particle {
    let half = PARTICLE_SPEED_SPAN * 0.5;
    Particle {
        pos: Vec2::new(random_coord(rng, bounds.x), random_coord(rng, bounds.y)),
        vel: Vec2::new(rng.gen_range(-half..half), rng.gen_range(-half..half)),
        size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
        alpha: PARTICLE_ALPHA_MIN + rng.gen::<f32>() * PARTICLE_ALPHA_SPAN,
    }
}

// gen_range keeps the upper bound exclusive; an empty axis collapses to 0.
#[inline]
fn random_coord(rng: &mut StdRng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}
