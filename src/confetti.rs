//! The completion-screen confetti burst: a fixed number of particles falling
//! under constant gravity on a fixed tick, self-terminating after a few
//! seconds. Purely cosmetic, touches no bill data.

use rand::Rng;
use serde::Serialize;
use std::time::Duration;

pub const PARTICLE_COUNT: usize = 50;
pub const TICK: Duration = Duration::from_millis(16); // ~60fps
pub const ANIMATION_DURATION: Duration = Duration::from_millis(5000);
pub const GRAVITY: f64 = 0.1;

const SPAWN_Y: f64 = -10.0;
const EXIT_MARGIN: f64 = 20.0;

const COLORS: [&str; 6] = [
    "#8b5cf6", "#6b5b9a", "#3b82f6", "#10b981", "#f59e0b", "#ef4444",
];

#[derive(Clone, Debug, Serialize)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub color: &'static str,
    pub size: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub rotation_speed: f64,
}

#[derive(Debug)]
pub struct ConfettiAnimation {
    particles: Vec<Particle>,
    viewport_height: f64,
    elapsed: Duration,
    animating: bool,
}

impl ConfettiAnimation {
    /// Spawns the full burst along the top edge of the viewport.
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        let mut rng = rand::thread_rng();
        let particles = (0..PARTICLE_COUNT)
            .map(|id| Particle {
                id,
                x: rng.gen_range(0.0..viewport_width),
                y: SPAWN_Y,
                rotation: rng.gen_range(0.0..360.0),
                color: COLORS[rng.gen_range(0..COLORS.len())],
                size: rng.gen_range(4.0..12.0),
                velocity_x: rng.gen_range(-2.0..2.0),
                velocity_y: rng.gen_range(2.0..5.0),
                rotation_speed: rng.gen_range(-5.0..5.0),
            })
            .collect();
        ConfettiAnimation {
            particles,
            viewport_height,
            elapsed: Duration::ZERO,
            animating: true,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Advances one frame: integrate positions, apply gravity, drop pieces
    /// that fell past the bottom edge. A no-op after the duration elapses.
    pub fn tick(&mut self) {
        if !self.animating {
            return;
        }
        self.elapsed += TICK;
        if self.elapsed >= ANIMATION_DURATION {
            self.animating = false;
            return;
        }
        let floor = self.viewport_height + EXIT_MARGIN;
        for piece in &mut self.particles {
            piece.x += piece.velocity_x;
            piece.y += piece.velocity_y;
            piece.rotation += piece.rotation_speed;
            piece.velocity_y += GRAVITY;
        }
        self.particles.retain(|piece| piece.y < floor);
    }
}
