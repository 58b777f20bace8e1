//! Per-tick particle kinematics
//!
//! A particle flies straight at the barrier, funnels toward its assigned
//! slit inside a narrow x band around the barrier plane, then drifts
//! toward its pre-sampled landing point on the screen.

use super::state::Particle;
use crate::consts::*;

/// Advance one particle by one tick at the given speed multiplier.
/// Returns true once the particle has crossed the screen plane and must
/// be retired in this same tick.
pub fn advance(p: &mut Particle, speed: f32) -> bool {
    p.pos.x += X_STEP * speed;

    if p.pos.x < BARRIER_X - SLIT_BAND {
        // Straight flight toward the barrier
    } else if p.pos.x <= BARRIER_X + SLIT_BAND {
        p.pos.y += (p.slit.y() - p.pos.y) * SLIT_EASE;
    } else {
        p.pos.y += (p.target_y - p.pos.y) * DRIFT_EASE;
    }

    p.internal_phase += PARTICLE_PHASE_STEP * speed;
    p.pos.x >= SCREEN_X
}
