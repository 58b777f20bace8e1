//! Per-tick simulation update
//!
//! One logical update stream: advance the wavefront phase, sweep all
//! live particles (retiring screen arrivals into the accumulator in the
//! same tick), then give the emission controller one spawn opportunity.

use glam::Vec2;
use rand::Rng;

use super::intensity::Regime;
use super::kinematics;
use super::sampler::sample_landing_y;
use super::state::{Mode, Particle, SimState, Slit};
use crate::consts::*;

/// Advance the session by one tick. No-op while paused, so resuming
/// continues from the exact frozen state.
pub fn tick(state: &mut SimState) {
    if !state.running {
        return;
    }

    state.time_ticks += 1;
    state.phase_clock += PHASE_CLOCK_STEP * state.speed();

    if !state.mode.has_particles() {
        return;
    }

    // Kinematics sweep with same-tick retirement. swap_remove keeps
    // removal O(1); sweep order does not affect the physics.
    let speed = state.speed();
    let mut i = 0;
    while i < state.particles.len() {
        if kinematics::advance(&mut state.particles[i], speed) {
            let retired = state.particles.swap_remove(i);
            state.screen.record(retired.target_y);
        } else {
            i += 1;
        }
    }

    try_emit(state);
}

/// Emission controller: at most one spawn per tick, gated by the mode's
/// population cap and a Bernoulli draw. Coupling the draw to the speed
/// multiplier makes "speed" scale motion and arrival rate identically.
fn try_emit(state: &mut SimState) {
    if state.particles.len() >= state.mode.capacity() {
        return;
    }

    let p_spawn = (state.mode.spawn_rate() * state.speed()).min(1.0);
    if state.rng.random::<f32>() >= p_spawn {
        return;
    }

    let observed = state.mode == Mode::ClassicalParticle || state.observer_effective();
    let regime = if observed {
        Regime::Classical
    } else {
        Regime::Interference
    };
    let slit = if state.rng.random_bool(0.5) {
        Slit::One
    } else {
        Slit::Two
    };
    let target_y = sample_landing_y(regime, &mut state.rng);
    let jitter = state.rng.random_range(-EMIT_JITTER..=EMIT_JITTER);

    state.particles.push(Particle {
        pos: Vec2::new(EMITTER_X, CENTER_Y + jitter),
        target_y,
        slit,
        internal_phase: 0.0,
        observed,
    });
    state.emitted += 1;
}
