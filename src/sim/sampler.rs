//! Landing-position sampling
//!
//! Rejection sampling against an intensity model, with a bounded attempt
//! budget so a pathological (near-zero-everywhere) curve can never hang
//! the tick loop.

use rand::Rng;

use super::intensity::Regime;
use crate::consts::*;

/// Draw a screen landing y for the given regime.
///
/// Candidates are drawn uniformly from `CENTER_Y ± SAMPLE_BAND`, dropped
/// if they fall outside the hard landing range, and accepted when a fresh
/// uniform draw falls under the regime's intensity at that point.
///
/// Always returns a finite y in `[Y_MIN, Y_MAX]`: if the attempt budget
/// runs out, the deterministic per-regime fallback is used instead.
pub fn sample_landing_y<R: Rng + ?Sized>(regime: Regime, rng: &mut R) -> f32 {
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let y = CENTER_Y + rng.random_range(-SAMPLE_BAND..=SAMPLE_BAND);
        if !(Y_MIN..=Y_MAX).contains(&y) {
            continue;
        }
        if rng.random::<f32>() < regime.intensity(y) {
            return y;
        }
    }
    fallback(regime, rng)
}

/// Exhaustion fallback: the classical regime lands on one of the two slit
/// centers with equal probability, the interference regime on the
/// centerline (its brightest fringe).
fn fallback<R: Rng + ?Sized>(regime: Regime, rng: &mut R) -> f32 {
    match regime {
        Regime::Classical => {
            if rng.random_bool(0.5) {
                SLIT_Y1
            } else {
                SLIT_Y2
            }
        }
        Regime::Interference => CENTER_Y,
    }
}
