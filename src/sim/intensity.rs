//! Intensity models for the two regimes
//!
//! Pure functions from a screen y to a relative probability density in
//! [0, 1]. Neither curve is normalized to integrate to 1; the sampler
//! treats the value as an acceptance probability and callers restrict y
//! to the meaningful band themselves.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which probability model governs a landing position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    /// Two-slit interference fringes (path undetected)
    Interference,
    /// Two-peak classical distribution (path known)
    Classical,
}

impl Regime {
    /// Relative intensity at screen position y
    pub fn intensity(self, y: f32) -> f32 {
        match self {
            Regime::Interference => interference_intensity(y),
            Regime::Classical => classical_intensity(y),
        }
    }
}

/// Two-slit interference pattern: cos² fringe term from the path
/// difference `d·Δy/L`, modulated by a sinc² envelope that suppresses
/// intensity far from the centerline.
pub fn interference_intensity(y: f32) -> f32 {
    let offset = y - CENTER_Y;

    let path_diff = SLIT_SEPARATION * offset / SLIT_TO_SCREEN;
    let phase = std::f32::consts::TAU * path_diff / WAVELENGTH;
    let fringe = (phase / 2.0).cos().powi(2);

    // sinc² envelope; epsilon offset avoids 0/0 at the centerline
    let mut u = offset / ENVELOPE_SCALE;
    if u.abs() < 1e-6 {
        u = 1e-6;
    }
    let sinc = u.sin() / u;
    let envelope = (1.5 * sinc * sinc).min(1.0);

    (fringe * envelope).max(0.0)
}

/// Classical two-peak distribution: one Gaussian bump per slit, scaled so
/// the peak stays comparable to (and below) the interference peak.
pub fn classical_intensity(y: f32) -> f32 {
    let var2 = 2.0 * CLASSICAL_SIGMA * CLASSICAL_SIGMA;
    let bump = |center: f32| (-((y - center) * (y - center)) / var2).exp();
    CLASSICAL_PEAK * (bump(SLIT_Y1) + bump(SLIT_Y2))
}

/// Sample a regime's curve at evenly spaced points across the landing
/// range, for drawing theory overlays. Returns (y, intensity) pairs.
pub fn theory_curve(regime: Regime, samples: usize) -> Vec<(f32, f32)> {
    let samples = samples.max(2);
    let step = (Y_MAX - Y_MIN) / (samples - 1) as f32;
    (0..samples)
        .map(|i| {
            let y = Y_MIN + step * i as f32;
            (y, regime.intensity(y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_interference_peak_at_center() {
        let center = interference_intensity(CENTER_Y);
        assert!((center - 1.0).abs() < 1e-4, "center peak was {center}");
    }

    #[test]
    fn test_interference_symmetric_about_center() {
        for dy in [1.0, 7.5, 15.0, 30.0, 55.0, 90.0] {
            let lo = interference_intensity(CENTER_Y - dy);
            let hi = interference_intensity(CENTER_Y + dy);
            assert!((lo - hi).abs() < 1e-5, "asymmetric at dy={dy}: {lo} vs {hi}");
        }
    }

    #[test]
    fn test_interference_has_fringe_minima() {
        // First dark fringe sits half a period (15 units) off center
        let dark = interference_intensity(CENTER_Y + 15.0);
        let bright = interference_intensity(CENTER_Y + 30.0);
        assert!(dark < 0.05, "dark fringe too bright: {dark}");
        assert!(bright > 0.3, "second bright fringe too dim: {bright}");
    }

    #[test]
    fn test_classical_peaks_at_slits() {
        let p1 = classical_intensity(SLIT_Y1);
        let p2 = classical_intensity(SLIT_Y2);
        assert!((p1 - p2).abs() < 1e-5);
        assert!(p1 <= 0.9, "classical peak too high: {p1}");

        // Strictly smaller a few sigma away from either peak
        for away in [2.0 * CLASSICAL_SIGMA, 3.0 * CLASSICAL_SIGMA] {
            assert!(classical_intensity(SLIT_Y1 - away) < p1);
            assert!(classical_intensity(SLIT_Y2 + away) < p2);
        }

        // Local maxima: nudging off either slit center loses intensity
        assert!(classical_intensity(SLIT_Y1 + 2.0) < p1);
        assert!(classical_intensity(SLIT_Y1 - 2.0) < p1);
        assert!(classical_intensity(SLIT_Y2 + 2.0) < p2);
        assert!(classical_intensity(SLIT_Y2 - 2.0) < p2);
    }

    #[test]
    fn test_theory_curve_spans_landing_range() {
        let curve = theory_curve(Regime::Interference, 50);
        assert_eq!(curve.len(), 50);
        assert!((curve[0].0 - Y_MIN).abs() < 1e-3);
        assert!((curve[49].0 - Y_MAX).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_interference_in_unit_range(y in -500.0f32..800.0) {
            let v = interference_intensity(y);
            prop_assert!(v.is_finite());
            prop_assert!((0.0..=1.0).contains(&v));
        }

        #[test]
        fn prop_classical_in_range(y in -500.0f32..800.0) {
            let v = classical_intensity(y);
            prop_assert!(v.is_finite());
            prop_assert!((0.0..=0.9).contains(&v));
        }
    }
}
