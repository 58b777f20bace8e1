//! Double-slit experiment simulation engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (intensity models, sampling, kinematics, session state)
//! - `driver`: Real-time tick gating for a host render loop
//!
//! Rendering is not part of this crate. A UI layer calls the control
//! surface on [`sim::SimState`] and polls [`sim::SimState::snapshot`]
//! once per display frame; theory curves for overlay drawing come from
//! [`sim::theory_curve`].

pub mod driver;
pub mod sim;

pub use driver::TickClock;
pub use sim::{Mode, Regime, SimState};

/// Simulation constants
///
/// Coordinates are unitless screen units: x grows from the emitter toward
/// the detector screen, y spans the drawable band 0..300.
pub mod consts {
    /// Minimum real time between simulation ticks (~60 Hz)
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// X coordinate of the particle emitter
    pub const EMITTER_X: f32 = 25.0;
    /// X coordinate of the slit barrier plane
    pub const BARRIER_X: f32 = 165.0;
    /// X coordinate of the detector screen
    pub const SCREEN_X: f32 = 315.0;
    /// Beam centerline
    pub const CENTER_Y: f32 = 150.0;
    /// Y coordinates of the two slit centers
    pub const SLIT_Y1: f32 = 120.0;
    pub const SLIT_Y2: f32 = 180.0;
    /// Slit opening height
    pub const SLIT_WIDTH: f32 = 14.0;
    /// Slit center separation (the `d` of the fringe model)
    pub const SLIT_SEPARATION: f32 = SLIT_Y2 - SLIT_Y1;
    /// Barrier-to-screen distance (the `L` of the fringe model)
    pub const SLIT_TO_SCREEN: f32 = SCREEN_X - BARRIER_X;
    /// Effective wavelength; fringe period on the screen is λL/d = 30
    pub const WAVELENGTH: f32 = 12.0;
    /// Width parameter of the sinc² envelope
    pub const ENVELOPE_SCALE: f32 = 40.0;
    /// Standard deviation of each classical Gaussian bump
    pub const CLASSICAL_SIGMA: f32 = 18.0;
    /// Peak scale of the classical distribution (kept below 1)
    pub const CLASSICAL_PEAK: f32 = 0.85;

    /// Sampling band half-width around the centerline
    pub const SAMPLE_BAND: f32 = 100.0;
    /// Hard landing range, slightly inside the drawable screen
    pub const Y_MIN: f32 = 8.0;
    pub const Y_MAX: f32 = 292.0;
    /// Rejection-sampling attempt bound
    pub const MAX_SAMPLE_ATTEMPTS: u32 = 150;

    /// Per-tick x advance at speed 1
    pub const X_STEP: f32 = 2.5;
    /// Half-width of the x band straddling the barrier where a particle
    /// funnels toward its assigned slit
    pub const SLIT_BAND: f32 = 12.0;
    /// Per-tick easing toward the slit center inside the band
    pub const SLIT_EASE: f32 = 0.1;
    /// Per-tick easing toward the sampled landing point past the barrier
    pub const DRIFT_EASE: f32 = 0.05;
    /// Cosmetic phase advance of an in-flight particle per tick at speed 1
    pub const PARTICLE_PHASE_STEP: f32 = 0.3;
    /// Wavefront phase-clock advance per tick at speed 1
    pub const PHASE_CLOCK_STEP: f32 = 0.12;
    /// Emission y jitter half-range around the centerline
    pub const EMIT_JITTER: f32 = 6.0;

    /// Speed multiplier bounds exposed to the UI
    pub const SPEED_MIN: f32 = 0.5;
    pub const SPEED_MAX: f32 = 3.0;

    /// Histogram bin height
    pub const BIN_SIZE: f32 = 6.0;
    /// Raw hits kept for display (most recent)
    pub const RECENT_HITS: usize = 80;
}

/// Histogram bin index for a screen y
#[inline]
pub fn bin_index(y: f32) -> i32 {
    (y / consts::BIN_SIZE).floor() as i32
}

/// Lower edge of a histogram bin
#[inline]
pub fn bin_start(index: i32) -> f32 {
    index as f32 * consts::BIN_SIZE
}
