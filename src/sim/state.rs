//! Session state and the control surface consumed by the UI layer
//!
//! All mutable per-session state lives in one [`SimState`] so tests can
//! construct a session, advance it N ticks under a seeded RNG, and assert
//! on the resulting hit collection.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::screen::Screen;
use crate::consts::*;
use crate::bin_start;

/// Experiment mode selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mode {
    /// Continuous wave: no particles, wavefront animation only
    #[default]
    Wave,
    /// Ball-like particles; always builds the two-peak classical pattern
    ClassicalParticle,
    /// Many electrons in flight at once
    ElectronBeam,
    /// One electron at a time
    SingleElectron,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Wave => "continuous wave",
            Mode::ClassicalParticle => "classical particles",
            Mode::ElectronBeam => "electron beam",
            Mode::SingleElectron => "single electron",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wave" => Some(Mode::Wave),
            "classical" | "particle" => Some(Mode::ClassicalParticle),
            "beam" | "electron-beam" => Some(Mode::ElectronBeam),
            "single" | "single-electron" => Some(Mode::SingleElectron),
            _ => None,
        }
    }

    /// Whether the observer toggle has any effect in this mode
    pub fn observer_capable(self) -> bool {
        matches!(self, Mode::ElectronBeam | Mode::SingleElectron)
    }

    /// Whether this mode emits particles at all
    pub fn has_particles(self) -> bool {
        self != Mode::Wave
    }

    /// Live-particle population cap
    pub fn capacity(self) -> usize {
        match self {
            Mode::Wave => 0,
            Mode::SingleElectron => 1,
            Mode::ClassicalParticle | Mode::ElectronBeam => 12,
        }
    }

    /// Per-tick spawn probability at speed 1
    pub fn spawn_rate(self) -> f32 {
        match self {
            Mode::Wave => 0.0,
            Mode::ClassicalParticle => 0.3,
            Mode::ElectronBeam => 0.35,
            Mode::SingleElectron => 0.06,
        }
    }
}

/// Which slit a particle was assigned at emission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slit {
    One,
    Two,
}

impl Slit {
    pub fn y(self) -> f32 {
        match self {
            Slit::One => SLIT_Y1,
            Slit::Two => SLIT_Y2,
        }
    }
}

/// An in-flight entity between emitter and screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Landing y sampled at emission; fixed for the particle's lifetime
    /// and recorded verbatim when the particle retires
    pub target_y: f32,
    pub slit: Slit,
    /// Cosmetic oscillation state; not physically load-bearing
    pub internal_phase: f32,
    /// Whether this particle's path was measured (collapses to classical)
    pub observed: bool,
}

/// A retired particle's recorded landing position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub y: f32,
}

/// Complete session state (deterministic under a fixed seed)
#[derive(Debug, Clone)]
pub struct SimState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub mode: Mode,
    pub running: bool,
    speed: f32,
    observer: bool,
    /// Drives the wavefront animation; advances only while running
    pub phase_clock: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Cumulative particles emitted since the last reset
    pub emitted: u64,
    /// Live particles, in flight between emitter and screen
    pub particles: Vec<Particle>,
    /// Detector screen accumulator
    pub screen: Screen,
    /// Display-only flag toggled by the UI; no simulation effect
    pub show_histogram: bool,
}

impl SimState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode: Mode::default(),
            running: false,
            speed: 1.0,
            observer: false,
            phase_clock: 0.0,
            time_ticks: 0,
            emitted: 0,
            particles: Vec::new(),
            screen: Screen::new(),
            show_histogram: false,
        }
    }

    /// Switch experiment mode. Implies a full reset and clears the
    /// observer flag, so the accumulated pattern never mixes regimes.
    pub fn set_mode(&mut self, mode: Mode) {
        self.reset();
        self.mode = mode;
        self.observer = false;
        log::info!("mode -> {}", mode.label());
    }

    /// Toggle the which-path "observer". Implies a full reset for the
    /// same single-regime reason as [`set_mode`](Self::set_mode).
    pub fn set_observer(&mut self, enabled: bool) {
        self.reset();
        self.observer = enabled;
        log::info!("observer -> {enabled}");
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Histogram-vs-dots display toggle; no simulation effect.
    pub fn set_show_histogram(&mut self, show: bool) {
        self.show_histogram = show;
    }

    /// Set the speed multiplier, clamped to the UI range. Speed couples
    /// both particle motion and emission cadence.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Raw observer flag as last set by the UI
    pub fn observer_enabled(&self) -> bool {
        self.observer
    }

    /// Observer flag as the physics sees it: forced off in modes without
    /// a which-path detector.
    pub fn observer_effective(&self) -> bool {
        self.observer && self.mode.observer_capable()
    }

    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    /// Clear all transient state in one step: particles, hits, counters,
    /// phase clock; stops the run. Idempotent. Keeps mode, speed and the
    /// observer flag.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.screen.clear();
        self.phase_clock = 0.0;
        self.time_ticks = 0;
        self.emitted = 0;
        self.running = false;
    }

    /// Owned, serializable view for the rendering layer. Taken between
    /// ticks, so it is always internally consistent.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            running: self.running,
            observer: self.observer_effective(),
            speed: self.speed,
            phase_clock: self.phase_clock,
            show_histogram: self.show_histogram,
            emitted: self.emitted,
            live: self.particles.clone(),
            total_hits: self.screen.total(),
            recent_hits: self.screen.recent().map(|h| h.y).collect(),
            histogram: self
                .screen
                .histogram()
                .iter()
                .map(|(&idx, &count)| (bin_start(idx), count))
                .collect(),
        }
    }
}

/// Read-only state view polled once per display frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub running: bool,
    /// Effective observer flag (already masked by mode capability)
    pub observer: bool,
    pub speed: f32,
    pub phase_clock: f32,
    pub show_histogram: bool,
    pub emitted: u64,
    pub live: Vec<Particle>,
    pub total_hits: u64,
    /// Most recent landings, oldest first
    pub recent_hits: Vec<f32>,
    /// (bin lower edge, count), ascending by y
    pub histogram: Vec<(f32, u32)>,
}
