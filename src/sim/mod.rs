//! Deterministic simulation module
//!
//! The physics core lives here. This module must be pure and deterministic:
//! - Fixed logical timestep only
//! - Seeded RNG only
//! - Single writer: all mutation happens inside [`tick::tick`]
//! - No rendering or platform dependencies
//!
//! The display side reads state between ticks, so everything it sees is a
//! consistent per-tick snapshot.

pub mod intensity;
pub mod kinematics;
pub mod sampler;
pub mod screen;
pub mod state;
pub mod tick;

pub use intensity::{Regime, classical_intensity, interference_intensity, theory_curve};
pub use sampler::sample_landing_y;
pub use screen::Screen;
pub use state::{Hit, Mode, Particle, SimState, Slit, Snapshot};
pub use tick::tick;
