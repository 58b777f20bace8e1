//! Real-time tick gating
//!
//! The simulation is tick-driven and independent of the host's render
//! rate: the clock fires at most one tick per [`TICK_INTERVAL`] of real
//! elapsed time. While paused, elapsed time is discarded rather than
//! accumulated, so resuming never fast-forwards through the pause.

use std::time::{Duration, Instant};

use crate::consts::TICK_INTERVAL_MS;
use crate::sim::{SimState, tick};

/// Minimum real-time gap between ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Gates [`tick`] against wall time. The host render loop polls this
/// every frame, however fast or slow frames arrive.
#[derive(Debug, Default)]
pub struct TickClock {
    last_tick: Option<Instant>,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll with an explicit timestamp. Runs at most one tick; returns
    /// whether a tick fired.
    pub fn poll_at(&mut self, state: &mut SimState, now: Instant) -> bool {
        if !state.running {
            // Discard paused time so resume does not catch up
            self.last_tick = None;
            return false;
        }
        if let Some(last) = self.last_tick
            && now.duration_since(last) < TICK_INTERVAL
        {
            return false;
        }
        self.last_tick = Some(now);
        tick(state);
        true
    }

    /// Poll using wall time
    pub fn poll(&mut self, state: &mut SimState) -> bool {
        self.poll_at(state, Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Mode;

    fn running_state() -> SimState {
        let mut state = SimState::new(1);
        state.set_mode(Mode::Wave);
        state.set_running(true);
        state
    }

    #[test]
    fn test_gate_blocks_fast_polls() {
        let mut state = running_state();
        let mut clock = TickClock::new();
        let t0 = Instant::now();

        assert!(clock.poll_at(&mut state, t0));
        assert!(!clock.poll_at(&mut state, t0 + Duration::from_millis(10)));
        assert!(clock.poll_at(&mut state, t0 + Duration::from_millis(17)));
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_paused_time_is_discarded() {
        let mut state = running_state();
        let mut clock = TickClock::new();
        let t0 = Instant::now();

        assert!(clock.poll_at(&mut state, t0));
        state.set_running(false);
        assert!(!clock.poll_at(&mut state, t0 + Duration::from_millis(500)));

        // A long pause buys zero extra ticks: exactly one fires on resume
        state.set_running(true);
        assert!(clock.poll_at(&mut state, t0 + Duration::from_secs(10)));
        assert!(!clock.poll_at(&mut state, t0 + Duration::from_secs(10)));
        assert_eq!(state.time_ticks, 2);
    }
}
