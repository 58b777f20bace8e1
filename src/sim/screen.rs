//! Detector screen accumulator
//!
//! Retired particles land here. The raw hit list is a bounded ring (most
//! recent [`RECENT_HITS`]) used for drawing individual dots; the
//! histogram aggregate is unbounded so a long run never loses counts.

use std::collections::{BTreeMap, VecDeque};

use super::state::Hit;
use crate::bin_index;
use crate::consts::RECENT_HITS;

#[derive(Debug, Clone, Default)]
pub struct Screen {
    recent: VecDeque<Hit>,
    bins: BTreeMap<i32, u32>,
    total: u64,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one landing. The caller passes the particle's pre-sampled
    /// target y, so the aggregate matches the sampled distribution
    /// exactly rather than the rendered trajectory endpoint.
    pub fn record(&mut self, y: f32) {
        self.recent.push_back(Hit { y });
        if self.recent.len() > RECENT_HITS {
            self.recent.pop_front();
        }
        *self.bins.entry(bin_index(y)).or_insert(0) += 1;
        self.total += 1;
    }

    /// Most recent hits, oldest first
    pub fn recent(&self) -> impl Iterator<Item = &Hit> {
        self.recent.iter()
    }

    /// Aggregate histogram keyed by bin index (see [`crate::bin_start`])
    pub fn histogram(&self) -> &BTreeMap<i32, u32> {
        &self.bins
    }

    /// Count in the bin containing y
    pub fn count_at(&self, y: f32) -> u32 {
        self.bins.get(&bin_index(y)).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn clear(&mut self) {
        self.recent.clear();
        self.bins.clear();
        self.total = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{Y_MAX, Y_MIN};
    use proptest::prelude::*;

    #[test]
    fn test_recent_is_capped_but_total_is_not() {
        let mut screen = Screen::new();
        for i in 0..(RECENT_HITS * 3) {
            screen.record(100.0 + (i % 10) as f32);
        }
        assert_eq!(screen.recent().count(), RECENT_HITS);
        assert_eq!(screen.total(), (RECENT_HITS * 3) as u64);
    }

    #[test]
    fn test_recent_keeps_newest() {
        let mut screen = Screen::new();
        for i in 0..(RECENT_HITS + 5) {
            screen.record(i as f32);
        }
        let first = screen.recent().next().unwrap().y;
        assert_eq!(first, 5.0);
    }

    #[test]
    fn test_count_at_bin_edges() {
        let mut screen = Screen::new();
        screen.record(150.0);
        screen.record(155.9);
        screen.record(156.0);
        assert_eq!(screen.count_at(150.0), 2);
        assert_eq!(screen.count_at(156.0), 1);
    }

    proptest! {
        #[test]
        fn prop_histogram_sums_to_total(ys in prop::collection::vec(Y_MIN..Y_MAX, 0..400)) {
            let mut screen = Screen::new();
            for y in &ys {
                screen.record(*y);
            }
            let sum: u64 = screen.histogram().values().map(|&c| c as u64).sum();
            prop_assert_eq!(sum, screen.total());
            prop_assert_eq!(screen.total(), ys.len() as u64);
        }
    }
}
