/// Highest intensity level a day can get.
pub const MAX_LEVEL: u8 = 4;

/// Percentages of the window maximum that separate levels 1..=4.
const THRESHOLD_PERCENTAGES: [u64; 4] = [10, 30, 60, 85];

/// Maps daily counts to intensity levels. Built once for the whole window so every week shares
/// the same color scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelScale {
    max: u32,
    thresholds: [u64; 4],
}

impl LevelScale {
    pub fn new(window_max: u32) -> Self {
        let mut thresholds = [0u64; 4];
        for (i, percentage) in THRESHOLD_PERCENTAGES.iter().enumerate() {
            // ceil(max * p / 100) without going through floats. Each threshold is floored at i + 1
            // so they stay strictly increasing for small maximums.
            let ceil = (window_max as u64 * percentage).div_ceil(100);
            thresholds[i] = ceil.max(i as u64 + 1);
        }
        Self {
            max: window_max,
            thresholds,
        }
    }

    pub fn thresholds(&self) -> [u64; 4] {
        self.thresholds
    }

    pub fn level(&self, count: u32) -> u8 {
        if count == 0 {
            return 0;
        }
        if self.max <= MAX_LEVEL as u32 {
            return count.min(MAX_LEVEL as u32) as u8;
        }
        let exceeded = self
            .thresholds
            .iter()
            .filter(|threshold| count as u64 > **threshold)
            .count() as u8;
        (1 + exceeded).min(MAX_LEVEL)
    }
}

/// Convenience for one-off classification. Prefer [LevelScale] when classifying a whole window.
pub fn level(count: u32, window_max: u32) -> u8 {
    LevelScale::new(window_max).level(count)
}
