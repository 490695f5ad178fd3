//! Simulated processing latency
//!
//! Every successful humanize response is held back by a uniformly drawn delay
//! that is reported to the client as `processingTime`.

use std::time::Duration;

use humanizer_config::LatencySettings;
use humanizer_core::RandomSource;
use humanizer_text_processing::StdRandom;

#[derive(Debug, Clone)]
pub struct LatencySimulator {
    settings: LatencySettings,
}

impl LatencySimulator {
    pub fn new(settings: LatencySettings) -> Self {
        Self { settings }
    }

    pub fn disabled() -> Self {
        Self::new(LatencySettings::disabled())
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    /// Delay in whole milliseconds for one draw, within `[min_ms, max_ms]`
    pub fn draw(&self, rng: &mut dyn RandomSource) -> u64 {
        if !self.settings.enabled {
            return 0;
        }
        let span = self.settings.max_ms.saturating_sub(self.settings.min_ms) as f64;
        let delay = self.settings.min_ms as f64 + rng.next_f64() * span;
        delay.round() as u64
    }

    /// Draw a delay, sleep for it, and return it in milliseconds
    pub async fn simulate_processing(&self) -> u64 {
        let delay_ms = self.draw(&mut StdRandom::from_entropy());
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        delay_ms
    }
}
