//! Application State
//!
//! Shared, read-only state handed to every handler.

use std::sync::Arc;

use humanizer_config::Settings;
use humanizer_text_processing::{HumanizerConfig, HumanizerPipeline, TextProcessingError};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::latency::LatencySimulator;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub pipeline: Arc<HumanizerPipeline>,
    pub latency: LatencySimulator,
    /// Present when the Prometheus recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Build state from settings
    pub fn new(settings: Settings) -> Result<Self, TextProcessingError> {
        let pipeline = HumanizerPipeline::new(HumanizerConfig {
            rule_probability: settings.humanizer.rule_probability,
            filler_probability: settings.humanizer.filler_probability,
        })?;

        tracing::info!(
            rules = pipeline.catalog().len(),
            scorer = pipeline.scorer_name(),
            default_mode = %settings.humanizer.default_mode,
            "Humanizer pipeline ready"
        );

        Ok(Self {
            latency: LatencySimulator::new(settings.humanizer.latency.clone()),
            pipeline: Arc::new(pipeline),
            settings: Arc::new(settings),
            metrics: None,
        })
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
