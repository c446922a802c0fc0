//! GPU power monitor that polls a telemetry source.

use super::source::{MockPowerSource, NvidiaSmiSource, PowerSource};
use super::types::{PowerSample, PowerSummary};
use std::time::{Duration, Instant};

/// GPU power monitor
///
/// Wraps a [`PowerSource`]. Without hardware every sample is empty; the
/// monitor never returns an error.
pub struct GpuMonitor {
    source: Box<dyn PowerSource>,
}

impl GpuMonitor {
    /// Monitor backed by `nvidia-smi`
    pub fn new() -> Self {
        Self::with_source(NvidiaSmiSource::new())
    }

    /// Monitor backed by any source
    pub fn with_source(source: impl PowerSource + 'static) -> Self {
        Self { source: Box::new(source) }
    }

    /// Create a mock GPU monitor for testing
    pub fn mock(readings: Vec<f64>) -> Self {
        Self::with_source(MockPowerSource::new(readings))
    }

    /// Name of the telemetry source
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Single reading per device in watts, empty if unavailable
    pub fn sample(&self) -> Vec<f64> {
        self.source.sample()
    }

    /// Poll every `interval` until `duration` has elapsed
    ///
    /// `on_sample` sees each poll as it is taken. Blocks the calling thread.
    pub fn poll<F>(&self, interval: Duration, duration: Duration, mut on_sample: F) -> PowerSummary
    where
        F: FnMut(&PowerSample),
    {
        let start = Instant::now();
        let mut samples = Vec::new();

        while start.elapsed() < duration {
            let sample = PowerSample { elapsed_secs: start.elapsed().as_secs_f64(), watts: self.sample() };
            on_sample(&sample);
            samples.push(sample);
            std::thread::sleep(interval);
        }

        tracing::debug!(source = self.source_name(), samples = samples.len(), "power polling finished");
        PowerSummary::from_samples(&samples)
    }
}

impl Default for GpuMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GpuMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GpuMonitor").field("source", &self.source.name()).finish()
    }
}
