//! GPU power reading types.

use serde::{Deserialize, Serialize};

/// One poll of every visible GPU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerSample {
    /// Seconds since polling started
    pub elapsed_secs: f64,
    /// Power draw per device in watts; empty when telemetry was unavailable
    pub watts: Vec<f64>,
}

impl PowerSample {
    /// Total draw across devices
    pub fn total_watts(&self) -> f64 {
        self.watts.iter().sum()
    }

    /// Whether the poll returned no readings
    pub fn is_empty(&self) -> bool {
        self.watts.is_empty()
    }
}

/// Aggregate of a polling session, per device
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerSummary {
    /// Polls taken
    pub samples: usize,
    /// Polls that returned no readings
    pub empty_samples: usize,
    /// Average draw in watts
    pub mean_watts: Vec<f64>,
    /// Highest draw in watts
    pub peak_watts: Vec<f64>,
    /// Energy in joules, trapezoid rule between consecutive polls
    pub energy_joules: Vec<f64>,
}

impl PowerSummary {
    /// Summarize samples in poll order
    ///
    /// Devices are matched by index. A device missing from a poll is skipped
    /// for that poll, and energy is only integrated between two polls that
    /// both report it.
    pub fn from_samples(samples: &[PowerSample]) -> Self {
        let devices = samples.iter().map(|s| s.watts.len()).max().unwrap_or(0);
        let mut sum = vec![0.0; devices];
        let mut count = vec![0usize; devices];
        let mut peak = vec![0.0f64; devices];
        let mut energy = vec![0.0; devices];

        for sample in samples {
            for (dev, &w) in sample.watts.iter().enumerate() {
                sum[dev] += w;
                count[dev] += 1;
                peak[dev] = peak[dev].max(w);
            }
        }

        for pair in samples.windows(2) {
            let dt = pair[1].elapsed_secs - pair[0].elapsed_secs;
            for (dev, (w1, w2)) in pair[0].watts.iter().zip(&pair[1].watts).enumerate() {
                energy[dev] += (w1 + w2) / 2.0 * dt;
            }
        }

        let mean_watts = sum
            .iter()
            .zip(&count)
            .map(|(s, &c)| if c > 0 { s / c as f64 } else { 0.0 })
            .collect();

        Self {
            samples: samples.len(),
            empty_samples: samples.iter().filter(|s| s.is_empty()).count(),
            mean_watts,
            peak_watts: peak,
            energy_joules: energy,
        }
    }

    /// Number of devices seen
    pub fn devices(&self) -> usize {
        self.mean_watts.len()
    }

    /// Total energy across devices in joules
    pub fn total_energy_joules(&self) -> f64 {
        self.energy_joules.iter().sum()
    }
}
