//! Power telemetry sources.
//!
//! A source never fails loudly: missing hardware, a missing driver tool or
//! unparseable output all read as "no devices".

use std::process::Command;

/// Anything that can report per-device GPU power draw
pub trait PowerSource {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Current power draw per device in watts, empty if unavailable
    fn sample(&self) -> Vec<f64>;
}

/// Query arguments for `nvidia-smi`
const NVIDIA_SMI_ARGS: [&str; 2] = ["--query-gpu=power.draw", "--format=csv,noheader,nounits"];

/// Reads power draw from the `nvidia-smi` command-line tool
#[derive(Debug, Clone)]
pub struct NvidiaSmiSource {
    program: String,
}

impl NvidiaSmiSource {
    /// Use `nvidia-smi` from `PATH`
    pub fn new() -> Self {
        Self { program: "nvidia-smi".to_string() }
    }

    /// Use a specific executable
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    /// Check whether the tool runs successfully
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--query-gpu=name")
            .arg("--format=csv,noheader")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl Default for NvidiaSmiSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `nvidia-smi` power output, one value in watts per line
///
/// Returns `None` if any non-blank line is not a number (for example
/// `[N/A]` on boards without power sensors).
pub fn parse_power_draw(stdout: &str) -> Option<Vec<f64>> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.parse::<f64>().ok())
        .collect()
}

impl PowerSource for NvidiaSmiSource {
    fn name(&self) -> &str {
        "nvidia-smi"
    }

    fn sample(&self) -> Vec<f64> {
        let output = match Command::new(&self.program).args(NVIDIA_SMI_ARGS).output() {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(program = %self.program, error = %e, "could not run GPU power query");
                return Vec::new();
            }
        };
        if !output.status.success() {
            tracing::warn!(program = %self.program, status = %output.status, "GPU power query failed");
            return Vec::new();
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_power_draw(&stdout).unwrap_or_else(|| {
            tracing::warn!(output = %stdout.trim(), "unparseable GPU power output");
            Vec::new()
        })
    }
}

/// Fixed readings, for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MockPowerSource {
    readings: Vec<f64>,
}

impl MockPowerSource {
    /// Report the given per-device readings on every sample
    pub fn new(readings: Vec<f64>) -> Self {
        Self { readings }
    }

    /// Report no devices
    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl PowerSource for MockPowerSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn sample(&self) -> Vec<f64> {
        self.readings.clone()
    }
}
