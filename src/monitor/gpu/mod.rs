//! GPU Power Monitoring
//!
//! Per-device power draw, sampled on demand or polled at a fixed interval
//! for a bounded duration. Missing hardware or tooling reads as an empty
//! sample rather than an error.
//!
//! # Example
//!
//! ```no_run
//! use rsrc::monitor::gpu::GpuMonitor;
//! use std::time::Duration;
//!
//! let monitor = GpuMonitor::new();
//! let summary = monitor.poll(Duration::from_secs(1), Duration::from_secs(10), |s| {
//!     println!("{:.1}s: {:?} W", s.elapsed_secs, s.watts);
//! });
//! println!("energy: {:.1} J", summary.total_energy_joules());
//! ```

mod monitor;
mod source;
mod types;

pub use monitor::GpuMonitor;
pub use source::{parse_power_draw, MockPowerSource, NvidiaSmiSource, PowerSource};
pub use types::{PowerSample, PowerSummary};
