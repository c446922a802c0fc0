//! Hardware telemetry

pub mod gpu;
