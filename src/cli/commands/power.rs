//! Power command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, PowerArgs};
use crate::error::{Error, Result};
use crate::monitor::gpu::{GpuMonitor, PowerSample, PowerSummary};
use std::time::Duration;

pub fn run_power(args: PowerArgs, level: LogLevel) -> Result<()> {
    run_power_with(&GpuMonitor::new(), args, level)
}

pub(crate) fn run_power_with(monitor: &GpuMonitor, args: PowerArgs, level: LogLevel) -> Result<()> {
    let (interval, duration) = polling_window(&args)?;
    log(level, LogLevel::Verbose, &format!("Power source: {}", monitor.source_name()));

    if args.once {
        let sample = PowerSample { elapsed_secs: 0.0, watts: monitor.sample() };
        if sample.is_empty() {
            tracing::warn!("no GPU power telemetry available");
        }
        match args.format {
            OutputFormat::Text => println!("{}", format_sample(&sample)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sample)?),
        }
        return Ok(());
    }

    log(
        level,
        LogLevel::Normal,
        &format!("Polling GPU power every {:.2}s for {:.1}s", args.interval, args.duration),
    );
    let text = args.format == OutputFormat::Text;
    let summary = monitor.poll(interval, duration, |sample| {
        if text {
            log(level, LogLevel::Normal, &format_sample(sample));
        }
    });
    if summary.samples > 0 && summary.empty_samples == summary.samples {
        tracing::warn!("no GPU power telemetry available");
    }

    match args.format {
        OutputFormat::Text => print!("{}", format_summary(&summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn polling_window(args: &PowerArgs) -> Result<(Duration, Duration)> {
    if !args.interval.is_finite() || args.interval <= 0.0 {
        return Err(Error::ConfigValue {
            field: "interval".to_string(),
            message: format!("{} is not a positive number of seconds", args.interval),
            suggestion: "Use --interval 1".to_string(),
        });
    }
    if !args.duration.is_finite() || args.duration < 0.0 {
        return Err(Error::ConfigValue {
            field: "duration".to_string(),
            message: format!("{} is not a non-negative number of seconds", args.duration),
            suggestion: "Use --duration 10".to_string(),
        });
    }
    Ok((Duration::from_secs_f64(args.interval), Duration::from_secs_f64(args.duration)))
}

pub(crate) fn format_sample(sample: &PowerSample) -> String {
    if sample.is_empty() {
        return format!("{:>7.1}s  no readings", sample.elapsed_secs);
    }
    let devices: Vec<String> =
        sample.watts.iter().enumerate().map(|(i, w)| format!("GPU{i}: {w:>7.1} W")).collect();
    format!("{:>7.1}s  {}", sample.elapsed_secs, devices.join("  "))
}

pub(crate) fn format_summary(summary: &PowerSummary) -> String {
    let mut out = format!("Samples: {} ({} without readings)\n", summary.samples, summary.empty_samples);
    for dev in 0..summary.devices() {
        out.push_str(&format!(
            "GPU{dev}: mean {:.1} W, peak {:.1} W, energy {:.1} J\n",
            summary.mean_watts[dev], summary.peak_watts[dev], summary.energy_joules[dev]
        ));
    }
    if summary.devices() > 1 {
        out.push_str(&format!("Total energy: {:.1} J\n", summary.total_energy_joules()));
    }
    out
}
