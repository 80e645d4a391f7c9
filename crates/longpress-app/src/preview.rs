//! Headless preview: simulate a hold at a fixed frame rate.
//!
//! Usage: `longpress-preview [CONFIG.json] [--fps N] [--release-after MS] [--out FILE] [--max-frames N]`

use std::cell::Cell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::Parser;
use longpress_core::{
    Clock, ConfigError, Device, FixedStepLoop, LongPresser, ManualClock, PressPhase, TickOutcome,
    WidgetConfig,
};
use thiserror::Error;

/// Preview errors.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for preview operations.
pub type PreviewResult<T> = Result<T, PreviewError>;

/// Simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewOptions {
    /// Simulated display refresh rate.
    pub fps: f64,
    /// Release the pointer this many ms after pressing (None = hold).
    pub release_after_ms: Option<f64>,
    /// Safety bound on simulated frames.
    pub max_frames: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            fps: FixedStepLoop::DEFAULT_FPS,
            release_after_ms: None,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }
}

const DEFAULT_MAX_FRAMES: usize = 10_000;

/// Outcome of a simulated hold.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewReport {
    /// Frames simulated before the animation chain stopped.
    pub frames: usize,
    /// Frame on which the completion fired.
    pub completed_at: Option<usize>,
    /// Number of completion signals observed.
    pub completions: u32,
    /// Simulated time when the chain stopped.
    pub end_ms: f64,
    pub phase: PressPhase,
    /// Final rendering.
    pub svg: String,
}

/// Command line of `longpress-preview`.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "longpress-preview")]
#[command(about = "Simulate holding a long-press widget and print its SVG")]
pub struct PreviewArgs {
    /// Widget options as JSON (defaults when omitted)
    pub config: Option<PathBuf>,
    /// Simulated frames per second
    #[arg(long, default_value_t = FixedStepLoop::DEFAULT_FPS, value_parser = parse_fps)]
    pub fps: f64,
    /// Release the pointer after this many milliseconds
    #[arg(long = "release-after", value_name = "MS", value_parser = parse_ms)]
    pub release_after: Option<f64>,
    /// Write the SVG here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Stop after this many frames even if still animating
    #[arg(long = "max-frames", default_value_t = DEFAULT_MAX_FRAMES)]
    pub max_frames: usize,
}

impl PreviewArgs {
    pub fn options(&self) -> PreviewOptions {
        PreviewOptions {
            fps: self.fps,
            release_after_ms: self.release_after,
            max_frames: self.max_frames,
        }
    }
}

fn parse_finite(value: &str) -> Result<f64, String> {
    let number: f64 = value.parse().map_err(|_| format!("{value:?} is not a number"))?;
    if number.is_finite() {
        Ok(number)
    } else {
        Err(format!("{value} is not finite"))
    }
}

fn parse_fps(value: &str) -> Result<f64, String> {
    let fps = parse_finite(value)?;
    if fps > 0.0 {
        Ok(fps)
    } else {
        Err("frame rate must be positive".to_string())
    }
}

fn parse_ms(value: &str) -> Result<f64, String> {
    let ms = parse_finite(value)?;
    if ms >= 0.0 {
        Ok(ms)
    } else {
        Err("time must not be negative".to_string())
    }
}

/// Load the widget options, falling back to the defaults without a path.
pub fn load_config(path: Option<&Path>) -> PreviewResult<WidgetConfig> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(ConfigError::from)?;
            Ok(WidgetConfig::from_json(&json)?)
        }
        None => Ok(WidgetConfig::default()),
    }
}

/// Press a fresh widget at t=0 and run frames until its animation stops.
pub fn simulate_hold(config: WidgetConfig, options: &PreviewOptions) -> PreviewReport {
    let mut presser = LongPresser::new(config);
    let completions = Rc::new(Cell::new(0u32));
    let counter = completions.clone();
    presser.on_pressed(move |id| {
        log::info!("Widget {id} pressed");
        counter.set(counter.get() + 1);
    });

    let clock = ManualClock::new(0.0);
    presser.on_device_down(Device::Mouse, clock.now_ms());

    let mut phase = presser.phase();
    let mut completed_at = None;
    let frame_loop = FixedStepLoop::at_fps(options.fps, options.max_frames);
    let frames = frame_loop.run_while(&clock, |frame| {
        let now = clock.now_ms();
        if let Some(release) = options.release_after_ms {
            if now >= release && presser.is_pressed() {
                presser.on_device_up(Device::Mouse, now);
            }
        }

        let outcome = presser.tick(now);
        if outcome == TickOutcome::Completed {
            completed_at = Some(frame);
        }
        if presser.phase() != phase {
            log::debug!("Frame {frame} ({now:.1}ms): {:?} -> {:?}", phase, presser.phase());
            phase = presser.phase();
        }
        outcome.into()
    });

    PreviewReport {
        frames,
        completed_at,
        completions: completions.get(),
        end_ms: clock.now_ms(),
        phase: presser.phase(),
        svg: presser.to_svg(),
    }
}

/// Write the SVG to `out`, or stdout without a path.
pub fn write_svg(svg: &str, out: Option<&Path>) -> PreviewResult<()> {
    match out {
        Some(path) => fs::write(path, svg)?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{svg}")?;
        }
    }
    Ok(())
}

/// Entry point of the preview binary.
pub fn run(args: &PreviewArgs) -> PreviewResult<PreviewReport> {
    let config = load_config(args.config.as_deref())?;
    let options = args.options();
    log::info!(
        "Simulating {:?} for {:.0}ms at {} fps",
        config.text,
        config.duration_ms(),
        options.fps
    );

    let report = simulate_hold(config, &options);
    match report.completed_at {
        Some(frame) => log::info!("Completed on frame {frame} at {:.1}ms", report.end_ms),
        None => log::info!("Not completed; idle after {} frames", report.frames),
    }
    write_svg(&report.svg, args.out.as_deref())?;
    Ok(report)
}
