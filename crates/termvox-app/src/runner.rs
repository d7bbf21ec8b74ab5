//! Application runner and frame loop.

use std::thread;
use std::time::{Duration, Instant};

use termvox_input::{ActionMap, InputManager, TerminalKeys};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::app::TerminalApp;
use crate::context::AppContext;
use crate::frame::FrameContext;
use crate::terminal::{StdoutOutput, TerminalOutput, TerminalSession};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Name used in log messages.
    pub title: String,
    /// Sleep after every frame.
    pub frame_interval: Duration,
    /// Draw on the terminal's alternate screen.
    pub alternate_screen: bool,
    /// Stop after this many rendered frames (None to run until quit).
    pub max_frames: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "termvox".to_string(),
            frame_interval: Duration::from_millis(33),
            alternate_screen: true,
            max_frames: None,
        }
    }
}

impl AppConfig {
    /// Create a new config with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the sleep between frames.
    #[must_use]
    pub const fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Set the sleep between frames from a target FPS.
    #[must_use]
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.frame_interval = Duration::from_secs(1) / fps.max(1);
        self
    }

    /// Enable or disable the alternate screen.
    #[must_use]
    pub const fn with_alternate_screen(mut self, alternate_screen: bool) -> Self {
        self.alternate_screen = alternate_screen;
        self
    }

    /// Stop after `frames` rendered frames.
    #[must_use]
    pub const fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }
}

/// Frame statistics for one run of the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    /// Frames rendered.
    pub frames: u64,
    /// `true` if the loop ended on the quit action.
    pub quit: bool,
    pub min_fps: f64,
    pub max_fps: f64,
    pub avg_fps: f64,
}

/// Run a `TerminalApp` on the real terminal.
///
/// This function initializes logging, sets up the terminal, and runs the
/// frame loop until the app asks to quit. The terminal is restored before
/// returning, including on error.
pub fn run_app<A: TerminalApp>(config: AppConfig) -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with frames on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("{} starting...", config.title);

    let stats = {
        let _session = TerminalSession::enter(config.alternate_screen);
        let input = InputManager::new(Box::new(TerminalKeys::new()), ActionMap::default_bindings());
        let mut output = StdoutOutput::new();
        run_frames::<A>(&config, AppContext::new(input), &mut output)?
    };

    info!("{} exited after {} frames", config.title, stats.frames);
    Ok(())
}

/// Run the frame loop with the given input and output.
///
/// Each frame: poll input, stop if the app wants to quit, update, render,
/// write the frame over the previous one, sleep. The terminal mode is left
/// alone.
pub fn run_frames<A: TerminalApp>(
    config: &AppConfig,
    mut ctx: AppContext,
    output: &mut impl TerminalOutput,
) -> anyhow::Result<RunStats> {
    let mut app = A::init(&mut ctx)?;
    let mut frame = FrameContext::default();
    let mut fps = FpsTracker::default();
    let mut quit = false;

    let result: anyhow::Result<()> = loop {
        if config.max_frames.is_some_and(|max| ctx.frame_count >= max) {
            debug!("frame limit reached");
            break Ok(());
        }

        ctx.input.poll();
        if app.should_quit(&ctx) {
            info!("Quit requested");
            quit = true;
            break Ok(());
        }

        let now = Instant::now();
        let dt = now.duration_since(ctx.last_frame_time).as_secs_f32();
        ctx.last_frame_time = now;
        fps.record(dt);

        app.update(&ctx);

        frame.begin(ctx.frame_count, dt);
        if let Err(e) = app.render(&ctx, &mut frame) {
            break Err(e);
        }
        if let Err(e) = present(output, &frame.text) {
            break Err(e.into());
        }
        ctx.frame_count += 1;

        if !config.frame_interval.is_zero() {
            thread::sleep(config.frame_interval);
        }
    };

    app.cleanup(&mut ctx);
    result?;

    let stats = fps.finish(ctx.frame_count, quit);
    if stats.frames > 0 {
        info!("FPS Statistics:");
        info!("  Min: {:.1}", stats.min_fps);
        info!("  Max: {:.1}", stats.max_fps);
        info!("  Avg: {:.1}", stats.avg_fps);
        info!("  Total frames: {}", stats.frames);
    }
    Ok(stats)
}

fn present(output: &mut impl TerminalOutput, text: &str) -> std::io::Result<()> {
    output.move_cursor_home()?;
    output.write(text)?;
    output.flush()
}

#[derive(Debug)]
struct FpsTracker {
    min_fps: f64,
    max_fps: f64,
    fps_sum: f64,
    samples: u64,
}

impl Default for FpsTracker {
    fn default() -> Self {
        Self {
            min_fps: f64::MAX,
            max_fps: 0.0,
            fps_sum: 0.0,
            samples: 0,
        }
    }
}

impl FpsTracker {
    fn record(&mut self, dt: f32) {
        if dt > 0.0 {
            let fps = 1.0 / f64::from(dt);
            self.min_fps = self.min_fps.min(fps);
            self.max_fps = self.max_fps.max(fps);
            self.fps_sum += fps;
            self.samples += 1;
        }
    }

    fn finish(self, frames: u64, quit: bool) -> RunStats {
        let (min_fps, avg_fps) = if self.samples == 0 {
            (0.0, 0.0)
        } else {
            (self.min_fps, self.fps_sum / self.samples as f64)
        };
        RunStats {
            frames,
            quit,
            min_fps,
            max_fps: self.max_fps,
            avg_fps,
        }
    }
}
