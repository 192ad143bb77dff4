use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use fractal_clock_core::{Bounds, ClockSettings, FractalClock, LocalClock, TimeSource};
use fractal_clock_engine::core::{App, AppControl, FrameCtx};
use fractal_clock_engine::device::GpuInit;
use fractal_clock_engine::paint::Color;
use fractal_clock_engine::render::LineRenderer;
use fractal_clock_engine::scene::DrawList;
use fractal_clock_engine::window::{Runtime, RuntimeConfig};

use crate::strokes;

/// Screensaver builder.
///
/// ```rust,ignore
/// Saver::new()
///     .title("Fractal Clock")
///     .size(1024.0, 768.0)
///     .preview(true)
///     .run()?;
/// ```
pub struct Saver {
    title: String,
    width: f64,
    height: f64,
    preview: bool,
    settings: ClockSettings,
}

impl Saver {
    pub fn new() -> Self {
        Self {
            title: "fractal clock".to_string(),
            width: 1280.0,
            height: 720.0,
            preview: false,
            settings: ClockSettings::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Run the clock accelerated.
    pub fn preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    /// Override the clock tunables; validated when the saver runs.
    pub fn settings(mut self, settings: ClockSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Shows the system-zone clock until the window closes or the clock fails.
    pub fn run(self) -> Result<()> {
        self.run_with(LocalClock::new())
    }

    /// Runs against an arbitrary time source.
    pub fn run_with<S>(self, source: S) -> Result<()>
    where
        S: TimeSource + 'static,
    {
        let clock = FractalClock::new(self.settings, source, self.preview)
            .context("invalid clock settings")?;

        let config = RuntimeConfig {
            title: self.title,
            initial_size: LogicalSize::new(self.width, self.height),
        };

        Runtime::run(config, GpuInit::default(), SaverState::new(clock))
    }
}

impl Default for Saver {
    fn default() -> Self {
        Self::new()
    }
}

/// Implements `fractal_clock_engine::core::App`: one clock frame per redraw.
struct SaverState<S> {
    clock: FractalClock<S>,
    draw_list: DrawList,
    line_renderer: LineRenderer,
}

impl<S: TimeSource> SaverState<S> {
    fn new(clock: FractalClock<S>) -> Self {
        Self {
            clock,
            draw_list: DrawList::new(),
            line_renderer: LineRenderer::new(),
        }
    }

    /// Reads the clock once and records the frame's strokes. Returns the stroke count.
    ///
    /// A clock failure is fatal: there is no time to show, so it is returned
    /// for the runtime to hand back to `main`.
    fn record_frame(&mut self, bounds: Bounds) -> Result<usize> {
        let frame = self.clock.frame(bounds).context("clock unavailable")?;
        Ok(strokes::record(&mut self.draw_list, frame, bounds))
    }
}

impl<S: TimeSource> App for SaverState<S> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        let viewport = ctx.viewport();
        let bounds = Bounds::new(viewport.width as f64, viewport.height as f64);

        let count = self.record_frame(bounds)?;
        log::trace!(
            "frame {} ({:.1} ms): {count} strokes",
            ctx.time.frame_index,
            ctx.time.dt * 1000.0
        );

        let (draw_list, renderer) = (&self.draw_list, &mut self.line_renderer);
        Ok(ctx.render(Color::black(), |rctx, target| {
            renderer.render(rctx, target, draw_list);
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractal_clock_core::{ClockError, FixedTime};

    fn state(seconds: f64) -> SaverState<FixedTime> {
        let clock = FractalClock::new(ClockSettings::default(), FixedTime(seconds), false).unwrap();
        SaverState::new(clock)
    }

    #[test]
    fn records_a_full_frame() {
        let mut s = state(3600.0);
        assert_eq!(s.record_frame(Bounds::new(800.0, 600.0)).unwrap(), 2047);
        assert_eq!(s.draw_list.len(), 2047);
    }

    #[test]
    fn clock_failure_is_an_error_not_a_quiet_exit() {
        let mut s = state(f64::NAN);
        let err = s.record_frame(Bounds::new(800.0, 600.0)).unwrap_err();

        assert!(err.to_string().contains("clock unavailable"));
        assert!(matches!(
            err.downcast_ref::<ClockError>(),
            Some(ClockError::InvalidReading(v)) if v.is_nan()
        ));
        assert!(s.draw_list.is_empty());
    }
}
