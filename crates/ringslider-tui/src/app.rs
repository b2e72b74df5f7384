use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tracing::trace;

use ringslider_core::{AppConfig, Result, SliderEngine, ValueBinder};

use crate::feedback::TickPulse;
use crate::glide::Glide;
use crate::input::Action;
use crate::surface::ScrollSurface;
use crate::theme::Theme;

/// Velocity of a keyboard fling, in ticks per second.
const FLING_TICKS_PER_SEC: f64 = 25.0;
/// Largest drag-release velocity carried into a glide, in ticks per second.
const MAX_RELEASE_TICKS_PER_SEC: f64 = 60.0;
/// Drag releases slower than this start no glide, in ticks per second.
const MIN_RELEASE_TICKS_PER_SEC: f64 = 3.0;

/// An in-progress drag gesture on the strip.
#[derive(Debug, Clone)]
struct DragState {
    last_column: u16,
    last_moved: Instant,
    /// px/s of the most recent movement, for release inertia.
    velocity: f64,
}

/// Demo application state around one ring slider.
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    /// The bound value the slider adjusts.
    pub value: f64,
    initial_value: f64,
    engine: SliderEngine,
    binder: ValueBinder,
    pub surface: ScrollSurface,
    glide: Glide,
    pub pulse: TickPulse,
    drag: Option<DragState>,
    /// Strip hit-test area, recorded by the last draw.
    pub strip_area: Rect,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: AppConfig,
        theme: Theme,
        initial_value: f64,
        viewport_cells: u16,
    ) -> Result<Self> {
        config.validate()?;
        let surface = ScrollSurface::new(
            viewport_cells,
            config.ui.px_per_cell,
            config.ui.strip_runs,
        )?;
        let binder = ValueBinder::new(config.slider.stride, config.value_range());
        let engine = SliderEngine::new(config.slider.tick_width);
        let glide = Glide::new(Duration::from_millis(config.ui.glide_half_life_ms));
        let pulse = TickPulse::new(Duration::from_millis(config.ui.pulse_ms));
        // Seed through the binder so an out-of-range start clamps.
        let value = binder.apply(initial_value, 0.0);

        Ok(Self {
            config,
            theme,
            value,
            initial_value,
            engine,
            binder,
            surface,
            glide,
            pulse,
            drag: None,
            strip_area: Rect::default(),
            show_help: false,
            status_message: None,
            should_quit: false,
        })
    }

    /// Apply one input action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::StepLeft => self.step(-1.0),
            Action::StepRight => self.step(1.0),
            Action::FlingLeft => self.fling(-FLING_TICKS_PER_SEC),
            Action::FlingRight => self.fling(FLING_TICKS_PER_SEC),
            Action::Reset => self.reset(),
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::ExitMode => {
                self.show_help = false;
                self.glide.stop();
            }
            Action::DragStart(column) => {
                self.glide.stop();
                self.drag = Some(DragState {
                    last_column: column,
                    last_moved: Instant::now(),
                    velocity: 0.0,
                });
            }
            Action::DragMove(column) => self.drag_to(column),
            Action::DragEnd => self.release_drag(),
            Action::None => {}
        }
    }

    /// Advance time-driven motion. Call once per frame.
    pub fn on_tick(&mut self) {
        let px = self.glide.update();
        if px != 0.0 {
            self.apply_scroll(px);
        }
    }

    /// Terminal width changed: rebuild the strip for the new viewport.
    /// The bound value survives; scroll position restarts at the origin.
    pub fn resize(&mut self, viewport_cells: u16) -> Result<()> {
        self.surface
            .resize(viewport_cells, self.config.ui.strip_runs)?;
        self.engine.reset();
        self.glide.stop();
        self.drag = None;
        Ok(())
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[inline]
    pub fn is_gliding(&self) -> bool {
        self.glide.is_gliding()
    }

    /// Whether the next frame should poll at the animation rate.
    pub fn needs_fast_tick(&self) -> bool {
        self.glide.is_gliding() || self.pulse.is_live()
    }

    /// Nudge by whole ticks.
    fn step(&mut self, ticks: f64) {
        self.apply_scroll(ticks * self.engine.tick_width());
    }

    fn fling(&mut self, ticks_per_sec: f64) {
        self.glide
            .fling(ticks_per_sec * self.engine.tick_width());
    }

    fn drag_to(&mut self, column: u16) {
        let Some(ref mut drag) = self.drag else {
            return;
        };
        // Dragging the strip leftwards pulls larger values into view.
        let cells = f64::from(drag.last_column) - f64::from(column);
        if cells == 0.0 {
            return;
        }
        let px = cells * self.surface.px_per_cell();

        let now = Instant::now();
        let dt = now.duration_since(drag.last_moved).as_secs_f64();
        if dt > 0.0 {
            drag.velocity = px / dt;
        }
        drag.last_column = column;
        drag.last_moved = now;

        self.apply_scroll(px);
    }

    fn release_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let tick_width = self.engine.tick_width();
        let max = MAX_RELEASE_TICKS_PER_SEC * tick_width;
        let min = MIN_RELEASE_TICKS_PER_SEC * tick_width;
        // A stale movement sample means the pointer stopped before
        // releasing: no inertia.
        if drag.last_moved.elapsed() > Duration::from_millis(120) {
            return;
        }
        if drag.velocity.abs() >= min {
            self.glide.fling(drag.velocity.clamp(-max, max));
        }
    }

    fn reset(&mut self) {
        self.value = self.binder.apply(self.initial_value, 0.0);
        self.engine.reset();
        self.surface.set_offset(0.0);
        self.glide.stop();
        self.pulse.clear();
        self.drag = None;
        self.status_message = Some(format!(" reset to {:.2}", self.value));
    }

    /// Scroll the surface and fold any resulting tick delta into the
    /// bound value.
    fn apply_scroll(&mut self, px: f64) {
        let update = self.surface.scroll_feeding(px, &mut self.engine);
        if let Some(delta) = update.value_delta {
            self.value = self.binder.apply(self.value, delta);
            self.pulse.trigger();
            self.status_message = None;
            trace!(delta, value = self.value, "value updated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringslider_core::config::SliderConfig;

    fn app() -> App {
        // 60 columns at the default 5 px/cell: viewport 300 px.
        App::new(AppConfig::default(), Theme::default(), 0.0, 60).unwrap()
    }

    #[test]
    fn test_step_moves_one_stride() {
        let mut app = app();
        app.handle_action(Action::StepRight);
        assert_eq!(app.value, 1.0);
        app.handle_action(Action::StepLeft);
        assert_eq!(app.value, 0.0);
    }

    #[test]
    fn test_drag_scrolls_ticks() {
        let mut app = app();
        app.handle_action(Action::DragStart(40));
        // Four columns left at 5 px/cell is one 20 px tick.
        app.handle_action(Action::DragMove(36));
        assert_eq!(app.value, 1.0);
        app.handle_action(Action::DragEnd);
        assert!(!app.is_dragging());
    }

    #[test]
    fn test_drag_right_decreases_value() {
        let mut app = app();
        app.handle_action(Action::DragStart(40));
        app.handle_action(Action::DragMove(48));
        assert_eq!(app.value, -2.0);
    }

    #[test]
    fn test_value_clamps_to_range() {
        let config = AppConfig {
            slider: SliderConfig {
                value_min: 0.0,
                value_max: 100.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut app = App::new(config, Theme::default(), 98.0, 60).unwrap();
        app.handle_action(Action::DragStart(40));
        // 20 columns is 100 px: five ticks, candidate 103, clamped.
        app.handle_action(Action::DragMove(20));
        assert_eq!(app.value, 100.0);
    }

    #[test]
    fn test_out_of_range_seed_clamps() {
        let config = AppConfig {
            slider: SliderConfig {
                value_min: 0.0,
                value_max: 10.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let app = App::new(config, Theme::default(), 42.0, 60).unwrap();
        assert_eq!(app.value, 10.0);
    }

    #[test]
    fn test_fling_starts_glide() {
        let mut app = app();
        app.handle_action(Action::FlingRight);
        assert!(app.is_gliding());
        assert!(app.needs_fast_tick());
    }

    #[test]
    fn test_reset_restores_seed_and_origin() {
        let mut app = app();
        app.handle_action(Action::StepRight);
        app.handle_action(Action::StepRight);
        app.handle_action(Action::Reset);
        assert_eq!(app.value, 0.0);
        assert_eq!(app.surface.offset(), 0.0);
        assert!(!app.is_gliding());
    }

    #[test]
    fn test_pulse_fires_on_tick_change() {
        let mut app = app();
        assert!(!app.pulse.is_live());
        app.handle_action(Action::StepRight);
        assert!(app.pulse.is_live());
    }

    #[test]
    fn test_help_toggle() {
        let mut app = app();
        app.handle_action(Action::ToggleHelp);
        assert!(app.show_help);
        app.handle_action(Action::ExitMode);
        assert!(!app.show_help);
    }
}
