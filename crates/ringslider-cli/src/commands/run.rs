use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use ringslider_core::AppConfig;
use ringslider_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    keymap::Keymap,
    widgets::{HelpWidget, ReadoutWidget, SliderWidget, StatusBarWidget},
    Theme,
};

pub fn run(
    mut config: AppConfig,
    value: f64,
    stride: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<()> {
    // CLI flags override the config file
    if let Some(stride) = stride {
        config.slider.stride = stride;
    }
    if let Some(min) = min {
        config.slider.value_min = min;
    }
    if let Some(max) = max {
        config.slider.value_max = max;
    }
    config.validate()?;

    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("ringslider")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state sized to the current terminal width
    let width = terminal.size()?.width;
    let mut app = App::new(config, Theme::default(), value, width.max(2))?;

    let event_handler = EventHandler::new(app.config.ui.tick_rate_ms);

    // Track whether the next frame needs the animation poll rate.
    // Checked at the END of each iteration for the NEXT iteration.
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Advance glide and fold any resulting movement into the value.
        app.on_tick();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Vertical layout: readout, strip, status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(3),
                    Constraint::Length(1),
                ])
                .split(size);

            ReadoutWidget::render(frame, main_layout[0], &app);
            SliderWidget::render(frame, main_layout[1], &mut app);
            StatusBarWidget::render(frame, main_layout[2], &app);

            if app.show_help {
                HelpWidget::render(frame, &app);
            }
        })?;

        // Handle events (use the animation rate while a glide or pulse
        // is live)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, &keymap);
                    app.handle_action(action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, app.strip_area);
                    app.handle_action(action);
                }
                AppEvent::Resize(w, _) => {
                    app.resize(w.max(2))?;
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_tick();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
