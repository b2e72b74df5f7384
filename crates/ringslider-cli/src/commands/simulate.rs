use anyhow::{anyhow, Result};

use ringslider_core::{AppConfig, SliderEngine, ValueBinder};
use ringslider_tui::ScrollSurface;

/// Feed a sequence of pixel movements through the full surface, engine
/// and binder stack without a terminal, printing each value change.
pub fn run(config: AppConfig, drags: &str, start_value: f64, width: u16) -> Result<()> {
    config.validate()?;

    let movements: Vec<f64> = drags
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .map_err(|_| anyhow!("invalid movement '{}', expected a number", s.trim()))
        })
        .collect::<Result<_>>()?;

    let mut surface = ScrollSurface::new(
        width.max(2),
        config.ui.px_per_cell,
        config.ui.strip_runs,
    )?;
    let mut engine = SliderEngine::new(config.slider.tick_width);
    let binder = ValueBinder::new(config.slider.stride, config.value_range());
    let mut value = binder.apply(start_value, 0.0);

    println!("start: value {value:.2}, offset {:.1}", surface.offset());

    for (i, px) in movements.iter().enumerate() {
        let update = surface.scroll_feeding(*px, &mut engine);
        match update.value_delta {
            Some(delta) => {
                value = binder.apply(value, delta);
                println!(
                    "move {:>3}: {:>+8.1} px -> delta {:>+6}  value {:.2}  (offset {:.1}, page {}{})",
                    i + 1,
                    px,
                    delta,
                    value,
                    surface.offset(),
                    engine.page(),
                    if update.teleported { ", wrapped" } else { "" },
                );
            }
            None => {
                println!(
                    "move {:>3}: {:>+8.1} px -> no tick   value {:.2}  (offset {:.1}, page {}{})",
                    i + 1,
                    px,
                    value,
                    surface.offset(),
                    engine.page(),
                    if update.teleported { ", wrapped" } else { "" },
                );
            }
        }
    }

    println!("final: value {value:.2}, tick {}", engine.last_tick());
    Ok(())
}
