//! The tick strip.
//!
//! Renders the window of the backing strip that the current raw offset
//! makes visible: an accent bar at every group start, short secondary
//! bars between them, a center cursor, and a fade toward both edges (the
//! terminal analog of a gradient mask). The strip itself carries no
//! value; it only has to move convincingly under the pointer.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

/// Bars per tick group: one accent bar and five secondary ones.
const BARS_PER_GROUP: u32 = 6;

const ACCENT_BAR: &str = "┃";
const SECONDARY_BAR: &str = "│";
const CURSOR: &str = "▼";

pub struct SliderWidget;

impl SliderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        // Remember where the strip is for mouse hit-testing.
        app.strip_area = area;

        if area.width < 2 || area.height == 0 {
            return;
        }

        let geometry = app.surface.geometry();
        let viewport = geometry.viewport();
        let px_per_cell = app.surface.px_per_cell();
        let groups = u32::from(app.config.ui.groups_per_viewport);
        let bar_spacing = viewport / f64::from(groups * BARS_PER_GROUP);

        let cursor_row = area.y;
        let bar_rows = if area.height > 1 {
            (area.y + 1)..(area.y + area.height)
        } else {
            area.y..(area.y + 1)
        };
        let baseline = bar_rows.end - 1;

        let buf = frame.buffer_mut();

        for (column, accent) in bar_columns(
            app.surface.offset(),
            px_per_cell,
            area.width,
            bar_spacing,
            BARS_PER_GROUP,
        ) {
            let x = area.x + column;
            let style = bar_style(&app.theme, column, area.width, accent);
            if accent {
                // Accent bars run the full strip height.
                for y in bar_rows.clone() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_symbol(ACCENT_BAR).set_style(style);
                    }
                }
            } else if let Some(cell) = buf.cell_mut((x, baseline)) {
                cell.set_symbol(SECONDARY_BAR).set_style(style);
            }
        }

        // Center cursor, pulsing on value changes.
        if area.height > 1 {
            let color = if app.pulse.is_live() {
                app.theme.pulse
            } else {
                app.theme.accent
            };
            let x = area.x + area.width / 2;
            if let Some(cell) = buf.cell_mut((x, cursor_row)) {
                cell.set_symbol(CURSOR)
                    .set_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
            }
        }
    }
}

/// Columns (relative to the area) that carry a bar, and whether that bar
/// is a group-start accent bar.
fn bar_columns(
    offset: f64,
    px_per_cell: f64,
    width: u16,
    bar_spacing: f64,
    bars_per_group: u32,
) -> Vec<(u16, bool)> {
    let viewport = f64::from(width) * px_per_cell;
    let first = (offset / bar_spacing).floor() as i64;
    let last = ((offset + viewport) / bar_spacing).ceil() as i64;

    let mut bars = Vec::new();
    for k in first..=last {
        let px = k as f64 * bar_spacing;
        let column = ((px - offset) / px_per_cell).floor();
        if column < 0.0 || column >= f64::from(width) {
            continue;
        }
        let accent = k.rem_euclid(i64::from(bars_per_group)) == 0;
        bars.push((column as u16, accent));
    }
    bars
}

/// Fade bars toward the edges; the center stays at full strength.
fn bar_style(theme: &Theme, column: u16, width: u16, accent: bool) -> Style {
    let center = f64::from(width) / 2.0;
    let distance = (f64::from(column) - center).abs() / center;

    let color = if accent {
        if distance > 0.85 {
            theme.grey1
        } else {
            theme.accent
        }
    } else {
        fade_color(theme, distance)
    };
    Style::default().fg(color)
}

fn fade_color(theme: &Theme, distance: f64) -> Color {
    if distance < 0.3 {
        theme.fg1
    } else if distance < 0.55 {
        theme.grey2
    } else if distance < 0.8 {
        theme.grey1
    } else {
        theme.grey0
    }
}
