use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct HelpWidget;

impl HelpWidget {
    /// Render the key reference popup over the whole frame.
    pub fn render(frame: &mut Frame, app: &App) {
        let area = frame.area();
        let keymap = &app.config.keymap;

        let entries = [
            ("drag / wheel", "scroll the strip"),
            (keymap.step_left.as_str(), "one tick down"),
            (keymap.step_right.as_str(), "one tick up"),
            (keymap.fling_left.as_str(), "fling down"),
            (keymap.fling_right.as_str(), "fling up"),
            (keymap.reset.as_str(), "reset value"),
            (keymap.quit.as_str(), "quit"),
        ];

        let popup_width = 40u16.min(area.width.saturating_sub(4));
        let popup_height = (entries.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.bg1));

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let lines: Vec<Line> = entries
            .iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {key:>12}  "),
                        Style::default()
                            .fg(app.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*what, Style::default().fg(app.theme.fg1)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
