use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct ReadoutWidget;

impl ReadoutWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let value_text = format!("{:.2}", app.value);

        // Center by display width, not char count.
        let text_width = value_text.width() as u16;
        let pad = area.width.saturating_sub(text_width) / 2;

        let line = Line::from(vec![
            Span::raw(" ".repeat(pad as usize)),
            Span::styled(
                value_text,
                Style::default()
                    .fg(app.theme.fg0)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
