use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mode_str = if app.show_help {
            "HELP"
        } else if app.is_dragging() {
            "DRAG"
        } else if app.is_gliding() {
            "GLIDE"
        } else {
            "RING"
        };

        let range = app.config.value_range();
        let range_str = if *range.start() == f64::MIN && *range.end() == f64::MAX {
            "unbounded".to_string()
        } else {
            format!("{}..{}", range.start(), range.end())
        };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} | stride: {} | range: {}",
                mode_str, app.config.slider.stride, range_str
            )
        };

        let help_hint = " q:quit h/l:step H/L:fling 0:reset ?:help ";
        let padding_len = area.width.saturating_sub(
            status_text.len() as u16 + help_hint.len() as u16,
        ) as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg0).bg(app.theme.bg2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(app.theme.bg2),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey2).bg(app.theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
