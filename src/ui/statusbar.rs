use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::InputMode;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    input_mode: InputMode,
    filter_text: &str,
    sort_label: &str,
    status_message: Option<&(String, std::time::Instant)>,
) {
    // Status message takes priority
    if let Some((msg, _)) = status_message {
        let color = if msg.starts_with("Sent") {
            Color::Green
        } else {
            Color::Red
        };
        let line = Line::from(Span::styled(
            format!(" {msg}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let line = match input_mode {
        InputMode::Filter => Line::from(vec![
            Span::styled(
                " / ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {filter_text}")),
            Span::styled("\u{2588}", Style::default().fg(Color::Cyan)),
            Span::styled("  Esc Cancel  Enter Apply", Style::default().fg(Color::DarkGray)),
        ]),
        _ => {
            let mut spans = vec![Span::styled(
                format!(" sort: {sort_label}"),
                Style::default().fg(Color::Gray),
            )];
            if !filter_text.is_empty() {
                spans.push(Span::styled(
                    format!("  filter: {filter_text}"),
                    Style::default().fg(Color::Cyan),
                ));
            }
            spans.push(Span::styled(
                "  q Quit  / Filter  s Sort  k Kill  t Term  f Files  ? Help",
                Style::default().fg(Color::DarkGray),
            ));
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}
