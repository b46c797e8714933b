use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::engine::view::ViewModel;

pub fn render(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled(
            " pulsetop ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            view.system.hostname.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", view.system.platform),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("  {}", view.system.kernel),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("  {}", view.system.arch),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("  up {}", view.system.uptime_text),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!("  procs {}", view.process_count),
            Style::default().fg(Color::Gray),
        ),
    ];

    if let Some(battery) = &view.battery {
        let color = if battery.charging {
            Color::Green
        } else if battery.percent < 20.0 {
            Color::Red
        } else {
            Color::Gray
        };
        let glyph = if battery.charging { "\u{26a1}" } else { "\u{1f50b}" };
        spans.push(Span::styled(
            format!("  {glyph} {:.0}%", battery.percent),
            Style::default().fg(color),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
