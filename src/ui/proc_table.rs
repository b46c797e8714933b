use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

use crate::engine::view::{ProcessRow, ViewModel};

pub fn render(frame: &mut Frame, area: Rect, view: &ViewModel, selected_row: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(area);

    render_table(frame, chunks[0], view, selected_row);
    render_top(frame, chunks[1], &view.top_processes);
}

fn cpu_color(cpu: f64) -> Color {
    if cpu > 50.0 {
        Color::Red
    } else if cpu > 20.0 {
        Color::Yellow
    } else {
        Color::Cyan
    }
}

fn render_table(frame: &mut Frame, area: Rect, view: &ViewModel, selected_row: usize) {
    let title = if view.filter.is_empty() {
        format!(" Processes \u{2022} sort: {} ", view.sort_label)
    } else {
        format!(
            " Processes \u{2022} sort: {} \u{2022} filter: {} ",
            view.sort_label, view.filter
        )
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ));

    let header = Row::new(["Name", "PID", "CPU%", "Memory", "User"])
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view
        .processes
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let mut row = Row::new(vec![
                Cell::from(p.name.clone()),
                Cell::from(p.pid.to_string()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(format!("{:.1}", p.cpu_percent))
                    .style(Style::default().fg(cpu_color(p.cpu_percent))),
                Cell::from(p.memory_text.clone()).style(Style::default().fg(Color::Magenta)),
                Cell::from(p.user.clone()).style(Style::default().fg(Color::DarkGray)),
            ]);
            if i == selected_row {
                row = row.style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                );
            }
            row
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

fn render_top(frame: &mut Frame, area: Rect, top: &[ProcessRow]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Top Processes ",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ));

    let lines: Vec<Line> = top
        .iter()
        .enumerate()
        .map(|(i, p)| {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(p.name.clone()),
                Span::styled(
                    format!("  {:.1}%", p.cpu_percent),
                    Style::default().fg(cpu_color(p.cpu_percent)),
                ),
                Span::styled(
                    format!("  {}", p.memory_text),
                    Style::default().fg(Color::Magenta),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
