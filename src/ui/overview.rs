use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Sparkline};

use crate::engine::view::{LoadSeverity, ViewModel};

/// The four metric cards: CPU, memory, disk, network, each with its
/// bounded-history sparkline.
pub fn render(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_cpu_card(frame, cards[0], view);
    render_memory_card(frame, cards[1], view);
    render_disk_card(frame, cards[2], view);
    render_network_card(frame, cards[3], view);
}

fn card_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ))
}

fn split_card(frame: &mut Frame, area: Rect, block: Block) -> (Rect, Rect) {
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);
    (rows[0], rows[1])
}

fn sparkline_data(samples: &[f64]) -> Vec<u64> {
    samples.iter().map(|v| v.max(0.0) as u64).collect()
}

fn severity_color(severity: LoadSeverity) -> Color {
    match severity {
        LoadSeverity::Nominal => Color::Green,
        LoadSeverity::Warning => Color::Yellow,
        LoadSeverity::Critical => Color::Red,
    }
}

fn render_cpu_card(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let title = format!(" CPU {:.1}% ", view.cpu.total_percent);
    let (text_area, spark_area) = split_card(frame, area, card_block(title));

    let mut detail = vec![Span::styled(
        format!("{}c/{}t", view.cpu.cores, view.cpu.threads),
        Style::default().fg(Color::Gray),
    )];
    if view.cpu.frequency_ghz > 0.0 {
        detail.push(Span::styled(
            format!(" {:.2} GHz", view.cpu.frequency_ghz),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(temp) = view.cpu.temperature {
        detail.push(Span::styled(
            format!(" {temp:.0}\u{b0}C"),
            Style::default().fg(Color::Yellow),
        ));
    }
    let load_spans: Vec<Span> = view
        .cpu
        .load_avg
        .iter()
        .zip(view.cpu.load_severity.iter())
        .map(|(load, severity)| {
            Span::styled(
                format!(" {load:.2}"),
                Style::default().fg(severity_color(*severity)),
            )
        })
        .collect();

    let mut load_line = vec![Span::styled("load", Style::default().fg(Color::DarkGray))];
    load_line.extend(load_spans);

    frame.render_widget(
        Paragraph::new(vec![Line::from(detail), Line::from(load_line)]),
        text_area,
    );

    let data = sparkline_data(&view.history.cpu);
    frame.render_widget(
        Sparkline::default()
            .data(&data)
            .max(100)
            .style(Style::default().fg(Color::Cyan)),
        spark_area,
    );
}

fn render_memory_card(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let title = format!(" MEM {:.1}% ", view.memory.used_percent);
    let (text_area, spark_area) = split_card(frame, area, card_block(title));

    let lines = vec![
        Line::from(Span::styled(
            format!("{} / {}", view.memory.used_text, view.memory.total_text),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!(
                "swap {} / {}",
                view.memory.swap_used_text, view.memory.swap_total_text
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), text_area);

    let data = sparkline_data(&view.history.memory);
    frame.render_widget(
        Sparkline::default()
            .data(&data)
            .max(100)
            .style(Style::default().fg(Color::Magenta)),
        spark_area,
    );
}

fn render_disk_card(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let title = format!(" DISK {:.0}% ", view.disk_totals.avg_used_percent);
    let (text_area, spark_area) = split_card(frame, area, card_block(title));

    let lines = vec![
        Line::from(Span::styled(
            format!("R {}", view.disk_totals.read_rate_text),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!("W {}", view.disk_totals.write_rate_text),
            Style::default().fg(Color::Red),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), text_area);

    let data = sparkline_data(&view.history.disk);
    frame.render_widget(
        Sparkline::default()
            .data(&data)
            .max(100)
            .style(Style::default().fg(Color::Yellow)),
        spark_area,
    );
}

fn render_network_card(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let title = format!(" NET \u{2193}{} ", view.network_totals.download_text);
    let (text_area, spark_area) = split_card(frame, area, card_block(title));

    let lines = vec![
        Line::from(Span::styled(
            format!("\u{2193} {}", view.network_totals.download_text),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!("\u{2191} {}", view.network_totals.upload_text),
            Style::default().fg(Color::Red),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), text_area);

    // Network history is already scaled to KB/s; let the widget auto-scale.
    let data = sparkline_data(&view.history.network);
    frame.render_widget(
        Sparkline::default()
            .data(&data)
            .style(Style::default().fg(Color::Green)),
        spark_area,
    );
}
