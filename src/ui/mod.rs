pub mod header;
pub mod help;
pub mod overview;
pub mod proc_table;
pub mod statusbar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;
use crate::system::source::MetricsSource;

pub fn draw<S: MetricsSource>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let view = app.view();

    header::render(frame, chunks[0], view);
    overview::render(frame, chunks[1], view);
    proc_table::render(frame, chunks[2], view, app.selected_row);
    statusbar::render(
        frame,
        chunks[3],
        app.input_mode,
        &view.filter,
        view.sort_label,
        app.status_message.as_ref(),
    );

    if app.show_help() {
        help::render(frame, frame.area(), &app.help_entries());
    }
}
