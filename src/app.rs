use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, parse_key};
use crate::engine::poll::Engine;
use crate::engine::procs::SortKey;
use crate::engine::view::ViewModel;
use crate::system::collector::Collector;
use crate::system::source::MetricsSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Filter,
    Help,
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub filter: KeyCode,
    pub kill: KeyCode,
    pub cycle_sort: KeyCode,
    pub open_terminal: KeyCode,
    pub open_files: KeyCode,
    pub refresh: KeyCode,
    pub help: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &crate::config::KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            filter: parse_key(&kb.filter).unwrap_or(KeyCode::Char('/')),
            kill: parse_key(&kb.kill).unwrap_or(KeyCode::Char('k')),
            cycle_sort: parse_key(&kb.cycle_sort).unwrap_or(KeyCode::Char('s')),
            open_terminal: parse_key(&kb.open_terminal).unwrap_or(KeyCode::Char('t')),
            open_files: parse_key(&kb.open_files).unwrap_or(KeyCode::Char('f')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::Char('r')),
            help: parse_key(&kb.help).unwrap_or(KeyCode::Char('?')),
        }
    }

    /// Returns (key_label, description) pairs for all configurable keybinds.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        let mut entries = vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.filter), "Filter processes"),
            (key_label(self.kill), "End selected process"),
            (key_label(self.cycle_sort), "Cycle sort key"),
            (key_label(self.open_terminal), "Open terminal"),
            (key_label(self.open_files), "Open file manager"),
            (key_label(self.refresh), "Refresh now"),
            (key_label(self.help), "Toggle help"),
        ];
        entries.push(("↑↓".to_string(), "Select process"));
        entries.push(("Ctrl+C".to_string(), "Quit (always)"));
        entries
    }
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Delete => "Del".to_string(),
        _ => "?".to_string(),
    }
}

pub struct App<S: MetricsSource> {
    pub running: bool,
    pub engine: Engine<S>,
    pub input_mode: InputMode,
    pub selected_row: usize,
    pub status_message: Option<(String, Instant)>,
    pub keybinds: ResolvedKeybinds,
}

impl App<Collector> {
    pub fn new(config: &Config) -> Self {
        Self::with_source(Collector::new(), config)
    }
}

impl<S: MetricsSource> App<S> {
    pub fn with_source(source: S, config: &Config) -> Self {
        let sort = SortKey::from_str_config(&config.general.default_sort);
        App {
            running: true,
            engine: Engine::new(source, config.general.history_length, sort),
            input_mode: InputMode::Normal,
            selected_row: 0,
            status_message: None,
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
        }
    }

    pub fn view(&self) -> &ViewModel {
        self.engine.view()
    }

    /// Run one poll cycle and expire stale status messages.
    pub fn on_tick(&mut self) {
        self.engine.run_cycle();
        self.clamp_selection();
        if let Some((_, created)) = &self.status_message
            && created.elapsed().as_secs() >= 3
        {
            self.status_message = None;
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::Normal => self.map_key_normal(key),
            InputMode::Filter => self.map_key_filter(key),
            InputMode::Help => self.map_key_help(key),
        }
    }

    fn map_key_normal(&self, key: KeyEvent) -> Action {
        let code = key.code;
        let kb = &self.keybinds;

        // Selection keys are hardwired (not configurable)
        if code == KeyCode::Up || code == KeyCode::Down {
            return Action::None; // handled directly in dispatch_key below
        }

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.filter {
            return Action::EnterFilterMode;
        }
        if code == kb.kill {
            return if let Some(pid) = self.selected_pid() {
                Action::Kill(pid)
            } else {
                Action::None
            };
        }
        if code == kb.cycle_sort {
            return Action::CycleSortMode;
        }
        if code == kb.open_terminal {
            return Action::LaunchTerminal;
        }
        if code == kb.open_files {
            return Action::LaunchFileManager;
        }
        if code == kb.refresh {
            return Action::Refresh;
        }
        if code == kb.help {
            return Action::ToggleHelp;
        }

        Action::None
    }

    fn map_key_help(&self, key: KeyEvent) -> Action {
        let code = key.code;
        // In help mode, only the help key and Esc dismiss, everything else is ignored
        if code == self.keybinds.help || code == KeyCode::Esc {
            return Action::ToggleHelp;
        }
        Action::None
    }

    fn map_key_filter(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::ClearFilter,
            KeyCode::Enter => Action::ExitFilterMode,
            KeyCode::Backspace => {
                let mut text = self.engine.filter().to_string();
                text.pop();
                Action::UpdateFilter(text)
            }
            KeyCode::Char(c) => {
                let mut text = self.engine.filter().to_string();
                text.push(c);
                Action::UpdateFilter(text)
            }
            _ => Action::None,
        }
    }

    /// Handle a key press end to end: selection movement plus mapped actions.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.input_mode == InputMode::Normal {
            match key.code {
                KeyCode::Up => {
                    self.selected_row = self.selected_row.saturating_sub(1);
                    return;
                }
                KeyCode::Down => {
                    self.selected_row += 1;
                    self.clamp_selection();
                    return;
                }
                _ => {}
            }
        }
        let action = self.map_key(key);
        self.dispatch(action);
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::EnterFilterMode => {
                self.input_mode = InputMode::Filter;
            }
            Action::ExitFilterMode => {
                self.input_mode = InputMode::Normal;
            }
            Action::ClearFilter => {
                self.engine.set_filter(String::new());
                self.input_mode = InputMode::Normal;
                self.clamp_selection();
            }
            Action::UpdateFilter(text) => {
                self.engine.set_filter(text);
                self.clamp_selection();
            }
            Action::CycleSortMode => {
                let next = self.engine.sort().next();
                self.engine.set_sort(next);
            }
            Action::Kill(pid) => {
                let msg = match self.engine.request_kill(pid) {
                    Ok(()) => format!("Sent SIGTERM to PID {pid}"),
                    Err(err) => err.to_string(),
                };
                self.status_message = Some((msg, Instant::now()));
            }
            Action::LaunchTerminal => {
                if let Err(err) = self.engine.launch_terminal() {
                    self.status_message = Some((err.to_string(), Instant::now()));
                }
            }
            Action::LaunchFileManager => {
                if let Err(err) = self.engine.launch_file_manager() {
                    self.status_message = Some((err.to_string(), Instant::now()));
                }
            }
            Action::ToggleHelp => {
                self.input_mode = if self.input_mode == InputMode::Help {
                    InputMode::Normal
                } else {
                    InputMode::Help
                };
            }
            Action::Refresh => {
                self.on_tick();
            }
            Action::None => {}
        }
    }

    pub fn selected_pid(&self) -> Option<u32> {
        self.view().processes.get(self.selected_row).map(|p| p.pid)
    }

    pub fn show_help(&self) -> bool {
        self.input_mode == InputMode::Help
    }

    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        self.keybinds.help_entries()
    }

    fn clamp_selection(&mut self) {
        let len = self.view().processes.len();
        if len == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= len {
            self.selected_row = len - 1;
        }
    }
}
