use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use pulsetop::app::App;
use pulsetop::config::{self, load_config, load_config_from_path};
use pulsetop::event::{Event, EventHandler};
use pulsetop::ui;

#[derive(Parser)]
#[command(name = "pulsetop", about = "Live host-telemetry dashboard TUI")]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refresh rate in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Default process sort key: cpu, memory, name
    #[arg(long)]
    sort: Option<String>,

    /// Write tracing output to this file (stderr is owned by the TUI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;
    let config = load_config_for_cli(&cli);

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, config).await;

    ratatui::restore();

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: config::Config) -> Result<()> {
    let tick_rate = Duration::from_millis(config.general.refresh_rate_ms);
    let mut app = App::new(&config);
    let mut events = EventHandler::new(tick_rate);

    // Prime the dashboard before the first tick fires.
    app.on_tick();
    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        app.handle_key(key);
                    }
                }
                Event::Tick => app.on_tick(),
                Event::Resize => {}
            }
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }
    }

    Ok(())
}

fn init_tracing(log_file: Option<&std::path::Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(ref sort) = cli.sort {
        config.general.default_sort = sort.clone();
    }

    config
}
