use anyhow::{Context, Result};
use arrower::{
    app::{App, Flow},
    config::{Config, ConfigStore, FileConfigStore},
    runtime::{CrosstermEventSource, FixedTicker, Runner},
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use log::{info, LevelFilter};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use simplelog::WriteLogger;
use std::{
    fs::File,
    io::{self, stdin},
    path::{Path, PathBuf},
};

/// press the arrows as they appear; fastest clean runs top the leaderboard
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
pub struct Cli {
    /// number of arrows per challenge
    #[clap(short = 'l', long)]
    length: Option<usize>,

    /// timer refresh interval in milliseconds
    #[clap(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// seed for reproducible challenge sequences
    #[clap(long)]
    seed: Option<u64>,

    /// write debug logs to this file
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// store the effective length and tick rate as the new defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Flags override whatever the config file holds
    fn apply(&self, mut config: Config) -> Config {
        if let Some(length) = self.length {
            config.sequence_length = length;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_rate_ms = tick_ms;
        }
        config
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), file)
        .context("logger already initialized")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let store = FileConfigStore::new();
    let config = cli.apply(store.load());
    config.validate().context("invalid settings")?;
    if cli.save_config {
        store.save(&config).context("cannot save config")?;
        info!("saved config to {}", store.path().display());
    }
    info!("starting with {config:?}");

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, cli.seed);
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(app.config.tick_interval()),
    );

    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        // ticks are only delivered while a session timer is held
        let Some(event) = runner.step(app.game.is_ticking()) else {
            break;
        };
        if app.on_event(event) == Flow::Quit {
            break;
        }
    }

    info!("exiting after {} runs", app.game.leaderboard().len());
    Ok(())
}
