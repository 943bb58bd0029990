use std::io::{self, stdout};
use std::panic::{set_hook, take_hook};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use ::tracing::instrument;
use note_updater::{
    cli,
    config::Config,
    headless,
    release::{HttpReleaseSource, ReleaseSource},
    updater_tracing, App,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();

    let config = Config::load(&args.config_path)
        .await
        .map(|config| args.apply_overrides(config))?;

    if args.print_config {
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    updater_tracing::init(&config, args.mode.is_tui())?;

    match args.mode {
        cli::ModeArgs::Tui => start_tui(&config).await,
        cli::ModeArgs::Print => print_check(&config).await,
    }
}

#[instrument(skip_all)]
async fn start_tui(config: &Config) -> Result<()> {
    ::tracing::info!("Loaded configuration: {:?}", config);

    let mut app = App::from_config(config)?;

    // Setup terminal
    init_panic_hook();
    let mut terminal = init_tui().context("Failed to initialize terminal")?;

    let app_result = app.run(&mut terminal).await;

    restore_tui().context("Failed to restore terminal")?;
    terminal.show_cursor()?;

    if let Err(error) = &app_result {
        ::tracing::error!(?error, "Update dialog exited with an error");
    }

    app_result
}

async fn print_check(config: &Config) -> Result<()> {
    let source: Arc<dyn ReleaseSource> = Arc::new(HttpReleaseSource::from_config(config)?);

    let dialog = headless::check(config, source).await;
    print!("{}", headless::report(&dialog));

    Ok(())
}

fn init_panic_hook() {
    let original_hook = take_hook();
    set_hook(Box::new(move |panic_info| {
        // intentionally ignore errors here since we're already in a panic
        let _ = restore_tui();
        original_hook(panic_info);
    }));
}

fn init_tui() -> io::Result<Terminal<impl Backend>> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

fn restore_tui() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}
