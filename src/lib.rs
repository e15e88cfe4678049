pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod logging;
pub mod report;
pub mod resilience;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use app::{
    events::{AppEvent, spawn_input_task},
    settings::load_runtime_settings,
    state::{AppMode, AppState},
};
use chrono::Utc;
use cli::Cli;
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use data::{LocationQuery, WeatherClients};
use futures::StreamExt;
use log::info;
use logging::{LogSink, init_logging};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let sink = match (&cli.log_file, cli.one_shot) {
        (Some(path), _) => LogSink::File(path),
        (None, true) => LogSink::Stderr,
        (None, false) => LogSink::Disabled,
    };
    let level = if cli.log_file.is_none() && cli.one_shot {
        log::LevelFilter::Warn.min(cli.log_level.into())
    } else {
        cli.log_level.into()
    };
    init_logging(sink, level)?;

    if cli.one_shot {
        return run_one_shot(&cli).await;
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, cli).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_one_shot(cli: &Cli) -> Result<()> {
    let (settings, _) = load_runtime_settings(cli, true);
    let clients = WeatherClients::from_cli(cli);
    let snapshot = clients
        .load_snapshot(&LocationQuery::from_cli(cli), settings.units, settings.locale)
        .await?;
    let now = cli.now.unwrap_or_else(|| Utc::now().timestamp());

    let output = if cli.json {
        report::render_json(&snapshot, cli.kind.into(), now)?
    } else {
        report::render_text(&snapshot, now, cli.icon_mode(), settings.locale)
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end()).context("writing report failed")?;
    Ok(())
}

async fn run_inner(terminal: &mut Terminal<CrosstermBackend<Stdout>>, cli: Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let (settings, settings_path) = load_runtime_settings(&cli, true);
    let mut app = AppState::with_settings(&cli, settings, settings_path);
    info!("starting interactive session");

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx, &cli).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx, &cli).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        existing(panic);
    }));
}
