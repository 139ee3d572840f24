use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event;
use ratatui::DefaultTerminal;

use careplan::app::App;
use careplan::cli::Args;
use careplan::client::{self, BACKEND_UNREACHABLE, CarePlanClient};
use careplan::config::{self, API_URL_ENV, Config};
use careplan::logging::init_logging;
use careplan::terminal::{disable_input_modes, enable_input_modes};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    if let Some(path) = init_logging() {
        log::info!("Logging to {}", path.display());
    }

    let loaded = config::load_config(args.config.as_deref());
    let mut config = loaded.config;
    config::apply_overrides(
        &mut config,
        args.api_url.as_deref(),
        std::env::var(API_URL_ENV).ok().as_deref(),
        args.output_dir.as_deref(),
    );

    if args.check_health {
        return Ok(check_health(&config));
    }

    let mut app = App::new(&config);
    app.start_worker(&config.api);
    if let Some(index) = args.sample_index() {
        app.load_sample(index);
    }
    if let Some(warning) = loaded.warning {
        app.notification.show_warning(&warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    enable_input_modes(&mut std::io::stdout())?;

    let result = run(&mut terminal, &mut app);

    let _ = disable_input_modes(&mut std::io::stdout());
    ratatui::restore();

    result.map(|_| ExitCode::SUCCESS)
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

fn check_health(config: &Config) -> ExitCode {
    let result = CarePlanClient::new(&config.api)
        .and_then(|http| client::block_on(async move { http.health().await })?);

    match result {
        Ok(status) => {
            println!(
                "{}: {} (version {}, {})",
                config.api.base_url, status.status, status.version, status.environment
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::warn!("Health check failed: {}", e);
            eprintln!("{} at {}", BACKEND_UNREACHABLE, config.api.base_url);
            ExitCode::FAILURE
        }
    }
}
