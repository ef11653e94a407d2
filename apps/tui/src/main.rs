use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use metafinder::app::App;
use metafinder::cli::CliArgs;
use metafinder::config::{init_app_config, load_settings};
use metafinder::event;
use metafinder::loader::{available_languages, load_resources};
use metafinder::logging::{init_logging, LogTarget};
use metafinder::terminal;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config()?;

    // Piped output gets the headless report instead of the UI
    let headless = args.headless || !is_terminal();
    let target = if headless {
        LogTarget::Stderr
    } else {
        LogTarget::File(&config.log_path)
    };
    init_logging(args.debug, target)?;
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let resources = load_resources(&config)
        .await
        .wrap_err("Failed to load explorer resources")?;
    let languages = available_languages(&config.lang_dir).await;
    let settings = load_settings(&config.settings_path);
    let mut app = App::new(resources, languages, settings, config);

    if let Some(link) = args.link.as_deref() {
        if !app.apply_link(link) {
            tracing::warn!(link, "ignoring link without #! state");
        }
    }

    if headless {
        return event::run_headless(&app, args.json);
    }

    let mut terminal = terminal::setup_terminal()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup_terminal_state(true, true);
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
