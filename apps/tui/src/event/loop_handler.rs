use color_eyre::Result;
use crossterm::event::{self, Event};
use metafinder_core::CountryEntry;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fmt::Write as _;
use std::io::Stdout;

use crate::app::{handle_input, handle_mouse, App};
use crate::ui;

/// Run the application in headless mode (no UI): print what the explorer
/// currently shows.
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let output = if json {
        render_headless_json(app)?
    } else {
        render_headless_text(app)
    };
    println!("{output}");
    Ok(())
}

fn render_headless_text(app: &App) -> String {
    let report = build_headless_report(app);
    let mut output = String::new();
    let _ = writeln!(output, "{} {}", report.count, report.label);
    let _ = writeln!(output, "Link: {}", report.link);
    for country in report.countries {
        let _ = writeln!(output, "- {} ({})", country.name, country.code);
        for attribute in &country.attributes {
            let _ = writeln!(output, "    {}: {}", attribute.label, attribute.values.join(", "));
        }
    }
    if let Some(focused) = &report.focused {
        let _ = writeln!(output, "\n{} ({})", focused.name, focused.code);
        for attribute in &focused.attributes {
            let _ = writeln!(output, "  {}: {}", attribute.label, attribute.values.join(", "));
        }
    }
    output.trim_end().to_string()
}

fn render_headless_json(app: &App) -> Result<String> {
    let report = build_headless_report(app);
    Ok(serde_json::to_string_pretty(&report)?)
}

fn build_headless_report(app: &App) -> HeadlessReport<'_> {
    HeadlessReport {
        language: app.explorer.translator().language().to_string(),
        count: app.snapshot.counter.count,
        label: &app.snapshot.counter.label,
        link: &app.snapshot.link,
        countries: &app.snapshot.list,
        focused: app.explorer.focused_entry(),
    }
}

#[derive(serde::Serialize)]
struct HeadlessReport<'a> {
    language: String,
    count: usize,
    label: &'a str,
    link: &'a str,
    countries: &'a [CountryEntry],
    focused: Option<CountryEntry>,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    while app.running {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) => handle_input(app, key.code).await,
            Ok(Event::Mouse(mouse)) => {
                let size = terminal.size()?;
                handle_mouse(app, mouse, ratatui::layout::Rect::new(0, 0, size.width, size.height));
            }
            Ok(Event::Resize(_, _) | Event::FocusGained | Event::FocusLost | Event::Paste(_)) => {}
            Err(error) => tracing::debug!(%error, "failed to read terminal event"),
        }
    }
    Ok(())
}
