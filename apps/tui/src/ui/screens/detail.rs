use crate::app::App;
use crate::ui::widgets::palette::Palette;
use crate::ui::widgets::popup::centered_rect;
use metafinder_core::messages;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_detail(app: &App, f: &mut Frame<'_>) {
    let Some(entry) = app.explorer.focused_entry() else {
        return;
    };
    let palette = Palette::for_theme(app.theme);
    let area = centered_rect(60, 60, f.area());

    let label = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let mut lines = entry
        .attributes
        .iter()
        .map(|attribute| {
            TextLine::from(vec![
                Span::styled(format!("{}: ", attribute.label), label),
                Span::styled(attribute.values.join(", "), palette.base()),
            ])
        })
        .collect::<Vec<_>>();
    if lines.is_empty() {
        lines.push(TextLine::from(Span::styled(
            app.text(messages::NO_METAS),
            Style::default().fg(palette.muted),
        )));
    }
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        app.snapshot.link.as_str(),
        Style::default().fg(palette.muted),
    )));
    lines.push(TextLine::from(Span::styled(
        app.text(messages::ESC_BACK),
        Style::default().fg(palette.muted),
    )));

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ({}) ", entry.name, entry.code))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.focus)),
        )
        .style(palette.base())
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
