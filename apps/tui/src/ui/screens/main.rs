use crate::app::App;
use crate::ui::layout::main_layout;
use crate::ui::widgets::filters::render_filters;
use crate::ui::widgets::list::render_country_list;
use crate::ui::widgets::map::render_map;
use crate::ui::widgets::palette::Palette;
use metafinder_core::messages;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let palette = Palette::for_theme(app.theme);
    let area = f.area();
    f.render_widget(Block::default().style(palette.base()), area);

    let layout = main_layout(area);
    render_header(app, f, layout.header, &palette);
    render_filters(app, f, layout.filters, &palette, layout.mode);
    render_map(app, f, layout.map, &palette);
    render_country_list(app, f, layout.list, &palette);
    render_status(app, f, layout.status, &palette);
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let language = app.explorer.translator().language();
    let line = TextLine::from(vec![
        Span::styled(
            "metafinder ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.snapshot.counter.text(),
            Style::default()
                .fg(palette.matched)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  [{language}]  "), Style::default().fg(palette.muted)),
        Span::styled(app.snapshot.link.as_str(), Style::default().fg(palette.text)),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(false)),
    );
    f.render_widget(header, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let first = app.search_input.as_ref().map_or_else(
        || TextLine::from(Span::styled(app.status_message.as_str(), Style::default().fg(palette.focus))),
        |query| {
            TextLine::from(vec![
                Span::styled(
                    format!("{}: ", app.text(messages::JUMP_TO)),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(format!("{query}_"), Style::default().fg(palette.text)),
            ])
        },
    );

    let key = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let shortcuts = messages::SHORTCUTS
        .iter()
        .flat_map(|(keys, action)| {
            [
                Span::styled(*keys, key),
                Span::raw(format!(" {}  ", app.text(*action))),
            ]
        })
        .collect::<Vec<_>>();
    let shortcuts = TextLine::from(shortcuts);

    f.render_widget(Paragraph::new(vec![first, shortcuts]).style(palette.base()), area);
}
