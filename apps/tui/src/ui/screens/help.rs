use crate::app::App;
use crate::ui::widgets::palette::Palette;
use crate::ui::widgets::popup::centered_rect;
use metafinder_core::messages::{self, Message};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const KEYS: [(&str, Message); 14] = [
    ("Tab", messages::HELP_SWITCH_PANE),
    ("Left / Right", messages::HELP_FACETS),
    ("Up / Down", messages::HELP_CURSOR),
    ("Space / Enter", messages::HELP_TOGGLE),
    ("Enter (list)", messages::HELP_OPEN),
    ("PgUp / PgDn", messages::HELP_SCROLL),
    ("Home / End", messages::HELP_ENDS),
    ("Click (map)", messages::HELP_CLICK),
    ("/", messages::HELP_JUMP),
    ("c", messages::HELP_CLEAR),
    ("l", messages::HELP_LANGUAGE),
    ("t", messages::HELP_THEME),
    ("Esc", messages::HELP_CLOSE_POPUP),
    ("q", messages::HELP_QUIT),
];

pub fn render_help(app: &App, f: &mut Frame<'_>) {
    let palette = Palette::for_theme(app.theme);
    let area = centered_rect(70, 70, f.area());
    let key = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);

    let lines = KEYS
        .iter()
        .map(|(keys, action)| {
            TextLine::from(vec![
                Span::styled(format!("{keys:<16}"), key),
                Span::styled(app.text(*action), palette.base()),
            ])
        })
        .collect::<Vec<_>>();

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(
                    " {} ({}) ",
                    app.text(messages::HELP),
                    app.text(messages::HELP_CLOSE)
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .style(palette.base());

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
