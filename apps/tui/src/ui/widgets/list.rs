use crate::app::{App, Pane};
use crate::ui::widgets::palette::Palette;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

const NAME_WIDTH: u16 = 22;

/// First row to draw so that `selected_index` stays visible.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows || selected_index < max_visible_rows {
        return 0;
    }

    selected_index + 1 - max_visible_rows
}

pub fn render_country_list(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let focused = app.pane == Pane::List;
    let block = Block::default()
        .title(format!(" {} ", app.snapshot.counter.text()))
        .borders(Borders::ALL)
        .border_style(palette.border(focused));

    let visible = usize::from(area.height.saturating_sub(2));
    let offset = scroll_offset(app.snapshot.list.len(), visible, app.selected_row);

    let rows = app
        .snapshot
        .list
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, entry)| {
            let style = if focused && index == app.selected_row {
                palette.highlight()
            } else if index == app.selected_row {
                Style::default().fg(palette.accent)
            } else {
                palette.base()
            };
            Row::new(vec![
                Cell::from(entry.name.clone()),
                Cell::from(entry.code.clone()),
                Cell::from(entry.summary()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(NAME_WIDTH),
        Constraint::Length(4),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths)
        .block(block)
        .style(palette.base());
    f.render_widget(table, area);
}
