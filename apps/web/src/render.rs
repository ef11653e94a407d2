use metafinder_core::messages::{self, Message};
use metafinder_core::{CellArea, Region, Theme, Translator, Treatment, ValueShape};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span, Text},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap,
    },
    Frame,
};

use crate::session::{Explorer, Pane, Session, Web};

// Shortcuts the browser build has no binding for.
const TERMINAL_ONLY_KEYS: [&str; 2] = ["/", "q"];

struct Colors {
    text: Color,
    background: Color,
    muted: Color,
    accent: Color,
    baseline: Color,
    matched: Color,
    focus: Color,
}

const fn colors(theme: Theme) -> Colors {
    match theme {
        Theme::Dark => Colors {
            text: Color::White,
            background: Color::Black,
            muted: Color::Gray,
            accent: Color::Cyan,
            baseline: Color::DarkGray,
            matched: Color::Green,
            focus: Color::Yellow,
        },
        Theme::Light => Colors {
            text: Color::Black,
            background: Color::White,
            muted: Color::Gray,
            accent: Color::Rgb(0, 0, 238),
            baseline: Color::Gray,
            matched: Color::Rgb(0, 128, 0),
            focus: Color::Red,
        },
    }
}

pub fn render(web: &Web, f: &mut Frame<'_>) {
    let colors = colors(web.theme);
    let area = f.area();
    let block = Block::default()
        .title("metafinder")
        .title_style(
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.muted))
        .style(Style::default().fg(colors.text).bg(colors.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &web.session {
        Session::Loading(pending) => {
            let loading = pending.translator().map_or(messages::LOADING.english, |translator| {
                translator.text(messages::LOADING)
            });
            let paragraph =
                Paragraph::new(Text::from(TextLine::from(loading))).alignment(Alignment::Center);
            f.render_widget(paragraph, inner);
        }
        Session::Failed(message) => render_failure(message, &colors, f, inner),
        Session::Ready(explorer) => {
            render_explorer(explorer, &colors, f, inner);
            if explorer.state.focused().is_some() {
                render_detail(explorer, &colors, f, inner);
            }
            if explorer.show_help {
                render_help(explorer.state.translator(), &colors, f, inner);
            }
        }
    }
}

fn render_failure(message: &str, colors: &Colors, f: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        TextLine::from(Span::styled(
            messages::LOAD_FAILED.english,
            Style::default().fg(colors.focus).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(message.to_string()),
        TextLine::from(""),
        TextLine::from(Span::styled(messages::RELOAD.english, Style::default().fg(colors.muted))),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Surfaces of the explorer screen inside the outer frame.
struct ExplorerLayout {
    header: Rect,
    filters: Rect,
    map: Rect,
    list: Rect,
    footer: Rect,
}

fn explorer_layout(area: Rect) -> ExplorerLayout {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .areas(area);
    let [filters, right] =
        Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)]).areas(body);
    let [map, list] =
        Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(right);
    ExplorerLayout {
        header,
        filters,
        map,
        list,
        footer,
    }
}

/// Cells the map canvas draws into for a terminal of `width` x `height`,
/// matching what [`render`] lays out.
pub fn map_cells(width: u16, height: u16) -> Option<CellArea> {
    let frame = Rect::new(0, 0, width, height).inner(Margin::new(1, 1));
    let map = explorer_layout(frame).map.inner(Margin::new(1, 1));
    (map.width > 0 && map.height > 0).then(|| CellArea::new(map.x, map.y, map.width, map.height))
}

fn text(explorer: &Explorer, message: Message) -> &str {
    explorer.state.translator().text(message)
}

fn render_explorer(explorer: &Explorer, colors: &Colors, f: &mut Frame<'_>, area: Rect) {
    let ExplorerLayout {
        header,
        filters,
        map,
        list,
        footer,
    } = explorer_layout(area);

    let line = TextLine::from(vec![
        Span::styled(
            explorer.snapshot.counter.text(),
            Style::default().fg(colors.matched).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]  ", explorer.state.translator().language()),
            Style::default().fg(colors.muted),
        ),
        Span::raw(explorer.snapshot.link.as_str()),
    ]);
    let paragraph = Paragraph::new(Text::from(line)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.accent)),
    );
    f.render_widget(paragraph, header);

    render_filters(explorer, colors, f, filters);
    render_map(explorer, colors, f, map);
    render_list(explorer, colors, f, list);

    let status = if explorer.status.is_empty() {
        messages::SHORTCUTS
            .iter()
            .filter(|(key, _)| !TERMINAL_ONLY_KEYS.contains(key))
            .map(|(key, action)| format!("{key} {}", text(explorer, *action)))
            .collect::<Vec<_>>()
            .join("  ")
    } else {
        explorer.status.clone()
    };
    f.render_widget(
        Paragraph::new(status)
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors.muted)),
        footer,
    );
}

fn pane_border(explorer: &Explorer, pane: Pane, colors: &Colors) -> Style {
    let color = if explorer.pane == pane { colors.accent } else { colors.muted };
    Style::default().fg(color)
}

fn render_filters(explorer: &Explorer, colors: &Colors, f: &mut Frame<'_>, area: Rect) {
    let Some(group) = explorer.panel.group(explorer.current_facet()) else {
        return;
    };
    let focused = explorer.pane == Pane::Filters;

    let mut lines = vec![
        TextLine::from(Span::styled(
            format!("< {} ({}/{}) >", group.label, explorer.facet_index + 1, explorer.panel.groups.len()),
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
    ];
    let visible = usize::from(area.height.saturating_sub(4));
    let offset = explorer.option_index.saturating_sub(visible.saturating_sub(1));
    lines.extend(
        group
            .options
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(index, option)| {
                let mark = match (group.shape, option.selected) {
                    (ValueShape::Sequence, true) => "[x] ",
                    (ValueShape::Sequence, false) => "[ ] ",
                    (ValueShape::Scalar, true) => "(*) ",
                    (ValueShape::Scalar, false) => "( ) ",
                };
                let style = if focused && index == explorer.option_index {
                    Style::default().fg(colors.background).bg(colors.accent)
                } else if option.selected {
                    Style::default().fg(colors.matched)
                } else {
                    Style::default().fg(colors.text)
                };
                TextLine::from(Span::styled(format!("{mark}{}", option.label), style))
            }),
    );

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(text(explorer, messages::FILTERS))
            .borders(Borders::ALL)
            .border_style(pane_border(explorer, Pane::Filters, colors)),
    );
    f.render_widget(paragraph, area);
}

fn draw_outline(ctx: &mut Context<'_>, region: &Region, color: Color) {
    for ring in &region.rings {
        for pair in ring.windows(2) {
            let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
            ctx.draw(&CanvasLine { x1, y1, x2, y2, color });
        }
        if let (Some(&(x1, y1)), Some(&(x2, y2))) = (ring.last(), ring.first()) {
            ctx.draw(&CanvasLine { x1, y1, x2, y2, color });
        }
    }
}

fn render_map(explorer: &Explorer, colors: &Colors, f: &mut Frame<'_>, area: Rect) {
    let layer = explorer.state.layer();
    let focused = explorer.state.focused().map(|record| record.code.as_str());

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(text(explorer, messages::MAP))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.muted)),
        )
        .marker(Marker::Braille)
        .x_bounds(layer.x_bounds())
        .y_bounds(layer.y_bounds())
        .paint(|ctx| {
            let mut lifted = false;
            for painted in &explorer.snapshot.spatial.regions {
                let Some(region) = layer.regions().get(painted.region) else {
                    continue;
                };
                let color = if painted.treatment == Treatment::Matched {
                    if !lifted {
                        ctx.layer();
                        lifted = true;
                    }
                    colors.matched
                } else {
                    colors.baseline
                };
                draw_outline(ctx, region, color);
            }
            if let Some(code) = focused {
                ctx.layer();
                for region in layer.regions().iter().filter(|region| region.code.as_deref() == Some(code)) {
                    draw_outline(ctx, region, colors.focus);
                }
            }
        });
    f.render_widget(canvas, area);
}

fn render_list(explorer: &Explorer, colors: &Colors, f: &mut Frame<'_>, area: Rect) {
    let focused = explorer.pane == Pane::List;
    let visible = usize::from(area.height.saturating_sub(2));
    let offset = explorer.selected_row.saturating_sub(visible.saturating_sub(1));

    let rows = explorer
        .snapshot
        .list
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, entry)| {
            let style = if focused && index == explorer.selected_row {
                Style::default()
                    .fg(colors.background)
                    .bg(colors.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            Row::new(vec![
                Cell::from(entry.name.clone()),
                Cell::from(entry.code.clone()),
                Cell::from(entry.summary()),
            ])
            .style(style)
        });

    let widths = [Constraint::Length(22), Constraint::Length(4), Constraint::Min(10)];
    let table = Table::new(rows, widths).block(
        Block::default()
            .title(explorer.snapshot.counter.text())
            .borders(Borders::ALL)
            .border_style(pane_border(explorer, Pane::List, colors)),
    );
    f.render_widget(table, area);
}

fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

fn render_detail(explorer: &Explorer, colors: &Colors, f: &mut Frame<'_>, area: Rect) {
    let Some(entry) = explorer.state.focused_entry() else {
        return;
    };
    let mut lines = entry
        .attributes
        .iter()
        .map(|attribute| {
            TextLine::from(vec![
                Span::styled(
                    format!("{}: ", attribute.label),
                    Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw(attribute.values.join(", ")),
            ])
        })
        .collect::<Vec<_>>();
    if lines.is_empty() {
        lines.push(TextLine::from(Span::styled(
            text(explorer, messages::NO_METAS),
            Style::default().fg(colors.muted),
        )));
    }
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        text(explorer, messages::ESC_BACK),
        Style::default().fg(colors.muted),
    )));

    let popup = popup_area(area, 60, 60);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!("{} ({})", entry.name, entry.code))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.focus)),
        )
        .style(Style::default().fg(colors.text).bg(colors.background))
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn render_help(translator: &Translator, colors: &Colors, f: &mut Frame<'_>, area: Rect) {
    let keys = [
        ("Tab", messages::HELP_SWITCH_PANE),
        ("Left / Right", messages::HELP_FACETS),
        ("Up / Down", messages::HELP_CURSOR),
        ("Space / Enter", messages::HELP_TOGGLE),
        ("Enter (list)", messages::HELP_OPEN),
        ("Click (map)", messages::HELP_CLICK),
        ("c", messages::HELP_CLEAR),
        ("l", messages::HELP_LANGUAGE),
        ("t", messages::HELP_THEME),
        ("Esc", messages::HELP_CLOSE_POPUP),
    ];
    let lines = keys
        .iter()
        .map(|(key, action)| {
            TextLine::from(vec![
                Span::styled(format!("{key:<16}"), Style::default().fg(colors.accent)),
                Span::raw(translator.text(*action)),
            ])
        })
        .collect::<Vec<_>>();

    let popup = popup_area(area, 60, 50);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(translator.text(messages::HELP))
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(colors.text).bg(colors.background));
    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
