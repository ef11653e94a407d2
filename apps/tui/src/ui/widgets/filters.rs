use crate::app::{App, Pane};
use crate::ui::layout::LayoutMode;
use crate::ui::widgets::list::scroll_offset;
use crate::ui::widgets::palette::Palette;
use metafinder_core::messages;
use metafinder_core::{FacetGroup, FacetOption, ValueShape};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

fn checkbox(shape: ValueShape, option: &FacetOption) -> &'static str {
    match (shape, option.selected) {
        (ValueShape::Sequence, true) => "[x]",
        (ValueShape::Sequence, false) => "[ ]",
        (ValueShape::Scalar, true) => "(*)",
        (ValueShape::Scalar, false) => "( )",
    }
}

fn option_lines<'a>(
    group: &'a FacetGroup,
    cursor: Option<usize>,
    visible: usize,
    empty: &'a str,
    palette: &Palette,
) -> Vec<TextLine<'a>> {
    if group.options.is_empty() {
        return vec![TextLine::from(Span::styled(
            empty,
            Style::default().fg(palette.muted),
        ))];
    }

    let offset = scroll_offset(group.options.len(), visible, cursor.unwrap_or(0));
    group
        .options
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, option)| {
            let style = if cursor == Some(index) {
                palette.highlight()
            } else if option.selected {
                Style::default().fg(palette.matched)
            } else {
                palette.base()
            };
            TextLine::from(vec![
                Span::styled(format!("{} ", checkbox(group.shape, option)), style),
                Span::styled(option.label.as_str(), style),
            ])
        })
        .collect()
}

fn facet_style(group: &FacetGroup, current: bool, palette: &Palette) -> Style {
    let style = if current {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };
    if group.active {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

pub fn render_filters(app: &App, f: &mut Frame<'_>, area: Rect, palette: &Palette, mode: LayoutMode) {
    let focused = app.pane == Pane::Filters;
    let block = Block::default()
        .title(format!(" {} ", app.text(messages::FILTERS)))
        .borders(Borders::ALL)
        .border_style(palette.border(focused));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let current = app.current_facet();
    let cursor = focused.then_some(app.option_index);
    let empty = app.text(messages::NO_VALUES);
    let Some(group) = app.panel.group(current) else {
        return;
    };

    match mode {
        LayoutMode::Wide => {
            let facet_rows = u16::try_from(app.panel.groups.len()).unwrap_or(u16::MAX);
            let [facets, options] =
                Layout::vertical([Constraint::Length(facet_rows + 1), Constraint::Min(1)])
                    .areas(inner);

            let facet_lines = app
                .panel
                .groups
                .iter()
                .map(|item| {
                    let is_current = item.facet == current;
                    let marker = if is_current { "> " } else { "  " };
                    let selected = item.options.iter().filter(|option| option.selected).count();
                    let suffix = if selected > 0 {
                        format!(" ({selected})")
                    } else {
                        String::new()
                    };
                    TextLine::from(Span::styled(
                        format!("{marker}{}{suffix}", item.label),
                        facet_style(item, is_current, palette),
                    ))
                })
                .collect::<Vec<_>>();
            f.render_widget(Paragraph::new(facet_lines).style(palette.base()), facets);

            let lines = option_lines(group, cursor, usize::from(options.height), empty, palette);
            f.render_widget(Paragraph::new(lines).style(palette.base()), options);
        }
        LayoutMode::Compact => {
            let [strip, options] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);

            let position = format!(" ({}/{})", app.facet_index + 1, app.panel.groups.len());
            let spans = vec![
                Span::styled("< ", Style::default().fg(palette.muted)),
                Span::styled(group.label.as_str(), facet_style(group, true, palette)),
                Span::styled(position, Style::default().fg(palette.muted)),
                Span::styled(" >", Style::default().fg(palette.muted)),
            ];
            f.render_widget(Paragraph::new(TextLine::from(spans)), strip);

            let lines = option_lines(group, cursor, usize::from(options.height), empty, palette);
            f.render_widget(Paragraph::new(lines).style(palette.base()), options);
        }
    }
}
