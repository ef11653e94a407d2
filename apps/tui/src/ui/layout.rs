use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Terminals at least this wide get the side-by-side layout.
pub const WIDE_MIN_WIDTH: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Wide,
    Compact,
}

/// Where each surface of the main screen lands. Rendering and mouse
/// handling both derive it from the terminal size so clicks line up with
/// what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub mode: LayoutMode,
    pub header: Rect,
    pub filters: Rect,
    pub map: Rect,
    pub list: Rect,
    pub status: Rect,
}

impl MainLayout {
    /// Drawing area of the map inside its border.
    pub fn map_inner(&self) -> Option<Rect> {
        let inner = self.map.inner(Margin::new(1, 1));
        (inner.width > 0 && inner.height > 0).then_some(inner)
    }
}

pub fn layout_mode(area: Rect) -> LayoutMode {
    if area.width >= WIDE_MIN_WIDTH {
        LayoutMode::Wide
    } else {
        LayoutMode::Compact
    }
}

pub fn main_layout(area: Rect) -> MainLayout {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(2),
    ])
    .areas(area);

    match layout_mode(area) {
        LayoutMode::Wide => {
            let [filters, right] =
                Layout::horizontal([Constraint::Length(36), Constraint::Min(20)]).areas(body);
            let [map, list] =
                Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(right);
            MainLayout {
                mode: LayoutMode::Wide,
                header,
                filters,
                map,
                list,
                status,
            }
        }
        LayoutMode::Compact => {
            let [filters, map, list] = Layout::vertical([
                Constraint::Length(8),
                Constraint::Percentage(55),
                Constraint::Min(3),
            ])
            .areas(body);
            MainLayout {
                mode: LayoutMode::Compact,
                header,
                filters,
                map,
                list,
                status,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_picks_the_layout() {
        assert_eq!(main_layout(Rect::new(0, 0, 140, 40)).mode, LayoutMode::Wide);
        assert_eq!(main_layout(Rect::new(0, 0, 80, 40)).mode, LayoutMode::Compact);
    }

    #[test]
    fn wide_layout_puts_filters_beside_the_map() {
        let layout = main_layout(Rect::new(0, 0, 140, 40));
        assert_eq!(layout.filters.width, 36);
        assert_eq!(layout.map.x, 36);
        assert!(layout.list.y > layout.map.y);
        assert_eq!(layout.status.y + layout.status.height, 40);
    }

    #[test]
    fn tiny_terminals_have_no_map_area() {
        let layout = main_layout(Rect::new(0, 0, 10, 5));
        assert_eq!(layout.map_inner(), None);
    }
}
