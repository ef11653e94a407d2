mod helpers;
pub mod screens;

use crate::app::state::{App, AppScreen};
use crate::ui::layout::main_layout;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use metafinder_core::CellArea;
use ratatui::layout::Rect;

pub async fn handle_input(app: &mut App, key: KeyCode) {
    screens::dispatch_input(app, key).await;
}

/// A left click on the map opens the country under the cursor.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, terminal_area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || app.screen != AppScreen::Main {
        return;
    }
    let Some(map) = main_layout(terminal_area).map_inner() else {
        return;
    };
    let area = CellArea::new(map.x, map.y, map.width, map.height);
    if let Some((lon, lat)) = app.explorer.layer().lon_lat_at(area, mouse.column, mouse.row) {
        app.open_region_at(lon, lat);
    }
}
