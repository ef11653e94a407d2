use crate::app::state::{App, Pane};
use crossterm::event::KeyCode;

/// Consumes every key while the jump prompt is open.
pub fn handle_search_input(app: &mut App, key: KeyCode) -> bool {
    let Some(query) = app.search_input.as_mut() else {
        return false;
    };

    match key {
        KeyCode::Esc => app.search_input = None,
        KeyCode::Enter => {
            let query = app.search_input.take().unwrap_or_default();
            if app.jump_to(&query) {
                app.pane = Pane::List;
            }
        }
        KeyCode::Backspace => {
            query.pop();
        }
        KeyCode::Char(ch) => query.push(ch),
        _ => {}
    }
    true
}
