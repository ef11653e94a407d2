use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod detail;
mod help;
mod main;
mod search;

pub async fn dispatch_input(app: &mut App, key: KeyCode) {
    if search::handle_search_input(app, key) {
        return;
    }

    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Detail => detail::handle_detail_input(app, key),
        AppScreen::Main => main::handle_main_input(app, key).await,
    }
}
