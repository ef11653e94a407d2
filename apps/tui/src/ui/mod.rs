// UI module for metafinder
// Draws one ViewSnapshot per frame

pub mod layout;
pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::main::render_main(app, f);

    if app.screen == AppScreen::Detail {
        screens::detail::render_detail(app, f);
    }

    if app.show_help {
        screens::help::render_help(app, f);
    }
}
