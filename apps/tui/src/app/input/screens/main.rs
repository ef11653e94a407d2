use crate::app::input::helpers::{step_clamped, wrap_decrement, wrap_increment};
use crate::app::state::{App, Pane};
use crossterm::event::KeyCode;
use metafinder_core::Facet;

const PAGE: isize = 5;

pub async fn handle_main_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Tab | KeyCode::BackTab => app.pane = app.pane.other(),
        KeyCode::Char('c') => app.clear_filters(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('l') => app.cycle_language().await,
        KeyCode::Char('/') => app.search_input = Some(String::new()),
        _ => match app.pane {
            Pane::Filters => handle_filters_input(app, key),
            Pane::List => handle_list_input(app, key),
        },
    }
}

fn handle_filters_input(app: &mut App, key: KeyCode) {
    let options = app.current_options_len();
    match key {
        KeyCode::Left => {
            app.facet_index = wrap_decrement(app.facet_index, Facet::ALL.len());
            app.option_index = 0;
        }
        KeyCode::Right => {
            app.facet_index = wrap_increment(app.facet_index, Facet::ALL.len());
            app.option_index = 0;
        }
        KeyCode::Up => app.option_index = wrap_decrement(app.option_index, options),
        KeyCode::Down => app.option_index = wrap_increment(app.option_index, options),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_current_option(),
        _ => {}
    }
}

fn handle_list_input(app: &mut App, key: KeyCode) {
    let rows = app.snapshot.list.len();
    match key {
        KeyCode::Up => app.selected_row = step_clamped(app.selected_row, -1, rows),
        KeyCode::Down => app.selected_row = step_clamped(app.selected_row, 1, rows),
        KeyCode::PageUp => app.selected_row = step_clamped(app.selected_row, -PAGE, rows),
        KeyCode::PageDown => app.selected_row = step_clamped(app.selected_row, PAGE, rows),
        KeyCode::Home => app.selected_row = 0,
        KeyCode::End => app.selected_row = rows.saturating_sub(1),
        KeyCode::Enter => app.open_selected(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::app::state::tests::test_app;
    use crate::app::state::AppScreen;
    use crate::app::{handle_input, Pane};
    use crossterm::event::KeyCode;
    use metafinder_core::Facet;

    async fn press(app: &mut crate::app::App, keys: &[KeyCode]) {
        for key in keys {
            handle_input(app, *key).await;
        }
    }

    #[tokio::test]
    async fn space_ticks_the_highlighted_option() {
        let mut app = test_app();
        // cameras options: blur, gen4, mirror
        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Char(' ')]).await;
        assert_eq!(app.snapshot.link, "#!cameras=mirror");

        press(&mut app, &[KeyCode::Right, KeyCode::Down, KeyCode::Char(' ')]).await;
        assert_eq!(app.current_facet(), Facet::Driving);
        assert_eq!(app.snapshot.link, "#!cameras=mirror&driving=right");
        assert_eq!(app.snapshot.counter.count, 0);
        assert_eq!(app.snapshot.counter.text(), "0 countries");

        press(&mut app, &[KeyCode::Char('c')]).await;
        assert_eq!(app.snapshot.counter.count, 3);
    }

    #[tokio::test]
    async fn facet_navigation_wraps() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Left]).await;
        assert_eq!(app.current_facet(), Facet::Bollards);
        press(&mut app, &[KeyCode::Right]).await;
        assert_eq!(app.current_facet(), Facet::Cameras);
    }

    #[tokio::test]
    async fn list_enter_opens_and_escape_closes_detail() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Tab, KeyCode::End, KeyCode::Enter]).await;
        assert_eq!(app.pane, Pane::List);
        assert_eq!(app.screen, AppScreen::Detail);
        assert_eq!(app.explorer.focused().map(|record| record.code.as_str()), Some("JP"));

        press(&mut app, &[KeyCode::Esc]).await;
        assert_eq!(app.screen, AppScreen::Main);
        assert!(app.explorer.focused().is_none());
    }

    #[tokio::test]
    async fn slash_prompt_jumps_to_a_country() {
        let mut app = test_app();
        press(
            &mut app,
            &[
                KeyCode::Char('/'),
                KeyCode::Char('f'),
                KeyCode::Char('r'),
                KeyCode::Char('q'),
                KeyCode::Backspace,
                KeyCode::Enter,
            ],
        )
        .await;
        assert!(app.running);
        assert!(app.search_input.is_none());
        assert_eq!(app.pane, Pane::List);
        assert_eq!(app.selected_entry().map(|entry| entry.code.as_str()), Some("FR"));
    }

    #[tokio::test]
    async fn help_swallows_keys_until_closed() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::F(1), KeyCode::Char('q')]).await;
        assert!(app.running);
        assert!(app.show_help);
        press(&mut app, &[KeyCode::Esc, KeyCode::Char('q')]).await;
        assert!(!app.running);
    }
}
