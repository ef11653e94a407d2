mod browser;
mod logging;
mod render;
mod session;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use metafinder_core::{Dataset, Language, SpatialLayer, Translator};
use ratzilla::ratatui::Terminal;
use ratzilla::event::{MouseButton, MouseEventKind};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use session::{Command, Key, Loaded, Web};

const DATA_URL: &str = "data/metas.json";
const GEOMETRY_URL: &str = "data/world.geojson";
const LANGUAGES_URL: &str = "data/lang/index.json";

fn translation_url(language: &Language) -> String {
    format!("data/lang/{language}.json")
}

fn main() -> io::Result<()> {
    logging::init_logging();

    let web = Rc::new(RefCell::new(Web::new(
        browser::load_theme(),
        browser::current_hash(),
    )));

    spawn_local(fetch_resource(web.clone(), DATA_URL.to_string(), |raw| {
        Dataset::from_json(raw).map(Loaded::Dataset)
    }));
    spawn_local(fetch_resource(web.clone(), GEOMETRY_URL.to_string(), |raw| {
        SpatialLayer::from_geojson(raw).map(Loaded::Layer)
    }));
    spawn_local(fetch_resource(
        web.clone(),
        translation_url(&Language::default()),
        |raw| Translator::from_json(Language::default(), raw).map(Loaded::Translator),
    ));
    spawn_local(fetch_languages(web.clone()));

    listen_for_hash_changes(web.clone());

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let web = web.clone();
        move |event| {
            let Some(key) = map_key(event.code) else {
                return;
            };
            let commands = web.borrow_mut().handle_key(&key);
            for command in commands {
                run_command(&web, command);
            }
        }
    })?;

    terminal.on_mouse_event({
        let web = web.clone();
        move |event| {
            if event.kind != MouseEventKind::ButtonDown(MouseButton::Left) {
                return;
            }
            let commands = web.borrow_mut().click_map(event.col, event.row);
            for command in commands {
                run_command(&web, command);
            }
        }
    })?;

    terminal.draw_web(move |f| {
        let mut web = web.borrow_mut();
        let area = f.area();
        web.map_area = render::map_cells(area.width, area.height);
        render::render(&web, f);
    });

    Ok(())
}

fn map_key(code: ratzilla::event::KeyCode) -> Option<Key> {
    use ratzilla::event::KeyCode;

    Some(match code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Tab => Key::Tab,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => return None,
    })
}

fn run_command(web: &Rc<RefCell<Web>>, command: Command) {
    match command {
        Command::WriteHash(link) => browser::write_hash(&link),
        Command::SaveTheme(theme) => browser::save_theme(theme),
        Command::LoadLanguage(language) => spawn_local(switch_language(web.clone(), language)),
    }
}

async fn fetch_resource<F>(web: Rc<RefCell<Web>>, url: String, parse: F)
where
    F: Fn(&str) -> metafinder_core::Result<Loaded>,
{
    let loaded = match browser::fetch_text(&url).await {
        Ok(raw) => parse(&raw).map_err(|error| format!("{url}: {error}")),
        Err(error) => Err(error),
    };
    match loaded {
        Ok(resource) => web.borrow_mut().loaded(resource),
        Err(message) => {
            web_sys::console::error_1(&format!("Failed to load {message}").into());
            web.borrow_mut().failed(message);
        }
    }
}

/// The language index is optional; without it only the default language is
/// offered.
async fn fetch_languages(web: Rc<RefCell<Web>>) {
    let languages = match browser::fetch_text(LANGUAGES_URL).await {
        Ok(raw) => serde_json::from_str::<Vec<String>>(&raw)
            .map(|codes| codes.iter().filter_map(|code| Language::parse(code)).collect())
            .unwrap_or_default(),
        Err(error) => {
            tracing::debug!(%error, "no language index");
            Vec::new()
        }
    };
    web.borrow_mut().loaded(Loaded::Languages(languages));
}

async fn switch_language(web: Rc<RefCell<Web>>, language: Language) {
    let url = translation_url(&language);
    let translator = match browser::fetch_text(&url).await {
        Ok(raw) => Translator::from_json(language, &raw).map_err(|error| format!("{url}: {error}")),
        Err(error) => Err(error),
    };
    match translator {
        Ok(translator) => web.borrow_mut().set_translator(translator),
        Err(message) => {
            web_sys::console::error_1(&format!("Failed to switch language: {message}").into());
        }
    }
}

fn listen_for_hash_changes(web: Rc<RefCell<Web>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let listener = Closure::<dyn FnMut()>::new(move || {
        web.borrow_mut().hash_changed(&browser::current_hash());
    });
    if window
        .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::error_1(&"Failed to listen for hash changes".into());
    }
    listener.forget();
}
