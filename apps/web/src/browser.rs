use metafinder_core::Theme;
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

const THEME_KEY: &str = "metafinder.theme";

/// GET `url` and return the body as text.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window")?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| format!("{url}: invalid request"))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| format!("{url}: network error"))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|_| format!("{url}: unexpected response"))?;
    if !response.ok() {
        return Err(format!("{url}: HTTP {}", response.status()));
    }

    let body = response
        .text()
        .map_err(|_| format!("{url}: unreadable body"))?;
    let text = wasm_bindgen_futures::JsFuture::from(body)
        .await
        .map_err(|_| format!("{url}: unreadable body"))?;
    text.as_string().ok_or_else(|| format!("{url}: body is not text"))
}

pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

pub fn write_hash(link: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_hash(link).is_err() {
        web_sys::console::error_1(&"Failed to update location hash".into());
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_theme() -> Theme {
    local_storage()
        .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten())
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default()
}

pub fn save_theme(theme: Theme) {
    let saved = local_storage().is_some_and(|storage| storage.set_item(THEME_KEY, theme.as_str()).is_ok());
    if !saved {
        web_sys::console::error_1(&"Failed to save theme".into());
    }
}
