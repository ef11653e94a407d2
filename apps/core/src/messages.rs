//! Interface strings shared by the front ends. Each one is looked up in the
//! `ui` table of the active translation under its key; the English text is
//! shown when no table has an entry.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub key: &'static str,
    pub english: &'static str,
}

const fn message(key: &'static str, english: &'static str) -> Message {
    Message { key, english }
}

// Panels and popups
pub const FILTERS: Message = message("filters", "Filters");
pub const MAP: Message = message("map", "Map");
pub const HELP: Message = message("help", "Help");
pub const HELP_CLOSE: Message = message("help_close", "F1 / ? / Esc to close");
pub const NO_VALUES: Message = message("no_values", "(no values)");
pub const NO_METAS: Message = message("no_metas", "No metas recorded");
pub const ESC_BACK: Message = message("esc_back", "Esc: back");
pub const JUMP_TO: Message = message("jump_to", "Jump to");

// Status line
pub const FILTERS_CLEARED: Message = message("filters_cleared", "Filters cleared");
pub const NO_OTHER_LANGUAGE: Message = message("no_other_language", "No other language available");
pub const LANGUAGE: Message = message("language", "Language");
pub const ERROR: Message = message("error", "Error");
pub const NOT_A_LINK: Message = message("not_a_link", "Not a metafinder link");
pub const NO_MATCH: Message = message("no_match", "No listed country matches");
pub const THEME_NOT_SAVED: Message = message("theme_not_saved", "Theme not saved");

// Browser start-up
pub const LOADING: Message = message("loading", "Loading metas, map and translations...");
pub const LOAD_FAILED: Message = message("load_failed", "Could not load the explorer");
pub const RELOAD: Message = message("reload", "Reload the page to try again.");

// Shortcut bar
pub const SHORTCUT_PANE: Message = message("shortcut_pane", "pane");
pub const SHORTCUT_TOGGLE: Message = message("shortcut_toggle", "toggle");
pub const SHORTCUT_CLEAR: Message = message("shortcut_clear", "clear");
pub const SHORTCUT_JUMP: Message = message("shortcut_jump", "jump");
pub const SHORTCUT_LANGUAGE: Message = message("shortcut_language", "language");
pub const SHORTCUT_THEME: Message = message("shortcut_theme", "theme");
pub const SHORTCUT_HELP: Message = message("shortcut_help", "help");
pub const SHORTCUT_QUIT: Message = message("shortcut_quit", "quit");

// Help popup
pub const HELP_SWITCH_PANE: Message = message("help_switch_pane", "Switch between filters and list");
pub const HELP_FACETS: Message = message("help_facets", "Previous / next filter");
pub const HELP_CURSOR: Message = message("help_cursor", "Move the cursor");
pub const HELP_TOGGLE: Message = message("help_toggle", "Toggle the highlighted value");
pub const HELP_OPEN: Message = message("help_open", "Open the country");
pub const HELP_SCROLL: Message = message("help_scroll", "Scroll the list");
pub const HELP_ENDS: Message = message("help_ends", "First / last country");
pub const HELP_CLICK: Message = message("help_click", "Open the country under the cursor");
pub const HELP_JUMP: Message = message("help_jump", "Jump to a country by name");
pub const HELP_CLEAR: Message = message("help_clear", "Clear every filter");
pub const HELP_LANGUAGE: Message = message("help_language", "Next language");
pub const HELP_THEME: Message = message("help_theme", "Toggle light / dark theme");
pub const HELP_CLOSE_POPUP: Message = message("help_close_popup", "Close the popup");
pub const HELP_QUIT: Message = message("help_quit", "Quit");

/// Shortcut bar entries in display order.
pub const SHORTCUTS: [(&str, Message); 8] = [
    ("Tab", SHORTCUT_PANE),
    ("Space", SHORTCUT_TOGGLE),
    ("c", SHORTCUT_CLEAR),
    ("/", SHORTCUT_JUMP),
    ("l", SHORTCUT_LANGUAGE),
    ("t", SHORTCUT_THEME),
    ("?", SHORTCUT_HELP),
    ("q", SHORTCUT_QUIT),
];
