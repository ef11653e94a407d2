use crate::config::{save_settings, AppConfig, Settings};
use crate::loader::{load_translator, Resources};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use metafinder_core::messages::{self, Message};
use metafinder_core::{
    hash, AppState, CountryEntry, Facet, FilterPanel, Language, Theme, ViewSnapshot,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Main,
    Detail,
}

/// Which half of the main screen receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Filters,
    List,
}

impl Pane {
    pub const fn other(self) -> Self {
        match self {
            Self::Filters => Self::List,
            Self::List => Self::Filters,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub explorer: AppState,
    /// Derived from `explorer` by [`App::refresh`]; every draw reads these.
    pub snapshot: ViewSnapshot,
    pub panel: FilterPanel,
    pub screen: AppScreen,
    pub pane: Pane,
    pub facet_index: usize,
    pub option_index: usize,
    pub selected_row: usize,
    pub show_help: bool,
    pub search_input: Option<String>,
    pub status_message: String,
    pub theme: Theme,
    pub languages: Vec<Language>,
    pub config: AppConfig,
}

impl App {
    pub fn new(
        resources: Resources,
        languages: Vec<Language>,
        settings: Settings,
        config: AppConfig,
    ) -> Self {
        let explorer = AppState::new(resources.dataset, resources.layer, resources.translator);
        let snapshot = explorer.snapshot();
        let panel = explorer.panel();
        Self {
            running: true,
            explorer,
            snapshot,
            panel,
            screen: AppScreen::Main,
            pane: Pane::Filters,
            facet_index: 0,
            option_index: 0,
            selected_row: 0,
            show_help: false,
            search_input: None,
            status_message: String::new(),
            theme: settings.theme,
            languages,
            config,
        }
    }

    /// Recompute every surface from the current explorer state in one pass.
    pub fn refresh(&mut self) {
        self.snapshot = self.explorer.snapshot();
        self.panel = self.explorer.panel();

        let options = self.current_options_len();
        if self.option_index >= options {
            self.option_index = options.saturating_sub(1);
        }
        if self.selected_row >= self.snapshot.list.len() {
            self.selected_row = self.snapshot.list.len().saturating_sub(1);
        }
        self.screen = if self.explorer.focused().is_some() {
            AppScreen::Detail
        } else {
            AppScreen::Main
        };
    }

    /// Interface text in the active language.
    pub fn text(&self, message: Message) -> &str {
        self.explorer.translator().text(message)
    }

    pub fn current_facet(&self) -> Facet {
        Facet::from_index(self.facet_index).unwrap_or(Facet::Cameras)
    }

    pub fn current_options_len(&self) -> usize {
        self.panel
            .group(self.current_facet())
            .map_or(0, |group| group.options.len())
    }

    /// Tick or untick the highlighted checkbox.
    pub fn toggle_current_option(&mut self) {
        let facet = self.current_facet();
        let Some(option) = self
            .panel
            .group(facet)
            .and_then(|group| group.options.get(self.option_index))
        else {
            return;
        };
        let value = option.value.clone();
        let selected = self.explorer.flip(facet, &value);
        tracing::debug!(facet = facet.as_str(), value = %value, selected, "toggled filter");
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.explorer.clear_filters();
        self.status_message = self.text(messages::FILTERS_CLEARED).to_string();
        self.refresh();
    }

    pub fn selected_entry(&self) -> Option<&CountryEntry> {
        self.snapshot.list.get(self.selected_row)
    }

    pub fn open_selected(&mut self) {
        let Some(code) = self.selected_entry().map(|entry| entry.code.clone()) else {
            return;
        };
        self.open_country(&code);
    }

    /// Show the detail popup; codes without a record are ignored.
    pub fn open_country(&mut self, code: &str) {
        if self.explorer.focus(code) {
            if let Some(row) = self.snapshot.position_of(code) {
                self.selected_row = row;
            }
            self.refresh();
        }
    }

    pub fn close_detail(&mut self) {
        self.explorer.unfocus();
        self.refresh();
    }

    /// Map click in lon/lat.
    pub fn open_region_at(&mut self, lon: f64, lat: f64) {
        let code = self
            .explorer
            .layer()
            .region_at(lon, lat)
            .and_then(|region| region.code.clone());
        if let Some(code) = code {
            self.open_country(&code);
        }
    }

    /// Apply a deep link (full URL or fragment). Returns whether it carried
    /// structured state.
    pub fn apply_link(&mut self, link: &str) -> bool {
        let applied = self.explorer.apply_hash(hash::fragment_of(link.trim()));
        if applied {
            self.refresh();
            if let Some(row) = self
                .explorer
                .focused()
                .and_then(|record| self.snapshot.position_of(&record.code))
            {
                self.selected_row = row;
            }
        } else {
            self.status_message = self.text(messages::NOT_A_LINK).to_string();
        }
        applied
    }

    /// Move the list cursor to the best fuzzy match for `query`. The list
    /// itself is never narrowed by the search.
    pub fn jump_to(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        let matcher = SkimMatcherV2::default().ignore_case();
        let best = self
            .snapshot
            .list
            .iter()
            .enumerate()
            .filter_map(|(row, entry)| {
                let by_name = matcher.fuzzy_match(&entry.name, query);
                let by_code = matcher.fuzzy_match(&entry.code, query);
                by_name.max(by_code).map(|score| (score, row))
            })
            .max_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        if let Some((_, row)) = best {
            self.selected_row = row;
            self.status_message.clear();
            true
        } else {
            self.status_message = format!("{} \"{query}\"", self.text(messages::NO_MATCH));
            false
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        let settings = Settings { theme: self.theme };
        if let Err(error) = save_settings(&self.config.settings_path, &settings) {
            tracing::warn!(%error, "failed to persist theme");
            self.status_message = format!("{}: {error}", self.text(messages::THEME_NOT_SAVED));
        }
    }

    pub fn next_language(&self) -> Option<Language> {
        let current = self.explorer.translator().language();
        let position = self
            .languages
            .iter()
            .position(|language| language == current);
        let next = match position {
            Some(index) => self.languages.get((index + 1) % self.languages.len()),
            None => self.languages.first(),
        };
        next.filter(|language| *language != current).cloned()
    }

    /// Load the next language and swap it in. On failure the current table
    /// stays in place.
    pub async fn cycle_language(&mut self) {
        let Some(language) = self.next_language() else {
            self.status_message = self.text(messages::NO_OTHER_LANGUAGE).to_string();
            return;
        };
        let path = self.config.translation_path(&language);
        match load_translator(&path, language.clone()).await {
            Ok(translator) => {
                self.explorer.set_translator(translator);
                self.status_message = format!("{}: {language}", self.text(messages::LANGUAGE));
                self.refresh();
            }
            Err(error) => {
                tracing::warn!(%error, "failed to switch language");
                self.status_message = format!("{}: {error}", self.text(messages::ERROR));
            }
        }
    }
}
