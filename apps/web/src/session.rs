use metafinder_core::messages;
use metafinder_core::{
    AppState, CellArea, Dataset, Facet, FilterPanel, Language, SpatialLayer, Theme, Translator,
    ViewSnapshot,
};

/// One startup resource as it arrives from the network.
pub enum Loaded {
    Dataset(Dataset),
    Layer(SpatialLayer),
    Translator(Translator),
    Languages(Vec<Language>),
}

#[derive(Default)]
pub struct Pending {
    dataset: Option<Dataset>,
    layer: Option<SpatialLayer>,
    translator: Option<Translator>,
}

impl Pending {
    pub const fn translator(&self) -> Option<&Translator> {
        self.translator.as_ref()
    }
}

/// Browser side effects a key press asks for. The key handler returns them
/// so the session borrow is released before any of them run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    WriteHash(String),
    LoadLanguage(Language),
    SaveTheme(Theme),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Filters,
    List,
}

pub enum Key {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Tab,
    Enter,
    Esc,
    Home,
    End,
    PageUp,
    PageDown,
}

pub struct Explorer {
    pub state: AppState,
    pub snapshot: ViewSnapshot,
    pub panel: FilterPanel,
    pub pane: Pane,
    pub facet_index: usize,
    pub option_index: usize,
    pub selected_row: usize,
    pub show_help: bool,
    pub status: String,
}

impl Explorer {
    fn new(state: AppState) -> Self {
        let snapshot = state.snapshot();
        let panel = state.panel();
        Self {
            state,
            snapshot,
            panel,
            pane: Pane::Filters,
            facet_index: 0,
            option_index: 0,
            selected_row: 0,
            show_help: false,
            status: String::new(),
        }
    }

    fn refresh(&mut self) {
        self.snapshot = self.state.snapshot();
        self.panel = self.state.panel();
        let options = self.options_len();
        if self.option_index >= options {
            self.option_index = options.saturating_sub(1);
        }
        if self.selected_row >= self.snapshot.list.len() {
            self.selected_row = self.snapshot.list.len().saturating_sub(1);
        }
    }

    pub fn current_facet(&self) -> Facet {
        Facet::from_index(self.facet_index).unwrap_or(Facet::Cameras)
    }

    fn options_len(&self) -> usize {
        self.panel
            .group(self.current_facet())
            .map_or(0, |group| group.options.len())
    }

    fn move_row(&mut self, delta: isize) {
        let rows = self.snapshot.list.len();
        if rows == 0 {
            return;
        }
        self.selected_row = self.selected_row.saturating_add_signed(delta).min(rows - 1);
    }
}

pub enum Session {
    Loading(Pending),
    Failed(String),
    Ready(Box<Explorer>),
}

impl Default for Session {
    fn default() -> Self {
        Self::Loading(Pending::default())
    }
}

pub struct Web {
    pub session: Session,
    pub theme: Theme,
    pub languages: Vec<Language>,
    /// Fragment to apply once everything has loaded.
    pub initial_hash: String,
    /// Where the map was last drawn, for pointer hit tests.
    pub map_area: Option<CellArea>,
}

impl Web {
    pub fn new(theme: Theme, initial_hash: String) -> Self {
        Self {
            session: Session::default(),
            theme,
            languages: Vec::new(),
            initial_hash,
            map_area: None,
        }
    }

    /// Store one startup resource. The explorer becomes ready only when the
    /// dataset, geometry and translations are all present.
    pub fn loaded(&mut self, resource: Loaded) {
        let Session::Loading(pending) = &mut self.session else {
            if let Loaded::Languages(languages) = resource {
                self.languages = languages;
            }
            return;
        };
        match resource {
            Loaded::Dataset(dataset) => pending.dataset = Some(dataset),
            Loaded::Layer(layer) => pending.layer = Some(layer),
            Loaded::Translator(translator) => pending.translator = Some(translator),
            Loaded::Languages(languages) => self.languages = languages,
        }

        if pending.dataset.is_some() && pending.layer.is_some() && pending.translator.is_some() {
            let Session::Loading(pending) = std::mem::take(&mut self.session) else {
                return;
            };
            let (Some(dataset), Some(layer), Some(translator)) =
                (pending.dataset, pending.layer, pending.translator)
            else {
                return;
            };
            let mut explorer = Explorer::new(AppState::new(dataset, layer, translator));
            explorer.state.apply_hash(&self.initial_hash);
            explorer.refresh();
            tracing::info!(countries = explorer.state.dataset().len(), "explorer ready");
            self.session = Session::Ready(Box::new(explorer));
        }
    }

    /// The first failed load wins; later arrivals are dropped.
    pub fn failed(&mut self, message: String) {
        if matches!(self.session, Session::Loading(_)) {
            self.session = Session::Failed(message);
        }
    }

    /// A `hashchange` from the browser. Our own writes come back here too and
    /// are ignored when they match the current link.
    pub fn hash_changed(&mut self, fragment: &str) {
        let Session::Ready(explorer) = &mut self.session else {
            self.initial_hash = fragment.to_string();
            return;
        };
        if explorer.snapshot.link == fragment {
            return;
        }
        if explorer.state.apply_hash(fragment) {
            explorer.refresh();
            if let Some(row) = explorer
                .state
                .focused()
                .and_then(|record| explorer.snapshot.position_of(&record.code))
            {
                explorer.selected_row = row;
            }
        }
    }

    pub fn set_translator(&mut self, translator: Translator) {
        if let Session::Ready(explorer) = &mut self.session {
            let language = translator.language().clone();
            explorer.state.set_translator(translator);
            explorer.status = format!(
                "{}: {language}",
                explorer.state.translator().text(messages::LANGUAGE)
            );
            explorer.refresh();
        }
    }

    /// A click on the map cell at `column`/`row` opens the country drawn
    /// there, unless a popup is already showing.
    pub fn click_map(&mut self, column: u16, row: u16) -> Vec<Command> {
        let Some(area) = self.map_area else {
            return Vec::new();
        };
        let Session::Ready(explorer) = &mut self.session else {
            return Vec::new();
        };
        if explorer.show_help || explorer.state.focused().is_some() {
            return Vec::new();
        }
        let layer = explorer.state.layer();
        let Some(code) = layer
            .lon_lat_at(area, column, row)
            .and_then(|(lon, lat)| layer.region_at(lon, lat))
            .and_then(|region| region.code.clone())
        else {
            return Vec::new();
        };
        if !explorer.state.focus(&code) {
            return Vec::new();
        }
        explorer.refresh();
        if let Some(row) = explorer.snapshot.position_of(&code) {
            explorer.selected_row = row;
        }
        vec![Command::WriteHash(explorer.snapshot.link.clone())]
    }

    fn next_language(&self, current: &Language) -> Option<Language> {
        let position = self.languages.iter().position(|language| language == current);
        let next = match position {
            Some(index) => self.languages.get((index + 1) % self.languages.len()),
            None => self.languages.first(),
        };
        next.filter(|language| *language != current).cloned()
    }

    pub fn handle_key(&mut self, key: &Key) -> Vec<Command> {
        if let Key::Char('t') = key {
            self.theme = self.theme.toggled();
            return vec![Command::SaveTheme(self.theme)];
        }

        let next_language = match &self.session {
            Session::Ready(explorer) => self.next_language(explorer.state.translator().language()),
            _ => return Vec::new(),
        };
        let Session::Ready(explorer) = &mut self.session else {
            return Vec::new();
        };

        if matches!(key, Key::Char('?')) {
            explorer.show_help = !explorer.show_help;
            return Vec::new();
        }
        if explorer.show_help {
            if matches!(key, Key::Esc) {
                explorer.show_help = false;
            }
            return Vec::new();
        }

        let before = explorer.snapshot.link.clone();
        match key {
            Key::Char('l') => {
                return next_language.map(Command::LoadLanguage).into_iter().collect();
            }
            Key::Char('c') => {
                explorer.state.clear_filters();
                explorer.refresh();
            }
            Key::Esc => {
                explorer.state.unfocus();
                explorer.refresh();
            }
            Key::Tab => {
                explorer.pane = match explorer.pane {
                    Pane::Filters => Pane::List,
                    Pane::List => Pane::Filters,
                };
            }
            _ if explorer.state.focused().is_some() => {}
            _ => match explorer.pane {
                Pane::Filters => filters_key(explorer, key),
                Pane::List => list_key(explorer, key),
            },
        }

        if explorer.snapshot.link == before {
            Vec::new()
        } else {
            vec![Command::WriteHash(explorer.snapshot.link.clone())]
        }
    }
}

fn filters_key(explorer: &mut Explorer, key: &Key) {
    let facets = Facet::ALL.len();
    let options = explorer.options_len();
    match key {
        Key::Left => {
            explorer.facet_index = (explorer.facet_index + facets - 1) % facets;
            explorer.option_index = 0;
        }
        Key::Right => {
            explorer.facet_index = (explorer.facet_index + 1) % facets;
            explorer.option_index = 0;
        }
        Key::Up if options > 0 => {
            explorer.option_index = (explorer.option_index + options - 1) % options;
        }
        Key::Down if options > 0 => {
            explorer.option_index = (explorer.option_index + 1) % options;
        }
        Key::Enter | Key::Char(' ') => {
            let facet = explorer.current_facet();
            let Some(value) = explorer
                .panel
                .group(facet)
                .and_then(|group| group.options.get(explorer.option_index))
                .map(|option| option.value.clone())
            else {
                return;
            };
            explorer.state.flip(facet, &value);
            explorer.refresh();
        }
        _ => {}
    }
}

fn list_key(explorer: &mut Explorer, key: &Key) {
    match key {
        Key::Up => explorer.move_row(-1),
        Key::Down => explorer.move_row(1),
        Key::PageUp => explorer.move_row(-10),
        Key::PageDown => explorer.move_row(10),
        Key::Home => explorer.selected_row = 0,
        Key::End => explorer.selected_row = explorer.snapshot.list.len().saturating_sub(1),
        Key::Enter => {
            let Some(code) = explorer
                .snapshot
                .list
                .get(explorer.selected_row)
                .map(|entry| entry.code.clone())
            else {
                return;
            };
            explorer.state.focus(&code);
            explorer.refresh();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metafinder_core::{CountryRecord, FacetValue, Region};

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            CountryRecord::new("FR", "France").with(Facet::Cameras, FacetValue::sequence(["blur"])),
            CountryRecord::new("JP", "Japan").with(Facet::Cameras, FacetValue::sequence(["mirror"])),
        ])
        .unwrap_or_default()
    }

    fn layer() -> SpatialLayer {
        SpatialLayer::from_regions(vec![Region {
            code: Some("FR".to_string()),
            name: None,
            rings: vec![vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]],
        }])
    }

    fn ready(initial_hash: &str) -> Web {
        let mut web = Web::new(Theme::Dark, initial_hash.to_string());
        web.loaded(Loaded::Dataset(dataset()));
        web.loaded(Loaded::Layer(layer()));
        web.loaded(Loaded::Translator(Translator::identity(Language::default())));
        web
    }

    fn link(web: &Web) -> Option<&str> {
        match &web.session {
            Session::Ready(explorer) => Some(explorer.snapshot.link.as_str()),
            _ => None,
        }
    }

    #[test]
    fn waits_for_all_three_resources() {
        let mut web = Web::new(Theme::Dark, String::new());
        web.loaded(Loaded::Dataset(dataset()));
        web.loaded(Loaded::Translator(Translator::identity(Language::default())));
        assert!(matches!(web.session, Session::Loading(_)));
        web.loaded(Loaded::Layer(layer()));
        assert!(matches!(web.session, Session::Ready(_)));
    }

    #[test]
    fn a_failed_load_replaces_the_loading_state() {
        let mut web = Web::new(Theme::Dark, String::new());
        web.loaded(Loaded::Dataset(dataset()));
        web.failed("world.geojson: 404".to_string());
        web.loaded(Loaded::Layer(layer()));
        assert!(matches!(web.session, Session::Failed(ref message) if message.contains("404")));
    }

    #[test]
    fn initial_hash_is_applied_once_ready() {
        let web = ready("#!cameras=mirror&country=jp");
        assert_eq!(link(&web), Some("#!cameras=mirror&country=JP"));
    }

    #[test]
    fn toggling_writes_the_new_hash() {
        let mut web = ready("");
        // cameras options: blur, mirror
        let commands = web.handle_key(&Key::Char(' '));
        assert_eq!(commands, [Command::WriteHash("#!cameras=blur".to_string())]);
        assert!(web.handle_key(&Key::Down).is_empty());
    }

    #[test]
    fn own_hash_writes_are_ignored_and_foreign_ones_applied() {
        let mut web = ready("");
        web.handle_key(&Key::Char(' '));
        web.hash_changed("#!cameras=blur");
        assert_eq!(link(&web), Some("#!cameras=blur"));

        web.hash_changed("#!cameras=mirror");
        assert_eq!(link(&web), Some("#!cameras=mirror"));

        web.hash_changed("#top");
        assert_eq!(link(&web), Some("#!cameras=mirror"));
    }

    #[test]
    fn theme_and_language_become_commands() {
        let mut web = ready("");
        assert_eq!(web.handle_key(&Key::Char('t')), [Command::SaveTheme(Theme::Light)]);
        assert!(web.handle_key(&Key::Char('l')).is_empty());

        web.loaded(Loaded::Languages(vec![
            Language::default(),
            Language::parse("fr").unwrap_or_default(),
        ]));
        assert_eq!(
            web.handle_key(&Key::Char('l')),
            [Command::LoadLanguage(Language::parse("fr").unwrap_or_default())]
        );
    }

    #[test]
    fn clicking_the_map_focuses_the_country_under_the_pointer() {
        let mut web = ready("");
        assert!(web.click_map(7, 7).is_empty());

        // FR is the lower-right triangle of the unit square.
        web.map_area = Some(CellArea::new(0, 0, 10, 10));
        assert!(web.click_map(2, 2).is_empty());
        assert!(web.click_map(11, 5).is_empty());
        assert_eq!(
            web.click_map(7, 7),
            [Command::WriteHash("#!country=FR".to_string())]
        );

        // The detail popup swallows further clicks.
        assert!(web.click_map(7, 7).is_empty());
    }

    #[test]
    fn language_status_uses_the_new_translation() {
        let mut web = ready("");
        let language = Language::parse("fr").unwrap_or_default();
        let french = Translator::from_json(language.clone(), r#"{ "ui": { "language": "Langue" } }"#)
            .unwrap_or_else(|_| Translator::identity(language));
        web.set_translator(french);
        let status = match &web.session {
            Session::Ready(explorer) => explorer.status.clone(),
            _ => String::new(),
        };
        assert_eq!(status, "Langue: fr");
    }
}
