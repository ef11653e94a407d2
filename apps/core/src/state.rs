use crate::dataset::{CountryRecord, Dataset};
use crate::filter::FilterState;
use crate::hash;
use crate::i18n::Translator;
use crate::matcher::compute_matches;
use crate::panel::FilterPanel;
use crate::spatial::SpatialLayer;
use crate::view::{CountryEntry, ViewSnapshot};

/// Everything one explorer session needs, built once after the startup loads
/// and owned by the front end. Mutations here never render; callers follow
/// each one with [`AppState::snapshot`].
#[derive(Debug, Clone)]
pub struct AppState {
    dataset: Dataset,
    layer: SpatialLayer,
    translator: Translator,
    filters: FilterState,
    focused: Option<String>,
}

impl AppState {
    pub fn new(dataset: Dataset, layer: SpatialLayer, translator: Translator) -> Self {
        Self {
            dataset,
            layer,
            translator,
            filters: FilterState::new(),
            focused: None,
        }
    }

    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub const fn layer(&self) -> &SpatialLayer {
        &self.layer
    }

    pub const fn translator(&self) -> &Translator {
        &self.translator
    }

    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn toggle(&mut self, facet_key: &str, value: &str, is_selected: bool) {
        self.filters.toggle(facet_key, value, is_selected);
    }

    pub fn flip(&mut self, facet: crate::Facet, value: &str) -> bool {
        self.filters.flip(facet, value)
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Open the detail view for `code`. Unknown codes leave the current focus
    /// alone and return `false`.
    pub fn focus(&mut self, code: &str) -> bool {
        let Some(record) = self.dataset.lookup(code) else {
            tracing::debug!(code, "no record to focus");
            return false;
        };
        self.focused = Some(record.code.clone());
        true
    }

    pub fn unfocus(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<&CountryRecord> {
        self.focused
            .as_deref()
            .and_then(|code| self.dataset.lookup(code))
    }

    pub fn focused_entry(&self) -> Option<CountryEntry> {
        self.focused()
            .map(|record| CountryEntry::from_record(record, &self.translator))
    }

    /// Replace filters and focus from a deep link. Fragments without the
    /// sentinel change nothing and return `false`.
    pub fn apply_hash(&mut self, fragment: &str) -> bool {
        let Some(decoded) = hash::decode(fragment) else {
            return false;
        };
        self.filters = decoded.filters;
        self.focused = None;
        if let Some(code) = decoded.country {
            self.focus(&code);
        }
        true
    }

    pub fn hash(&self) -> String {
        hash::encode(&self.filters, self.focused.as_deref())
    }

    /// Swap the whole translation table at once.
    pub fn set_translator(&mut self, translator: Translator) {
        self.translator = translator;
    }

    pub fn matches(&self) -> Vec<&CountryRecord> {
        compute_matches(self.dataset.countries(), &self.filters)
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::build(self)
    }

    pub fn panel(&self) -> FilterPanel {
        FilterPanel::build(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FacetValue;
    use crate::facet::Facet;
    use crate::i18n::Language;

    fn state() -> AppState {
        let dataset = Dataset::from_records(vec![
            CountryRecord::new("FR", "France")
                .with(Facet::Driving, FacetValue::scalar("right"))
                .with(Facet::Cameras, FacetValue::sequence(["blur"])),
            CountryRecord::new("JP", "Japan")
                .with(Facet::Driving, FacetValue::scalar("left"))
                .with(Facet::Cameras, FacetValue::sequence(["blur", "mirror"])),
        ])
        .unwrap_or_default();
        AppState::new(
            dataset,
            SpatialLayer::default(),
            Translator::identity(Language::default()),
        )
    }

    #[test]
    fn focus_is_case_insensitive_and_ignores_unknown_codes() {
        let mut state = state();
        assert!(state.focus("jp"));
        assert_eq!(state.focused().map(|record| record.code.as_str()), Some("JP"));

        assert!(!state.focus("zz"));
        assert_eq!(state.focused().map(|record| record.code.as_str()), Some("JP"));

        state.unfocus();
        assert!(state.focused().is_none());
    }

    #[test]
    fn hash_carries_filters_and_focus() {
        let mut state = state();
        state.toggle("driving", "left", true);
        state.focus("jp");
        let link = state.hash();
        assert_eq!(link, "#!driving=left&country=JP");

        let mut other = self::state();
        assert!(other.apply_hash(&link));
        assert_eq!(other.filters(), state.filters());
        assert_eq!(other.focused().map(|record| record.name.as_str()), Some("Japan"));
    }

    #[test]
    fn anchors_without_sentinel_leave_state_untouched() {
        let mut state = state();
        state.toggle("cameras", "mirror", true);
        let before = state.filters().clone();
        assert!(!state.apply_hash("#section-2"));
        assert_eq!(state.filters(), &before);
    }

    #[test]
    fn bare_sentinel_clears_everything() {
        let mut state = state();
        state.toggle("cameras", "mirror", true);
        state.focus("FR");
        assert!(state.apply_hash("#!"));
        assert!(state.filters().is_empty());
        assert!(state.focused().is_none());
        assert_eq!(state.matches().len(), 2);
    }

    #[test]
    fn unknown_country_in_link_opens_nothing() {
        let mut state = state();
        assert!(state.apply_hash("#!driving=right&country=XX"));
        assert!(state.focused().is_none());
        assert_eq!(state.matches().len(), 1);
    }
}
