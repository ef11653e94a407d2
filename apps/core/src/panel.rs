use crate::collate;
use crate::facet::{Facet, ValueShape};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetGroup {
    pub facet: Facet,
    pub label: String,
    pub shape: ValueShape,
    pub active: bool,
    pub options: Vec<FacetOption>,
}

/// Checkbox model shared by every layout: one group per facet in canonical
/// order, options ordered by translated label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPanel {
    pub groups: Vec<FacetGroup>,
}

impl FilterPanel {
    pub fn build(state: &AppState) -> Self {
        let translator = state.translator();
        let filters = state.filters();

        let groups = Facet::ALL
            .iter()
            .map(|facet| {
                let mut values = state
                    .dataset()
                    .known_values(*facet)
                    .into_iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>();
                // Selections from a link may name values no record has; keep
                // them visible so they can be unticked.
                for selected in filters.selected(*facet) {
                    if !values.contains(selected) {
                        values.push(selected.clone());
                    }
                }

                let mut options = values
                    .into_iter()
                    .map(|value| FacetOption {
                        label: translator.value(&value).to_string(),
                        selected: filters.contains(*facet, &value),
                        value,
                    })
                    .collect::<Vec<_>>();
                collate::sort_by_label(&mut options, |option| option.label.as_str());

                FacetGroup {
                    facet: *facet,
                    label: translator.facet(*facet).to_string(),
                    shape: facet.shape(),
                    active: filters.is_active(*facet),
                    options,
                }
            })
            .collect();

        Self { groups }
    }

    pub fn group(&self, facet: Facet) -> Option<&FacetGroup> {
        self.groups.iter().find(|group| group.facet == facet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{CountryRecord, Dataset, FacetValue};
    use crate::i18n::{Language, Translator};
    use crate::spatial::SpatialLayer;

    fn state() -> AppState {
        let dataset = Dataset::from_records(vec![
            CountryRecord::new("DE", "Germany")
                .with(Facet::FlagColors, FacetValue::sequence(["red", "black", "yellow"])),
            CountryRecord::new("IT", "Italy")
                .with(Facet::FlagColors, FacetValue::sequence(["green", "white", "red"])),
        ])
        .unwrap_or_default();
        let translator = Translator::from_json(
            Language::default(),
            r#"{ "values": { "yellow": "Gold", "black": "Black", "green": "green", "red": "Red", "white": "White" } }"#,
        )
        .unwrap_or_else(|_| Translator::identity(Language::default()));
        AppState::new(dataset, SpatialLayer::default(), translator)
    }

    #[test]
    fn one_group_per_facet_in_canonical_order() {
        let panel = FilterPanel::build(&state());
        let facets = panel.groups.iter().map(|group| group.facet).collect::<Vec<_>>();
        assert_eq!(facets, Facet::ALL);
    }

    #[test]
    fn options_are_sorted_by_translated_label() {
        let panel = FilterPanel::build(&state());
        let labels = panel
            .group(Facet::FlagColors)
            .map(|group| {
                group
                    .options
                    .iter()
                    .map(|option| option.label.as_str())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        assert_eq!(labels, ["Black", "Gold", "green", "Red", "White"]);
    }

    #[test]
    fn selections_are_reflected() {
        let mut state = state();
        state.toggle("flag_colors", "red", true);
        state.toggle("flag_colors", "purple", true);
        let panel = FilterPanel::build(&state);
        let group = panel.group(Facet::FlagColors);

        assert!(group.is_some_and(|group| group.active));
        let selected = group
            .map(|group| {
                group
                    .options
                    .iter()
                    .filter(|option| option.selected)
                    .map(|option| option.value.as_str())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        assert_eq!(selected, ["purple", "red"]);
        assert!(panel.group(Facet::Driving).is_some_and(|group| !group.active && group.options.is_empty()));
    }
}
