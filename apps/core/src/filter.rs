use std::collections::BTreeMap;

use crate::facet::Facet;

/// Selected values per facet. A facet with nothing selected imposes no
/// constraint. Selections keep insertion order so deep links list values the
/// way the user picked them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selections: BTreeMap<Facet, Vec<String>>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle by raw facet key, as received from a checkbox or a link.
    /// Unknown keys are ignored.
    pub fn toggle(&mut self, facet_key: &str, value: &str, is_selected: bool) {
        let Some(facet) = Facet::parse(facet_key) else {
            tracing::debug!(facet_key, "ignoring toggle for unknown facet");
            return;
        };
        self.set(facet, value, is_selected);
    }

    /// Empty values are never selected: a link cannot carry them.
    pub fn set(&mut self, facet: Facet, value: &str, is_selected: bool) {
        if is_selected && value.is_empty() {
            return;
        }
        if is_selected {
            let selection = self.selections.entry(facet).or_default();
            if !selection.iter().any(|existing| existing == value) {
                selection.push(value.to_string());
            }
        } else if let Some(selection) = self.selections.get_mut(&facet) {
            selection.retain(|existing| existing != value);
            if selection.is_empty() {
                self.selections.remove(&facet);
            }
        }
    }

    /// Flip one value and return whether it is now selected.
    pub fn flip(&mut self, facet: Facet, value: &str) -> bool {
        let now_selected = !self.contains(facet, value);
        self.set(facet, value, now_selected);
        now_selected
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn is_active(&self, facet: Facet) -> bool {
        self.selections
            .get(&facet)
            .is_some_and(|selection| !selection.is_empty())
    }

    pub fn contains(&self, facet: Facet, value: &str) -> bool {
        self.selected(facet).iter().any(|existing| existing == value)
    }

    pub fn selected(&self, facet: Facet) -> &[String] {
        self.selections.get(&facet).map_or(&[], Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.selections.values().all(Vec::is_empty)
    }

    /// Active facets with their selections, in canonical facet order.
    pub fn active_facets(&self) -> impl Iterator<Item = (Facet, &[String])> {
        self.selections
            .iter()
            .filter(|(_, selection)| !selection.is_empty())
            .map(|(facet, selection)| (*facet, selection.as_slice()))
    }

    /// Same set membership per facet, ignoring insertion order.
    pub fn same_selection(&self, other: &Self) -> bool {
        Facet::ALL.iter().all(|facet| {
            let mine = self.selected(*facet);
            let theirs = other.selected(*facet);
            mine.len() == theirs.len() && mine.iter().all(|value| theirs.contains(value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_and_removes() {
        let mut filters = FilterState::new();
        filters.toggle("driving", "left", true);
        assert!(filters.is_active(Facet::Driving));
        assert_eq!(filters.selected(Facet::Driving), ["left"]);

        filters.toggle("driving", "left", false);
        assert!(!filters.is_active(Facet::Driving));
        assert!(filters.is_empty());
    }

    #[test]
    fn toggle_with_unknown_facet_is_a_no_op() {
        let mut filters = FilterState::new();
        filters.toggle("favourite_food", "pizza", true);
        assert!(filters.is_empty());
    }

    #[test]
    fn empty_values_never_activate_a_facet() {
        let mut filters = FilterState::new();
        filters.toggle("scenery", "", true);
        assert!(!filters.is_active(Facet::Scenery));
        assert_eq!(crate::hash::encode(&filters, None), "#!");
    }

    #[test]
    fn reselecting_keeps_original_position() {
        let mut filters = FilterState::new();
        filters.set(Facet::Cameras, "gen4", true);
        filters.set(Facet::Cameras, "gen3", true);
        filters.set(Facet::Cameras, "gen4", true);
        assert_eq!(filters.selected(Facet::Cameras), ["gen4", "gen3"]);
    }

    #[test]
    fn removing_an_unselected_value_changes_nothing() {
        let mut filters = FilterState::new();
        filters.set(Facet::Scenery, "desert", true);
        let before = filters.clone();
        filters.set(Facet::Scenery, "tundra", false);
        filters.set(Facet::Alphabet, "latin", false);
        assert_eq!(filters, before);
    }

    #[test]
    fn flip_reports_new_state() {
        let mut filters = FilterState::new();
        assert!(filters.flip(Facet::Bollards, "red_top"));
        assert!(!filters.flip(Facet::Bollards, "red_top"));
        assert!(filters.is_empty());
    }

    #[test]
    fn clear_empties_every_facet() {
        let mut filters = FilterState::new();
        filters.set(Facet::Driving, "left", true);
        filters.set(Facet::Cameras, "gen2", true);
        filters.clear();
        assert!(filters.is_empty());
        assert!(Facet::ALL.iter().all(|facet| !filters.is_active(*facet)));
    }

    #[test]
    fn same_selection_ignores_order() {
        let mut a = FilterState::new();
        a.set(Facet::FlagColors, "red", true);
        a.set(Facet::FlagColors, "white", true);
        let mut b = FilterState::new();
        b.set(Facet::FlagColors, "white", true);
        b.set(Facet::FlagColors, "red", true);
        assert_ne!(a, b);
        assert!(a.same_selection(&b));

        b.set(Facet::Driving, "left", true);
        assert!(!a.same_selection(&b));
    }
}
