use crate::dataset::{CountryRecord, FacetValue};
use crate::filter::FilterState;

/// Records passing every active facet, in input order.
pub fn compute_matches<'a>(
    countries: &'a [CountryRecord],
    filters: &FilterState,
) -> Vec<&'a CountryRecord> {
    countries
        .iter()
        .filter(|country| matches_filters(country, filters))
        .collect()
}

pub fn matches_filters(country: &CountryRecord, filters: &FilterState) -> bool {
    filters
        .active_facets()
        .all(|(facet, selected)| value_matches(country.value(facet), selected))
}

/// Sequences must contain every selected value; scalars must equal one of
/// them; absent values never match.
pub fn value_matches(value: &FacetValue, selected: &[String]) -> bool {
    match value {
        FacetValue::Absent => false,
        FacetValue::Sequence(values) => selected.iter().all(|wanted| values.contains(wanted)),
        FacetValue::Scalar(value) => selected.contains(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::Facet;
    use proptest::prelude::*;

    fn scenario() -> Vec<CountryRecord> {
        vec![
            CountryRecord::new("FR", "France")
                .with(Facet::Driving, FacetValue::scalar("right"))
                .with(Facet::Cameras, FacetValue::sequence(["blur"])),
            CountryRecord::new("JP", "Japan")
                .with(Facet::Driving, FacetValue::scalar("left"))
                .with(Facet::Cameras, FacetValue::sequence(["blur", "mirror"])),
        ]
    }

    fn codes(matches: &[&CountryRecord]) -> Vec<String> {
        matches.iter().map(|country| country.code.clone()).collect()
    }

    #[test]
    fn scenario_narrows_and_clears() {
        let countries = scenario();
        let mut filters = FilterState::new();

        filters.toggle("driving", "left", true);
        assert_eq!(codes(&compute_matches(&countries, &filters)), ["JP"]);

        filters.toggle("cameras", "mirror", true);
        assert_eq!(codes(&compute_matches(&countries, &filters)), ["JP"]);

        filters.toggle("driving", "left", false);
        assert_eq!(codes(&compute_matches(&countries, &filters)), ["JP"]);

        filters.clear();
        assert_eq!(codes(&compute_matches(&countries, &filters)), ["FR", "JP"]);
    }

    #[test]
    fn sequences_use_subset_semantics() {
        let cameras = FacetValue::sequence(["A", "B", "C"]);
        assert!(value_matches(&cameras, &["A".to_string(), "B".to_string()]));
        assert!(!value_matches(&cameras, &["A".to_string(), "D".to_string()]));
    }

    #[test]
    fn scalars_use_membership_semantics() {
        let driving = FacetValue::scalar("right");
        assert!(value_matches(&driving, &["right".to_string(), "left".to_string()]));
        assert!(!value_matches(&driving, &["left".to_string()]));
    }

    #[test]
    fn absent_values_never_match_whatever_the_shape() {
        let countries = vec![CountryRecord::new("XX", "Nowhere")];
        let mut filters = FilterState::new();
        filters.set(Facet::Continent, "europe", true);
        assert!(compute_matches(&countries, &filters).is_empty());

        filters.clear();
        filters.set(Facet::Cameras, "gen4", true);
        assert!(compute_matches(&countries, &filters).is_empty());
    }

    #[test]
    fn scalar_stored_in_sequence_facet_still_matches() {
        let country =
            CountryRecord::new("IS", "Iceland").with(Facet::Scenery, FacetValue::scalar("tundra"));
        let mut filters = FilterState::new();
        filters.set(Facet::Scenery, "tundra", true);
        assert!(matches_filters(&country, &filters));
    }

    #[test]
    fn empty_sequence_is_not_a_wildcard() {
        let country =
            CountryRecord::new("SG", "Singapore").with(Facet::Bollards, FacetValue::Sequence(vec![]));
        let mut filters = FilterState::new();
        filters.set(Facet::Bollards, "white", true);
        assert!(!matches_filters(&country, &filters));
    }

    fn arb_country() -> impl Strategy<Value = CountryRecord> {
        (
            "[A-Z]{2}",
            proptest::option::of(prop::sample::select(vec!["left", "right"])),
            proptest::collection::vec(prop::sample::select(vec!["gen2", "gen3", "gen4"]), 0..3),
        )
            .prop_map(|(code, driving, cameras)| {
                let mut record = CountryRecord::new(code.clone(), code);
                if let Some(driving) = driving {
                    record.set(Facet::Driving, FacetValue::scalar(driving));
                }
                record.set(Facet::Cameras, FacetValue::sequence(cameras));
                record
            })
    }

    proptest! {
        #[test]
        fn adding_a_constraint_only_shrinks_the_result(
            countries in proptest::collection::vec(arb_country(), 0..12),
            driving in prop::sample::select(vec!["left", "right"]),
            camera in prop::sample::select(vec!["gen2", "gen3", "gen4"]),
        ) {
            let mut filters = FilterState::new();
            let everything = compute_matches(&countries, &filters);
            prop_assert_eq!(everything.len(), countries.len());

            filters.set(Facet::Driving, driving, true);
            let narrowed = compute_matches(&countries, &filters);
            prop_assert!(narrowed.iter().all(|country| everything.contains(country)));

            filters.set(Facet::Cameras, camera, true);
            let narrower = compute_matches(&countries, &filters);
            prop_assert!(narrower.iter().all(|country| narrowed.contains(country)));

            filters.clear();
            prop_assert_eq!(compute_matches(&countries, &filters).len(), countries.len());
        }
    }
}
