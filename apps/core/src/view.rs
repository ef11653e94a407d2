//! One render pass worth of derived data.
//!
//! [`ViewSnapshot::build`] computes the match result once and derives the
//! counter, the map paint list, the country list and the deep link from it,
//! so a front end drawing one snapshot can never show surfaces that disagree.

use std::collections::HashSet;

use serde::Serialize;

use crate::collate;
use crate::dataset::CountryRecord;
use crate::facet::Facet;
use crate::i18n::Translator;
use crate::state::AppState;

pub const SINGULAR_KEY: &str = "country";
pub const PLURAL_KEY: &str = "countries";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counter {
    pub count: usize,
    pub label: String,
}

impl Counter {
    pub fn new(count: usize, translator: &Translator) -> Self {
        let key = if count == 1 { SINGULAR_KEY } else { PLURAL_KEY };
        Self {
            count,
            label: translator.ui(key).to_string(),
        }
    }

    pub fn text(&self) -> String {
        format!("{} {}", self.count, self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    Matched,
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintedRegion {
    /// Index into [`crate::SpatialLayer::regions`].
    pub region: usize,
    pub treatment: Treatment,
}

/// Map regions in paint order: baseline first, matches last so they end up
/// on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpatialView {
    pub regions: Vec<PaintedRegion>,
}

impl SpatialView {
    fn build(state: &AppState, matched: &HashSet<&str>) -> Self {
        let (mut painted, on_top): (Vec<_>, Vec<_>) = state
            .layer()
            .regions()
            .iter()
            .enumerate()
            .map(|(index, region)| {
                let is_match = region
                    .code
                    .as_deref()
                    .is_some_and(|code| matched.contains(code));
                PaintedRegion {
                    region: index,
                    treatment: if is_match {
                        Treatment::Matched
                    } else {
                        Treatment::Baseline
                    },
                }
            })
            .partition(|painted| painted.treatment == Treatment::Baseline);
        painted.extend(on_top);
        Self { regions: painted }
    }

    pub fn treatment_of(&self, region: usize) -> Option<Treatment> {
        self.regions
            .iter()
            .find(|painted| painted.region == region)
            .map(|painted| painted.treatment)
    }

    pub fn matched_count(&self) -> usize {
        self.regions
            .iter()
            .filter(|painted| painted.treatment == Treatment::Matched)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub facet: Facet,
    pub label: String,
    pub values: Vec<String>,
}

/// A country as shown in the list and in the detail popup: translated name
/// plus every attribute it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryEntry {
    pub code: String,
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl CountryEntry {
    pub fn from_record(record: &CountryRecord, translator: &Translator) -> Self {
        let attributes = record
            .attributes()
            .map(|(facet, value)| Attribute {
                facet,
                label: translator.facet(facet).to_string(),
                values: value
                    .values()
                    .iter()
                    .map(|value| translator.value(value).to_string())
                    .collect(),
            })
            .collect();
        Self {
            code: record.code.clone(),
            name: translator.value(&record.name).to_string(),
            attributes,
        }
    }

    /// Every attribute on one line: `Label: a, b; Label: c`.
    pub fn summary(&self) -> String {
        self.attributes
            .iter()
            .map(|attribute| format!("{}: {}", attribute.label, attribute.values.join(", ")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub counter: Counter,
    pub spatial: SpatialView,
    pub list: Vec<CountryEntry>,
    pub link: String,
}

impl ViewSnapshot {
    pub fn build(state: &AppState) -> Self {
        let matches = state.matches();
        let translator = state.translator();

        let matched_codes = matches
            .iter()
            .map(|record| record.code.as_str())
            .collect::<HashSet<_>>();

        let mut list = matches
            .iter()
            .map(|record| CountryEntry::from_record(record, translator))
            .collect::<Vec<_>>();
        collate::sort_by_label(&mut list, |entry| entry.name.as_str());

        Self {
            counter: Counter::new(matches.len(), translator),
            spatial: SpatialView::build(state, &matched_codes),
            list,
            link: state.hash(),
        }
    }

    pub fn position_of(&self, code: &str) -> Option<usize> {
        self.list
            .iter()
            .position(|entry| entry.code.eq_ignore_ascii_case(code))
    }
}
