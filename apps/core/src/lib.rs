//! Engine behind the country meta explorer: the dataset, facet filters, the
//! deep-link codec and the view snapshot every front end renders from.

pub mod collate;
pub mod dataset;
pub mod error;
pub mod facet;
pub mod filter;
pub mod hash;
pub mod i18n;
pub mod matcher;
pub mod messages;
pub mod panel;
pub mod spatial;
pub mod state;
pub mod theme;
pub mod view;

pub use dataset::{CountryRecord, Dataset, FacetValue};
pub use error::{Error, Result};
pub use facet::{Facet, ValueShape};
pub use filter::FilterState;
pub use i18n::{Language, Translator};
pub use matcher::compute_matches;
pub use messages::Message;
pub use panel::{FacetGroup, FacetOption, FilterPanel};
pub use spatial::{CellArea, Region, SpatialLayer};
pub use state::AppState;
pub use theme::Theme;
pub use view::{CountryEntry, Counter, SpatialView, Treatment, ViewSnapshot};
