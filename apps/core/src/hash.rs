//! Deep-link codec between [`FilterState`] and a URL fragment.
//!
//! Format: `#!cameras=gen3,gen4&driving=left&country=JP`. Keys and values are
//! percent-encoded, so a literal `,` or `&` inside a value survives the trip.
//! The `#!` sentinel separates structured state from ordinary anchors.

use std::borrow::Cow;

use crate::facet::Facet;
use crate::filter::FilterState;

pub const SENTINEL: &str = "#!";
pub const COUNTRY_KEY: &str = "country";

/// Result of decoding a structured fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedHash {
    pub filters: FilterState,
    pub country: Option<String>,
}

/// Encode filters and the optional focused country. An empty state still
/// yields the sentinel, so following that link clears any previous state.
pub fn encode(filters: &FilterState, country: Option<&str>) -> String {
    let mut segments = Vec::new();

    for facet in Facet::ALL {
        let selected = filters.selected(facet);
        if selected.is_empty() {
            continue;
        }
        let values = selected
            .iter()
            .map(|value| urlencoding::encode(value))
            .collect::<Vec<_>>()
            .join(",");
        segments.push(format!("{}={values}", urlencoding::encode(facet.as_str())));
    }

    if let Some(code) = country.filter(|code| !code.is_empty()) {
        segments.push(format!("{COUNTRY_KEY}={}", urlencoding::encode(code)));
    }

    format!("{SENTINEL}{}", segments.join("&"))
}

/// Decode a fragment. Returns `None` when the sentinel is missing, in which
/// case callers leave their state untouched. Unknown keys are skipped.
pub fn decode(fragment: &str) -> Option<DecodedHash> {
    let body = fragment.strip_prefix(SENTINEL)?;
    let mut decoded = DecodedHash::default();

    for segment in body.split('&').filter(|segment| !segment.is_empty()) {
        let (raw_key, raw_values) = segment.split_once('=').unwrap_or((segment, ""));
        let key = percent_decode(raw_key);

        if key == COUNTRY_KEY {
            let code = percent_decode(raw_values);
            decoded.country = (!code.is_empty()).then(|| code.into_owned());
            continue;
        }

        let Some(facet) = Facet::parse(&key) else {
            tracing::debug!(key = %key, "ignoring unknown deep-link key");
            continue;
        };

        for value in raw_values.split(',').filter(|value| !value.is_empty()) {
            decoded.filters.set(facet, &percent_decode(value), true);
        }
    }

    Some(decoded)
}

/// The fragment part of a full link, or the input itself when it has no `#`.
pub fn fragment_of(link: &str) -> &str {
    link.find('#').map_or(link, |index| &link[index..])
}

fn percent_decode(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}
