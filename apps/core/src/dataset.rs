use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::facet::Facet;

static ABSENT: FacetValue = FacetValue::Absent;

/// The value a country carries for one facet.
///
/// `Absent` means unknown or not applicable and never matches an active
/// filter. An empty `Sequence` is a known "none of them".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetValue {
    Absent,
    Scalar(String),
    Sequence(Vec<String>),
}

impl FacetValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn sequence<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }

    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Every value stored, in dataset order.
    pub fn values(&self) -> &[String] {
        match self {
            Self::Absent => &[],
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::Sequence(values) => values,
        }
    }

    fn from_json(code: &str, facet: Facet, value: &Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(value) => Self::Scalar(value.clone()),
            Value::Number(_) | Value::Bool(_) => Self::Scalar(value.to_string()),
            Value::Array(items) => Self::Sequence(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(value) => Some(value.clone()),
                        Value::Number(_) | Value::Bool(_) => Some(item.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            Value::Object(_) => {
                tracing::debug!(code, facet = facet.as_str(), "ignoring object-valued facet");
                Self::Absent
            }
        }
    }
}

/// One row of the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub code: String,
    /// Translation key of the display name.
    pub name: String,
    attributes: BTreeMap<Facet, FacetValue>,
}

impl CountryRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into().trim().to_uppercase(),
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, facet: Facet, value: FacetValue) -> Self {
        self.set(facet, value);
        self
    }

    pub fn set(&mut self, facet: Facet, value: FacetValue) {
        if value.is_absent() {
            self.attributes.remove(&facet);
        } else {
            self.attributes.insert(facet, value);
        }
    }

    pub fn value(&self, facet: Facet) -> &FacetValue {
        self.attributes.get(&facet).unwrap_or(&ABSENT)
    }

    /// Present attributes in canonical facet order.
    pub fn attributes(&self) -> impl Iterator<Item = (Facet, &FacetValue)> {
        self.attributes.iter().map(|(facet, value)| (*facet, value))
    }
}

/// The immutable country table.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    countries: Vec<CountryRecord>,
    by_code: HashMap<String, usize>,
}

impl Dataset {
    /// Parses the `code -> record` JSON object. Codes are upper-cased here so
    /// lookups never need to try more than one spelling.
    pub fn from_json(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json).map_err(|source| Error::Json {
            resource: "dataset",
            source,
        })?;
        let Value::Object(entries) = root else {
            return Err(Error::DatasetNotObject);
        };

        let mut records = Vec::with_capacity(entries.len());
        for (code, body) in entries {
            let Value::Object(fields) = body else {
                return Err(Error::RecordNotObject(code));
            };

            let name = fields
                .get("name")
                .and_then(Value::as_str)
                .map_or_else(|| code.clone(), str::to_string);
            let mut record = CountryRecord::new(&code, name);

            for (key, value) in &fields {
                if key == "name" || key == "code" {
                    continue;
                }
                match Facet::parse(key) {
                    Some(facet) => record.set(facet, FacetValue::from_json(&code, facet, value)),
                    None => tracing::debug!(code = %code, key = %key, "ignoring unknown attribute"),
                }
            }
            records.push(record);
        }

        Self::from_records(records)
    }

    pub fn from_records(countries: Vec<CountryRecord>) -> Result<Self> {
        let mut by_code = HashMap::with_capacity(countries.len());
        for (index, record) in countries.iter().enumerate() {
            if by_code.insert(record.code.clone(), index).is_some() {
                return Err(Error::DuplicateCode(record.code.clone()));
            }
        }
        Ok(Self { countries, by_code })
    }

    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Case-insensitive lookup by country code.
    pub fn lookup(&self, code: &str) -> Option<&CountryRecord> {
        let key = code.trim().to_uppercase();
        self.by_code.get(&key).map(|index| &self.countries[*index])
    }

    /// Distinct values seen for `facet`, in first-seen order.
    pub fn known_values(&self, facet: Facet) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.countries {
            for value in record.value(facet).values() {
                if !seen.contains(&value.as_str()) {
                    seen.push(value.as_str());
                }
            }
        }
        seen
    }
}
