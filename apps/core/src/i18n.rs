use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::facet::Facet;
use crate::messages::Message;

pub const DEFAULT_LANGUAGE: &str = "en";

/// A language code such as `en` or `pt-BR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let valid = (2..=8).contains(&value.len())
            && value
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        valid.then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the three tables of a translation resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Ui,
    Metas,
    Values,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Tables {
    ui: HashMap<String, String>,
    metas: HashMap<String, String>,
    values: HashMap<String, String>,
}

/// Translation lookups for one language. A miss falls through the listed
/// sources and finally returns the key itself.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    language: Language,
    tables: Tables,
}

impl Translator {
    const UI_ORDER: [Source; 3] = [Source::Ui, Source::Metas, Source::Values];
    const FACET_ORDER: [Source; 3] = [Source::Metas, Source::Ui, Source::Values];
    const VALUE_ORDER: [Source; 3] = [Source::Values, Source::Metas, Source::Ui];

    pub fn from_json(language: Language, json: &str) -> Result<Self> {
        let tables = serde_json::from_str(json).map_err(|source| Error::Json {
            resource: "translations",
            source,
        })?;
        Ok(Self { language, tables })
    }

    /// A translator with no tables: every lookup returns its key.
    pub fn identity(language: Language) -> Self {
        Self {
            language,
            tables: Tables::default(),
        }
    }

    pub const fn language(&self) -> &Language {
        &self.language
    }

    pub fn lookup<'a>(&'a self, sources: &[Source], key: &'a str) -> &'a str {
        self.find(sources, key).unwrap_or(key)
    }

    fn find(&self, sources: &[Source], key: &str) -> Option<&str> {
        sources
            .iter()
            .find_map(|source| self.table(*source).get(key))
            .map(String::as_str)
    }

    /// Interface strings such as the counter label.
    pub fn ui<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(&Self::UI_ORDER, key)
    }

    /// A front-end string, in English when the translation lacks it.
    pub fn text(&self, message: Message) -> &str {
        self.find(&Self::UI_ORDER, message.key)
            .unwrap_or(message.english)
    }

    /// Facet heading; untranslated facets get their built-in English label
    /// rather than the raw key.
    pub fn facet(&self, facet: Facet) -> &str {
        self.find(&Self::FACET_ORDER, facet.as_str())
            .unwrap_or_else(|| facet.label())
    }

    /// Data values and country names.
    pub fn value<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(&Self::VALUE_ORDER, key)
    }

    const fn table(&self, source: Source) -> &HashMap<String, String> {
        match source {
            Source::Ui => &self.tables.ui,
            Source::Metas => &self.tables.metas,
            Source::Values => &self.tables.values,
        }
    }
}
