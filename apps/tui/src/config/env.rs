use dotenv::dotenv;
use metafinder_core::Language;
use std::env;
use std::path::PathBuf;

/// Where the explorer reads its resources and keeps local state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub geometry_path: PathBuf,
    pub lang_dir: PathBuf,
    pub language: Language,
    pub settings_path: PathBuf,
    pub log_path: PathBuf,
    /// Problems found while reading the environment, logged once logging is up.
    pub warnings: Vec<String>,
}

impl AppConfig {
    /// Translation file for `language`.
    pub fn translation_path(&self, language: &Language) -> PathBuf {
        self.lang_dir.join(format!("{language}.json"))
    }
}

/// Initializes the application configuration from `.env` and the process
/// environment. Relative paths are resolved against the current directory.
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    dotenv().ok();

    let base_dir = env::current_dir()?;
    let path = |key: &str, default: &str| {
        base_dir.join(env::var(key).unwrap_or_else(|_| default.to_string()))
    };

    let (language, warning) = language_from_env(env::var("METAFINDER_LANG").ok());
    let warnings = warning.into_iter().collect();

    Ok(AppConfig {
        data_path: path("METAFINDER_DATA", "data/metas.json"),
        geometry_path: path("METAFINDER_GEOMETRY", "data/world.geojson"),
        lang_dir: path("METAFINDER_LANG_DIR", "data/lang"),
        language,
        settings_path: path("METAFINDER_SETTINGS", ".metafinder.json"),
        log_path: path("METAFINDER_LOG", "metafinder.log"),
        warnings,
    })
}

fn language_from_env(code: Option<String>) -> (Language, Option<String>) {
    match code {
        Some(code) => Language::parse(&code).map_or_else(
            || {
                (
                    Language::default(),
                    Some(format!("ignoring invalid language code {code:?}")),
                )
            },
            |language| (language, None),
        ),
        None => (Language::default(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_path_joins_language_file() {
        let config = AppConfig {
            data_path: PathBuf::from("data/metas.json"),
            geometry_path: PathBuf::from("data/world.geojson"),
            lang_dir: PathBuf::from("data/lang"),
            language: Language::default(),
            settings_path: PathBuf::from(".metafinder.json"),
            log_path: PathBuf::from("metafinder.log"),
            warnings: Vec::new(),
        };
        let french = Language::parse("fr").unwrap_or_default();
        assert_eq!(
            config.translation_path(&french),
            PathBuf::from("data/lang/fr.json")
        );
    }

    #[test]
    fn invalid_language_falls_back_with_a_warning() {
        let (language, warning) = language_from_env(Some("../fr".to_string()));
        assert_eq!(language, Language::default());
        assert!(warning.is_some_and(|message| message.contains("../fr")));

        let (language, warning) = language_from_env(Some("fr".to_string()));
        assert_eq!(language.as_str(), "fr");
        assert!(warning.is_none());
        assert_eq!(language_from_env(None), (Language::default(), None));
    }
}
