use metafinder_core::{Dataset, Language, SpatialLayer, Translator};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: metafinder_core::Error,
    },
}

/// The three startup resources. Nothing renders until all of them are here.
#[derive(Debug)]
pub struct Resources {
    pub dataset: Dataset,
    pub layer: SpatialLayer,
    pub translator: Translator,
}

/// Read dataset, geometry and translations concurrently.
pub async fn load_resources(config: &AppConfig) -> Result<Resources, LoadError> {
    let translation_path = config.translation_path(&config.language);
    let (dataset, layer, translator) = tokio::join!(
        load_dataset(&config.data_path),
        load_layer(&config.geometry_path),
        load_translator(&translation_path, config.language.clone()),
    );

    let resources = Resources {
        dataset: dataset?,
        layer: layer?,
        translator: translator?,
    };
    tracing::info!(
        countries = resources.dataset.len(),
        regions = resources.layer.regions().len(),
        language = %resources.translator.language(),
        "resources loaded"
    );
    Ok(resources)
}

pub async fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let raw = read(path).await?;
    Dataset::from_json(&raw).map_err(|source| parse_error(path, source))
}

pub async fn load_layer(path: &Path) -> Result<SpatialLayer, LoadError> {
    let raw = read(path).await?;
    SpatialLayer::from_geojson(&raw).map_err(|source| parse_error(path, source))
}

pub async fn load_translator(path: &Path, language: Language) -> Result<Translator, LoadError> {
    let raw = read(path).await?;
    Translator::from_json(language, &raw).map_err(|source| parse_error(path, source))
}

/// Languages with a `<code>.json` file in `lang_dir`, sorted by code.
pub async fn available_languages(lang_dir: &Path) -> Vec<Language> {
    let mut languages = Vec::new();
    let Ok(mut entries) = tokio::fs::read_dir(lang_dir).await else {
        tracing::warn!(dir = %lang_dir.display(), "translations directory not readable");
        return languages;
    };

    while let Ok(Some(entry)) = entries.next_entry().await {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        if let Some(language) = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(Language::parse)
        {
            languages.push(language);
        }
    }

    languages.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    languages
}

async fn read(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })
}

fn parse_error(path: &Path, source: metafinder_core::Error) -> LoadError {
    LoadError::Parse {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture(dir: &Path) -> Result<AppConfig, Box<dyn std::error::Error>> {
        fs::create_dir_all(dir.join("lang"))?;
        fs::write(
            dir.join("metas.json"),
            r#"{ "FR": { "name": "France", "driving": "right" }, "JP": { "name": "Japan", "driving": "left" } }"#,
        )?;
        fs::write(
            dir.join("world.geojson"),
            r#"{ "type": "FeatureCollection", "features": [
                { "type": "Feature", "properties": { "ISO_A2": "FR" },
                  "geometry": { "type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]] } }
            ] }"#,
        )?;
        fs::write(dir.join("lang/en.json"), r#"{ "ui": { "countries": "countries" } }"#)?;
        fs::write(dir.join("lang/fr.json"), r#"{ "values": { "Japan": "Japon" } }"#)?;
        fs::write(dir.join("lang/README.txt"), "not a translation")?;

        Ok(AppConfig {
            data_path: dir.join("metas.json"),
            geometry_path: dir.join("world.geojson"),
            lang_dir: dir.join("lang"),
            language: Language::default(),
            settings_path: dir.join("settings.json"),
            log_path: dir.join("metafinder.log"),
            warnings: Vec::new(),
        })
    }

    #[tokio::test]
    async fn loads_all_three_resources() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let config = write_fixture(dir.path())?;

        let resources = load_resources(&config).await?;
        assert_eq!(resources.dataset.len(), 2);
        assert_eq!(resources.layer.regions().len(), 1);
        assert_eq!(resources.translator.language().as_str(), "en");
        Ok(())
    }

    #[tokio::test]
    async fn one_missing_resource_fails_the_whole_load() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let mut config = write_fixture(dir.path())?;
        config.geometry_path = dir.path().join("missing.geojson");

        let result = load_resources(&config).await;
        assert!(matches!(result, Err(LoadError::Read { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn parse_errors_name_the_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let config = write_fixture(dir.path())?;
        fs::write(&config.data_path, "[]")?;

        let error = load_resources(&config).await.err().map(|error| error.to_string());
        assert!(error.is_some_and(|message| message.contains("metas.json")));
        Ok(())
    }

    #[tokio::test]
    async fn lists_languages_from_json_files() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let config = write_fixture(dir.path())?;

        let languages = available_languages(&config.lang_dir).await;
        let codes = languages.iter().map(Language::as_str).collect::<Vec<_>>();
        assert_eq!(codes, ["en", "fr"]);
        assert!(available_languages(&dir.path().join("nope")).await.is_empty());
        Ok(())
    }
}
