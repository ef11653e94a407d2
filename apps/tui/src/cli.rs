use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "metafinder", version, about = "Country meta explorer")]
pub struct CliArgs {
    /// Print the match result and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Deep link to open, either a full URL or just the `#!...` fragment
    #[arg(long, value_name = "LINK")]
    pub link: Option<String>,

    /// Override dataset path
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Override map geometry path
    #[arg(long, value_name = "PATH")]
    pub geometry: Option<String>,

    /// Override translations directory
    #[arg(long = "lang-dir", value_name = "PATH")]
    pub lang_dir: Option<String>,

    /// Start in this language
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Override local settings file
    #[arg(long, value_name = "PATH")]
    pub settings: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        let overrides = [
            ("METAFINDER_DATA", &self.data),
            ("METAFINDER_GEOMETRY", &self.geometry),
            ("METAFINDER_LANG_DIR", &self.lang_dir),
            ("METAFINDER_LANG", &self.lang),
            ("METAFINDER_SETTINGS", &self.settings),
        ];
        for (key, value) in overrides {
            if let Some(value) = value {
                std::env::set_var(key, value);
            }
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_link_and_overrides() {
        let args = CliArgs::parse_from([
            "metafinder",
            "--headless",
            "--json",
            "--link",
            "#!driving=left",
            "--lang",
            "fr",
        ]);
        assert!(args.headless);
        assert!(args.json);
        assert_eq!(args.link.as_deref(), Some("#!driving=left"));
        assert_eq!(args.lang.as_deref(), Some("fr"));
        assert_eq!(args.data, None);
    }

    #[test]
    fn help_mentions_deep_links() {
        assert!(CliArgs::help_text().contains("--link"));
    }
}
