mod env;
pub mod settings;

pub use env::{init_app_config, AppConfig};
pub use settings::{load_settings, save_settings, Settings};
