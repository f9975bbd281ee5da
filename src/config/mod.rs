/// Application configuration loading from config.toml
pub mod app;

pub use app::{AppConfig, SessionConfig, load_config, load_default_config};
