pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::players::{lineup, play_all, FootballPlayer, MusicPlayer};
pub use config::{toml_config::TomlConfig, CliConfig, OutputFormat, TextSettings};
pub use crate::core::{engine::TransformEngine, pipeline::TextPipeline};
pub use domain::ports::Playable;
pub use utils::error::{PlaytextError, Result};
