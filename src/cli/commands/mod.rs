use crate::config::Config;
use crate::utils::formatting::Style;
use std::path::PathBuf;

pub mod config;
pub mod eta;
pub mod export;
pub mod init;
pub mod stats;
pub mod timeline;
pub mod top;
pub mod xp;

/// What every handler gets: the loaded configuration, where it came from,
/// and the rendering style derived from it.
pub struct Context {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub style: Style,
}
