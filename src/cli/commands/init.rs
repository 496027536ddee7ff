use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use tracing::info as log_info;

/// Handle the `init` command
///
/// Creates the configuration directory and writes a default configuration
/// file. An existing file is kept unless `--force` is given.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        let path = &ctx.config_path;
        let color = ctx.style.color;

        if Config::init_at(path, *force)? {
            log_info!(path = %path.display(), "configuration written");
            success(format!("Config file: {}", path.display()), color);
        } else {
            info(
                format!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                ),
                color,
            );
        }
    }

    Ok(())
}
