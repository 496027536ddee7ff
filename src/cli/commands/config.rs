use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::config::check::check_file;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = &ctx.config_path;
        let color = ctx.style.color;

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(&ctx.cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(
                    format!(
                        "No configuration file at {}, defaults are in use",
                        path.display()
                    ),
                    color,
                );
            } else {
                let report = check_file(path)?;
                if report.is_clean() {
                    success("Configuration file is complete", color);
                }
                for key in &report.missing {
                    warning(format!("Missing field '{key}' (default value used)"), color);
                }
                for key in &report.unknown {
                    warning(format!("Unknown field '{key}' (ignored)"), color);
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(path).status() {
                Ok(s) if s.success() => {
                    success(
                        format!(
                            "Configuration file edited successfully using '{}'",
                            editor_to_use
                        ),
                        color,
                    );
                }
                Ok(_) | Err(_) => {
                    warning(
                        format!(
                            "Editor '{}' not available, falling back to '{}'",
                            editor_to_use, default_editor
                        ),
                        color,
                    );

                    match Command::new(&default_editor).arg(path).status() {
                        Ok(s) if s.success() => success(
                            format!(
                                "Configuration file edited successfully using fallback '{}'",
                                default_editor
                            ),
                            color,
                        ),
                        Ok(_) | Err(_) => error(
                            format!(
                                "Failed to edit configuration file using fallback '{}'",
                                default_editor
                            ),
                            color,
                        ),
                    }
                }
            }
        }
    }

    Ok(())
}
