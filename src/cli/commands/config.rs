use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

fn platform_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".into()
            } else {
                "nano".into()
            }
        })
}

fn open_in(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        if !path.exists() {
            info("No configuration file yet, showing defaults (run `taara-admin init`).");
        }
        println!("📄 {}\n", path.display());
        println!("{}", cfg.to_yaml()?);
    }

    if *edit_config {
        let fallback = platform_editor();
        let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

        if open_in(&chosen, &path) {
            success(format!("Configuration saved with '{chosen}'."));
        } else if chosen != fallback {
            warning(format!("Could not run '{chosen}', trying '{fallback}'."));
            if open_in(&fallback, &path) {
                success(format!("Configuration saved with '{fallback}'."));
            } else {
                error(format!("Could not run '{fallback}' either."));
            }
        } else {
            error(format!("Could not run '{chosen}'."));
        }
    }

    Ok(())
}
