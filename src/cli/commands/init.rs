//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command for the cov-report CLI,
//! which creates a `CovReport.toml` configuration file, either through an
//! interactive wizard or with the defaults.
//!
//! 此模块实现了 cov-report CLI 的 `init` 命令，
//! 通过交互式向导或使用默认值创建 `CovReport.toml` 配置文件。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::path::{Path, PathBuf};

use crate::core::config::{DEFAULT_DATA_FILE, ReportConfig};
use crate::infra::{fs::write_file, t};

/// Executes the init command with the provided arguments.
///
/// # Arguments
/// * `output` - Path for the new configuration file
/// * `force` - Whether to overwrite an existing file
/// * `non_interactive` - Write the defaults without prompting
/// * `language` - Language stored in the new file
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub fn execute(output: PathBuf, force: bool, non_interactive: bool, language: &str) -> Result<()> {
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!("\n{}", t!("init.welcome").cyan().bold());
        println!("{}", t!("init.description"));
    }

    if output.exists() && !force {
        if non_interactive {
            println!("{}", t!("init.file_exists", path = output.display()).red());
            println!("{}", t!("init.use_force").yellow());
            return Ok(());
        }

        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init.overwrite_prompt", path = output.display()).to_string())
            .default(false)
            .interact()
            .context(t!("init.user_input_failed").to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted"));
            return Ok(());
        }
    }

    let config = if non_interactive {
        default_config(language)
    } else {
        prompt_config(&theme, language)?
    };

    write_config(&output, &config)
}

/// The configuration written by `init --non-interactive`.
/// `init --non-interactive` 写入的配置。
pub fn default_config(language: &str) -> ReportConfig {
    ReportConfig {
        language: Some(language.to_string()),
        data_file: Some(DEFAULT_DATA_FILE.to_string()),
        ..ReportConfig::default()
    }
}

fn prompt_config(theme: &ColorfulTheme, language: &str) -> Result<ReportConfig> {
    let defaults = default_config(language);

    let data_file: String = Input::with_theme(theme)
        .with_prompt(t!("init.data_file_prompt").to_string())
        .default(DEFAULT_DATA_FILE.to_string())
        .interact_text()
        .context(t!("init.user_input_failed").to_string())?;

    let report_command: String = Input::with_theme(theme)
        .with_prompt(t!("init.report_command_prompt").to_string())
        .default(defaults.report_command.clone())
        .interact_text()
        .context(t!("init.user_input_failed").to_string())?;

    let open = Confirm::with_theme(theme)
        .with_prompt(t!("init.open_prompt").to_string())
        .default(defaults.open)
        .interact()
        .context(t!("init.user_input_failed").to_string())?;

    Ok(ReportConfig {
        data_file: Some(data_file),
        report_command,
        open,
        ..defaults
    })
}

/// Serializes `config` and writes it to `path`.
pub fn write_config(path: &Path, config: &ReportConfig) -> Result<()> {
    let toml_string =
        toml::to_string_pretty(config).context(t!("init.serialize_failed").to_string())?;

    write_file(path, &toml_string)?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init.success", path = path.display()).bold()
    );
    println!("{}", t!("init.next_steps"));

    Ok(())
}
