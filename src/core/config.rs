//! # Configuration Module / 配置模块
//!
//! Loads the optional `CovReport.toml` file that tunes how the report is
//! produced for a project.
//!
//! 加载可选的 `CovReport.toml` 文件，用于调整项目报告的生成方式。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::infra::t;

/// File name looked up in the project directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "CovReport.toml";

/// Data file used when neither the command line, `COV_FILE` nor the config names one.
/// 当命令行、`COV_FILE` 和配置文件都未指定时使用的数据文件。
pub const DEFAULT_DATA_FILE: &str = "coverage/.coverage";

/// Directory the HTML report is written into. Not configurable.
/// HTML 报告的输出目录，不可配置。
pub const OUTPUT_DIR: &str = "coverage/html";

/// Entry page of the generated report inside [`OUTPUT_DIR`].
pub const INDEX_FILE: &str = "index.html";

/// Environment variable overriding the data file.
pub const COV_FILE_ENV: &str = "COV_FILE";

/// Represents the report configuration, loaded from a TOML file.
/// Every field is optional so an empty file is a valid configuration.
///
/// 代表从 TOML 文件加载的报告配置。
/// 每个字段都是可选的，因此空文件也是有效配置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// The language for console messages (e.g., "en", "zh-CN").
    /// 控制台消息的语言（例如 "en", "zh-CN"）。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Coverage data file for this project. `~` and environment variables are expanded.
    /// 此项目的覆盖率数据文件。会展开 `~` 和环境变量。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,

    /// The coverage tool command, optionally with leading arguments
    /// (e.g. `"python -m coverage"`).
    /// 覆盖率工具命令，可以带有前置参数（例如 `"python -m coverage"`）。
    #[serde(default = "default_report_command")]
    pub report_command: String,

    /// Command used to open the report. Defaults to the platform's handler.
    /// 用于打开报告的命令。默认为平台的默认处理程序。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_command: Option<String>,

    /// Whether the report is opened after it has been generated.
    /// 生成报告后是否打开。
    #[serde(default = "default_open")]
    pub open: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            language: None,
            data_file: None,
            report_command: default_report_command(),
            open_command: None,
            open: default_open(),
        }
    }
}

fn default_report_command() -> String {
    "coverage".to_string()
}

fn default_open() -> bool {
    true
}

/// Command line of the platform's "open with default application" handler.
/// 平台 "使用默认程序打开" 处理程序的命令行。
pub fn default_open_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        r#"cmd /C start """#
    } else {
        "xdg-open"
    }
}

/// Parses a configuration from a TOML string.
pub fn parse_report_config(content: &str) -> Result<ReportConfig> {
    Ok(toml::from_str(content)?)
}

/// Loads the configuration file at `path`.
///
/// # Arguments
/// * `path` - Path to the TOML file
///
/// # Returns
/// The parsed configuration, or an error if the file cannot be read or parsed
pub fn load_report_config(path: &Path) -> Result<ReportConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| t!("config.read_failed", path = path.display()).to_string())?;
    parse_report_config(&content)
        .with_context(|| t!("config.parse_failed", path = path.display()).to_string())
}

/// Loads the configuration used for a run.
///
/// An explicitly requested file must exist. The default file is optional:
/// when it is missing the built-in defaults are used.
///
/// 加载运行所用的配置。
/// 显式指定的文件必须存在；默认文件是可选的，缺失时使用内置默认值。
///
/// # Returns
/// The configuration and the path it was loaded from, if any
pub fn resolve_report_config(
    explicit: Option<&Path>,
    project_root: &Path,
) -> Result<(ReportConfig, Option<std::path::PathBuf>)> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!(t!("config.not_found", path = path.display()).to_string());
            }
            Ok((load_report_config(path)?, Some(path.to_path_buf())))
        }
        None => {
            let default_path = project_root.join(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                Ok((load_report_config(&default_path)?, Some(default_path)))
            } else {
                Ok((ReportConfig::default(), None))
            }
        }
    }
}
