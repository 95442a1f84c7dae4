//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared by the planner, the runner
//! and the reporting code: where the data file came from, how the open step
//! ended, the summary of a run and the errors that abort a run.
//!
//! 此模块定义了计划器、运行器和报告代码共享的数据结构：
//! 数据文件的来源、打开步骤的结果、运行摘要以及中止运行的错误。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::infra::t;

/// Exit code used when the coverage tool cannot be started, as a shell would.
pub const EXIT_TOOL_NOT_FOUND: u8 = 127;

/// Exit code used when the run is interrupted with Ctrl-C.
pub const EXIT_INTERRUPTED: u8 = 130;

/// Records which input decided the coverage data file.
/// 记录由哪个输入决定了覆盖率数据文件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataFileSource {
    /// The `--data-file` flag. / `--data-file` 参数。
    CommandLine,
    /// The `COV_FILE` environment variable. / `COV_FILE` 环境变量。
    Environment,
    /// The `data_file` setting of the config file. / 配置文件中的 `data_file`。
    ConfigFile,
    /// The built-in default. / 内置默认值。
    Default,
}

impl DataFileSource {
    /// Localized description for console output.
    pub fn label(&self) -> String {
        match self {
            DataFileSource::CommandLine => t!("run.source_command_line").to_string(),
            DataFileSource::Environment => t!("run.source_environment").to_string(),
            DataFileSource::ConfigFile => t!("run.source_config_file").to_string(),
            DataFileSource::Default => t!("run.source_default").to_string(),
        }
    }
}

/// How the step that opens the finished report ended.
/// None of these outcomes fails the run.
///
/// 打开已完成报告的步骤的结果。
/// 这些结果都不会使运行失败。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OpenOutcome {
    /// The open handler exited successfully. / 打开程序成功退出。
    Opened,
    /// Opening was turned off with `--no-open` or `open = false`.
    /// 已通过 `--no-open` 或 `open = false` 关闭打开步骤。
    Disabled,
    /// The open handler ran but exited with a failure.
    /// 打开程序已运行但以失败退出。
    Failed {
        /// Exit code, `None` if it was killed by a signal.
        code: Option<i32>,
        /// Captured stdout and stderr. / 捕获的 stdout 和 stderr。
        output: String,
    },
    /// The open handler could not be started at all (e.g. headless machine).
    /// 打开程序根本无法启动（例如无图形界面的机器）。
    Unavailable { program: String, error: String },
}

impl OpenOutcome {
    /// Whether the open step ended in a warning.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            OpenOutcome::Failed { .. } | OpenOutcome::Unavailable { .. }
        )
    }
}

/// Errors that abort a run. A failing open handler is not one of them.
///
/// 中止运行的错误。打开程序失败不属于此类。
#[derive(Debug)]
pub enum ReportError {
    /// The coverage tool exited with a non-zero status (or was killed).
    /// 覆盖率工具以非零状态退出（或被终止）。
    ExternalTool {
        program: String,
        code: Option<i32>,
    },
    /// The coverage tool could not be spawned.
    /// 无法派生覆盖率工具进程。
    ToolNotFound { program: String, source: io::Error },
    /// The user interrupted the run while the tool was running.
    /// 工具运行时用户中断了运行。
    Interrupted,
}

impl ReportError {
    /// The process exit code matching this error.
    ///
    /// The coverage tool's own exit code is passed through; codes that do not
    /// fit a process exit status, and deaths by signal, map to 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            ReportError::ExternalTool { code, .. } => code
                .and_then(|c| u8::try_from(c).ok())
                .filter(|c| *c != 0)
                .unwrap_or(1),
            ReportError::ToolNotFound { .. } => EXIT_TOOL_NOT_FOUND,
            ReportError::Interrupted => EXIT_INTERRUPTED,
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::ExternalTool { code: Some(code), .. } => {
                write!(f, "{}", t!("run.report_failed", code = code))
            }
            ReportError::ExternalTool { code: None, .. } => {
                write!(f, "{}", t!("run.report_killed"))
            }
            ReportError::ToolNotFound { program, .. } => {
                write!(f, "{}", t!("run.tool_not_found", program = program))
            }
            ReportError::Interrupted => write!(f, "{}", t!("run.interrupted")),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::ToolNotFound { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A record of one successful run, written with `--summary`.
/// 一次成功运行的记录，通过 `--summary` 写出。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub data_file: PathBuf,
    pub data_file_source: DataFileSource,
    pub output_dir: PathBuf,
    pub index_file: PathBuf,
    /// The coverage tool command line as it was run.
    pub report_command: String,
    pub report_seconds: f64,
    pub open: OpenOutcome,
}
