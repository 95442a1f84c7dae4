//! # Report Planner Module / 报告计划模块
//!
//! This module turns the configuration and the command-line inputs into a
//! concrete plan: which data file to report on and the exact command lines of
//! the coverage tool and of the open handler. Planning never spawns a process.
//!
//! 此模块将配置和命令行输入转换为具体的计划：
//! 使用哪个数据文件，以及覆盖率工具和打开程序的确切命令行。计划阶段不会派生任何进程。

use anyhow::{Context, Result, bail};
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::config::{
    COV_FILE_ENV, DEFAULT_DATA_FILE, INDEX_FILE, OUTPUT_DIR, ReportConfig, default_open_command,
};
use crate::core::models::DataFileSource;
use crate::infra::t;

/// A single external program call.
/// 一次外部程序调用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Splits a configured command line (shell-words rules) into a program
    /// and its leading arguments.
    ///
    /// # Arguments
    /// * `field` - Name of the setting, used in error messages
    /// * `command_line` - The configured command, e.g. `"python -m coverage"`
    pub fn from_command_line(field: &str, command_line: &str) -> Result<Self> {
        let parts = shlex::split(command_line).with_context(|| {
            t!("config.unparsable_command", field = field, value = command_line).to_string()
        })?;

        let mut parts = parts.into_iter().map(OsString::from);
        let Some(program) = parts.next().filter(|p| !p.is_empty()) else {
            bail!(t!("config.empty_command", field = field).to_string());
        };

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The invocation as a shell-quoted command line, for display.
    /// 以 shell 引用形式表示的命令行，用于显示。
    pub fn command_line(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|part| quote(part))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builds the process for this invocation, running in `dir`.
    pub fn to_command(&self, dir: &Path) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args).current_dir(dir);
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

fn quote(part: &OsStr) -> String {
    let lossy = part.to_string_lossy().into_owned();
    shlex::try_quote(&lossy)
        .map(|quoted| quoted.into_owned())
        .unwrap_or_else(|_| lossy.clone())
}

/// Inputs of a run that do not come from the config file.
/// 不来自配置文件的运行输入。
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Value of `--data-file`.
    pub data_file: Option<PathBuf>,
    /// Value of the `COV_FILE` environment variable.
    pub env_data_file: Option<OsString>,
    /// `false` when `--no-open` was given.
    pub open: bool,
}

impl PlanOptions {
    /// Builds the options, reading `COV_FILE` from the process environment.
    pub fn from_env(data_file: Option<PathBuf>, open: bool) -> Self {
        Self {
            data_file,
            env_data_file: cov_file_from_env(),
            open,
        }
    }
}

/// Reads `COV_FILE`. An empty value counts as unset.
/// 读取 `COV_FILE`。空值视为未设置。
pub fn cov_file_from_env() -> Option<OsString> {
    env::var_os(COV_FILE_ENV).filter(|value| !value.is_empty())
}

/// Everything needed to run the report, fully resolved.
/// 运行报告所需的一切，已完全解析。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPlan {
    pub data_file: PathBuf,
    pub data_file_source: DataFileSource,
    /// Always [`OUTPUT_DIR`].
    pub output_dir: PathBuf,
    pub index_file: PathBuf,
    /// The coverage tool call.
    pub report: Invocation,
    /// The open handler call, `None` when opening is turned off.
    pub open: Option<Invocation>,
}

/// Picks the coverage data file.
///
/// Precedence: `--data-file`, then `COV_FILE`, then `data_file` from the
/// config, then [`DEFAULT_DATA_FILE`]. Values from the command line and the
/// environment are used verbatim; the config value gets `~` and variable
/// expansion.
///
/// 选择覆盖率数据文件。
/// 优先级：`--data-file`，然后 `COV_FILE`，然后配置中的 `data_file`，最后是默认值。
/// 来自命令行和环境变量的值原样使用；配置中的值会进行 `~` 和变量展开。
pub fn resolve_data_file(
    config: &ReportConfig,
    options: &PlanOptions,
) -> Result<(PathBuf, DataFileSource)> {
    if let Some(path) = &options.data_file {
        return Ok((path.clone(), DataFileSource::CommandLine));
    }

    if let Some(value) = &options.env_data_file {
        return Ok((PathBuf::from(value), DataFileSource::Environment));
    }

    if let Some(value) = config.data_file.as_deref().filter(|v| !v.is_empty()) {
        let expanded = shellexpand::full(value)
            .with_context(|| t!("config.expand_failed", value = value).to_string())?;
        return Ok((PathBuf::from(expanded.into_owned()), DataFileSource::ConfigFile));
    }

    Ok((PathBuf::from(DEFAULT_DATA_FILE), DataFileSource::Default))
}

/// Creates the plan for one run.
///
/// # Arguments
/// * `config` - The loaded (or default) configuration
/// * `options` - Command-line and environment inputs
///
/// # Returns
/// A `ReportPlan`, or an error if a configured command cannot be parsed
pub fn plan_report(config: &ReportConfig, options: &PlanOptions) -> Result<ReportPlan> {
    let (data_file, data_file_source) = resolve_data_file(config, options)?;

    let output_dir = PathBuf::from(OUTPUT_DIR);
    let index_file = output_dir.join(INDEX_FILE);

    let mut data_file_arg = OsString::from("--data-file=");
    data_file_arg.push(&data_file);

    let report = Invocation::from_command_line("report_command", &config.report_command)?
        .arg("html")
        .arg(data_file_arg)
        .arg("-d")
        .arg(OUTPUT_DIR);

    let open = if options.open && config.open {
        let command_line = config
            .open_command
            .as_deref()
            .unwrap_or(default_open_command());
        Some(Invocation::from_command_line("open_command", command_line)?.arg(&index_file))
    } else {
        None
    };

    Ok(ReportPlan {
        data_file,
        data_file_source,
        output_dir,
        index_file,
        report,
        open,
    })
}
