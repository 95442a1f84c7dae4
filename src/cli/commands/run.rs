//! # Run Command Module / 运行命令模块
//!
//! This module implements the default action of the cov-report CLI:
//! resolve the inputs, run the coverage tool and open the report.
//!
//! 此模块实现了 cov-report CLI 的默认操作：
//! 解析输入，运行覆盖率工具并打开报告。

use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        config::resolve_report_config,
        execution::run_report,
        planner::{PlanOptions, plan_report},
    },
    infra::{fs::resolve_project_root, t},
    match_available_locale,
    reporting::{print_dry_run, print_run_header, write_summary},
};

/// Arguments of the default action.
/// 默认操作的参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    /// `--data-file`, highest precedence for the data file.
    pub data_file: Option<PathBuf>,
    /// `--config`; `None` means `<project-dir>/CovReport.toml` if present.
    pub config: Option<PathBuf>,
    pub project_dir: PathBuf,
    pub no_open: bool,
    pub dry_run: bool,
    /// Where to write the JSON run summary.
    pub summary: Option<PathBuf>,
}

/// Executes the default action with the provided arguments.
///
/// # Arguments
/// * `args` - Parsed command-line arguments
/// * `language_explicit` - Whether `--lang` was given; if not, the config's
///   `language` setting applies
///
/// # Returns
/// A Result indicating success or failure of the run
pub async fn execute(args: RunArgs, language_explicit: bool) -> Result<()> {
    let project_root = resolve_project_root(&args.project_dir)?;
    let (config, config_path) = resolve_report_config(args.config.as_deref(), &project_root)?;

    if !language_explicit {
        if let Some(language) = &config.language {
            rust_i18n::set_locale(&match_available_locale(language));
        }
    }

    let options = PlanOptions::from_env(args.data_file.clone(), !args.no_open);
    let plan = plan_report(&config, &options)?;

    print_run_header(&project_root, config_path.as_deref(), &plan);

    if args.dry_run {
        print_dry_run(&plan);
        return Ok(());
    }

    let stop_token = setup_signal_handler();
    let summary = run_report(&plan, &project_root, &stop_token).await?;

    if let Some(summary_path) = &args.summary {
        match write_summary(&summary, summary_path) {
            Ok(()) => println!(
                "{}",
                t!("run.summary_written", path = summary_path.display()).cyan()
            ),
            // A summary that cannot be written does not fail the run.
            Err(e) => eprintln!("{} {:#}", t!("run.summary_write_failed").red(), e),
        }
    }

    Ok(())
}

/// Sets up a Ctrl-C handler that cancels the returned token.
fn setup_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => token_clone.cancel(),
            Err(e) => eprintln!("{} {}", t!("run.signal_listener_failed").yellow(), e),
        }
    });

    token
}
