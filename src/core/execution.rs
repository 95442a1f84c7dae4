//! # Report Execution Module / 报告执行模块
//!
//! Runs a [`ReportPlan`]: first the coverage tool, blocking until it exits,
//! then, only if it succeeded, the open handler. A failing coverage tool
//! ends the run; a failing open handler only produces a warning.
//!
//! 执行 [`ReportPlan`]：先运行覆盖率工具并阻塞直到其退出，
//! 仅在其成功后再运行打开程序。覆盖率工具失败会结束运行；打开程序失败只会产生警告。

use anyhow::Result;
use chrono::Utc;
use colored::*;
use std::path::Path;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        models::{OpenOutcome, ReportError, RunSummary},
        planner::ReportPlan,
    },
    infra::{
        command::{self, Completion},
        t,
    },
    reporting::console,
};

/// The main entry point for producing the report.
///
/// # Arguments
/// * `plan` - The resolved plan
/// * `project_root` - Working directory of both external programs
/// * `cancel` - Cancelled on Ctrl-C; stops the coverage tool
///
/// # Returns
/// A `RunSummary` when the report was generated. Errors carry a
/// [`ReportError`] that decides the process exit code.
pub async fn run_report(
    plan: &ReportPlan,
    project_root: &Path,
    cancel: &CancellationToken,
) -> Result<RunSummary> {
    let started_at = Utc::now();

    println!(
        "{}",
        t!("run.generating_report", dir = plan.output_dir.display()).blue()
    );
    println!("{} {}", t!("run.command_prefix").blue(), plan.report);

    let start_time = Instant::now();
    let completion = command::run_inherited(plan.report.to_command(project_root), cancel)
        .await
        .map_err(|source| ReportError::ToolNotFound {
            program: plan.report.program.to_string_lossy().into_owned(),
            source,
        })?;

    match completion {
        Completion::Cancelled => return Err(ReportError::Interrupted.into()),
        Completion::Exited(status) if !status.success() => {
            // The tool reports the missing file itself; this only adds a pointer.
            if !project_root.join(&plan.data_file).exists() {
                console::print_missing_data_file_hint(&plan.data_file);
            }
            return Err(ReportError::ExternalTool {
                program: plan.report.program.to_string_lossy().into_owned(),
                code: status.code(),
            }
            .into());
        }
        Completion::Exited(_) => {}
    }

    let duration = start_time.elapsed();
    println!(
        "{}",
        t!(
            "run.report_generated",
            path = plan.index_file.display(),
            duration = format!("{:.2}", duration.as_secs_f64())
        )
        .green()
    );

    let open = open_report(plan, project_root).await;

    Ok(RunSummary {
        started_at,
        data_file: plan.data_file.clone(),
        data_file_source: plan.data_file_source,
        output_dir: plan.output_dir.clone(),
        index_file: plan.index_file.clone(),
        report_command: plan.report.command_line(),
        report_seconds: duration.as_secs_f64(),
        open,
    })
}

/// Hands the generated index page to the open handler, if opening is enabled.
/// Never fails: problems are printed as warnings and returned as the outcome.
///
/// 如果启用了打开步骤，则将生成的首页交给打开程序。
/// 从不失败：问题会作为警告打印并作为结果返回。
pub async fn open_report(plan: &ReportPlan, project_root: &Path) -> OpenOutcome {
    let Some(invocation) = &plan.open else {
        println!(
            "{}",
            t!("run.open_disabled", path = plan.index_file.display()).dimmed()
        );
        return OpenOutcome::Disabled;
    };

    println!(
        "{}",
        t!("run.opening_report", path = plan.index_file.display()).blue()
    );

    let (status, output) = command::spawn_and_capture(invocation.to_command(project_root)).await;
    let outcome = match status {
        Ok(status) if status.success() => OpenOutcome::Opened,
        Ok(status) => OpenOutcome::Failed {
            code: status.code(),
            output,
        },
        Err(e) => OpenOutcome::Unavailable {
            program: invocation.program.to_string_lossy().into_owned(),
            error: e.to_string(),
        },
    };

    if outcome.is_warning() {
        console::print_open_warning(&outcome, &plan.index_file);
    }

    outcome
}
