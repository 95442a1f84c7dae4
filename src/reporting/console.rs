//! # Console Reporting Module / 控制台报告模块
//!
//! Colored, localized messages about a run. Progress goes to stdout,
//! warnings and hints go to stderr.
//!
//! 关于运行的彩色本地化消息。进度输出到 stdout，警告和提示输出到 stderr。

use colored::*;
use std::path::Path;

use crate::core::models::OpenOutcome;
use crate::core::planner::ReportPlan;
use crate::infra::t;

/// Prints where the run takes place and which data file it uses.
///
/// # Output Format / 输出格式
/// ```text
/// Project root: /home/me/project
/// Loaded configuration from /home/me/project/CovReport.toml
/// Coverage data file: coverage/.coverage (default)
/// ```
pub fn print_run_header(project_root: &Path, config_path: Option<&Path>, plan: &ReportPlan) {
    println!(
        "{}",
        t!("run.project_root", path = project_root.display()).cyan()
    );
    if let Some(path) = config_path {
        println!("{}", t!("config.loaded", path = path.display()).cyan());
    }
    println!(
        "{}",
        t!(
            "run.data_file",
            path = plan.data_file.display().to_string().yellow(),
            source = plan.data_file_source.label()
        )
    );
}

/// Prints the commands a run would execute, without executing them.
/// 打印一次运行将执行的命令，但不执行它们。
pub fn print_dry_run(plan: &ReportPlan) {
    println!("{}", t!("run.dry_run_header").bold());
    println!("{}", t!("run.dry_run_report", command = plan.report.command_line()));
    match &plan.open {
        Some(open) => println!("{}", t!("run.dry_run_open", command = open.command_line())),
        None => println!("{}", t!("run.dry_run_no_open").dimmed()),
    }
}

/// Points at the missing data file after the coverage tool failed.
pub fn print_missing_data_file_hint(data_file: &Path) {
    eprintln!(
        "{}",
        t!("run.data_file_missing_hint", path = data_file.display()).yellow()
    );
}

/// Warns that the report could not be opened and says where it is.
/// The open handler's captured output, if any, follows the warning.
///
/// 警告报告无法打开并说明其位置。如果打开程序有捕获的输出，则跟在警告之后。
pub fn print_open_warning(outcome: &OpenOutcome, index_file: &Path) {
    match outcome {
        OpenOutcome::Failed { code, output } => {
            let code = code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string());
            eprintln!(
                "{}",
                t!("run.open_failed", code = code, path = index_file.display()).yellow()
            );
            if !output.trim().is_empty() {
                eprintln!("{}", t!("run.open_output").dimmed());
                eprintln!("{}", output.trim_end());
            }
        }
        OpenOutcome::Unavailable { program, error } => {
            eprintln!(
                "{}",
                t!(
                    "run.open_unavailable",
                    program = program,
                    error = error,
                    path = index_file.display()
                )
                .yellow()
            );
        }
        OpenOutcome::Opened | OpenOutcome::Disabled => {}
    }
}
