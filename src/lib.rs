//! # Cov Report Library / Cov Report 库
//!
//! This library provides the functionality behind the `cov-report` tool,
//! a thin wrapper that asks the `coverage` CLI for an HTML report and opens
//! the result with the platform's default handler.
//!
//! 此库为 `cov-report` 工具提供功能，
//! 这是一个轻量包装器：调用 `coverage` CLI 生成 HTML 报告，并用系统默认程序打开结果。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration, planning and the report runner
//! - `infra` - Process spawning and file system helpers
//! - `reporting` - Console output and the JSON run summary
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 配置、执行计划和报告运行器
//! - `infra` - 进程派生和文件系统辅助功能
//! - `reporting` - 控制台输出和 JSON 运行摘要
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::execution;
pub use core::models;
pub use core::planner;

/// Picks the UI language to use when none was requested explicitly.
///
/// It attempts to match the full system locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en"), and finally falls back to "en".
pub fn detect_language() -> String {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    match_available_locale(&locale)
}

/// Maps a requested locale onto one of the bundled translations.
/// 将请求的语言区域映射到内置翻译之一。
pub fn match_available_locale(requested: &str) -> String {
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&requested) {
        return requested.to_string();
    }

    requested
        .split(['-', '_'])
        .next()
        .and_then(|lang_code| {
            available_locales
                .iter()
                .find(|available| {
                    *available == &lang_code
                        || available.split('-').next() == Some(lang_code)
                })
                .map(|available| available.to_string())
        })
        .unwrap_or_else(|| "en".to_string())
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
