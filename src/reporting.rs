//! # Reporting Module / 报告模块
//!
//! This module handles what cov-report itself prints and writes: colored,
//! localized console messages and the optional JSON run summary. The coverage
//! report is produced by the external tool, not here.
//!
//! 此模块处理 cov-report 自身打印和写出的内容：彩色的本地化控制台消息和可选的 JSON 运行摘要。
//! 覆盖率报告由外部工具生成，而非此处。

pub mod console;
pub mod summary;

// Re-export common reporting functions
pub use console::{print_dry_run, print_open_warning, print_run_header};
pub use summary::write_summary;
