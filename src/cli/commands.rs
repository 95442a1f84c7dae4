//! # Commands / 命令
//!
//! - `run` - Generate and open the coverage report (the default action)
//! - `init` - Write a `CovReport.toml`
//!
//! - `run` - 生成并打开覆盖率报告（默认操作）
//! - `init` - 写入 `CovReport.toml`

pub mod init;
pub mod run;
