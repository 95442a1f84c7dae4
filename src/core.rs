//! # Core Module / 核心模块
//!
//! This module contains the core functionality of cov-report,
//! including configuration, data models, planning and the report runner.
//!
//! 此模块包含 cov-report 的核心功能，
//! 包括配置、数据模型、执行计划和报告运行器。

pub mod config;
pub mod execution;
pub mod models;
pub mod planner;

// Re-exports
pub use config::ReportConfig;
pub use execution::run_report;
pub use models::{OpenOutcome, ReportError, RunSummary};
pub use planner::{plan_report, ReportPlan};
