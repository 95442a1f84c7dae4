//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as resolving the project directory and writing output files.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如解析项目目录和写入输出文件。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Checks if a path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a directory, `false` otherwise
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Resolves the directory both external programs run in.
///
/// # Arguments
/// * `project_dir` - The `--project-dir` value, possibly relative
///
/// # Returns
/// The canonical absolute path, or an error if it is not an existing directory
pub fn resolve_project_root(project_dir: &Path) -> Result<PathBuf> {
    let root = fs::canonicalize(project_dir).with_context(|| {
        t!("config.project_dir_not_found", path = project_dir.display()).to_string()
    })?;
    if !is_directory(&root) {
        anyhow::bail!(t!("config.project_dir_not_found", path = project_dir.display()).to_string());
    }
    Ok(root)
}

/// Writes `contents` to `path`, creating missing parent directories first.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!("init.create_parent_dir_failed", path = parent.display()).to_string()
            })?;
        }
    }

    fs::write(path, contents)
        .with_context(|| t!("init.write_failed", path = path.display()).to_string())
}
