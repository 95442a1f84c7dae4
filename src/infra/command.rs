//! # Command Execution Module / 命令执行模块
//!
//! Helpers for running external programs: one that hands the terminal to the
//! child and one that captures its output.
//!
//! 运行外部程序的辅助函数：一个将终端交给子进程，另一个捕获其输出。

use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::infra::t;

/// How a process run through [`run_inherited`] ended.
/// 通过 [`run_inherited`] 运行的进程的结束方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The process exited on its own. / 进程自行退出。
    Exited(ExitStatus),
    /// The token was cancelled and the process was killed.
    /// 令牌被取消，进程已被终止。
    Cancelled,
}

/// Runs a command with stdin, stdout and stderr inherited from this process,
/// so its output reaches the terminal untouched, and waits for it.
///
/// If `cancel` fires first, the child is killed and `Completion::Cancelled`
/// is returned. A child that died from SIGINT also counts as cancelled.
///
/// 运行一个继承本进程 stdin、stdout 和 stderr 的命令，使其输出原样到达终端，并等待其结束。
/// 如果 `cancel` 先触发，子进程将被终止并返回 `Completion::Cancelled`。
///
/// # Returns
/// The completion, or the `io::Error` raised while spawning or waiting
pub async fn run_inherited(
    mut cmd: tokio::process::Command,
    cancel: &CancellationToken,
) -> std::io::Result<Completion> {
    let mut child = cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()?;

    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            // The child may already be gone; nothing left to do then.
            let _ = child.kill().await;
            Ok(Completion::Cancelled)
        }
        status = child.wait() => {
            let status = status?;
            // A terminal Ctrl-C reaches the child too; it may exit before the
            // listener has cancelled the token.
            if cancel.is_cancelled() || killed_by_interrupt(&status) {
                Ok(Completion::Cancelled)
            } else {
                Ok(Completion::Exited(status))
            }
        }
    }
}

#[cfg(unix)]
fn killed_by_interrupt(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;

    // SIGINT
    status.signal() == Some(2)
}

#[cfg(not(unix))]
fn killed_by_interrupt(_status: &ExitStatus) -> bool {
    false
}

/// Spawns a command, captures its stdout and stderr.
/// The output streams are read concurrently and combined into a single string.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The combined stdout and stderr as a `String`.
///
/// 派生一个命令，捕获其 stdout 和 stderr。
/// 输出流被并发读取并合并到一个字符串中。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<ExitStatus>, String) {
    let mut child = match cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => return (Err(e), String::new()),
    };

    let Some(stdout) = child.stdout.take() else {
        return (
            Err(std::io::Error::other(t!("run.capture_stdout_failed").to_string())),
            String::new(),
        );
    };
    let Some(stderr) = child.stderr.take() else {
        return (
            Err(std::io::Error::other(t!("run.capture_stderr_failed").to_string())),
            String::new(),
        );
    };

    // Both readers append to the same buffer.
    // 两个读取任务写入同一个缓冲区。
    let output = Arc::new(tokio::sync::Mutex::new(String::new()));

    let stdout_output = Arc::clone(&output);
    let stdout_handle = tokio::spawn(async move {
        let mut lines = BufReader::new(stdout).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let mut output = stdout_output.lock().await;
            output.push_str(&line);
            output.push('\n');
        }
    });

    let stderr_output = Arc::clone(&output);
    let stderr_handle = tokio::spawn(async move {
        let mut lines = BufReader::new(stderr).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let mut output = stderr_output.lock().await;
            output.push_str(&line);
            output.push('\n');
        }
    });

    let status = child.wait().await;

    // Wait for the readers so no trailing output is lost.
    // 等待读取任务完成，以免丢失末尾的输出。
    if let Err(e) = stdout_handle.await {
        eprintln!("Failed to join stdout task: {}", e);
    }
    if let Err(e) = stderr_handle.await {
        eprintln!("Failed to join stderr task: {}", e);
    }

    let combined = output.lock().await.clone();
    (status, combined)
}
