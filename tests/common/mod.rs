// Shared test helpers for integration tests
#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{TempDir, tempdir};

/// Stand-in for `coverage`. Records its arguments one per line, then behaves
/// like `coverage html`: fails when the data file is missing, otherwise writes
/// `<dir>/index.html`. `FAKE_REPORT_EXIT` forces an exit code.
const FAKE_COVERAGE: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$SPY_DIR/report.args"
if [ -n "$FAKE_REPORT_EXIT" ]; then
  echo "fake coverage failing on purpose" >&2
  exit "$FAKE_REPORT_EXIT"
fi
data=""
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    --data-file=*) data="${1#--data-file=}" ;;
    -d) shift; out="$1" ;;
  esac
  shift
done
if [ ! -f "$data" ]; then
  echo "No data to report." >&2
  exit 1
fi
mkdir -p "$out"
echo "<html><body>coverage</body></html>" > "$out/index.html"
echo "Wrote HTML report to $out/index.html"
"#;

/// Stand-in for the OS open handler. `FAKE_OPEN_EXIT` forces an exit code.
const FAKE_OPEN: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$SPY_DIR/open.args"
if [ -n "$FAKE_OPEN_EXIT" ]; then
  echo "no browser here" >&2
  exit "$FAKE_OPEN_EXIT"
fi
"#;

/// A temporary project directory wired to the fake tools.
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn spy_dir(&self) -> PathBuf {
        self.root().join("spy")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("CovReport.toml")
    }

    /// `report_command` pointing at the fake coverage tool.
    pub fn fake_report_command(&self) -> String {
        format!("sh '{}'", self.root().join("bin/fake-coverage").display())
    }

    /// `open_command` pointing at the fake open handler.
    pub fn fake_open_command(&self) -> String {
        format!("sh '{}'", self.root().join("bin/fake-open").display())
    }

    /// Replaces `CovReport.toml`; the fake tools are always configured,
    /// `extra` is appended verbatim.
    pub fn write_config(&self, extra: &str) {
        let content = format!(
            "language = \"en\"\nreport_command = \"{}\"\nopen_command = \"{}\"\n{}",
            self.fake_report_command(),
            self.fake_open_command(),
            extra
        );
        fs::write(self.config_path(), content).expect("Failed to write CovReport.toml");
    }

    /// Creates a (fake) coverage data file relative to the project root.
    pub fn write_data_file(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create data file directory");
        }
        fs::write(&path, "fake coverage data").expect("Failed to write data file");
        path
    }

    /// Arguments the fake coverage tool received, if it ran.
    pub fn report_args(&self) -> Option<Vec<String>> {
        read_args(&self.spy_dir().join("report.args"))
    }

    /// Arguments the fake open handler received, if it ran.
    pub fn open_args(&self) -> Option<Vec<String>> {
        read_args(&self.spy_dir().join("open.args"))
    }

    pub fn index_file(&self) -> PathBuf {
        self.root().join("coverage/html/index.html")
    }

    /// The binary, run inside the project with English output and no `COV_FILE`.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cov-report").expect("Binary not built");
        cmd.current_dir(self.root())
            .env("SPY_DIR", self.spy_dir())
            .env("NO_COLOR", "1")
            .env_remove("COV_FILE")
            .env_remove("FAKE_REPORT_EXIT")
            .env_remove("FAKE_OPEN_EXIT")
            .arg("--lang")
            .arg("en");
        cmd
    }
}

fn read_args(path: &Path) -> Option<Vec<String>> {
    fs::read_to_string(path)
        .ok()
        .map(|content| content.lines().map(str::to_string).collect())
}

/// Creates a project with the fake tools and a `CovReport.toml` using them.
pub fn setup_test_project() -> TestProject {
    let dir = tempdir().expect("Failed to create temporary directory");
    let bin = dir.path().join("bin");
    fs::create_dir_all(&bin).expect("Failed to create bin directory");
    fs::create_dir_all(dir.path().join("spy")).expect("Failed to create spy directory");
    fs::write(bin.join("fake-coverage"), FAKE_COVERAGE).expect("Failed to write fake coverage");
    fs::write(bin.join("fake-open"), FAKE_OPEN).expect("Failed to write fake open");

    let project = TestProject { dir };
    project.write_config("");
    project
}
