//! # Planner Module Unit Tests / Planner 模块单元测试
//!
//! Data file precedence and the exact command lines of both external calls.
//! No process is started here.
//!
//! 数据文件的优先级以及两个外部调用的确切命令行。此处不启动任何进程。

use cov_report::config::{DEFAULT_DATA_FILE, OUTPUT_DIR, ReportConfig, default_open_command};
use cov_report::models::DataFileSource;
use cov_report::planner::{Invocation, PlanOptions, plan_report, resolve_data_file};
use std::ffi::OsString;
use std::path::PathBuf;

fn options(data_file: Option<&str>, env_data_file: Option<&str>) -> PlanOptions {
    PlanOptions {
        data_file: data_file.map(PathBuf::from),
        env_data_file: env_data_file.map(OsString::from),
        open: true,
    }
}

fn config_with_data_file(data_file: &str) -> ReportConfig {
    ReportConfig {
        data_file: Some(data_file.to_string()),
        ..ReportConfig::default()
    }
}

fn os_args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

#[cfg(test)]
mod data_file_tests {
    use super::*;

    #[test]
    fn test_default_when_nothing_is_set() {
        let (path, source) =
            resolve_data_file(&ReportConfig::default(), &options(None, None)).unwrap();
        assert_eq!(path, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(source, DataFileSource::Default);
    }

    #[test]
    fn test_env_value_is_used_verbatim() {
        let (path, source) = resolve_data_file(
            &ReportConfig::default(),
            &options(None, Some("/tmp/example.cov")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/example.cov"));
        assert_eq!(source, DataFileSource::Environment);
    }

    #[test]
    fn test_env_value_is_not_expanded() {
        let (path, _) = resolve_data_file(
            &ReportConfig::default(),
            &options(None, Some("$HOME/data.cov")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("$HOME/data.cov"));
    }

    #[test]
    fn test_command_line_beats_env_and_config() {
        let (path, source) = resolve_data_file(
            &config_with_data_file("config.cov"),
            &options(Some("flag.cov"), Some("env.cov")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("flag.cov"));
        assert_eq!(source, DataFileSource::CommandLine);
    }

    #[test]
    fn test_env_beats_config() {
        let (path, source) = resolve_data_file(
            &config_with_data_file("config.cov"),
            &options(None, Some("env.cov")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("env.cov"));
        assert_eq!(source, DataFileSource::Environment);
    }

    #[test]
    fn test_config_beats_default() {
        let (path, source) =
            resolve_data_file(&config_with_data_file("config.cov"), &options(None, None))
                .unwrap();
        assert_eq!(path, PathBuf::from("config.cov"));
        assert_eq!(source, DataFileSource::ConfigFile);
    }

    #[test]
    fn test_empty_config_value_is_ignored() {
        let (_, source) =
            resolve_data_file(&config_with_data_file(""), &options(None, None)).unwrap();
        assert_eq!(source, DataFileSource::Default);
    }

    #[test]
    fn test_config_value_is_expanded() {
        let (path, _) = resolve_data_file(
            &config_with_data_file("${COV_REPORT_TEST_SURELY_UNSET:-fallback}/.coverage"),
            &options(None, None),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("fallback/.coverage"));
    }

    #[test]
    fn test_config_value_with_undefined_variable_fails() {
        let result = resolve_data_file(
            &config_with_data_file("$COV_REPORT_TEST_SURELY_UNSET/.coverage"),
            &options(None, None),
        );
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod plan_tests {
    use super::*;

    /// `COV_FILE=/tmp/example.cov` → `coverage html --data-file=/tmp/example.cov -d coverage/html`.
    #[test]
    fn test_report_invocation_for_cov_file() {
        let config = ReportConfig {
            open_command: Some("open".to_string()),
            ..ReportConfig::default()
        };
        let plan = plan_report(&config, &options(None, Some("/tmp/example.cov"))).unwrap();

        assert_eq!(plan.report.program, OsString::from("coverage"));
        assert_eq!(
            plan.report.args,
            os_args(&["html", "--data-file=/tmp/example.cov", "-d", "coverage/html"])
        );

        let open = plan.open.expect("open step enabled");
        assert_eq!(open.program, OsString::from("open"));
        assert_eq!(open.args, os_args(&["coverage/html/index.html"]));
    }

    #[test]
    fn test_output_dir_is_constant() {
        for opts in [
            options(None, None),
            options(Some("a/b/c.cov"), None),
            options(None, Some("/elsewhere/x.cov")),
        ] {
            let plan = plan_report(&config_with_data_file("cfg.cov"), &opts).unwrap();
            assert_eq!(plan.output_dir, PathBuf::from(OUTPUT_DIR));
            assert_eq!(plan.index_file, PathBuf::from("coverage/html/index.html"));
            assert_eq!(&plan.report.args[2..], &os_args(&["-d", "coverage/html"])[..]);
        }
    }

    #[test]
    fn test_report_command_with_leading_args() {
        let config = ReportConfig {
            report_command: "python3 -m coverage".to_string(),
            ..ReportConfig::default()
        };
        let plan = plan_report(&config, &options(None, None)).unwrap();

        assert_eq!(plan.report.program, OsString::from("python3"));
        assert_eq!(
            plan.report.args,
            os_args(&[
                "-m",
                "coverage",
                "html",
                "--data-file=coverage/.coverage",
                "-d",
                "coverage/html"
            ])
        );
    }

    #[test]
    fn test_no_open_flag_removes_open_step() {
        let mut opts = options(None, None);
        opts.open = false;

        let plan = plan_report(&ReportConfig::default(), &opts).unwrap();
        assert!(plan.open.is_none());
    }

    #[test]
    fn test_open_false_in_config_removes_open_step() {
        let config = ReportConfig {
            open: false,
            ..ReportConfig::default()
        };
        let plan = plan_report(&config, &options(None, None)).unwrap();
        assert!(plan.open.is_none());
    }

    #[test]
    fn test_platform_open_command_when_none_configured() {
        let plan = plan_report(&ReportConfig::default(), &options(None, None)).unwrap();

        let expected = Invocation::from_command_line("open_command", default_open_command())
            .unwrap()
            .arg("coverage/html/index.html");
        assert_eq!(plan.open, Some(expected));
    }

    #[test]
    fn test_open_command_with_quoted_args() {
        let config = ReportConfig {
            open_command: Some(r#"cmd /C start """#.to_string()),
            ..ReportConfig::default()
        };
        let plan = plan_report(&config, &options(None, None)).unwrap();

        let open = plan.open.unwrap();
        assert_eq!(open.program, OsString::from("cmd"));
        assert_eq!(
            open.args,
            os_args(&["/C", "start", "", "coverage/html/index.html"])
        );
    }

    #[test]
    fn test_empty_report_command_is_an_error() {
        let config = ReportConfig {
            report_command: "   ".to_string(),
            ..ReportConfig::default()
        };
        let err = plan_report(&config, &options(None, None)).unwrap_err();
        assert!(err.to_string().contains("report_command"));
    }

    #[test]
    fn test_unbalanced_quotes_are_an_error() {
        let config = ReportConfig {
            open_command: Some("xdg-open 'oops".to_string()),
            ..ReportConfig::default()
        };
        let err = plan_report(&config, &options(None, None)).unwrap_err();
        assert!(err.to_string().contains("open_command"));
    }

    #[test]
    fn test_plan_records_source() {
        let plan = plan_report(&ReportConfig::default(), &options(Some("x.cov"), None)).unwrap();
        assert_eq!(plan.data_file, PathBuf::from("x.cov"));
        assert_eq!(plan.data_file_source, DataFileSource::CommandLine);
    }
}

#[cfg(test)]
mod invocation_tests {
    use super::*;

    #[test]
    fn test_command_line_quotes_spaces() {
        let invocation = Invocation::from_command_line("report_command", "coverage")
            .unwrap()
            .arg("html")
            .arg("--data-file=my data/.coverage");

        let line = invocation.command_line();
        assert!(line.starts_with("coverage html "));
        assert!(line.contains("my data/.coverage"));
        assert_ne!(line, "coverage html --data-file=my data/.coverage");
        assert_eq!(invocation.to_string(), line);
    }

    #[test]
    fn test_from_command_line_keeps_quoted_program_path() {
        let invocation =
            Invocation::from_command_line("report_command", "'/opt/my tools/coverage' --rcfile x")
                .unwrap();
        assert_eq!(invocation.program, OsString::from("/opt/my tools/coverage"));
        assert_eq!(invocation.args, os_args(&["--rcfile", "x"]));
    }
}
