// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, ffi::OsStr, path::PathBuf};

use crate::config::DEFAULT_CONFIG_FILE;
use crate::infra::t;
use crate::{detect_language, match_available_locale};

pub mod commands;

use commands::run::RunArgs;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for `--lang <VALUE>` or `--lang=<VALUE>`; arguments that are not
/// valid Unicode (e.g. a data file path) are skipped.
pub fn pre_parse_language<I, S>(args: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<S> = args.into_iter().collect();
    let mut iter = args.iter().map(|arg| arg.as_ref().to_str());
    while let Some(arg) = iter.next() {
        let Some(arg) = arg else { continue };
        if arg == "--lang" {
            return iter.next().flatten().map(str::to_string);
        }
        if let Some(lang) = arg.strip_prefix("--lang=") {
            return Some(lang.to_string());
        }
    }
    None
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("cov-report")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("data-file")
                .long("data-file")
                .help(t!("cli.arg_data_file", locale = locale).to_string())
                .value_name("DATA_FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("cli.arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("project-dir")
                .long("project-dir")
                .help(t!("cli.arg_project_dir", locale = locale).to_string())
                .value_name("PROJECT_DIR")
                .default_value(".")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no-open")
                .long("no-open")
                .help(t!("cli.arg_no_open", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help(t!("cli.arg_dry_run", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help(t!("cli.arg_summary", locale = locale).to_string())
                .value_name("SUMMARY")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cli.cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("cli.arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("force")
                        .short('f')
                        .long("force")
                        .help(t!("cli.arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("cli.arg_output", locale = locale).to_string())
                        .value_name("OUTPUT")
                        .default_value(DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
}

/// Extracts the arguments of the default (report) action.
pub fn run_args_from_matches(matches: &ArgMatches) -> RunArgs {
    RunArgs {
        data_file: matches.get_one::<PathBuf>("data-file").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        project_dir: matches
            .get_one::<PathBuf>("project-dir")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
        no_open: matches.get_flag("no-open"),
        dry_run: matches.get_flag("dry-run"),
        summary: matches.get_one::<PathBuf>("summary").cloned(),
    }
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let requested_language = pre_parse_language(env::args_os());
    let language = requested_language
        .as_deref()
        .map(match_available_locale)
        .unwrap_or_else(detect_language);
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");
            let force = init_matches.get_flag("force");
            let output = init_matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

            // Show language detection message if it was auto-detected
            if requested_language.is_none() && !non_interactive {
                println!(
                    "{}",
                    t!("cli.system_language_detected", lang = &language)
                );
            }
            commands::init::execute(output, force, non_interactive, &language)?;
        }
        _ => {
            let args = run_args_from_matches(&matches);
            commands::run::execute(args, requested_language.is_some()).await?;
        }
    }
    Ok(())
}
