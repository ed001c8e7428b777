//! CLI entry point for hintguard.
//!
//! This module is intentionally thin: it handles argument parsing, logging, I/O, and exit codes.
//! All business logic lives in the `hintguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use hintguard_app::{
    CheckInput, ExplainOutput, parse_report_json, render_annotations, render_markdown, run_check,
    run_explain, runtime_error_report, to_renderable, verdict_exit_code, write_report, write_text,
};
use hintguard_render::{BuildLevel, BuildMessage};
use hintguard_settings::Overrides;
use hintguard_types::Verdict;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "hintguard",
    version,
    about = "Verify <HintPath> entries of MSBuild project references"
)]
struct Cli {
    /// Repository root; project discovery and relative paths start here.
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Path to hintguard config TOML (relative to the repo root) [default: hintguard.toml].
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Override maximum findings to emit in the report.
    #[arg(long)]
    max_findings: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(clap::Args, Debug)]
struct CheckArgs {
    /// Project file to verify (repeatable). Without it, project files are discovered.
    #[arg(long = "project")]
    projects: Vec<Utf8PathBuf>,

    /// Folder hint paths are resolved against (default: each project's directory).
    #[arg(long)]
    project_folder: Option<Utf8PathBuf>,

    /// Comma-separated reference id prefixes to skip (e.g. "System,Microsoft.").
    #[arg(long)]
    excluded_reference_prefixes: Option<String>,

    /// Comma-separated prefixes every HintPath must start with.
    #[arg(long)]
    known_hint_path_prefixes: Option<String>,

    /// Report violations as errors and exit with 2.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    treat_warnings_as_errors: Option<bool>,

    /// Where to write the JSON report.
    #[arg(long, default_value = "artifacts/hintguard/report.json")]
    report_out: Utf8PathBuf,

    /// Write a Markdown report alongside the JSON.
    #[arg(long)]
    write_markdown: bool,

    /// Where to write the Markdown report (if enabled).
    #[arg(long, default_value = "artifacts/hintguard/comment.md")]
    markdown_out: Utf8PathBuf,

    /// Do not log one line per violation.
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify HintPaths and write artifacts.
    Check(CheckArgs),

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/hintguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/hintguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g. "hintpath.exists") or code (e.g. "file_not_found") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    match &cli.cmd {
        Commands::Check(args) => cmd_check(&cli, args),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(report, *max),
        Commands::Explain { identifier } => cmd_explain(identifier),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

const DEFAULT_CONFIG: &str = "hintguard.toml";

/// Read the config file. Only a missing default config falls back to defaults.
fn load_config_text(repo_root: &Utf8Path, explicit: Option<&Utf8Path>) -> anyhow::Result<String> {
    let cfg_path = repo_root.join(explicit.unwrap_or(Utf8Path::new(DEFAULT_CONFIG)));
    match std::fs::read_to_string(&cfg_path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && explicit.is_none() => {
            tracing::debug!(path = %cfg_path, "no config file, using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config {cfg_path}")),
    }
}

fn cmd_check(cli: &Cli, args: &CheckArgs) -> anyhow::Result<()> {
    let repo_root = cli
        .repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone());

    let result = (|| -> anyhow::Result<i32> {
        if !repo_root.exists() {
            anyhow::bail!("repo root does not exist: {}", repo_root);
        }
        let cfg_text = load_config_text(&repo_root, cli.config.as_deref())?;

        let overrides = Overrides {
            project_folder: args.project_folder.clone(),
            excluded_reference_prefixes: args.excluded_reference_prefixes.clone(),
            known_hint_path_prefixes: args.known_hint_path_prefixes.clone(),
            treat_warnings_as_errors: args.treat_warnings_as_errors,
            max_findings: cli.max_findings,
        };

        let input = CheckInput {
            repo_root: &repo_root,
            config_text: &cfg_text,
            overrides,
            projects: args.projects.clone(),
        };

        let output = run_check(input)?;

        if !args.quiet {
            for line in &output.log_lines {
                log_build_message(line);
            }
        }

        write_report(&args.report_out, &output.report).context("write report json")?;

        if args.write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text(&args.markdown_out, &md).context("write markdown")?;
        }

        let data = &output.report.data;
        tracing::info!(
            "hintguard: {} ({} violation(s) in {} project(s), {} reference(s) scanned)",
            verdict_label(output.report.verdict),
            data.findings_total,
            data.projects_scanned,
            data.references_scanned
        );

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report(&args.report_out, &report);
            tracing::error!("hintguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Pass => "pass",
        Verdict::Warn => "warn",
        Verdict::Fail => "fail",
    }
}

fn log_build_message(line: &BuildMessage) {
    match line.level {
        BuildLevel::Error => tracing::error!("{}", line),
        BuildLevel::Warning => tracing::warn!("{}", line),
    }
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(out_path) => write_text(out_path, &md).context("write markdown output")?,
        None => print!("{}", md),
    }

    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", hintguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                hintguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
