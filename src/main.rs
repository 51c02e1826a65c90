use clap::{Parser, Subcommand};
use colored::*;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use docstrict_lib::config::Config;
use docstrict_lib::exit_codes::exit;
use docstrict_lib::output::OutputFormat;
use docstrict_lib::rewrites::{BackslashReturns, StrongSpacing, TextRewrite};
use docstrict_lib::rules::enabled_rules;

mod cli_types;
mod file_processor;

use cli_types::{CheckArgs, DiscoveryArgs, FixArgs, RewriteArgs, split_list};
use file_processor::{DiscoveryOptions, RunSummary, check_files, find_markdown_files, fix_files, rewrite_files};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Structural checker and fixer for a Markdown documentation tree",
    long_about = None
)]
struct Cli {
    /// Configuration file path (defaults to .docstrict.toml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check Markdown files for structural violations
    Check(CheckArgs),
    /// Fix structural violations in place
    Fix(FixArgs),
    /// Replace `\\` hard-return markers with real line breaks
    ConvertBackslashes(RewriteArgs),
    /// Remove spaces inside `**strong**` markers
    FixEmphasis(RewriteArgs),
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Positional paths, or `default_root` when none were given
fn resolve_roots(paths: &[String], default_root: &Path) -> Vec<PathBuf> {
    if paths.is_empty() {
        vec![default_root.to_path_buf()]
    } else {
        paths.iter().map(PathBuf::from).collect()
    }
}

/// Command-line flags override the config file, which overrides the command's `defaults`
fn discovery_options(config: &Config, args: &DiscoveryArgs, defaults: DiscoveryOptions) -> DiscoveryOptions {
    let DiscoveryOptions {
        exclude,
        respect_gitignore,
        skip_hidden,
    } = defaults;
    DiscoveryOptions {
        exclude: args
            .exclude
            .as_deref()
            .map(split_list)
            .or_else(|| config.global.exclude.clone())
            .unwrap_or(exclude),
        respect_gitignore: args
            .respect_gitignore
            .or(config.global.respect_gitignore)
            .unwrap_or(respect_gitignore),
        skip_hidden,
    }
}

/// Files under the docs directory (or the given paths) for `check` and `fix`
fn docs_files(config: &Config, paths: &[String], discovery: &DiscoveryArgs) -> anyhow::Result<Vec<PathBuf>> {
    let docs_dir = &config.global.docs_dir;
    if paths.is_empty() && !docs_dir.is_dir() {
        anyhow::bail!("Docs directory not found: {}", docs_dir.display());
    }
    find_markdown_files(
        &resolve_roots(paths, docs_dir),
        &discovery_options(config, discovery, DiscoveryOptions::docs_tree()),
    )
}

/// Exit with the code a finished run deserves. Per-file failures outrank violations.
fn finish(summary: &RunSummary) -> ! {
    if summary.file_errors > 0 {
        exit::tool_error();
    }
    if summary.total_warnings > 0 {
        exit::violations_found();
    }
    exit::success();
}

fn run_check(config: &Config, args: &CheckArgs) -> anyhow::Result<RunSummary> {
    let output_format = args
        .output_format
        .as_deref()
        .map(OutputFormat::from_str)
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();

    let cli_disable = args.disable.as_deref().map(split_list).unwrap_or_default();
    let rules = enabled_rules(config, &cli_disable);
    for rule in &rules {
        log::debug!("Enabled {}: {}", rule.name(), rule.description());
    }

    let files = docs_files(config, &args.paths, &args.discovery)?;
    let formatter = output_format.create_formatter();
    Ok(check_files(&files, &rules, formatter.as_ref()))
}

fn run_fix(config: &Config, args: &FixArgs) -> anyhow::Result<RunSummary> {
    let files = docs_files(config, &args.paths, &args.discovery)?;
    Ok(fix_files(&files, args.dry_run))
}

fn run_rewrite(config: &Config, args: &RewriteArgs, rewrite: &dyn TextRewrite) -> anyhow::Result<RunSummary> {
    let files = find_markdown_files(
        &resolve_roots(&args.paths, Path::new(".")),
        &discovery_options(config, &args.discovery, DiscoveryOptions::repository()),
    )?;
    Ok(rewrite_files(&files, rewrite, args.dry_run))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let config = match Config::load(cli.config.as_deref(), Path::new(".")) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {e}", "Config error".red().bold());
            exit::tool_error();
        }
    };

    let result = match &cli.command {
        Commands::Check(args) => run_check(&config, args),
        Commands::Fix(args) => run_fix(&config, args),
        Commands::ConvertBackslashes(args) => run_rewrite(&config, args, &BackslashReturns),
        Commands::FixEmphasis(args) => run_rewrite(&config, args, &StrongSpacing),
    };

    match result {
        Ok(summary) => finish(&summary),
        Err(e) => {
            eprintln!("{}: {e:#}", "Error".red().bold());
            exit::tool_error();
        }
    }
}
