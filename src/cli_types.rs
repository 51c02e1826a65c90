use clap::Args;

/// Discovery flags shared by every subcommand; each overrides the config file when given
#[derive(Args, Debug, Default)]
pub struct DiscoveryArgs {
    /// Exclude specific files or directories (comma-separated glob patterns), replacing the configured list
    #[arg(long)]
    pub exclude: Option<String>,

    /// When not specified, uses the config file value, then the command's default
    #[arg(
        long,
        num_args(0..=1),
        require_equals(true),
        default_missing_value = "true",
        help = "Respect .gitignore files when scanning directories (does not apply to explicitly provided paths)"
    )]
    pub respect_gitignore: Option<bool>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to check (defaults to the configured docs directory)
    #[arg(required = false)]
    pub paths: Vec<String>,

    /// Disable specific rules (comma-separated)
    #[arg(short, long)]
    pub disable: Option<String>,

    /// Output format: text (default) or json
    #[arg(long, short = 'o')]
    pub output_format: Option<String>,

    #[command(flatten)]
    pub discovery: DiscoveryArgs,
}

#[derive(Args, Debug)]
pub struct FixArgs {
    /// Files or directories to fix (defaults to the configured docs directory)
    #[arg(required = false)]
    pub paths: Vec<String>,

    /// Report the files that would change without writing them
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub discovery: DiscoveryArgs,
}

#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Files or directories to rewrite (defaults to the current directory)
    #[arg(required = false)]
    pub paths: Vec<String>,

    /// Report the files that would change without writing them
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub discovery: DiscoveryArgs,
}

/// Split a comma-separated CLI list, dropping empty items
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
