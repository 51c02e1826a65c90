//! File discovery and path utilities

use anyhow::{Context, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Build output and the tooling virtualenv, skipped by the repository-wide rewriters
pub const REPOSITORY_EXCLUDES: [&str; 2] = ["site", "scripts/.venv"];

/// How a run walks its roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Glob patterns matched against paths relative to the walk root or to the current directory
    pub exclude: Vec<String>,
    pub respect_gitignore: bool,
    /// Skip dot-files and dot-directories
    pub skip_hidden: bool,
}

impl DiscoveryOptions {
    /// `check` and `fix`: every Markdown file under the docs tree
    pub fn docs_tree() -> Self {
        Self {
            exclude: Vec::new(),
            respect_gitignore: false,
            skip_hidden: false,
        }
    }

    /// The rewriters: the repository from its root, minus hidden, ignored and generated files
    pub fn repository() -> Self {
        Self {
            exclude: REPOSITORY_EXCLUDES.iter().map(|p| p.to_string()).collect(),
            respect_gitignore: true,
            skip_hidden: true,
        }
    }
}

/// Expands directory-style patterns to also match files within them.
/// Pattern "dir/path" becomes ["dir/path", "dir/path/**"] to match both
/// the directory itself and all contents recursively.
///
/// Patterns containing glob characters (*, ?, [) are returned unchanged.
fn expand_directory_pattern(pattern: &str) -> Vec<String> {
    if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
        return vec![pattern.to_string()];
    }

    let base = pattern.trim_end_matches('/');
    vec![base.to_string(), format!("{base}/**")]
}

pub fn build_exclude_set(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns.iter().flat_map(|p| expand_directory_pattern(p)) {
        let glob = Glob::new(&pattern).with_context(|| format!("Invalid exclude pattern '{pattern}'"))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Strip a leading `./` so paths print the way users type them
pub fn to_display_path(path: &Path) -> String {
    let display = path.to_string_lossy();
    display.strip_prefix("./").unwrap_or(&display).to_string()
}

/// Find `.md` files under `roots`, sorted lexicographically and deduplicated.
///
/// A root that does not exist is an error. A root that is a file is taken as-is unless an
/// exclude pattern matches it, in which case a warning is printed.
pub fn find_markdown_files(roots: &[PathBuf], options: &DiscoveryOptions) -> anyhow::Result<Vec<PathBuf>> {
    let excludes = build_exclude_set(&options.exclude)?;
    let mut file_paths = Vec::new();

    for root in roots {
        if !root.exists() {
            bail!("Path not found: {}", root.display());
        }

        if root.is_file() {
            if excludes.is_match(root) {
                eprintln!("warning: {} ignored because of an exclude pattern", root.display());
            } else {
                file_paths.push(root.clone());
            }
            continue;
        }

        let walk_root = root.clone();
        let filter_excludes = excludes.clone();
        let use_gitignore = options.respect_gitignore;

        let mut walk_builder = WalkBuilder::new(root);
        walk_builder
            .ignore(use_gitignore)
            .git_ignore(use_gitignore)
            .git_global(use_gitignore)
            .git_exclude(use_gitignore)
            .parents(use_gitignore)
            .hidden(options.skip_hidden)
            .require_git(false)
            .filter_entry(move |entry| {
                let path = entry.path();
                let relative = path.strip_prefix(&walk_root).unwrap_or(path);
                if relative.as_os_str().is_empty() {
                    return true;
                }
                let from_cwd = path.strip_prefix(".").unwrap_or(path);
                !filter_excludes.is_match(relative) && !filter_excludes.is_match(from_cwd)
            });

        for result in walk_builder.build() {
            match result {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && is_markdown(path) {
                        file_paths.push(path.to_path_buf());
                    }
                }
                Err(err) => eprintln!("Error walking directory: {err}"),
            }
        }
    }

    file_paths.sort();
    file_paths.dedup();
    log::debug!("Discovered {} markdown file(s)", file_paths.len());
    Ok(file_paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn options(exclude: &[&str]) -> DiscoveryOptions {
        DiscoveryOptions {
            exclude: exclude.iter().map(|s| s.to_string()).collect(),
            respect_gitignore: true,
            skip_hidden: true,
        }
    }

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_expand_directory_pattern() {
        assert_eq!(expand_directory_pattern("site"), vec!["site", "site/**"]);
        assert_eq!(expand_directory_pattern("scripts/.venv/"), vec!["scripts/.venv", "scripts/.venv/**"]);
        assert_eq!(expand_directory_pattern("*.tmp.md"), vec!["*.tmp.md"]);
    }

    #[test]
    fn test_finds_only_markdown_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("b/z.md"), "").unwrap();
        fs::write(dir.path().join("a.md"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = find_markdown_files(&[dir.path().to_path_buf()], &options(&[])).unwrap();
        assert_eq!(names(&files, dir.path()), vec!["a.md", "b/z.md"]);
    }

    #[test]
    fn test_excludes_prune_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("site")).unwrap();
        fs::create_dir_all(dir.path().join("scripts/.venv/lib")).unwrap();
        fs::write(dir.path().join("site/index.md"), "").unwrap();
        fs::write(dir.path().join("scripts/.venv/lib/readme.md"), "").unwrap();
        fs::write(dir.path().join("scripts/run.md"), "").unwrap();

        let opts = DiscoveryOptions {
            skip_hidden: false,
            ..options(&["site", "scripts/.venv"])
        };
        let files = find_markdown_files(&[dir.path().to_path_buf()], &opts).unwrap();
        assert_eq!(names(&files, dir.path()), vec!["scripts/run.md"]);
    }

    #[test]
    fn test_docs_tree_defaults_walk_everything() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "drafts/\n").unwrap();
        fs::create_dir_all(dir.path().join("site")).unwrap();
        fs::create_dir_all(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("site/setup.md"), "").unwrap();
        fs::write(dir.path().join("drafts/wip.md"), "").unwrap();
        fs::write(dir.path().join("index.md"), "").unwrap();

        let files = find_markdown_files(&[dir.path().to_path_buf()], &DiscoveryOptions::docs_tree()).unwrap();
        assert_eq!(names(&files, dir.path()), vec!["drafts/wip.md", "index.md", "site/setup.md"]);

        let files = find_markdown_files(&[dir.path().to_path_buf()], &DiscoveryOptions::repository()).unwrap();
        assert_eq!(names(&files, dir.path()), vec!["index.md"]);
    }

    #[test]
    fn test_hidden_entries_skipped_when_requested() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".cache")).unwrap();
        fs::write(dir.path().join(".cache/x.md"), "").unwrap();
        fs::write(dir.path().join("y.md"), "").unwrap();

        let files = find_markdown_files(&[dir.path().to_path_buf()], &options(&[])).unwrap();
        assert_eq!(names(&files, dir.path()), vec!["y.md"]);

        let opts = DiscoveryOptions {
            skip_hidden: false,
            ..options(&[])
        };
        let files = find_markdown_files(&[dir.path().to_path_buf()], &opts).unwrap();
        assert_eq!(names(&files, dir.path()), vec![".cache/x.md", "y.md"]);
    }

    #[test]
    fn test_gitignore_respected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "drafts/\n").unwrap();
        fs::create_dir_all(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("drafts/wip.md"), "").unwrap();
        fs::write(dir.path().join("done.md"), "").unwrap();

        let files = find_markdown_files(&[dir.path().to_path_buf()], &options(&[])).unwrap();
        assert_eq!(names(&files, dir.path()), vec!["done.md"]);

        let opts = DiscoveryOptions {
            respect_gitignore: false,
            ..options(&[])
        };
        let files = find_markdown_files(&[dir.path().to_path_buf()], &opts).unwrap();
        assert_eq!(names(&files, dir.path()), vec!["done.md", "drafts/wip.md"]);
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = tempdir().unwrap();
        let err = find_markdown_files(&[dir.path().join("docs")], &options(&[])).unwrap_err();
        assert!(err.to_string().starts_with("Path not found"));
    }

    #[test]
    fn test_explicit_file_taken_as_is() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("page.md");
        fs::write(&file, "").unwrap();

        let files = find_markdown_files(&[file.clone()], &options(&[])).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_to_display_path() {
        assert_eq!(to_display_path(Path::new("./docs/a.md")), "docs/a.md");
        assert_eq!(to_display_path(Path::new("docs/a.md")), "docs/a.md");
    }
}
