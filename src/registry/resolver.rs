//! Fragment source resolution.
//!
//! A configured registry path may point at a single YAML document or at a
//! directory of fragment files. Directory sources are enumerated recursively
//! and returned sorted by path; the sort order is load-bearing because it
//! fixes merge order and therefore which fragment a conflict diagnostic
//! names first.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

use crate::utils::display_path;

/// File extensions recognized as registry fragments.
pub const FRAGMENT_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Whether the configured path resolved to a single document or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    File,
    Directory,
}

/// The resolved fragment set for one registry source.
#[derive(Debug)]
pub struct ResolvedSources {
    pub source_type: SourceType,
    /// Fragment paths in merge order (sorted lexicographically).
    pub paths: Vec<PathBuf>,
    /// The file or directory the paths were resolved from.
    pub root: PathBuf,
}

/// Resolves the configured registry path into an ordered fragment set.
///
/// A path naming an existing file resolves to exactly that file. A path
/// naming a directory resolves to every fragment below it. A missing file
/// whose extension-stripped sibling directory exists falls back to that
/// directory, so `registry/messages.yaml` can transparently become the
/// split layout `registry/messages/`.
pub fn resolve_sources(path: &Path, ignores: &[Pattern]) -> Result<ResolvedSources> {
    if path.is_file() {
        return Ok(ResolvedSources {
            source_type: SourceType::File,
            paths: vec![path.to_path_buf()],
            root: path.to_path_buf(),
        });
    }

    if path.is_dir() {
        return resolve_directory(path, ignores);
    }

    let fallback = path.with_extension("");
    if fallback != path && fallback.is_dir() {
        return resolve_directory(&fallback, ignores);
    }

    bail!(
        "Registry source '{}' not found.\n\
         Hint: check your {} 'registryPath' setting.",
        path.display(),
        crate::config::CONFIG_FILE_NAME
    );
}

fn resolve_directory(dir: &Path, ignores: &[Pattern]) -> Result<ResolvedSources> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !is_fragment(path) {
            continue;
        }
        if is_ignored(path, dir, ignores) {
            continue;
        }
        paths.push(path.to_path_buf());
    }

    if paths.is_empty() {
        bail!(
            "Registry directory '{}' contains no fragment documents (*.yaml, *.yml).",
            dir.display()
        );
    }

    paths.sort();

    Ok(ResolvedSources {
        source_type: SourceType::Directory,
        paths,
        root: dir.to_path_buf(),
    })
}

fn is_fragment(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| FRAGMENT_EXTENSIONS.contains(&ext))
}

fn is_ignored(path: &Path, root: &Path, ignores: &[Pattern]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let candidate = display_path(relative);
    ignores.iter().any(|p| p.matches(&candidate))
}
