// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a tree from a directory on disk.
//!
//! Regular files become leaves weighted by their length in bytes; directories
//! become folders of their entries. Symbolic links are not followed.

use std::ffi::OsStr;
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};
use std::string::{String, ToString};
use std::vec::Vec;
use std::{fs, io};

use crate::colour::ColourSource;
use crate::path::PathStyle;
use crate::tree::Tree;
use crate::types::NodeId;

/// Finder metadata that is never part of a scan.
const IGNORED_ENTRIES: &[&str] = &[".DS_Store"];

/// [`PathStyle`] for trees built by [`scan`]: the platform separator, and
/// `" (file)"` / `" (folder)"` suffixes.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSystemStyle;

impl PathStyle for FileSystemStyle {
    fn separator(&self) -> &str {
        MAIN_SEPARATOR_STR
    }

    fn suffix(&self, is_leaf: bool) -> &str {
        if is_leaf { " (file)" } else { " (folder)" }
    }
}

/// Scan `path` into `tree` and return the new root.
///
/// Entries are visited in name order, so repeated scans of an unchanged
/// directory build identical trees. A directory with no entries becomes a
/// leaf weighted by its own metadata length. Node names are the final path
/// component only.
pub fn scan<C: ColourSource>(tree: &mut Tree<C>, path: impl AsRef<Path>) -> io::Result<NodeId> {
    scan_entry(tree, path.as_ref())
}

fn scan_entry<C: ColourSource>(tree: &mut Tree<C>, path: &Path) -> io::Result<NodeId> {
    let metadata = fs::symlink_metadata(path)?;
    let name = entry_name(path);
    if !metadata.is_dir() {
        return Ok(tree.leaf(name, metadata.len()));
    }

    let mut entries = fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<PathBuf>>>()?;
    if entries.is_empty() {
        return Ok(tree.leaf(name, metadata.len()));
    }
    entries.retain(|p| !p.file_name().is_some_and(is_ignored));
    entries.sort();

    let mut children = Vec::with_capacity(entries.len());
    for entry in &entries {
        children.push(scan_entry(tree, entry)?);
    }
    Ok(tree.folder(name, children))
}

fn entry_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        // `/`, `.` and friends have no final component.
        None => path.display().to_string(),
    }
}

fn is_ignored(name: &OsStr) -> bool {
    IGNORED_ENTRIES.iter().any(|ignored| name == *ignored)
}
