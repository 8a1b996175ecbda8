// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable paths from a root to a node.

use alloc::{string::String, vec::Vec};

use crate::colour::ColourSource;
use crate::tree::Tree;
use crate::types::NodeId;

/// How a particular kind of tree spells its paths.
///
/// Each data source that feeds a [`Tree`] (a file system, an archive, ...)
/// supplies its own separator and kind suffixes.
pub trait PathStyle {
    /// Placed between consecutive names.
    fn separator(&self) -> &str;

    /// Appended after the final name, depending on whether the node is a leaf.
    fn suffix(&self, is_leaf: bool) -> &str;
}

impl<C: ColourSource> Tree<C> {
    /// Names from the root down to `id`, joined by the style's separator and
    /// followed by the suffix for the kind of `id`.
    ///
    /// Returns `None` for stale ids and for the empty-tree sentinel.
    ///
    /// ```rust
    /// use understory_treemap::{PathStyle, Tree};
    ///
    /// struct Dotted;
    ///
    /// impl PathStyle for Dotted {
    ///     fn separator(&self) -> &str {
    ///         "."
    ///     }
    ///     fn suffix(&self, is_leaf: bool) -> &str {
    ///         if is_leaf { "" } else { ".*" }
    ///     }
    /// }
    ///
    /// let mut tree = Tree::new();
    /// let c = tree.leaf("c", 1);
    /// let b = tree.folder("b", [c]);
    /// let a = tree.folder("a", [b]);
    /// assert_eq!(tree.path_string(c, &Dotted).as_deref(), Some("a.b.c"));
    /// assert_eq!(tree.path_string(b, &Dotted).as_deref(), Some("a.b.*"));
    /// # let _ = a;
    /// ```
    pub fn path_string(&self, id: NodeId, style: &impl PathStyle) -> Option<String> {
        let mut names: Vec<&str> = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current.and_then(|id| self.node_opt(id)) {
            names.push(node.name.as_deref()?);
            current = node.parent;
        }
        if names.is_empty() {
            return None;
        }

        let mut path = String::new();
        for (i, name) in names.iter().rev().enumerate() {
            if i > 0 {
                path.push_str(style.separator());
            }
            path.push_str(name);
        }
        path.push_str(style.suffix(self.is_leaf(id)));
        Some(path)
    }
}
