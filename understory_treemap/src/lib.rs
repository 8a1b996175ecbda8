// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_treemap --heading-base-level=0

//! Understory Treemap: a Kurbo-native, interactive slice-and-dice treemap.
//!
//! Understory Treemap maps a hierarchy of weighted items (files and folders, budget lines,
//! profiler frames) onto nested rectangles and lets a UI explore it.
//!
//! - Lays out a weighted tree by recursively slicing a rectangle along its longer side.
//! - Tracks which folders are expanded, and reports the rectangles that should be drawn.
//! - Hit tests a point against the drawn rectangles with a deterministic shared-edge rule.
//! - Supports moving a leaf between folders and rescaling a leaf's weight.
//!
//! ## Model
//!
//! A [`Tree`] is an arena of nodes addressed by [`NodeId`]. Leaves carry an authoritative
//! weight; every internal node's weight is the sum of its children. Trees are built bottom-up
//! with [`Tree::leaf`] and [`Tree::folder`], then laid out with [`Tree::compute_layout`].
//!
//! Each node is tagged with a display [`Colour`] at creation, drawn from an injected
//! [`ColourSource`] (seeded [`RandomColours`] by default), so construction is reproducible.
//!
//! Expansion is upward-closed: a node can only be expanded while its parent is, and collapsing
//! a node collapses everything below it. Leaves are never expanded.
//!
//! ## Not a renderer
//!
//! This crate computes rectangles and answers queries. Drawing [`VisibleRect`]s, polling input,
//! and deciding when to re-layout are left to the host. Edits do not re-layout on their own:
//! after [`Tree::move_to`] or [`Tree::change_size`] (plus [`Tree::recompute_sizes`]), call
//! [`Tree::compute_layout`] again with the target rectangle.
//!
//! ## API overview
//!
//! - [`Tree`]: arena owning the nodes.
//! - [`NodeId`]: handle of a node.
//! - [`NodeFlags`]: per-node display state ([`NodeFlags::EXPANDED`]).
//! - [`VisibleRect`]: a rectangle to draw, with its node and colour.
//! - [`PathStyle`]: per-source spelling of node paths.
//!
//! Key operations:
//! - [`Tree::compute_layout`], [`Tree::visible_rects`], [`Tree::hit_test`]
//! - [`Tree::expand`] / [`Tree::expand_all`] / [`Tree::collapse`] / [`Tree::collapse_all`]
//! - [`Tree::move_to`] / [`Tree::change_size`] / [`Tree::recompute_sizes`]
//! - [`Tree::path_string`]
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_treemap::Tree;
//!
//! let mut tree = Tree::new();
//! let a = tree.leaf("a", 2);
//! let b = tree.leaf("b", 8);
//! let sub1 = tree.folder("sub1", [a, b]);
//! let sub2 = tree.leaf("sub2", 25);
//! let sub3 = tree.leaf("sub3", 15);
//! let root = tree.folder("root", [sub1, sub2, sub3]);
//!
//! tree.compute_layout(root, Rect::new(0.0, 0.0, 200.0, 100.0));
//! tree.expand(root);
//!
//! let widths: Vec<f64> = tree.visible_rects(root).iter().map(|v| v.rect.width()).collect();
//! assert_eq!(widths, [40.0, 100.0, 60.0]);
//! assert_eq!(tree.hit_test(root, Point::new(100.0, 50.0)), Some(sub2));
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: enables `std` in Kurbo and the [`fs`] module, which builds a tree
//!   from a directory on disk.
//! - `libm`: float support for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod colour;
#[cfg(feature = "std")]
pub mod fs;
mod layout;
mod path;
mod tree;
mod types;
mod util;

pub use colour::{ColourSource, RandomColours};
pub use path::PathStyle;
pub use tree::Tree;
pub use types::{Colour, NodeFlags, NodeId, VisibleRect};
