// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the treemap: node identifiers, flags, colours, and render output.

use kurbo::Rect;

/// Identifier for a node in a [`Tree`](crate::Tree).
///
/// Identifiers are only meaningful for the tree that produced them. Nodes are never
/// freed, so an identifier stays valid for the lifetime of its tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Per-node display state.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is expanded: its children are shown instead of the node itself.
        ///
        /// Never set on a leaf, and never set while the parent is collapsed.
        const EXPANDED = 0b0000_0001;
    }
}

/// An opaque display colour, assigned once when a node is created.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Colour {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Colour {
    /// Create a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One rectangle to render, as produced by [`Tree::visible_rects`](crate::Tree::visible_rects).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisibleRect {
    /// The node this rectangle stands for (a leaf or a collapsed folder).
    pub node: NodeId,
    /// Bounds from the last layout.
    pub rect: Rect,
    /// The node's display colour.
    pub colour: Colour,
}
