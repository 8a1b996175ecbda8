// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, weights, edits, and expand/collapse state.

use alloc::{string::String, vec, vec::Vec};
use kurbo::Rect;

use crate::colour::{ColourSource, RandomColours};
use crate::types::{Colour, NodeFlags, NodeId};
use crate::util::ceil_scaled;

/// Arena of weighted nodes laid out as a treemap.
///
/// Trees are built bottom-up: create leaves with [`Tree::leaf`], then wrap
/// them with [`Tree::folder`], which links the children and sums their sizes.
/// Any node without a parent is a root; one arena may hold several roots.
///
/// The type parameter `C` is the [`ColourSource`] that tags each new node. It
/// defaults to [`RandomColours`] with a fixed seed, so most callers can use
/// [`Tree`] without specifying `C`.
///
/// Edits ([`Tree::move_to`], [`Tree::change_size`]) do **not** recompute
/// bounds. Call [`Tree::compute_layout`] again before rendering or hit testing.
///
/// ## Example
///
/// ```rust
/// use kurbo::Rect;
/// use understory_treemap::Tree;
///
/// let mut tree = Tree::new();
/// let a = tree.leaf("a", 30);
/// let b = tree.leaf("b", 10);
/// let root = tree.folder("root", [a, b]);
/// assert_eq!(tree.size(root), Some(40));
///
/// tree.compute_layout(root, Rect::new(0.0, 0.0, 400.0, 100.0));
/// assert_eq!(tree.bounds(a), Some(Rect::new(0.0, 0.0, 300.0, 100.0)));
/// assert_eq!(tree.bounds(b), Some(Rect::new(300.0, 0.0, 400.0, 100.0)));
/// ```
pub struct Tree<C: ColourSource = RandomColours> {
    nodes: Vec<Node>,
    colours: C,
}

impl<C: ColourSource> core::fmt::Debug for Tree<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let roots = self.nodes.iter().filter(|n| n.parent.is_none()).count();
        let expanded = self
            .nodes
            .iter()
            .filter(|n| n.flags.contains(NodeFlags::EXPANDED))
            .count();
        f.debug_struct("Tree")
            .field("nodes_total", &self.nodes.len())
            .field("roots", &roots)
            .field("expanded", &expanded)
            .finish_non_exhaustive()
    }
}

impl<C> Default for Tree<C>
where
    C: ColourSource + Default,
{
    fn default() -> Self {
        Self::with_colours(C::default())
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    /// `None` only for the empty-tree sentinel.
    pub(crate) name: Option<String>,
    /// Authoritative for leaves; the sum of the children otherwise.
    pub(crate) size: u64,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) colour: Colour,
    /// Bounds from the last layout, `None` until the node is first laid out.
    pub(crate) bounds: Option<Rect>,
    pub(crate) flags: NodeFlags,
}

impl Node {
    fn new(name: Option<String>, size: u64, colour: Colour) -> Self {
        Self {
            name,
            size,
            parent: None,
            children: Vec::new(),
            colour,
            bounds: None,
            flags: NodeFlags::empty(),
        }
    }

    pub(crate) fn is_expanded(&self) -> bool {
        self.flags.contains(NodeFlags::EXPANDED)
    }
}

impl Tree {
    /// Create an empty arena using the default colour source.
    pub fn new() -> Self {
        Self::with_colours(RandomColours::default())
    }
}

impl<C: ColourSource> Tree<C> {
    /// Create an empty arena that draws node colours from `colours`.
    pub fn with_colours(colours: C) -> Self {
        Self {
            nodes: Vec::new(),
            colours,
        }
    }

    // --- construction ---

    /// Create a leaf with an authoritative weight.
    pub fn leaf(&mut self, name: impl Into<String>, size: u64) -> NodeId {
        let colour = self.colours.next_colour();
        self.push(Node::new(Some(name.into()), size, colour))
    }

    /// Create a node owning `children`, in the given order.
    ///
    /// Installs the parent links and sets this node's size to the sum of the
    /// children's sizes. Children that are not live roots of this arena, that
    /// are the empty-tree sentinel, or that repeat an earlier child are skipped.
    /// Without any usable child the result is a leaf of size zero.
    pub fn folder<I>(&mut self, name: impl Into<String>, children: I) -> NodeId
    where
        I: IntoIterator<Item = NodeId>,
    {
        let colour = self.colours.next_colour();
        let id = self.push(Node::new(Some(name.into()), 0, colour));
        for child in children {
            let usable = self.is_alive(child)
                && child != id
                && self.node(child).parent.is_none()
                && self.node(child).name.is_some();
            if usable {
                self.link_parent(child, id);
            }
        }
        let total = self.sum_of_children(id);
        self.node_mut(id).size = total;
        id
    }

    /// Create the sentinel standing for an empty tree: no name, no children, size zero.
    pub fn empty(&mut self) -> NodeId {
        let colour = self.colours.next_colour();
        self.push(Node::new(None, 0, colour))
    }

    // --- queries ---

    /// Returns true if `id` refers to a node of this arena.
    pub fn is_alive(&self, id: NodeId) -> bool {
        id.idx() < self.nodes.len()
    }

    /// Returns true if `id` is an empty-tree sentinel.
    pub fn is_empty(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some_and(|n| n.name.is_none())
    }

    /// Returns true if `id` is live and has no children.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some_and(|n| n.children.is_empty())
    }

    /// Returns true if `id` is live and currently expanded.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some_and(Node::is_expanded)
    }

    /// Returns the display state of a live node.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node_opt(id).map(|n| n.flags)
    }

    /// Returns the name of a live node, or `None` for sentinels and stale ids.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node_opt(id).and_then(|n| n.name.as_deref())
    }

    /// Returns the weight of a live node.
    pub fn size(&self, id: NodeId) -> Option<u64> {
        self.node_opt(id).map(|n| n.size)
    }

    /// Returns the display colour of a live node.
    pub fn colour(&self, id: NodeId) -> Option<Colour> {
        self.node_opt(id).map(|n| n.colour)
    }

    /// Returns the bounds assigned by the last [`Tree::compute_layout`] that reached
    /// this node, or `None` if it was never laid out.
    ///
    /// Zero-sized nodes are skipped by layout and keep whatever bounds they had.
    pub fn bounds(&self, id: NodeId) -> Option<Rect> {
        self.node_opt(id).and_then(|n| n.bounds)
    }

    /// Returns the parent of a node, or `None` for roots and stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Get the children of a node, or empty slice if node is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        match self.node_opt(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// Returns the root of the tree containing `id`.
    pub fn root_of(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.node_opt(id).map(|_| id)?;
        while let Some(parent) = self.node(current).parent {
            current = parent;
        }
        Some(current)
    }

    // --- weights and edits ---

    /// Recompute the size of every internal node under `id`, bottom-up, and
    /// return the resulting size of `id`.
    ///
    /// Leaves keep their stored size.
    pub fn recompute_sizes(&mut self, id: NodeId) -> Option<u64> {
        if !self.is_alive(id) {
            return None;
        }
        Some(self.recompute_subtree(id))
    }

    /// Move the leaf `id` to become the last child of `destination`.
    ///
    /// Does nothing unless `id` is a leaf (and not the empty sentinel) and
    /// `destination` has children. Sizes along both the old and the new
    /// ancestor chains are updated, and the moved node is left collapsed.
    /// A folder that loses its last child becomes a leaf of size zero.
    pub fn move_to(&mut self, id: NodeId, destination: NodeId) {
        if !self.is_leaf(id) || self.is_empty(id) {
            return;
        }
        if !self.is_alive(destination) || self.is_leaf(destination) {
            return;
        }
        if let Some(old) = self.node(id).parent {
            self.unlink_parent(id, old);
            let old_node = self.node_mut(old);
            if old != destination && old_node.children.is_empty() {
                old_node.size = 0;
                old_node.flags.remove(NodeFlags::EXPANDED);
            }
            self.refresh_ancestor_sizes(old);
        }
        self.link_parent(id, destination);
        self.refresh_ancestor_sizes(destination);
        self.node_mut(id).flags.remove(NodeFlags::EXPANDED);
    }

    /// Scale the weight of the leaf `id` by `factor`, rounding the change up.
    ///
    /// A non-negative `factor` adds `ceil(size * factor)`; a negative one
    /// subtracts `ceil(size * |factor|)`, stopping at zero. Does nothing on
    /// internal nodes.
    ///
    /// Ancestors are not updated; call [`Tree::recompute_sizes`] on the root
    /// (see [`Tree::root_of`]) before the next layout.
    pub fn change_size(&mut self, id: NodeId, factor: f64) {
        let Some(node) = self.node_opt_mut(id) else {
            return;
        };
        if !node.children.is_empty() {
            return;
        }
        let delta = ceil_scaled(node.size, factor.abs());
        node.size = if factor < 0.0 {
            node.size.saturating_sub(delta)
        } else {
            node.size.saturating_add(delta)
        };
    }

    // --- expand / collapse ---

    /// Mark `id` as expanded, so its children are shown in its place.
    ///
    /// Leaves cannot be expanded, and neither can a node whose parent is
    /// collapsed. Children and parent are left untouched.
    pub fn expand(&mut self, id: NodeId) {
        if self.can_expand(id) {
            self.node_mut(id).flags.insert(NodeFlags::EXPANDED);
        }
    }

    /// Expand `id` and every internal node below it.
    pub fn expand_all(&mut self, id: NodeId) {
        if !self.can_expand(id) {
            return;
        }
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let node = self.node_mut(id);
            if node.children.is_empty() {
                continue;
            }
            node.flags.insert(NodeFlags::EXPANDED);
            stack.extend_from_slice(&node.children);
        }
    }

    /// Collapse the parent of `id`, so the parent is shown as a single block.
    ///
    /// Descendants of the parent are collapsed too. Does nothing on a root.
    pub fn collapse(&mut self, id: NodeId) {
        if let Some(parent) = self.parent_of(id) {
            self.collapse_subtree(parent);
        }
    }

    /// Collapse every node of the tree containing `id`, not just its subtree.
    pub fn collapse_all(&mut self, id: NodeId) {
        if let Some(root) = self.root_of(id) {
            self.collapse_subtree(root);
        }
    }

    // --- internals ---

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id.idx()).expect("dangling NodeId")
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes.get_mut(id.idx()).expect("dangling NodeId")
    }

    pub(crate) fn node_opt(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.idx())
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.idx())
    }

    fn push(&mut self, node: Node) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        self.node_mut(parent).children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        self.node_mut(parent).children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }

    fn sum_of_children(&self, id: NodeId) -> u64 {
        self.node(id)
            .children
            .iter()
            .map(|&c| self.node(c).size)
            .fold(0, u64::saturating_add)
    }

    fn recompute_subtree(&mut self, id: NodeId) -> u64 {
        let count = self.node(id).children.len();
        if count == 0 {
            return self.node(id).size;
        }
        let mut total: u64 = 0;
        for i in 0..count {
            let child = self.node(id).children[i];
            total = total.saturating_add(self.recompute_subtree(child));
        }
        self.node_mut(id).size = total;
        total
    }

    /// Re-sum `from` and each of its ancestors. Sibling subtrees must already be consistent.
    fn refresh_ancestor_sizes(&mut self, from: NodeId) {
        let mut current = Some(from);
        while let Some(id) = current {
            if !self.node(id).children.is_empty() {
                let total = self.sum_of_children(id);
                self.node_mut(id).size = total;
            }
            current = self.node(id).parent;
        }
    }

    fn can_expand(&self, id: NodeId) -> bool {
        let Some(node) = self.node_opt(id) else {
            return false;
        };
        !node.children.is_empty() && node.parent.is_none_or(|p| self.node(p).is_expanded())
    }

    fn collapse_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let node = self.node_mut(id);
            node.flags.remove(NodeFlags::EXPANDED);
            stack.extend_from_slice(&node.children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds `root(sub1(ssub1: 2, ssub2: 8), sub2: 25, sub3: 15)`.
    fn sample() -> (Tree, [NodeId; 6]) {
        let mut tree = Tree::new();
        let ssub1 = tree.leaf("ssub1", 2);
        let ssub2 = tree.leaf("ssub2", 8);
        let sub1 = tree.folder("sub1", [ssub1, ssub2]);
        let sub2 = tree.leaf("sub2", 25);
        let sub3 = tree.leaf("sub3", 15);
        let root = tree.folder("root", [sub1, sub2, sub3]);
        (tree, [root, sub1, sub2, sub3, ssub1, ssub2])
    }

    fn assert_sizes_consistent(tree: &Tree, id: NodeId) {
        let children = tree.children_of(id);
        if !children.is_empty() {
            let sum: u64 = children.iter().map(|&c| tree.size(c).unwrap()).sum();
            assert_eq!(tree.size(id), Some(sum), "internal size must equal child sum");
            for &c in children {
                assert_eq!(tree.parent_of(c), Some(id), "child must point back to parent");
                assert_sizes_consistent(tree, c);
            }
        }
    }

    #[test]
    fn folder_links_children_and_sums_sizes() {
        let (tree, [root, sub1, sub2, sub3, ssub1, ssub2]) = sample();
        assert_eq!(tree.size(root), Some(50));
        assert_eq!(tree.size(sub1), Some(10));
        assert_eq!(tree.children_of(root), &[sub1, sub2, sub3]);
        assert_eq!(tree.children_of(sub1), &[ssub1, ssub2]);
        assert_eq!(tree.parent_of(ssub2), Some(sub1));
        assert_eq!(tree.parent_of(root), None);
        assert_eq!(tree.root_of(ssub1), Some(root));
        assert!(!tree.is_expanded(root), "new nodes start collapsed");
        assert_sizes_consistent(&tree, root);
    }

    #[test]
    fn folder_skips_unusable_children() {
        let mut tree = Tree::new();
        let a = tree.leaf("a", 4);
        let inner = tree.folder("inner", [a]);
        let empty = tree.empty();
        let b = tree.leaf("b", 6);
        // `a` already has a parent, `empty` is the sentinel, `b` repeats.
        let outer = tree.folder("outer", [a, empty, b, b, NodeId::new(999)]);
        assert_eq!(tree.children_of(outer), &[b]);
        assert_eq!(tree.size(outer), Some(6));
        assert_eq!(tree.parent_of(a), Some(inner));
        assert_eq!(tree.parent_of(empty), None);
    }

    #[test]
    fn folder_without_children_is_zero_leaf() {
        let mut tree = Tree::new();
        let f = tree.folder("empty dir", []);
        assert!(tree.is_leaf(f));
        assert_eq!(tree.size(f), Some(0));
        assert!(!tree.is_empty(f), "only the sentinel is an empty tree");
    }

    #[test]
    fn empty_sentinel() {
        let mut tree = Tree::new();
        let e = tree.empty();
        assert!(tree.is_empty(e));
        assert!(tree.is_leaf(e));
        assert_eq!(tree.name(e), None);
        assert_eq!(tree.size(e), Some(0));
        assert_eq!(tree.parent_of(e), None);
    }

    #[test]
    fn stale_ids_are_ignored() {
        let (mut tree, [root, ..]) = sample();
        let stale = NodeId::new(1_000);
        assert!(!tree.is_alive(stale));
        assert_eq!(tree.size(stale), None);
        assert_eq!(tree.root_of(stale), None);
        assert!(tree.children_of(stale).is_empty());
        assert_eq!(tree.recompute_sizes(stale), None);
        tree.change_size(stale, 1.0);
        tree.move_to(stale, root);
        tree.expand(stale);
        tree.collapse_all(stale);
        assert_eq!(tree.size(root), Some(50));
    }

    #[test]
    fn colours_come_from_source_in_creation_order() {
        let mut next = 0_u8;
        let mut tree = Tree::with_colours(move || {
            next += 1;
            Colour::new(next, next, next)
        });
        let a = tree.leaf("a", 1);
        let b = tree.leaf("b", 1);
        let f = tree.folder("f", [a, b]);
        assert_eq!(tree.colour(a), Some(Colour::new(1, 1, 1)));
        assert_eq!(tree.colour(b), Some(Colour::new(2, 2, 2)));
        assert_eq!(tree.colour(f), Some(Colour::new(3, 3, 3)));
    }

    #[test]
    fn recompute_restores_sums_after_resize() {
        let (mut tree, [root, sub1, _, _, ssub1, _]) = sample();
        tree.change_size(ssub1, 1.0);
        assert_eq!(tree.size(ssub1), Some(4));
        assert_eq!(tree.size(sub1), Some(10), "ancestors are stale until recomputed");
        assert_eq!(tree.recompute_sizes(root), Some(52));
        assert_eq!(tree.size(sub1), Some(12));
        assert_sizes_consistent(&tree, root);
        assert_eq!(tree.recompute_sizes(ssub1), Some(4), "leaves keep their size");
    }

    #[test]
    fn move_leaf_between_folders() {
        let mut tree = Tree::new();
        let l = tree.leaf("l", 4);
        let other = tree.leaf("other", 6);
        let p = tree.folder("p", [l, other]);
        let d_child = tree.leaf("d0", 20);
        let d = tree.folder("d", [d_child]);
        let root = tree.folder("root", [p, d]);
        tree.expand(root);

        tree.move_to(l, d);

        assert_eq!(tree.size(p), Some(6));
        assert_eq!(tree.size(d), Some(24));
        assert_eq!(tree.size(root), Some(30));
        assert_eq!(tree.parent_of(l), Some(d));
        assert!(!tree.children_of(p).contains(&l));
        assert_eq!(tree.children_of(d).last(), Some(&l), "moved node goes last");
        assert!(!tree.is_expanded(l));
        assert_sizes_consistent(&tree, root);
    }

    #[test]
    fn move_preconditions_are_no_ops() {
        let (mut tree, [root, sub1, sub2, sub3, ssub1, _]) = sample();
        // Internal node cannot move.
        tree.move_to(sub1, root);
        assert_eq!(tree.parent_of(sub1), Some(root));
        // Destination must not be a leaf.
        tree.move_to(ssub1, sub2);
        assert_eq!(tree.parent_of(ssub1), Some(sub1));
        assert!(tree.is_leaf(sub2));
        // The sentinel stays detached.
        let e = tree.empty();
        tree.move_to(e, root);
        assert_eq!(tree.parent_of(e), None);
        assert_eq!(tree.children_of(root), &[sub1, sub2, sub3]);
        assert_eq!(tree.size(root), Some(50));
    }

    #[test]
    fn moving_last_child_leaves_zero_leaf() {
        let mut tree = Tree::new();
        let a = tree.leaf("a", 5);
        let lonely = tree.folder("lonely", [a]);
        let b = tree.leaf("b", 7);
        let dest = tree.folder("dest", [b]);
        let root = tree.folder("root", [lonely, dest]);
        tree.expand_all(root);

        tree.move_to(a, dest);

        assert!(tree.is_leaf(lonely));
        assert_eq!(tree.size(lonely), Some(0));
        assert!(!tree.is_expanded(lonely), "leaves are never expanded");
        assert_eq!(tree.size(root), Some(12));
        assert_eq!(tree.recompute_sizes(root), Some(12));
    }

    #[test]
    fn move_within_same_parent_goes_last() {
        let (mut tree, [root, sub1, _, _, ssub1, ssub2]) = sample();
        tree.expand_all(root);
        tree.move_to(ssub1, sub1);
        assert_eq!(tree.children_of(sub1), &[ssub2, ssub1]);
        assert_eq!(tree.size(sub1), Some(10));
        assert!(tree.is_expanded(sub1), "staying in place keeps the folder open");

        let only = tree.leaf("only", 3);
        let single = tree.folder("single", [only]);
        tree.expand(single);
        tree.move_to(only, single);
        assert_eq!(tree.children_of(single), &[only]);
        assert_eq!(tree.size(single), Some(3));
        assert!(tree.is_expanded(single));
    }

    #[test]
    fn move_root_leaf_into_folder() {
        let (mut tree, [root, sub1, ..]) = sample();
        let stray = tree.leaf("stray", 3);
        tree.move_to(stray, sub1);
        assert_eq!(tree.parent_of(stray), Some(sub1));
        assert_eq!(tree.size(sub1), Some(13));
        assert_eq!(tree.size(root), Some(53));
    }

    #[test]
    fn change_size_rounds_up() {
        let mut tree = Tree::new();
        let leaf = tree.leaf("leaf", 100);
        tree.change_size(leaf, 0.5);
        assert_eq!(tree.size(leaf), Some(150));
        tree.change_size(leaf, -0.5);
        assert_eq!(tree.size(leaf), Some(75));
        tree.change_size(leaf, 0.0001);
        assert_eq!(tree.size(leaf), Some(76), "any non-zero factor changes a non-zero size");
        tree.change_size(leaf, -0.0001);
        assert_eq!(tree.size(leaf), Some(75));
    }

    #[test]
    fn change_size_clamps_at_zero() {
        let mut tree = Tree::new();
        let leaf = tree.leaf("leaf", 10);
        tree.change_size(leaf, -3.0);
        assert_eq!(tree.size(leaf), Some(0));
        tree.change_size(leaf, 5.0);
        assert_eq!(tree.size(leaf), Some(0), "zero stays zero");
    }

    #[test]
    fn sizes_saturate_instead_of_overflowing() {
        let mut tree = Tree::new();
        let a = tree.leaf("a", 10);
        let b = tree.leaf("b", 10);
        let root = tree.folder("root", [a, b]);
        tree.change_size(a, 1e30);
        assert_eq!(tree.size(a), Some(u64::MAX));
        assert_eq!(tree.recompute_sizes(root), Some(u64::MAX));
        assert_eq!(tree.size(root), Some(u64::MAX));

        let c = tree.leaf("c", u64::MAX);
        let d = tree.leaf("d", 1);
        let big = tree.folder("big", [c, d]);
        assert_eq!(tree.size(big), Some(u64::MAX), "building a folder saturates too");
        let other = tree.leaf("other", 3);
        let dest = tree.folder("dest", [other]);
        let _outer = tree.folder("outer", [big, dest]);
        tree.move_to(d, dest);
        assert_eq!(tree.size(dest), Some(4));
    }

    #[test]
    fn change_size_ignores_internal_nodes() {
        let (mut tree, [root, sub1, ..]) = sample();
        tree.change_size(sub1, 2.0);
        tree.change_size(root, -1.0);
        assert_eq!(tree.size(sub1), Some(10));
        assert_eq!(tree.size(root), Some(50));
    }

    #[test]
    fn expand_requires_expanded_parent() {
        let (mut tree, [root, sub1, sub2, ..]) = sample();
        tree.expand(sub1);
        assert!(!tree.is_expanded(sub1), "parent is collapsed");
        tree.expand(sub2);
        assert!(!tree.is_expanded(sub2), "leaves never expand");
        tree.expand(root);
        tree.expand(sub1);
        assert!(tree.is_expanded(root));
        assert!(tree.is_expanded(sub1));
    }

    #[test]
    fn expand_all_skips_leaves() {
        let (mut tree, [root, sub1, sub2, _, ssub1, _]) = sample();
        tree.expand_all(root);
        assert!(tree.is_expanded(root));
        assert!(tree.is_expanded(sub1));
        assert!(!tree.is_expanded(sub2));
        assert!(!tree.is_expanded(ssub1));
        assert_eq!(tree.flags(sub1), Some(NodeFlags::EXPANDED));
    }

    #[test]
    fn collapse_acts_on_parent_subtree() {
        let (mut tree, [root, sub1, _, _, ssub1, _]) = sample();
        tree.expand_all(root);
        tree.collapse(ssub1);
        assert!(!tree.is_expanded(sub1));
        assert!(tree.is_expanded(root), "only the parent context collapses");

        tree.expand(sub1);
        tree.collapse(sub1);
        assert!(!tree.is_expanded(root));
        assert!(!tree.is_expanded(sub1), "descendants follow the collapsed ancestor");

        tree.collapse(root);
        assert!(!tree.is_expanded(root), "collapsing a root is a no-op");
    }

    #[test]
    fn collapse_all_reaches_whole_tree() {
        let (mut tree, [root, sub1, _, sub3, ssub1, _]) = sample();
        tree.expand_all(root);
        tree.collapse_all(sub3);
        for id in [root, sub1, ssub1] {
            assert!(!tree.is_expanded(id), "every node collapses");
        }
        tree.expand_all(root);
        tree.collapse_all(ssub1);
        assert!(!tree.is_expanded(root));
        assert!(!tree.is_expanded(sub1));
    }

    #[test]
    fn debug_summarizes() {
        let (tree, _) = sample();
        let s = alloc::format!("{tree:?}");
        assert!(s.contains("nodes_total: 6"), "{s}");
        assert!(s.contains("roots: 1"), "{s}");
    }
}
