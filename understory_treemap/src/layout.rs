// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice layout, visible-rectangle extraction, and point hit testing.

use alloc::{vec, vec::Vec};
use kurbo::{Point, Rect};

use crate::colour::ColourSource;
use crate::tree::Tree;
use crate::types::{NodeId, VisibleRect};
use crate::util::{contains_inclusive, corner_distance_squared};

/// The axis a rectangle is sliced along: its longer side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Width wins only when strictly longer; square rectangles slice vertically.
    fn longer_side_of(rect: Rect) -> Self {
        if rect.width() > rect.height() {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    fn start(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.x0,
            Self::Vertical => rect.y0,
        }
    }

    fn extent(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.width(),
            Self::Vertical => rect.height(),
        }
    }

    /// The strip of `rect` spanning `from..to` along this axis, with both edges
    /// rounded to whole units. Neighbouring strips share an unrounded edge, so
    /// they round to the same coordinate and never overlap.
    fn strip(self, rect: Rect, from: f64, to: f64) -> Rect {
        match self {
            Self::Horizontal => {
                let edges = Rect::new(from, rect.y0, to, rect.y1).round();
                Rect::new(edges.x0, rect.y0, edges.x1, rect.y1)
            }
            Self::Vertical => {
                let edges = Rect::new(rect.x0, from, rect.x1, to).round();
                Rect::new(rect.x0, edges.y0, rect.x1, edges.y1)
            }
        }
    }
}

impl<C: ColourSource> Tree<C> {
    /// Lay out the subtree rooted at `id` inside `rect`.
    ///
    /// `id` receives `rect` itself. Each internal node then slices its own
    /// rectangle along the longer side into one strip per child, in child order,
    /// sized in proportion to the child's weight. Nodes of size zero are skipped
    /// and take up no space.
    ///
    /// Strip edges are rounded to whole units while the running offset is
    /// carried unrounded, so every strip is within one unit of its exact share.
    pub fn compute_layout(&mut self, id: NodeId, rect: Rect) {
        if !self.is_alive(id) {
            return;
        }
        let mut stack = vec![(id, rect)];
        while let Some((id, rect)) = stack.pop() {
            let node = self.node_mut(id);
            if node.size == 0 {
                continue;
            }
            node.bounds = Some(rect);

            let node = self.node(id);
            if node.children.is_empty() {
                continue;
            }
            let axis = Axis::longer_side_of(rect);
            let extent = axis.extent(rect);
            let total = node.size as f64;
            let mut offset = axis.start(rect);
            for &child in &node.children {
                let share = extent * (self.node(child).size as f64 / total);
                stack.push((child, axis.strip(rect, offset, offset + share)));
                offset += share;
            }
        }
    }

    /// Rectangles to render for the subtree rooted at `id`, depth-first in child order.
    ///
    /// Leaves and collapsed folders each contribute their own rectangle; an
    /// expanded folder contributes its children's rectangles instead. Nodes of
    /// size zero, and nodes that were never laid out, contribute nothing.
    pub fn visible_rects(&self, id: NodeId) -> Vec<VisibleRect> {
        let mut out = Vec::new();
        if self.is_alive(id) {
            self.collect_visible(id, &mut out);
        }
        out
    }

    /// Return the visible node under `point`, searching the subtree rooted at `id`.
    ///
    /// Returns `None` when `point` lies outside the bounds of `id`. Bounds include
    /// their edges, so a point on an edge shared by two visible nodes lies in
    /// both; the node whose top-left corner is closer (Euclidean distance) to
    /// `point` wins, and on an exact tie the earlier child wins.
    ///
    /// An expanded node whose children do not cover `point` (possible only
    /// through rounding at fractional coordinates) is returned itself.
    pub fn hit_test(&self, id: NodeId, point: Point) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        self.hit_visible(id, point)
    }

    fn collect_visible(&self, id: NodeId, out: &mut Vec<VisibleRect>) {
        let node = self.node(id);
        if node.size == 0 {
            return;
        }
        if node.children.is_empty() || !node.is_expanded() {
            if let Some(rect) = node.bounds {
                out.push(VisibleRect {
                    node: id,
                    rect,
                    colour: node.colour,
                });
            }
            return;
        }
        for &child in &node.children {
            self.collect_visible(child, out);
        }
    }

    fn hit_visible(&self, id: NodeId, point: Point) -> Option<NodeId> {
        let node = self.node(id);
        let bounds = node.bounds?;
        if node.size == 0 || !contains_inclusive(bounds, point) {
            return None;
        }
        if node.children.is_empty() || !node.is_expanded() {
            return Some(id);
        }
        if let [only] = node.children[..] {
            return self.hit_visible(only, point).or(Some(id));
        }

        let mut best: Option<(NodeId, f64)> = None;
        for &child in &node.children {
            let Some(hit) = self.hit_visible(child, point) else {
                continue;
            };
            let distance = self
                .node(hit)
                .bounds
                .map_or(f64::INFINITY, |r| corner_distance_squared(r, point));
            match best {
                Some((_, best_distance)) if best_distance <= distance => {}
                _ => best = Some((hit, distance)),
            }
        }
        best.map(|(hit, _)| hit).or(Some(id))
    }
}
