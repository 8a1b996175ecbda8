// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scan a directory into a treemap and explore it from the command line.
//!
//! This example shows how to:
//! - build a `Tree` from disk with `understory_treemap::fs::scan`,
//! - lay it out into a window-sized rectangle,
//! - expand, list visible rectangles, and hit test,
//! - move a file and re-layout.
//!
//! Run:
//! - `cargo run -p understory_demos --example treemap_scan -- <dir>`

use kurbo::{Point, Rect};
use understory_treemap::Tree;
use understory_treemap::fs::{FileSystemStyle, scan};

fn main() -> std::io::Result<()> {
    let dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let window = Rect::new(0.0, 0.0, 800.0, 600.0);

    let mut tree = Tree::new();
    let root = scan(&mut tree, &dir)?;
    tree.compute_layout(root, window);
    tree.expand(root);

    println!("== Visible after expanding the root ==");
    for v in tree.visible_rects(root) {
        let path = tree.path_string(v.node, &FileSystemStyle).unwrap_or_default();
        println!(
            "  {:>7.1} x {:<7.1} at ({:.0}, {:.0})  #{:02x}{:02x}{:02x}  {}",
            v.rect.width(),
            v.rect.height(),
            v.rect.x0,
            v.rect.y0,
            v.colour.r,
            v.colour.g,
            v.colour.b,
            path
        );
    }

    let centre = window.center();
    let Some(hit) = tree.hit_test(root, centre) else {
        println!("nothing at the centre (empty directory?)");
        return Ok(());
    };
    println!("\n== Hit at {centre:?} ==");
    println!("  {}", tree.path_string(hit, &FileSystemStyle).unwrap_or_default());

    // Drill into whatever is under the cursor, then pick a leaf and move it to the root.
    tree.expand_all(hit);
    if let Some(leaf) = tree.hit_test(root, centre)
        && leaf != root
        && tree.is_leaf(leaf)
    {
        tree.move_to(leaf, root);
        tree.compute_layout(root, window);
        println!("\n== Moved to the root ==");
        println!("  {}", tree.path_string(leaf, &FileSystemStyle).unwrap_or_default());
        if let Some(bounds) = tree.bounds(leaf) {
            println!("  now at {bounds:?}");
        }
    }

    // Collapsing from any node folds the whole tree back into the root block.
    tree.collapse_all(hit);
    let after = tree.hit_test(root, Point::new(1.0, 1.0));
    println!("\n== After collapse_all, (1, 1) hits {after:?} (root is {root:?}) ==");

    Ok(())
}
