// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colour assignment for newly created nodes.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::types::Colour;

/// Seed used by [`RandomColours::default`].
const DEFAULT_SEED: u64 = 0x7265_6d61_7073;

/// Supplies the display colour for each node a [`Tree`](crate::Tree) creates.
///
/// Exactly one colour is drawn per created node, in creation order, so a
/// deterministic source yields a deterministic tree.
///
/// Any `FnMut() -> Colour` closure is a colour source:
///
/// ```rust
/// use understory_treemap::{Colour, Tree};
///
/// let mut tree = Tree::with_colours(|| Colour::new(0x33, 0x66, 0x99));
/// let leaf = tree.leaf("a.txt", 10);
/// assert_eq!(tree.colour(leaf), Some(Colour::new(0x33, 0x66, 0x99)));
/// ```
pub trait ColourSource {
    /// Produce the colour for the next node.
    fn next_colour(&mut self) -> Colour;
}

impl<F: FnMut() -> Colour> ColourSource for F {
    fn next_colour(&mut self) -> Colour {
        self()
    }
}

/// Uniformly random colours drawn from a seedable generator.
#[derive(Clone, Debug)]
pub struct RandomColours<R = SmallRng> {
    rng: R,
}

impl RandomColours {
    /// Colours from a [`SmallRng`] seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomColours<R> {
    /// Colours from an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomColours {
    fn default() -> Self {
        Self::seeded(DEFAULT_SEED)
    }
}

impl<R: RngCore> ColourSource for RandomColours<R> {
    fn next_colour(&mut self) -> Colour {
        let [r, g, b, _] = self.rng.next_u32().to_le_bytes();
        Colour::new(r, g, b)
    }
}
