// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Containment test that includes all four edges, so a point on a shared edge
/// is inside both neighbours.
pub(crate) fn contains_inclusive(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Squared distance from the top-left corner of `rect` to `point`.
pub(crate) fn corner_distance_squared(rect: Rect, point: Point) -> f64 {
    (rect.origin() - point).hypot2()
}

/// `ceil(value * factor)` for a non-negative `factor`, saturating at `u64::MAX`.
///
/// A NaN product yields zero.
pub(crate) fn ceil_scaled(value: u64, factor: f64) -> u64 {
    let exact = value as f64 * factor;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Float to int casts saturate; the fractional part is handled below."
    )]
    let whole = exact as u64;
    if (whole as f64) < exact {
        whole.saturating_add(1)
    } else {
        whole
    }
}
