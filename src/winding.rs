// Copyright 2025 Lars Brubaker
// License: MIT
//
// Winding order classification of an open 2D point path.

use crate::geom::{Point, Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindingOrder {
    Clockwise,
    CounterClockwise,
}

/// SUM((x[n] - x[n-1]) * (y[n] + y[n-1])) over consecutive pairs.
///
/// The last point is not joined back to the first, so for a closed polygon
/// the closing edge does not contribute.
pub fn winding_sum(points: &[Point]) -> Real {
    points
        .windows(2)
        .map(|w| (w[1][0] - w[0][0]) * (w[1][1] + w[0][1]))
        .sum()
}

/// Negative sum is counter-clockwise; zero and positive are clockwise.
pub fn winding_order(points: &[Point]) -> WindingOrder {
    if winding_sum(points) < 0.0 {
        WindingOrder::CounterClockwise
    } else {
        WindingOrder::Clockwise
    }
}
