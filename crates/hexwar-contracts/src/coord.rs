//! Pure hex coordinate algorithms: axial/cube math, neighbors, rings,
//! ranges, and pixel↔hex conversion.
//!
//! Everything here takes and returns [`AxialCoord`]; callers never need
//! to reconstruct the implicit cube `S` axis themselves. No world or
//! game-state dependencies — these are plain functions, testable in
//! isolation.

use serde::{Deserialize, Serialize};


/// Canonical hex coordinate. The cube's third axis `S = -Q - R` is
/// implicit and reconstructed wherever cube math is convenient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    #[must_use]
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit cube `S` coordinate, satisfying `Q + R + S = 0`.
    #[must_use]
    pub fn s(self) -> i32 {
        -self.q - self.r
    }
}

/// The six hex neighbor directions, in the engine's fixed enumeration
/// order. This order is load-bearing: [`ring`] walks it to produce a
/// deterministic sequence, and [`range`]'s iteration order matches
/// brush-painting enumeration (see `hexwar-editor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    TopLeft,
    TopRight,
    Right,
    BottomRight,
    BottomLeft,
}

impl Direction {
    /// All six directions in the fixed order `LEFT, TOP_LEFT, TOP_RIGHT,
    /// RIGHT, BOTTOM_RIGHT, BOTTOM_LEFT`.
    pub const ALL: [Direction; 6] = [
        Direction::Left,
        Direction::TopLeft,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::BottomLeft,
    ];

    /// The `(dq, dr)` step for this direction (the cube `ds` follows
    /// implicitly since `dq + dr + ds == 0`).
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::TopLeft => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::BottomRight => (0, 1),
            Direction::BottomLeft => (-1, 1),
        }
    }
}

/// Returns the neighbor of `coord` in the given `dir`.
#[must_use]
pub fn neighbor(coord: AxialCoord, dir: Direction) -> AxialCoord {
    let (dq, dr) = dir.delta();
    AxialCoord::new(coord.q + dq, coord.r + dr)
}

/// Returns the six neighbors of `coord`, filled in [`Direction::ALL`] order.
#[must_use]
pub fn neighbors(coord: AxialCoord) -> [AxialCoord; 6] {
    Direction::ALL.map(|dir| neighbor(coord, dir))
}

/// Cube distance between two coords: `(|dq| + |dr| + |ds|) / 2`.
#[must_use]
pub fn distance(a: AxialCoord, b: AxialCoord) -> i32 {
    let dq = a.q - b.q;
    let dr = a.r - b.r;
    let ds = a.s() - b.s();
    (dq.abs() + dr.abs() + ds.abs()) / 2
}

/// All coords within `radius` of `center` (inclusive), in the canonical
/// enumeration order used by brush painting:
/// `for q in [-r,+r]: for r' in [max(-r,-q-r), min(r,-q+r)]`.
#[must_use]
pub fn range(center: AxialCoord, radius: u32) -> Vec<AxialCoord> {
    let r = i32::try_from(radius).unwrap_or(i32::MAX);
    let mut out = Vec::with_capacity((3 * radius * radius + 3 * radius + 1) as usize);
    for dq in -r..=r {
        let lo = (-r).max(-dq - r);
        let hi = r.min(-dq + r);
        for dr in lo..=hi {
            out.push(AxialCoord::new(center.q + dq, center.r + dr));
        }
    }
    out
}

/// All coords at exactly `radius` distance from `center`, ordered by
/// stepping [`Direction::Left`] `radius` times, then walking `radius`
/// steps in each of `TOP_RIGHT, RIGHT, BOTTOM_RIGHT, BOTTOM_LEFT, LEFT,
/// TOP_LEFT`. `radius == 0` yields `[center]`.
#[must_use]
pub fn ring(center: AxialCoord, radius: u32) -> Vec<AxialCoord> {
    if radius == 0 {
        return vec![center];
    }

    let mut current = center;
    for _ in 0..radius {
        current = neighbor(current, Direction::Left);
    }

    const WALK: [Direction; 6] = [
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    let mut out = Vec::with_capacity(6 * radius as usize);
    for dir in WALK {
        for _ in 0..radius {
            out.push(current);
            current = neighbor(current, dir);
        }
    }
    out
}

/// Rounds fractional cube coordinates `(fq, fr, fs = -fq - fr)` to the
/// nearest integer cube coord satisfying `Q + R + S = 0`, fixing up the
/// axis with the largest rounding delta.
#[must_use]
pub fn round_fractional(fq: f64, fr: f64) -> AxialCoord {
    let fs = -fq - fr;

    let mut q = fq.round();
    let mut r = fr.round();
    let s = fs.round();

    let q_diff = (q - fq).abs();
    let r_diff = (r - fr).abs();
    let s_diff = (s - fs).abs();

    if q_diff > r_diff && q_diff > s_diff {
        q = -r - s;
    } else if r_diff > s_diff {
        r = -q - s;
    }
    // else: s is the outlier; q and r are already the best integers and
    // s is implicit, so nothing further to fix up.

    AxialCoord::new(q as i32, r as i32)
}

/// Converts an axial coord to odd-r offset `(row, col)`.
///
/// Odd-r offset: odd-indexed rows are shifted right by half a tile.
/// `row = r`, `col = q + (r - (r & 1)) / 2`.
#[must_use]
pub fn hex_to_rowcol(coord: AxialCoord) -> (i32, i32) {
    let row = coord.r;
    let col = coord.q + (row - (row & 1)) / 2;
    (row, col)
}

/// Inverse of [`hex_to_rowcol`]: `r = row`, `q = col - (row - (row & 1)) / 2`.
#[must_use]
pub fn rowcol_to_hex(row: i32, col: i32) -> AxialCoord {
    let q = col - (row - (row & 1)) / 2;
    AxialCoord::new(q, row)
}

/// Converts a hex coord to pixel-space `(x, y)` under the engine's fixed
/// odd-r pointy-top layout. `y_inc` is the vertical spacing between rows,
/// distinct from `tile_h` to allow visually overlapping rows.
#[must_use]
pub fn hex_to_pixel(coord: AxialCoord, tile_w: f64, tile_h: f64, y_inc: f64) -> (f64, f64) {
    let _ = tile_h;
    let (row, col) = hex_to_rowcol(coord);
    let y = y_inc * f64::from(row);
    let row_offset = if row % 2 != 0 { tile_w / 2.0 } else { 0.0 };
    let x = tile_w * f64::from(col) + row_offset;
    (x, y)
}

/// Converts a pixel-space point to the hex coord whose tile contains it,
/// under the same odd-r pointy-top layout as [`hex_to_pixel`].
#[must_use]
pub fn pixel_to_hex(x: f64, y: f64, tile_w: f64, tile_h: f64, y_inc: f64) -> AxialCoord {
    let row = ((y + tile_h / 2.0) / y_inc).floor() as i32;
    let row_offset = if row % 2 != 0 { tile_w / 2.0 } else { 0.0 };
    let col = ((x - row_offset) / tile_w).round() as i32;
    rowcol_to_hex(row, col)
}
