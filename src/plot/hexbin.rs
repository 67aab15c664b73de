//! Hexagonal binning for density parity plots

use std::collections::BTreeMap;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Pointy-top hexagonal grid over a square `[lo, hi]²` domain.
///
/// Cells are addressed by axial coordinates `(q, r)` measured from the
/// lower-left corner of the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexGrid {
    origin: f64,
    size: f64,
}

impl HexGrid {
    /// Grid with `gridsize` hexagons across the domain. `gridsize` must be > 0.
    pub fn new(limits: (f64, f64), gridsize: usize) -> Self {
        let (lo, hi) = limits;
        let width = (hi - lo) / gridsize.max(1) as f64;
        Self {
            origin: lo,
            size: width / SQRT_3,
        }
    }

    /// Circumradius of one hexagon.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Cell containing a point.
    pub fn cell(&self, x: f64, y: f64) -> (i64, i64) {
        let (px, py) = (x - self.origin, y - self.origin);
        let q = (SQRT_3 / 3.0 * px - py / 3.0) / self.size;
        let r = (2.0 / 3.0 * py) / self.size;
        cube_round(q, r)
    }

    /// Centre of a cell.
    pub fn center(&self, q: i64, r: i64) -> (f64, f64) {
        let (q, r) = (q as f64, r as f64);
        (
            self.origin + self.size * SQRT_3 * (q + r / 2.0),
            self.origin + self.size * 1.5 * r,
        )
    }

    /// Six corner points of a cell.
    pub fn vertices(&self, q: i64, r: i64) -> [(f64, f64); 6] {
        let (cx, cy) = self.center(q, r);
        let mut out = [(0.0, 0.0); 6];
        for (i, v) in out.iter_mut().enumerate() {
            let angle = (60.0 * i as f64 - 30.0).to_radians();
            *v = (cx + self.size * angle.cos(), cy + self.size * angle.sin());
        }
        out
    }

    /// Count points per cell.
    pub fn bin(&self, points: impl IntoIterator<Item = (f64, f64)>) -> BTreeMap<(i64, i64), usize> {
        let mut counts = BTreeMap::new();
        for (x, y) in points {
            if x.is_finite() && y.is_finite() {
                *counts.entry(self.cell(x, y)).or_insert(0) += 1;
            }
        }
        counts
    }
}

fn cube_round(qf: f64, rf: f64) -> (i64, i64) {
    let sf = -qf - rf;
    let (mut q, mut r, s) = (qf.round(), rf.round(), sf.round());
    let (dq, dr, ds) = ((q - qf).abs(), (r - rf).abs(), (s - sf).abs());
    if dq > dr && dq > ds {
        q = -r - s;
    } else if dr > ds {
        r = -q - s;
    }
    (q as i64, r as i64)
}
