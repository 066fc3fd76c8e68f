// File: crates/artline-core/src/scale.rs
// Summary: Linear domain-to-range scale transforms for X/Y axes.

use crate::grid::ticks;

/// Pure linear mapping from a data domain interval to a pixel range.
/// The Y scale uses an inverted range (bottom, top) for screen coordinates.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let mut s = Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 };
        if (s.d1 - s.d0).abs() < 1e-12 { s.d1 = s.d0 + 1.0; }
        s
    }

    #[inline]
    pub fn scale(&self, v: f64) -> f64 {
        let raw = self.d1 - self.d0;
        let span = if raw.abs() < 1e-12 { 1e-12 } else { raw };
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let rspan = self.r1 - self.r0;
        if rspan.abs() < 1e-12 { return self.d0; }
        self.d0 + (px - self.r0) / rspan * (self.d1 - self.d0)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    /// Round-stepped tick values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.d0.min(self.d1), self.d0.max(self.d1), count)
    }
}
