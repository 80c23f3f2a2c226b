//! Precomputed Morton interleave tables.
//!
//! Two small tables spread a 12-bit coordinate onto the even (`x2pix`) or odd
//! (`y2pix`) bits of a 24-bit pixel number. Two large tables invert that for
//! an 18-bit pixel number, yielding its 9-bit x and y coordinates. None of the
//! tables depend on the resolution.
//!
//! [`InterleaveTables::build`] constructs a fresh, independent set;
//! [`InterleaveTables::shared`] hands out one process-wide set built on first
//! use. The free functions [`ring_to_nested`](crate::ring_to_nested) and
//! [`nested_to_ring`](crate::nested_to_ring) go through the shared set.

use crate::constants::{PIXMAX, XMAX, XMID};
use crate::faces::FaceGeometry;
use once_cell::sync::Lazy;

static SHARED: Lazy<InterleaveTables> = Lazy::new(|| {
    let tables = InterleaveTables::build();
    tracing::debug!(
        interleave_entries = tables.x2pix.len(),
        deinterleave_entries = tables.pix2x.len(),
        "built shared HEALPix interleave tables"
    );
    tables
});

/// Lookup tables and face geometry shared by both converters.
///
/// Immutable once built, so a reference can be used from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterleaveTables {
    x2pix: Box<[u32]>,
    y2pix: Box<[u32]>,
    pix2x: Box<[u16]>,
    pix2y: Box<[u16]>,
    geometry: FaceGeometry,
}

impl InterleaveTables {
    /// Build a fresh set of tables.
    ///
    /// Pure bit arithmetic over fixed ranges: cannot fail, and every call
    /// yields identical tables. Prefer [`shared`](Self::shared) unless an
    /// independent instance is needed.
    pub fn build() -> Self {
        let (pix2x, pix2y) = build_deinterleave();
        let (x2pix, y2pix) = build_interleave();
        Self {
            x2pix,
            y2pix,
            pix2x,
            pix2y,
            geometry: FaceGeometry::STANDARD,
        }
    }

    /// Process-wide tables, built exactly once on first access.
    pub fn shared() -> &'static InterleaveTables {
        &SHARED
    }

    /// Indexed by `coordinate + 1`; entry 0 is unused.
    pub fn x2pix(&self) -> &[u32] {
        &self.x2pix
    }

    /// Indexed by `coordinate + 1`; entry 0 is unused.
    pub fn y2pix(&self) -> &[u32] {
        &self.y2pix
    }

    pub fn pix2x(&self) -> &[u16] {
        &self.pix2x
    }

    pub fn pix2y(&self) -> &[u16] {
        &self.pix2y
    }

    pub fn geometry(&self) -> &FaceGeometry {
        &self.geometry
    }

    /// Face-local pixel number of face coordinates `(ix, iy)`, both in `[0, NS_MAX)`.
    #[inline]
    pub(crate) fn xy_to_pixel(&self, ix: i64, iy: i64) -> i64 {
        let ix_low = (ix % XMAX) as usize;
        let ix_hi = (ix / XMAX) as usize;
        let iy_low = (iy % XMAX) as usize;
        let iy_hi = (iy / XMAX) as usize;

        let hi = self.x2pix[ix_hi + 1] as i64 + self.y2pix[iy_hi + 1] as i64;
        let low = self.x2pix[ix_low + 1] as i64 + self.y2pix[iy_low + 1] as i64;
        hi * XMAX * XMAX + low
    }

    /// Face coordinates `(ix, iy)` of a face-local pixel number.
    #[inline]
    pub(crate) fn pixel_to_xy(&self, ipf: i64) -> (i64, i64) {
        let ip_low = (ipf % PIXMAX) as usize;
        let ip_trunc = ipf / PIXMAX;
        let ip_med = (ip_trunc % PIXMAX) as usize;
        let ip_hi = (ip_trunc / PIXMAX) as usize;

        let ix = PIXMAX * self.pix2x[ip_hi] as i64
            + XMID * self.pix2x[ip_med] as i64
            + self.pix2x[ip_low] as i64;
        let iy = PIXMAX * self.pix2y[ip_hi] as i64
            + XMID * self.pix2y[ip_med] as i64
            + self.pix2y[ip_low] as i64;
        (ix, iy)
    }
}

impl Default for InterleaveTables {
    fn default() -> Self {
        Self::build()
    }
}

/// `pix2x[k]`/`pix2y[k]` hold the even/odd bits of `k`, compacted.
fn build_deinterleave() -> (Box<[u16]>, Box<[u16]>) {
    let len = PIXMAX as usize + 1;
    let mut pix2x = vec![0u16; len];
    let mut pix2y = vec![0u16; len];

    for k in 0..len {
        let mut bits = k;
        let mut x = 0u16;
        let mut y = 0u16;
        let mut weight = 1u16;
        while bits != 0 {
            x += (bits & 1) as u16 * weight;
            bits >>= 1;
            y += (bits & 1) as u16 * weight;
            bits >>= 1;
            weight <<= 1;
        }
        pix2x[k] = x;
        pix2y[k] = y;
    }

    (pix2x.into_boxed_slice(), pix2y.into_boxed_slice())
}

/// `x2pix[i]` spreads the bits of `i - 1` two positions apart; `y2pix` is that shifted by one.
fn build_interleave() -> (Box<[u32]>, Box<[u32]>) {
    let len = XMAX as usize + 1;
    let mut x2pix = vec![0u32; len];
    let mut y2pix = vec![0u32; len];

    for i in 1..len {
        let mut bits = (i - 1) as u32;
        let mut spread = 0u32;
        let mut weight = 1u32;
        while bits != 0 {
            spread += (bits & 1) * weight;
            bits >>= 1;
            weight <<= 2;
        }
        x2pix[i] = spread;
        y2pix[i] = 2 * spread;
    }

    (x2pix.into_boxed_slice(), y2pix.into_boxed_slice())
}
