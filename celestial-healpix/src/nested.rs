//! NESTED → RING conversion.
//!
//! The face-local pixel number is de-interleaved into face coordinates
//! `(ix, iy)`. Their sum and difference give the ring number and the
//! position along the ring, from which the RING index follows by counting
//! the pixels on all rings to the north.

use crate::errors::HealpixResult;
use crate::nside::Nside;
use crate::tables::InterleaveTables;

impl InterleaveTables {
    /// Convert a NESTED pixel index to the RING index of the same pixel.
    ///
    /// # Arguments
    /// * `nside` - Resolution, a power of two in `[1, NS_MAX]`
    /// * `nest_index` - NESTED index in `[0, 12*nside^2)`
    ///
    /// # Returns
    /// RING index in `[0, 12*nside^2)`, or [`HealpixError::InvalidResolution`]
    /// / [`HealpixError::IndexOutOfRange`] for bad input.
    ///
    /// [`HealpixError::InvalidResolution`]: crate::HealpixError::InvalidResolution
    /// [`HealpixError::IndexOutOfRange`]: crate::HealpixError::IndexOutOfRange
    pub fn nested_to_ring(&self, nside: i64, nest_index: i64) -> HealpixResult<i64> {
        let nside = Nside::new(nside)?;
        let ipnest = nside.check_index(nest_index)?;
        Ok(self.nested_to_ring_unchecked(nside, ipnest))
    }

    /// `ipnest` must already be range-checked against `nside`.
    pub(crate) fn nested_to_ring_unchecked(&self, nside: Nside, ipnest: i64) -> i64 {
        let ns = nside.get();
        let npface = nside.pixels_per_face();
        let face = ipnest / npface;
        let (ix, iy) = self.pixel_to_xy(ipnest % npface);

        let jrt = ix + iy;
        let jpt = ix - iy;
        let jr = self.geometry().face_row(face) * ns - jrt - 1;

        let (nr, n_before, kshift) = ring_layout(nside, jr);
        let ring_len = 4 * nr;

        let mut jp = (self.geometry().face_phase(face) * nr + jpt + 1 + kshift) / 2;
        if jp > ring_len {
            jp -= ring_len;
        }
        if jp < 1 {
            jp += ring_len;
        }

        n_before + jp - 1
    }
}

/// For ring `jr` (1-based from the north pole): pixels per quadrant, number
/// of pixels on earlier rings, and the ring's half-pixel shift.
fn ring_layout(nside: Nside, jr: i64) -> (i64, i64, i64) {
    let ns = nside.get();
    if jr < ns {
        (jr, 2 * jr * (jr - 1), 0)
    } else if jr > 3 * ns {
        let nr = 4 * ns - jr;
        (nr, nside.npix() - 2 * (nr + 1) * nr, 0)
    } else {
        (ns, nside.ncap() + 4 * ns * (jr - ns), (jr - ns) % 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> &'static InterleaveTables {
        InterleaveTables::shared()
    }

    #[test]
    fn test_ring_layout_nside4() {
        let nside = Nside::new(4).unwrap();
        assert_eq!(ring_layout(nside, 1), (1, 0, 0));
        assert_eq!(ring_layout(nside, 3), (3, 12, 0));
        // first equatorial ring starts after the 24 cap pixels
        assert_eq!(ring_layout(nside, 4), (4, 24, 0));
        assert_eq!(ring_layout(nside, 5), (4, 40, 1));
        assert_eq!(ring_layout(nside, 12), (4, 152, 0));
        assert_eq!(ring_layout(nside, 13), (3, 168, 0));
        assert_eq!(ring_layout(nside, 15), (1, 188, 0));
    }

    #[test]
    fn test_literal_pixels() {
        assert_eq!(tables().nested_to_ring(2, 3).unwrap(), 0);
        assert_eq!(tables().nested_to_ring(2, 0).unwrap(), 13);
        assert_eq!(tables().nested_to_ring(2, 18).unwrap(), 27);
        assert_eq!(tables().nested_to_ring(2, 23).unwrap(), 14);
        assert_eq!(tables().nested_to_ring(4, 5).unwrap(), 27);
        assert_eq!(tables().nested_to_ring(4, 123).unwrap(), 83);
    }

    #[test]
    fn test_face_corners_nside1() {
        // At nside 1 both schemes number the base faces identically.
        for ipix in 0..12 {
            assert_eq!(tables().nested_to_ring(1, ipix).unwrap(), ipix);
        }
    }

    #[test]
    fn test_inverts_ring_to_nested() {
        for nside in [1, 2, 4, 8, 16, 32] {
            let npix = 12 * nside * nside;
            for ipix in 0..npix {
                let ipring = tables().nested_to_ring(nside, ipix).unwrap();
                assert!((0..npix).contains(&ipring));
                assert_eq!(tables().ring_to_nested(nside, ipring).unwrap(), ipix);
            }
        }
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(tables().nested_to_ring(-2, 0).is_err());
        assert!(tables().nested_to_ring(16384, 0).is_err());
        assert!(tables().nested_to_ring(4, 192).is_err());
        assert!(tables().nested_to_ring(4, -1).is_err());
    }
}
