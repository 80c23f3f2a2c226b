//! RING → NESTED conversion.
//!
//! A RING index is first located on the sphere as `(irn, iphi)`: the ring
//! number counted from the north pole and the 1-based position along that
//! ring. The face owning that position is found from the ring regime, and
//! the position is re-expressed as face coordinates `(ix, iy)`, which the
//! interleave tables turn into the face-local NESTED pixel number.

use crate::errors::HealpixResult;
use crate::nside::Nside;
use crate::tables::InterleaveTables;

/// Position of a RING pixel on the ring grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RingPosition {
    /// Ring number from the north pole, 1-based.
    irn: i64,
    /// Position along the ring, 1-based.
    iphi: i64,
    /// Pixels per quadrant on this ring's face row.
    nr: i64,
    /// Half-pixel phase shift of this ring.
    kshift: i64,
    face: i64,
}

impl InterleaveTables {
    /// Convert a RING pixel index to the NESTED index of the same pixel.
    ///
    /// # Arguments
    /// * `nside` - Resolution, a power of two in `[1, NS_MAX]`
    /// * `ring_index` - RING index in `[0, 12*nside^2)`
    ///
    /// # Returns
    /// NESTED index in `[0, 12*nside^2)`, or [`HealpixError::InvalidResolution`]
    /// / [`HealpixError::IndexOutOfRange`] for bad input.
    ///
    /// [`HealpixError::InvalidResolution`]: crate::HealpixError::InvalidResolution
    /// [`HealpixError::IndexOutOfRange`]: crate::HealpixError::IndexOutOfRange
    pub fn ring_to_nested(&self, nside: i64, ring_index: i64) -> HealpixResult<i64> {
        let nside = Nside::new(nside)?;
        let ipring = nside.check_index(ring_index)?;
        Ok(self.ring_to_nested_unchecked(nside, ipring))
    }

    /// `ipring` must already be range-checked against `nside`.
    pub(crate) fn ring_to_nested_unchecked(&self, nside: Nside, ipring: i64) -> i64 {
        let pos = locate(nside, ipring);
        let ns = nside.get();
        let geometry = self.geometry();

        let irt = pos.irn - geometry.face_row(pos.face) * ns + 1;
        let mut ipt =
            2 * pos.iphi - geometry.face_phase(pos.face) * pos.nr - pos.kshift - 1;
        if ipt >= 2 * ns {
            ipt -= 8 * ns;
        }

        let ix = (ipt - irt) / 2;
        let iy = -(ipt + irt) / 2;

        self.xy_to_pixel(ix, iy) + pos.face * nside.pixels_per_face()
    }
}

fn locate(nside: Nside, ipring: i64) -> RingPosition {
    let ns = nside.get();
    let nl2 = 2 * ns;
    let ncap = nside.ncap();
    let ipring1 = ipring + 1;

    if ipring1 <= ncap {
        let irn = cap_ring(ipring1);
        let iphi = ipring1 - 2 * irn * (irn - 1);
        RingPosition {
            irn,
            iphi,
            nr: irn,
            kshift: 0,
            face: (iphi - 1) / irn,
        }
    } else if ipring1 <= nl2 * (5 * ns + 1) {
        let nl4 = 4 * ns;
        let ip = ipring1 - ncap - 1;
        let irn = ip / nl4 + ns;
        let iphi = ip % nl4 + 1;

        let ire = irn - ns + 1;
        let irm = nl2 + 2 - ire;
        let ifm = (iphi - ire / 2 + ns - 1) / ns;
        let ifp = (iphi - irm / 2 + ns - 1) / ns;
        let face = match ifp - ifm {
            0 => ifp % 4 + 4,
            -1 => ifp,
            _ => ifp + 7,
        };

        RingPosition {
            irn,
            iphi,
            nr: ns,
            kshift: (irn + ns) % 2,
            face,
        }
    } else {
        let ip = nside.npix() - ipring1 + 1;
        let irs = cap_ring(ip);
        let iphi = 4 * irs + 1 - (ip - 2 * irs * (irs - 1));
        RingPosition {
            irn: 4 * ns - irs,
            iphi,
            nr: irs,
            kshift: 0,
            face: (iphi - 1) / irs + 8,
        }
    }
}

/// Ring number, counted from the nearest pole, holding the `ip`-th cap pixel (1-based).
///
/// Ring `r` holds cap pixels `2r(r-1)+1 ..= 2r(r+1)`.
fn cap_ring(ip: i64) -> i64 {
    let hip = ip as f64 / 2.0;
    let fihip = libm::floor(hip);
    libm::floor(libm::sqrt(hip - libm::sqrt(fihip))) as i64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NS_MAX;

    fn tables() -> &'static InterleaveTables {
        InterleaveTables::shared()
    }

    #[test]
    fn test_cap_ring_boundaries() {
        // ring 1: 1..=4, ring 2: 5..=12, ring 3: 13..=24
        assert_eq!(cap_ring(1), 1);
        assert_eq!(cap_ring(4), 1);
        assert_eq!(cap_ring(5), 2);
        assert_eq!(cap_ring(12), 2);
        assert_eq!(cap_ring(13), 3);
        assert_eq!(cap_ring(24), 3);
    }

    #[test]
    fn test_cap_ring_matches_closed_form() {
        for r in 1..=NS_MAX {
            let first = 2 * r * (r - 1) + 1;
            let last = 2 * r * (r + 1);
            assert_eq!(cap_ring(first), r, "first pixel of ring {}", r);
            assert_eq!(cap_ring(last), r, "last pixel of ring {}", r);
        }
    }

    #[test]
    fn test_locate_regimes_nside2() {
        let nside = Nside::new(2).unwrap();
        let north = locate(nside, 0);
        assert_eq!((north.irn, north.iphi, north.face), (1, 1, 0));

        let equator = locate(nside, 13);
        assert_eq!((equator.irn, equator.iphi, equator.kshift), (3, 2, 1));
        assert_eq!(equator.face, 0);

        let south = locate(nside, 47);
        assert_eq!((south.irn, south.iphi, south.face), (7, 4, 11));
    }

    #[test]
    fn test_face_partition_nside1() {
        // At nside 1 every pixel is its own base face.
        let nside = Nside::new(1).unwrap();
        let faces: Vec<i64> = (0..12).map(|i| locate(nside, i).face).collect();
        assert_eq!(faces, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_literal_pixels() {
        assert_eq!(tables().ring_to_nested(2, 0).unwrap(), 3);
        assert_eq!(tables().ring_to_nested(2, 13).unwrap(), 0);
        assert_eq!(tables().ring_to_nested(2, 27).unwrap(), 18);
        assert_eq!(tables().ring_to_nested(2, 14).unwrap(), 23);
        assert_eq!(tables().ring_to_nested(4, 27).unwrap(), 5);
        assert_eq!(tables().ring_to_nested(4, 83).unwrap(), 123);
    }

    #[test]
    fn test_is_permutation() {
        for nside in [1, 2, 4, 8, 16] {
            let n = Nside::new(nside).unwrap();
            let mut seen = vec![false; n.npix() as usize];
            for ipring in 0..n.npix() {
                let ipnest = tables().ring_to_nested(nside, ipring).unwrap();
                assert!((0..n.npix()).contains(&ipnest));
                assert!(!seen[ipnest as usize], "nside {} duplicate {}", nside, ipnest);
                seen[ipnest as usize] = true;
            }
        }
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(tables().ring_to_nested(0, 0).is_err());
        assert!(tables().ring_to_nested(5, 0).is_err());
        assert!(tables().ring_to_nested(2, 48).is_err());
        assert!(tables().ring_to_nested(2, -1).is_err());
    }
}
