//! Geometry of the twelve base faces.
//!
//! Faces 0-3 touch the north pole, 4-7 straddle the equator and 8-11 touch the
//! south pole. Each face is placed on the ring grid by a row offset (in units
//! of `nside`, measured to the face's southern vertex) and a phase offset (in
//! units of `nside / 2`, measured along the ring).

use crate::constants::{JPLL, JRLL, N_FACES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceGeometry {
    rows: [i64; 13],
    phases: [i64; 13],
}

impl FaceGeometry {
    pub const STANDARD: FaceGeometry = FaceGeometry {
        rows: JRLL,
        phases: JPLL,
    };

    /// Row offset of `face` (0-based face number), `None` outside `0..12`.
    pub fn row_offset(&self, face: i64) -> Option<i64> {
        Self::slot(face).map(|i| self.rows[i])
    }

    /// Phase offset of `face` (0-based face number), `None` outside `0..12`.
    pub fn phase_offset(&self, face: i64) -> Option<i64> {
        Self::slot(face).map(|i| self.phases[i])
    }

    fn slot(face: i64) -> Option<usize> {
        (0..N_FACES).contains(&face).then(|| (face + 1) as usize)
    }

    /// Converter-side lookup; `face` is always in `0..12` by construction.
    #[inline]
    pub(crate) fn face_row(&self, face: i64) -> i64 {
        self.rows[(face + 1) as usize]
    }

    #[inline]
    pub(crate) fn face_phase(&self, face: i64) -> i64 {
        self.phases[(face + 1) as usize]
    }
}

impl Default for FaceGeometry {
    fn default() -> Self {
        Self::STANDARD
    }
}
