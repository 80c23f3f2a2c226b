//! Pixel ordering schemes and conversion between them.

use crate::errors::{HealpixError, HealpixResult};
use crate::nside::Nside;
use crate::tables::InterleaveTables;
use std::fmt;
use std::str::FromStr;

/// HEALPix pixel numbering scheme.
///
/// Displays as the FITS `ORDERING` keyword value (`RING` / `NESTED`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Scheme {
    /// Iso-latitude rings, west to east, pole to pole.
    Ring,
    /// Morton order within each of the twelve base faces.
    Nested,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Ring => "RING",
            Scheme::Nested => "NESTED",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = HealpixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ring" => Ok(Scheme::Ring),
            "nested" | "nest" => Ok(Scheme::Nested),
            _ => Err(HealpixError::unknown_scheme(s)),
        }
    }
}

impl InterleaveTables {
    /// Converts `ipix` from scheme `from` to scheme `to`.
    ///
    /// Same-scheme conversion returns `ipix` unchanged, after the usual
    /// resolution and range checks.
    pub fn convert(
        &self,
        nside: i64,
        ipix: i64,
        from: Scheme,
        to: Scheme,
    ) -> HealpixResult<i64> {
        let nside = Nside::new(nside)?;
        let ipix = nside.check_index(ipix)?;
        Ok(self.convert_unchecked(nside, ipix, from, to))
    }

    pub(crate) fn convert_unchecked(
        &self,
        nside: Nside,
        ipix: i64,
        from: Scheme,
        to: Scheme,
    ) -> i64 {
        match (from, to) {
            (Scheme::Ring, Scheme::Nested) => self.ring_to_nested_unchecked(nside, ipix),
            (Scheme::Nested, Scheme::Ring) => self.nested_to_ring_unchecked(nside, ipix),
            _ => ipix,
        }
    }
}
