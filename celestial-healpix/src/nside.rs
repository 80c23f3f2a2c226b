//! Validated HEALPix resolution parameter.
//!
//! [`Nside`] can only hold a power of two in `[1, NS_MAX]`, so code that takes
//! one never re-checks the resolution. Pixel indices are still range-checked
//! per call with [`Nside::check_index`].

use crate::constants::{MAX_ORDER, NS_MAX, N_FACES};
use crate::errors::{HealpixError, HealpixResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nside(i64);

impl Nside {
    pub fn new(nside: i64) -> HealpixResult<Self> {
        if nside <= 0 {
            return Err(HealpixError::invalid_resolution(nside, "must be positive"));
        }
        if nside > NS_MAX {
            return Err(HealpixError::invalid_resolution(
                nside,
                &format!("exceeds maximum supported nside {}", NS_MAX),
            ));
        }
        if nside & (nside - 1) != 0 {
            return Err(HealpixError::invalid_resolution(
                nside,
                "must be a power of two",
            ));
        }
        Ok(Self(nside))
    }

    /// Resolution for a given order (`nside = 2^order`).
    pub fn from_order(order: u8) -> HealpixResult<Self> {
        if order > MAX_ORDER {
            return Err(HealpixError::invalid_resolution(
                1i64.checked_shl(order as u32).unwrap_or(i64::MAX),
                &format!("order {} exceeds maximum order {}", order, MAX_ORDER),
            ));
        }
        Ok(Self(1 << order))
    }

    /// Recovers the resolution of a full-sky map from its pixel count.
    pub fn from_npix(npix: i64) -> HealpixResult<Self> {
        if npix <= 0 || npix % N_FACES != 0 {
            return Err(HealpixError::invalid_pixel_count(npix));
        }
        let per_face = npix / N_FACES;
        let nside = libm::sqrt(per_face as f64).round() as i64;
        if nside * nside != per_face {
            return Err(HealpixError::invalid_pixel_count(npix));
        }
        Self::new(nside).map_err(|_| HealpixError::invalid_pixel_count(npix))
    }

    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn order(self) -> u8 {
        self.0.trailing_zeros() as u8
    }

    #[inline]
    pub fn pixels_per_face(self) -> i64 {
        self.0 * self.0
    }

    #[inline]
    pub fn npix(self) -> i64 {
        N_FACES * self.pixels_per_face()
    }

    /// Number of pixels in the north polar cap.
    #[inline]
    pub fn ncap(self) -> i64 {
        2 * self.0 * (self.0 - 1)
    }

    /// Rejects indices outside `[0, npix-1]`.
    pub fn check_index(self, ipix: i64) -> HealpixResult<i64> {
        let npix = self.npix();
        if !(0..npix).contains(&ipix) {
            return Err(HealpixError::index_out_of_range(ipix, npix));
        }
        Ok(ipix)
    }
}

impl TryFrom<i64> for Nside {
    type Error = HealpixError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Nside> for i64 {
    fn from(nside: Nside) -> Self {
        nside.0
    }
}

impl fmt::Display for Nside {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Nside {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Nside {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let n = i64::deserialize(d)?;
        Nside::new(n).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_powers_of_two_accepted() {
        for order in 0..=MAX_ORDER {
            let nside = Nside::new(1 << order).unwrap();
            assert_eq!(nside.order(), order);
        }
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(matches!(
            Nside::new(0),
            Err(HealpixError::InvalidResolution { nside: 0, .. })
        ));
        assert!(matches!(
            Nside::new(-4),
            Err(HealpixError::InvalidResolution { nside: -4, .. })
        ));
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        for n in [3, 6, 12, 100, 8191] {
            assert!(Nside::new(n).is_err(), "nside {} accepted", n);
        }
    }

    #[test]
    fn test_rejects_above_maximum() {
        assert!(Nside::new(NS_MAX).is_ok());
        assert!(Nside::new(NS_MAX * 2).is_err());
        assert!(Nside::from_order(MAX_ORDER + 1).is_err());
    }

    #[test]
    fn test_pixel_counts() {
        let nside = Nside::new(4).unwrap();
        assert_eq!(nside.pixels_per_face(), 16);
        assert_eq!(nside.npix(), 192);
        assert_eq!(nside.ncap(), 24);
        assert_eq!(Nside::new(1).unwrap().ncap(), 0);
    }

    #[test]
    fn test_from_npix() {
        assert_eq!(Nside::from_npix(12).unwrap().get(), 1);
        assert_eq!(Nside::from_npix(3072).unwrap().get(), 16);
        assert!(Nside::from_npix(0).is_err());
        assert!(Nside::from_npix(13).is_err());
        // 12 * 3^2: square per face, but not a power of two
        assert!(matches!(
            Nside::from_npix(108),
            Err(HealpixError::InvalidPixelCount { npix: 108 })
        ));
    }

    #[test]
    fn test_check_index_bounds() {
        let nside = Nside::new(2).unwrap();
        assert_eq!(nside.check_index(0).unwrap(), 0);
        assert_eq!(nside.check_index(47).unwrap(), 47);
        assert_eq!(
            nside.check_index(48),
            Err(HealpixError::index_out_of_range(48, 48))
        );
        assert!(nside.check_index(-1).is_err());
    }

    #[test]
    fn test_try_from_and_display() {
        let nside = Nside::try_from(64).unwrap();
        assert_eq!(nside.to_string(), "64");
        assert_eq!(i64::from(nside), 64);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates() {
        let nside: Nside = serde_json::from_str("32").unwrap();
        assert_eq!(nside.get(), 32);
        assert_eq!(serde_json::to_string(&nside).unwrap(), "32");
        assert!(serde_json::from_str::<Nside>("33").is_err());
    }
}
