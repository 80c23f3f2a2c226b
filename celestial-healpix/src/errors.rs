//! Error types for pixel index conversion.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidResolution`](HealpixError::InvalidResolution) | `nside` not a power of two, non-positive, or above [`NS_MAX`](crate::constants::NS_MAX) |
//! | [`IndexOutOfRange`](HealpixError::IndexOutOfRange) | Pixel index outside `[0, npix-1]` |
//! | [`InvalidPixelCount`](HealpixError::InvalidPixelCount) | Map length is not `12 * nside²` for a valid `nside` |
//! | [`UnknownScheme`](HealpixError::UnknownScheme) | Unrecognized ordering scheme name |
//!
//! None of these are recoverable: the caller has to supply different input.
//!
//! ```
//! use celestial_healpix::{ring_to_nested, HealpixError};
//!
//! let err = ring_to_nested(3, 0).unwrap_err();
//! assert!(matches!(err, HealpixError::InvalidResolution { nside: 3, .. }));
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HealpixError {
    /// Resolution parameter rejected before any table lookup.
    #[error("Invalid resolution nside={nside}: {message}")]
    InvalidResolution { nside: i64, message: String },

    /// Pixel index outside the range implied by the resolution.
    #[error("Pixel index {index} out of range [0, {npix})")]
    IndexOutOfRange { index: i64, npix: i64 },

    #[error("Pixel count {npix} is not 12*nside^2 for a supported nside")]
    InvalidPixelCount { npix: i64 },

    #[error("Unknown ordering scheme '{name}' (expected RING or NESTED)")]
    UnknownScheme { name: String },
}

pub type HealpixResult<T> = Result<T, HealpixError>;

impl HealpixError {
    pub fn invalid_resolution(nside: i64, reason: &str) -> Self {
        Self::InvalidResolution {
            nside,
            message: reason.to_string(),
        }
    }

    pub fn index_out_of_range(index: i64, npix: i64) -> Self {
        Self::IndexOutOfRange { index, npix }
    }

    pub fn invalid_pixel_count(npix: i64) -> Self {
        Self::InvalidPixelCount { npix }
    }

    pub fn unknown_scheme(name: &str) -> Self {
        Self::UnknownScheme {
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_resolution_message() {
        let err = HealpixError::invalid_resolution(3, "not a power of two");
        assert_eq!(
            err.to_string(),
            "Invalid resolution nside=3: not a power of two"
        );
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = HealpixError::index_out_of_range(48, 48);
        assert_eq!(err.to_string(), "Pixel index 48 out of range [0, 48)");
    }

    #[test]
    fn test_unknown_scheme_message() {
        let err = HealpixError::unknown_scheme("zorder");
        assert!(err.to_string().contains("'zorder'"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<HealpixError>();
        _assert_sync::<HealpixError>();
    }
}
