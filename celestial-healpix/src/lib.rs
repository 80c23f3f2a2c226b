//! HEALPix pixel index conversion between RING and NESTED ordering.
//!
//! HEALPix divides the sphere into twelve base faces, each split into
//! `nside × nside` pixels. RING ordering numbers pixels along iso-latitude
//! rings from the north pole to the south pole; NESTED ordering numbers them
//! face by face along a Morton (Z-order) curve. This crate converts indices
//! between the two with exact integer arithmetic and precomputed bit
//! interleave tables.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`tables`] | [`InterleaveTables`]: Morton lookup tables, built once and shared |
//! | [`ring`] | RING → NESTED |
//! | [`nested`] | NESTED → RING |
//! | [`scheme`] | [`Scheme`] and scheme-generic [`convert`](InterleaveTables::convert) |
//! | [`reorder`] | Reordering whole-sky maps between schemes |
//! | [`nside`] | [`Nside`], the validated resolution parameter |
//! | [`faces`] | Base face placement on the ring grid |
//! | [`constants`] | Table sizes, maximum resolution, face offsets |
//! | [`errors`] | [`HealpixError`] and [`HealpixResult`] |
//!
//! # Quick Start
//!
//! ```
//! use celestial_healpix::{nested_to_ring, ring_to_nested};
//!
//! assert_eq!(ring_to_nested(4, 83)?, 123);
//! assert_eq!(nested_to_ring(4, 123)?, 83);
//! # Ok::<(), celestial_healpix::HealpixError>(())
//! ```
//!
//! The free functions use tables built on first call and kept for the life
//! of the process. To control construction, build an [`InterleaveTables`]
//! and call the same operations on it:
//!
//! ```
//! use celestial_healpix::InterleaveTables;
//!
//! let tables = InterleaveTables::build();
//! assert_eq!(tables.ring_to_nested(2, 13)?, 0);
//! # Ok::<(), celestial_healpix::HealpixError>(())
//! ```
//!
//! # Limits
//!
//! `nside` must be a power of two no larger than [`NS_MAX`](constants::NS_MAX)
//! (8192, about 8e8 pixels). Both checks, and the pixel index range check,
//! happen before any table lookup.
//!
//! # Features
//!
//! - **`parallel`** — Reorders maps on rayon's thread pool.
//! - **`serde`** — Serialization for [`Nside`] and [`Scheme`].
//! - **`cli`** — Enables the `healpix-convert` binary.

pub mod constants;
pub mod errors;
pub mod faces;
pub mod nested;
pub mod nside;
pub mod reorder;
pub mod ring;
pub mod scheme;
pub mod tables;

pub use errors::{HealpixError, HealpixResult};
pub use faces::FaceGeometry;
pub use nside::Nside;
pub use reorder::reorder;
pub use scheme::Scheme;
pub use tables::InterleaveTables;

/// Converts a RING index to the NESTED index of the same pixel.
///
/// Fails with [`HealpixError::InvalidResolution`] or
/// [`HealpixError::IndexOutOfRange`] on invalid input.
pub fn ring_to_nested(nside: i64, ring_index: i64) -> HealpixResult<i64> {
    InterleaveTables::shared().ring_to_nested(nside, ring_index)
}

/// Converts a NESTED index to the RING index of the same pixel.
///
/// Fails with [`HealpixError::InvalidResolution`] or
/// [`HealpixError::IndexOutOfRange`] on invalid input.
pub fn nested_to_ring(nside: i64, nest_index: i64) -> HealpixResult<i64> {
    InterleaveTables::shared().nested_to_ring(nside, nest_index)
}

/// Converts `ipix` between arbitrary schemes using the shared tables.
pub fn convert(nside: i64, ipix: i64, from: Scheme, to: Scheme) -> HealpixResult<i64> {
    InterleaveTables::shared().convert(nside, ipix, from, to)
}
