//! Reordering whole-sky maps between pixel schemes.
//!
//! Output element `j` is gathered from the input pixel that `j` (in the
//! target scheme) corresponds to in the source scheme. With the `parallel`
//! feature the gather is spread over rayon's thread pool; the result is the
//! same either way.

use crate::errors::HealpixResult;
use crate::nside::Nside;
use crate::scheme::Scheme;
use crate::tables::InterleaveTables;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl InterleaveTables {
    /// Reorders `map` (one value per pixel, `from` ordering) into `to` ordering.
    ///
    /// The resolution is inferred from `map.len()`, which must be `12 * nside²`.
    pub fn reorder<T>(&self, map: &[T], from: Scheme, to: Scheme) -> HealpixResult<Vec<T>>
    where
        T: Copy + Send + Sync,
    {
        let nside = Nside::from_npix(map.len() as i64)?;
        if from == to {
            return Ok(map.to_vec());
        }

        let source =
            |j: usize| map[self.convert_unchecked(nside, j as i64, to, from) as usize];

        #[cfg(feature = "parallel")]
        {
            Ok((0..map.len()).into_par_iter().map(source).collect())
        }
        #[cfg(not(feature = "parallel"))]
        {
            Ok((0..map.len()).map(source).collect())
        }
    }
}

/// [`InterleaveTables::reorder`] using the shared tables.
pub fn reorder<T>(map: &[T], from: Scheme, to: Scheme) -> HealpixResult<Vec<T>>
where
    T: Copy + Send + Sync,
{
    InterleaveTables::shared().reorder(map, from, to)
}
