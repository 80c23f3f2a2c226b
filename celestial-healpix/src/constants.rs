/// Largest supported resolution. Face-local coordinates stay below `NS_MAX`,
/// so their high halves after splitting by [`XMAX`] index `x2pix` in range.
pub const NS_MAX: i64 = 8192;

/// `log2(NS_MAX)`.
pub const MAX_ORDER: u8 = 13;

/// Coordinate span covered by one `x2pix`/`y2pix` lookup (12 bits).
pub const XMAX: i64 = 4096;

/// Coordinate weight of the middle de-interleave digit (9 bits).
pub const XMID: i64 = 512;

/// Interleaved span covered by one `pix2x`/`pix2y` lookup (18 bits).
pub const PIXMAX: i64 = 262_144;

pub const N_FACES: i64 = 12;

/// Face row offsets in units of `nside`. 1-indexed by face number; entry 0 unused.
pub const JRLL: [i64; 13] = [0, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4];

/// Face phase offsets in units of `nside / 2`. 1-indexed by face number; entry 0 unused.
pub const JPLL: [i64; 13] = [0, 1, 3, 5, 7, 0, 2, 4, 6, 1, 3, 5, 7];
